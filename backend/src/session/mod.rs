pub mod state;

pub use state::{session_id, SessionsState, SESSION_HEADER};
