//! Models shared between the back-office HTTP server and its clients.

pub mod model;
pub mod requests;
