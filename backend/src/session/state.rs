//! Per-session workflow context.
//!
//! The permit and advert workflows are multi-step: an evaluation must exist
//! before its resolution, and the resolution before the certificate. The data
//! each step produced is kept here, keyed by the session id a client obtains
//! from `POST /api/sessions` and echoes back in the `X-Session-Id` header.
//!
//! The main components are:
//! - `SessionsState`: a clonable, thread-safe map from session id to
//!   `SessionContext`, injected into the Actix application in `main.rs`.
//! - `session_id`: extracts the session id from a request.

use crate::error::AppError;
use actix_web::HttpRequest;
use common::model::session::SessionContext;
use log::debug;
use std::time::{Duration, Instant};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Header carrying the session id on every workflow request.
pub const SESSION_HEADER: &str = "X-Session-Id";

const DEFAULT_IDLE: Duration = Duration::from_secs(12 * 60 * 60);

/// One session's context and the last time a request touched it.
pub struct Session {
    pub context: SessionContext,
    pub last_used: Instant,
}

/// A thread-safe, shareable container for the context of all sessions.
///
/// A session unused for longer than `idle` is dropped the next time a
/// session is created.
#[derive(Clone)]
pub struct SessionsState {
    /// Map from session id to the data its workflow steps produced.
    pub sessions: Arc<RwLock<HashMap<String, Session>>>,
    idle: Duration,
}

impl Default for SessionsState {
    fn default() -> Self {
        Self::new(DEFAULT_IDLE)
    }
}

impl SessionsState {
    pub fn new(idle: Duration) -> Self {
        Self { sessions: Arc::new(RwLock::new(HashMap::new())), idle }
    }

    /// Drops idle sessions, registers an empty context and returns its id.
    pub async fn create(&self) -> String {
        let id = Uuid::new_v4().to_string();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.last_used.elapsed() < self.idle);
        if sessions.len() < before {
            debug!("{} sesiones inactivas descartadas", before - sessions.len());
        }
        sessions.insert(
            id.clone(),
            Session { context: SessionContext::default(), last_used: Instant::now() },
        );
        id
    }

    /// Snapshot of the context of `id`. Counts as a use of the session.
    pub async fn get(&self, id: &str) -> Result<SessionContext, AppError> {
        self.update(id, |context| context.clone()).await
    }

    /// Applies `change` to the context of `id` under the write lock.
    pub async fn update<T>(&self, id: &str, change: impl FnOnce(&mut SessionContext) -> T) -> Result<T, AppError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(id).ok_or_else(|| unknown(id))?;
        session.last_used = Instant::now();
        Ok(change(&mut session.context))
    }
}

fn unknown(id: &str) -> AppError {
    AppError::Session(format!("Sesión desconocida: {id}. Crea una nueva con POST /api/sessions"))
}

/// Reads the `X-Session-Id` header.
pub fn session_id(req: &HttpRequest) -> Result<String, AppError> {
    req.headers()
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| AppError::Session(format!("Falta la cabecera {SESSION_HEADER}")))
}
