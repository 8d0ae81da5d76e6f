//! Sessions repository

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::Session,
};

#[derive(Clone, Default)]
pub struct SessionsRepository {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new session
    pub async fn insert(&self, session: Session) -> Session {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id, session.clone());
        session
    }

    /// Get a copy of a session by ID
    pub async fn get(&self, id: Uuid) -> AppResult<Session> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::SessionNotFound(format!("Session {} not found", id)))
    }

    /// Run `f` against the stored session under the write lock
    pub async fn update<T, F>(&self, id: Uuid, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut Session) -> AppResult<T>,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::SessionNotFound(format!("Session {} not found", id)))?;
        f(session)
    }

    /// Drop a session
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::SessionNotFound(format!("Session {} not found", id)))
    }

    /// Number of live sessions
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
