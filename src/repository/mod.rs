//! Repository layer for in-memory session storage
//!
//! Nothing is persisted; the store lives as long as the process.

pub mod sessions;

/// Main repository struct holding every in-memory store
#[derive(Clone, Default)]
pub struct Repository {
    pub sessions: sessions::SessionsRepository,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }
}
