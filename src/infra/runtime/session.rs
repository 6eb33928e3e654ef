use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::mpsc;

/// Inbound half of a network session: raw JSON-RPC messages for its MCP service.
pub type SessionSender = mpsc::Sender<String>;

/// Open network sessions keyed by id.
#[derive(Default, Clone)]
pub struct SessionRegistry(Arc<RwLock<HashMap<String, SessionSender>>>);

// Each critical section is one map operation, so a poisoned lock is recovered.
impl SessionRegistry {
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, SessionSender>> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, SessionSender>> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a connection under a fresh id.
    pub fn open(&self, sender: SessionSender) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.write().insert(id.clone(), sender);
        id
    }

    pub fn lookup(&self, id: &str) -> Option<SessionSender> {
        self.read().get(id).cloned()
    }

    /// Returns whether the id was registered.
    pub fn remove(&self, id: &str) -> bool {
        self.write().remove(id).is_some()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.read().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Removes its session from the registry when dropped.
pub struct SessionGuard {
    id: String,
    sessions: SessionRegistry,
}

impl SessionGuard {
    pub fn new(id: String, sessions: SessionRegistry) -> Self {
        Self { id, sessions }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        if self.sessions.remove(&self.id) {
            tracing::info!(session_id = %self.id, "session closed");
        }
    }
}
