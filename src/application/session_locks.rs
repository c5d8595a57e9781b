//! Per-session mutual exclusion.
//!
//! Every mutating handler holds the session's lock across
//! load, operate and persist, so two commands for the same session never
//! interleave. Commands for different sessions run concurrently.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::OwnedMutexGuard;

use crate::domain::foundation::SessionId;

type SessionLock = Arc<tokio::sync::Mutex<()>>;

#[derive(Debug, Clone, Default)]
pub struct SessionLocks {
    locks: Arc<Mutex<HashMap<SessionId, SessionLock>>>,
}

impl SessionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for and takes the lock for one session.
    pub async fn acquire(&self, id: &SessionId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(locks.entry(*id).or_default())
        };
        lock.lock_owned().await
    }

    /// Drops the lock entry of a session that no longer exists.
    pub fn forget(&self, id: &SessionId) {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id);
    }

    /// Number of sessions with a lock entry.
    pub fn tracked(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
