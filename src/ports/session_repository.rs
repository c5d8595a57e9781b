//! Session repository port.
//!
//! Defines the contract for persisting and retrieving assessment sessions.
//! The core never depends on where sessions live.

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::AssessmentSession;
use async_trait::async_trait;

/// Repository port for `AssessmentSession` persistence.
///
/// Implementations store the session as an opaque value. Rehydrated
/// sessions may carry a corrupt stage index; the workflow corrects it.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Save a new session.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, session: &AssessmentSession) -> Result<(), DomainError>;

    /// Update an existing session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if session doesn't exist
    /// - `StorageError` on persistence failure
    async fn update(&self, session: &AssessmentSession) -> Result<(), DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<AssessmentSession>, DomainError>;

    /// Check if a session exists.
    async fn exists(&self, id: &SessionId) -> Result<bool, DomainError>;

    /// Delete a session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if session doesn't exist
    async fn delete(&self, id: &SessionId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn session_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn SessionRepository) {}
    }
}
