//! In-memory session repository.
//!
//! Sessions live only as long as the process. Used by the CLI and tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::session::AssessmentSession;
use crate::ports::SessionRepository;

/// In-memory storage for assessment sessions.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<SessionId, AssessmentSession>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    fn not_found(id: &SessionId) -> DomainError {
        DomainError::new(ErrorCode::SessionNotFound, format!("Session not found: {}", id))
            .with_detail("session_id", id.to_string())
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn save(&self, session: &AssessmentSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(session.id()) {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                format!("Session already exists: {}", session.id()),
            ));
        }
        sessions.insert(*session.id(), session.clone());
        Ok(())
    }

    async fn update(&self, session: &AssessmentSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(session.id()) {
            Some(stored) => {
                *stored = session.clone();
                Ok(())
            }
            None => Err(Self::not_found(session.id())),
        }
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<AssessmentSession>, DomainError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn exists(&self, id: &SessionId) -> Result<bool, DomainError> {
        Ok(self.sessions.read().await.contains_key(id))
    }

    async fn delete(&self, id: &SessionId) -> Result<(), DomainError> {
        self.sessions
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::workflow::Program;

    #[tokio::test]
    async fn save_then_find() {
        let repo = InMemorySessionRepository::new();
        let session = AssessmentSession::new(SessionId::new(), Program::Map);

        repo.save(&session).await.unwrap();

        assert!(repo.exists(session.id()).await.unwrap());
        assert_eq!(repo.find_by_id(session.id()).await.unwrap(), Some(session));
    }

    #[tokio::test]
    async fn save_twice_fails() {
        let repo = InMemorySessionRepository::new();
        let session = AssessmentSession::new(SessionId::new(), Program::Map);

        repo.save(&session).await.unwrap();
        let err = repo.save(&session).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
    }

    #[tokio::test]
    async fn update_missing_session_is_not_found() {
        let repo = InMemorySessionRepository::new();
        let session = AssessmentSession::new(SessionId::new(), Program::Ola);

        let err = repo.update(&session).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[tokio::test]
    async fn delete_removes_session() {
        let repo = InMemorySessionRepository::new();
        let session = AssessmentSession::new(SessionId::new(), Program::OneOla);
        repo.save(&session).await.unwrap();

        repo.delete(session.id()).await.unwrap();

        assert!(repo.is_empty().await);
        assert!(repo.delete(session.id()).await.is_err());
    }
}
