//! EndAssessmentHandler - discards a session and its workflow state.

use std::sync::Arc;

use tracing::info;

use crate::application::SessionLocks;
use crate::domain::foundation::SessionId;
use crate::ports::SessionRepository;

use super::AssessmentError;

#[derive(Debug, Clone)]
pub struct EndAssessmentCommand {
    pub session_id: SessionId,
}

pub struct EndAssessmentHandler {
    repository: Arc<dyn SessionRepository>,
    locks: SessionLocks,
}

impl EndAssessmentHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, locks: SessionLocks) -> Self {
        Self { repository, locks }
    }

    /// Deletes the session at any stage and drops its lock entry.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the session does not exist
    pub async fn handle(&self, cmd: EndAssessmentCommand) -> Result<(), AssessmentError> {
        let guard = self.locks.acquire(&cmd.session_id).await;

        let result = if self.repository.exists(&cmd.session_id).await? {
            self.repository.delete(&cmd.session_id).await?;
            Ok(())
        } else {
            Err(AssessmentError::NotFound(cmd.session_id))
        };

        // Commands queued behind this one find the session gone.
        self.locks.forget(&cmd.session_id);
        drop(guard);

        if result.is_ok() {
            info!(session_id = %cmd.session_id, "Assessment ended");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::assessment::support::test_support::*;
    use crate::application::handlers::assessment::{GetReportHandler, GetReportQuery};

    #[tokio::test]
    async fn ending_deletes_session_and_lock_entry() {
        let repo = repository();
        let locks = locks();
        let id = stored_session(&repo, 2).await;
        drop(locks.acquire(&id).await);
        assert_eq!(locks.tracked(), 1);

        EndAssessmentHandler::new(repo.clone(), locks.clone())
            .handle(EndAssessmentCommand { session_id: id })
            .await
            .unwrap();

        assert_eq!(locks.tracked(), 0);
        assert!(!repo.exists(&id).await.unwrap());

        let err = GetReportHandler::new(repo)
            .handle(GetReportQuery { session_id: id })
            .await
            .unwrap_err();
        assert_eq!(err, AssessmentError::NotFound(id));
    }

    #[tokio::test]
    async fn ending_unknown_session_is_not_found_and_leaves_no_entry() {
        let locks = locks();
        let id = SessionId::new();

        let err = EndAssessmentHandler::new(repository(), locks.clone())
            .handle(EndAssessmentCommand { session_id: id })
            .await
            .unwrap_err();

        assert_eq!(err, AssessmentError::NotFound(id));
        assert_eq!(locks.tracked(), 0);
    }
}
