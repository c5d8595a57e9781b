//! ValidateInventoryHandler - runs the validator on the recorded inventory
//! and leaves the Validation stage.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::SessionLocks;
use crate::domain::foundation::SessionId;
use crate::domain::inventory::Column;
use crate::domain::session::AssessmentSession;
use crate::domain::validation::{InventoryValidator, ValidationReport};
use crate::domain::workflow::{Stage, StagePayload, WorkflowError};
use crate::ports::SessionRepository;

use super::support::{load_session, require_stage};
use super::AssessmentError;

#[derive(Debug, Clone)]
pub struct ValidateInventoryCommand {
    pub session_id: SessionId,
    /// Overrides the program's default required fields.
    pub required_fields: Option<Vec<Column>>,
}

#[derive(Debug, Clone)]
pub struct ValidateInventoryResult {
    pub session: AssessmentSession,
    pub stage: Stage,
    pub report: ValidationReport,
}

pub struct ValidateInventoryHandler {
    repository: Arc<dyn SessionRepository>,
    locks: SessionLocks,
}

impl ValidateInventoryHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, locks: SessionLocks) -> Self {
        Self { repository, locks }
    }

    /// Validates and advances. Data-quality issues are logged but never
    /// block; a missing required column fails with `Schema` and leaves the
    /// session where it was.
    pub async fn handle(
        &self,
        cmd: ValidateInventoryCommand,
    ) -> Result<ValidateInventoryResult, AssessmentError> {
        let _guard = self.locks.acquire(&cmd.session_id).await;

        let mut session = load_session(self.repository.as_ref(), &cmd.session_id).await?;
        require_stage(&session, Stage::Validation)?;

        let inventory = session.state().inventory().ok_or_else(|| {
            WorkflowError::prerequisite_missing(Stage::DataAcquisition, "inventory")
        })?;
        let required = cmd
            .required_fields
            .unwrap_or_else(|| session.program().required_columns().to_vec());

        let report = InventoryValidator::validate(inventory, &required)?;
        for issue in report.issues() {
            warn!(
                session_id = %cmd.session_id,
                field = %issue.field,
                missing = issue.missing,
                "Data quality issue"
            );
        }

        let stage = session.advance(Some(StagePayload::Validation(report.clone())))?;
        self.repository.update(&session).await?;

        info!(
            session_id = %cmd.session_id,
            stage = %stage,
            records = report.total_records(),
            missing_values = report.total_missing(),
            clean = report.is_clean(),
            "Inventory validated"
        );

        Ok(ValidateInventoryResult {
            session,
            stage,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::assessment::support::test_support::*;
    use crate::domain::inventory::{Inventory, ServerRecord};
    use crate::domain::workflow::{AssessmentProfile, Program};

    #[tokio::test]
    async fn validates_and_advances() {
        let repo = repository();
        let id = stored_session(&repo, 2).await;
        let handler = ValidateInventoryHandler::new(repo.clone(), locks());

        let result = handler
            .handle(ValidateInventoryCommand {
                session_id: id,
                required_fields: None,
            })
            .await
            .unwrap();

        assert_eq!(result.stage, Stage::Computation);
        assert_eq!(result.report.total_records(), 2);
        assert_eq!(result.report.missing_count(Column::MemoryGb), 1);
        assert!(!result.report.is_clean());
    }

    #[tokio::test]
    async fn schema_error_keeps_session_at_validation() {
        let repo = repository();
        let mut session = AssessmentSession::new(SessionId::new(), Program::Map);
        session
            .advance(Some(StagePayload::Profile(AssessmentProfile::new(
                Program::Map,
                "Acme",
            ))))
            .unwrap();
        let partial = Inventory::new(
            [Column::ServerName, Column::Os],
            vec![ServerRecord::new("a", "Linux")],
        )
        .unwrap();
        session
            .advance(Some(StagePayload::Inventory(partial)))
            .unwrap();
        repo.save(&session).await.unwrap();

        let handler = ValidateInventoryHandler::new(repo.clone(), locks());
        let err = handler
            .handle(ValidateInventoryCommand {
                session_id: *session.id(),
                required_fields: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AssessmentError::Schema(_)));
        let stored = repo.find_by_id(session.id()).await.unwrap().unwrap();
        assert_eq!(stored.current_stage(), Stage::Validation);
        assert!(stored.state().validation().is_none());
    }

    #[tokio::test]
    async fn custom_required_fields_override_program_defaults() {
        let repo = repository();
        let id = stored_session(&repo, 2).await;
        let handler = ValidateInventoryHandler::new(repo, locks());

        let result = handler
            .handle(ValidateInventoryCommand {
                session_id: id,
                required_fields: Some(vec![Column::ServerName]),
            })
            .await
            .unwrap();

        assert!(result.report.is_clean());
    }
}
