//! RunAnalysisHandler - computes recommendations and leaves the
//! Computation stage.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::SessionLocks;
use crate::domain::foundation::SessionId;
use crate::domain::recommendation::{RecommendationEngine, RecommendationSet};
use crate::domain::session::AssessmentSession;
use crate::domain::workflow::{Stage, StagePayload, WorkflowError};
use crate::ports::SessionRepository;

use super::support::{load_session, require_stage};
use super::AssessmentError;

#[derive(Debug, Clone)]
pub struct RunAnalysisCommand {
    pub session_id: SessionId,
}

#[derive(Debug, Clone)]
pub struct RunAnalysisResult {
    pub session: AssessmentSession,
    pub stage: Stage,
    pub recommendations: RecommendationSet,
}

pub struct RunAnalysisHandler {
    repository: Arc<dyn SessionRepository>,
    locks: SessionLocks,
    engine: Arc<RecommendationEngine>,
}

impl RunAnalysisHandler {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        locks: SessionLocks,
        engine: Arc<RecommendationEngine>,
    ) -> Self {
        Self {
            repository,
            locks,
            engine,
        }
    }

    pub async fn handle(
        &self,
        cmd: RunAnalysisCommand,
    ) -> Result<RunAnalysisResult, AssessmentError> {
        let _guard = self.locks.acquire(&cmd.session_id).await;

        let mut session = load_session(self.repository.as_ref(), &cmd.session_id).await?;
        require_stage(&session, Stage::Computation)?;

        let state = session.state();
        let profile = state
            .profile()
            .ok_or_else(|| WorkflowError::prerequisite_missing(Stage::Setup, "profile"))?;
        let inventory = state.inventory().ok_or_else(|| {
            WorkflowError::prerequisite_missing(Stage::DataAcquisition, "inventory")
        })?;

        let recommendations = self.engine.compute(inventory, profile);
        for (category, impact) in recommendations.impact_by_category() {
            debug!(
                session_id = %cmd.session_id,
                category = %category,
                monthly_impact = %impact,
                "Category impact"
            );
        }

        let stage = session.advance(Some(StagePayload::Recommendations(recommendations.clone())))?;
        self.repository.update(&session).await?;

        info!(
            session_id = %cmd.session_id,
            stage = %stage,
            recommendations = recommendations.len(),
            monthly_impact = %recommendations.total_monthly_impact(),
            "Analysis complete"
        );

        Ok(RunAnalysisResult {
            session,
            stage,
            recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::assessment::support::test_support::*;
    use crate::application::handlers::assessment::{
        ValidateInventoryCommand, ValidateInventoryHandler,
    };

    #[tokio::test]
    async fn computes_and_reaches_results() {
        let repo = repository();
        let locks = locks();
        let id = stored_session(&repo, 2).await;
        ValidateInventoryHandler::new(repo.clone(), locks.clone())
            .handle(ValidateInventoryCommand {
                session_id: id,
                required_fields: None,
            })
            .await
            .unwrap();

        let handler =
            RunAnalysisHandler::new(repo.clone(), locks, Arc::new(RecommendationEngine::default()));
        let result = handler.handle(RunAnalysisCommand { session_id: id }).await.unwrap();

        assert_eq!(result.stage, Stage::Results);
        assert!(!result.recommendations.is_empty());
        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.state().recommendations(), Some(&result.recommendations));
    }

    #[tokio::test]
    async fn analysis_before_validation_is_wrong_stage() {
        let repo = repository();
        let id = stored_session(&repo, 2).await;
        let handler =
            RunAnalysisHandler::new(repo, locks(), Arc::new(RecommendationEngine::default()));

        let err = handler.handle(RunAnalysisCommand { session_id: id }).await.unwrap_err();
        assert_eq!(
            err,
            AssessmentError::WrongStage {
                expected: Stage::Computation,
                actual: Stage::Validation,
            }
        );
    }
}
