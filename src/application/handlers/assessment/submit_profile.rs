//! SubmitProfileHandler - records setup answers and leaves the Setup stage.

use std::sync::Arc;

use tracing::info;

use crate::application::SessionLocks;
use crate::domain::foundation::SessionId;
use crate::domain::session::AssessmentSession;
use crate::domain::workflow::{AssessmentProfile, Stage, StagePayload};
use crate::ports::SessionRepository;

use super::support::{load_session, require_stage};
use super::AssessmentError;

#[derive(Debug, Clone)]
pub struct SubmitProfileCommand {
    pub session_id: SessionId,
    pub profile: AssessmentProfile,
}

#[derive(Debug, Clone)]
pub struct SubmitProfileResult {
    pub session: AssessmentSession,
    pub stage: Stage,
}

pub struct SubmitProfileHandler {
    repository: Arc<dyn SessionRepository>,
    locks: SessionLocks,
}

impl SubmitProfileHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, locks: SessionLocks) -> Self {
        Self { repository, locks }
    }

    pub async fn handle(
        &self,
        cmd: SubmitProfileCommand,
    ) -> Result<SubmitProfileResult, AssessmentError> {
        let _guard = self.locks.acquire(&cmd.session_id).await;

        let mut session = load_session(self.repository.as_ref(), &cmd.session_id).await?;
        require_stage(&session, Stage::Setup)?;

        let stage = session.advance(Some(StagePayload::Profile(cmd.profile)))?;
        self.repository.update(&session).await?;

        info!(
            session_id = %cmd.session_id,
            stage = %stage,
            label = session.state().current_label(),
            "Profile recorded"
        );

        Ok(SubmitProfileResult { session, stage })
    }
}
