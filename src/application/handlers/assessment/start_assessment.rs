//! StartAssessmentHandler - creates a session for a program.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::SessionId;
use crate::domain::session::AssessmentSession;
use crate::domain::workflow::Program;
use crate::ports::SessionRepository;

use super::AssessmentError;

#[derive(Debug, Clone)]
pub struct StartAssessmentCommand {
    pub program: Program,
}

#[derive(Debug, Clone)]
pub struct StartAssessmentResult {
    pub session: AssessmentSession,
}

pub struct StartAssessmentHandler {
    repository: Arc<dyn SessionRepository>,
}

impl StartAssessmentHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: StartAssessmentCommand,
    ) -> Result<StartAssessmentResult, AssessmentError> {
        let session = AssessmentSession::new(SessionId::new(), cmd.program);
        self.repository.save(&session).await?;

        info!(
            session_id = %session.id(),
            program = %cmd.program,
            "Started assessment"
        );

        Ok(StartAssessmentResult { session })
    }
}
