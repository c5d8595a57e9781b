//! NavigateStageHandler - moves a session without new evidence.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::application::SessionLocks;
use crate::domain::foundation::SessionId;
use crate::domain::session::AssessmentSession;
use crate::domain::workflow::Stage;
use crate::ports::SessionRepository;

use super::support::load_session;
use super::AssessmentError;

/// Direction of a navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Navigation {
    /// Forward using data already recorded for the current stage.
    Advance,
    /// Back one stage; always allowed.
    Regress,
    /// Back to a fresh first stage.
    Reset,
}

#[derive(Debug, Clone)]
pub struct NavigateStageCommand {
    pub session_id: SessionId,
    pub navigation: Navigation,
}

#[derive(Debug, Clone)]
pub struct NavigationResult {
    pub session: AssessmentSession,
    pub from: Stage,
    pub stage: Stage,
}

pub struct NavigateStageHandler {
    repository: Arc<dyn SessionRepository>,
    locks: SessionLocks,
}

impl NavigateStageHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, locks: SessionLocks) -> Self {
        Self { repository, locks }
    }

    pub async fn handle(
        &self,
        cmd: NavigateStageCommand,
    ) -> Result<NavigationResult, AssessmentError> {
        let _guard = self.locks.acquire(&cmd.session_id).await;

        let mut session = load_session(self.repository.as_ref(), &cmd.session_id).await?;
        let from = session.current_stage();

        let stage = match cmd.navigation {
            Navigation::Advance => session.advance(None)?,
            Navigation::Regress => session.regress(),
            Navigation::Reset => {
                session.reset();
                session.current_stage()
            }
        };
        self.repository.update(&session).await?;

        info!(
            session_id = %cmd.session_id,
            navigation = ?cmd.navigation,
            from = %from,
            stage = %stage,
            "Stage changed"
        );

        Ok(NavigationResult {
            session,
            from,
            stage,
        })
    }
}
