//! Helpers shared by the assessment handlers.

use crate::domain::foundation::SessionId;
use crate::domain::session::AssessmentSession;
use crate::domain::workflow::Stage;
use crate::ports::SessionRepository;

use super::AssessmentError;

/// Loads a session or fails with `NotFound`.
pub(super) async fn load_session(
    repository: &dyn SessionRepository,
    id: &SessionId,
) -> Result<AssessmentSession, AssessmentError> {
    repository
        .find_by_id(id)
        .await?
        .ok_or(AssessmentError::NotFound(*id))
}

/// Fails with `WrongStage` unless the session is at `expected`.
pub(super) fn require_stage(
    session: &AssessmentSession,
    expected: Stage,
) -> Result<(), AssessmentError> {
    let actual = session.current_stage();
    if actual != expected {
        return Err(AssessmentError::WrongStage { expected, actual });
    }
    Ok(())
}
