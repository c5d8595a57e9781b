//! UploadInventoryHandler - records an inventory and leaves the
//! DataAcquisition stage.

use std::sync::Arc;

use tracing::info;

use crate::application::SessionLocks;
use crate::domain::foundation::SessionId;
use crate::domain::inventory::Inventory;
use crate::domain::session::AssessmentSession;
use crate::domain::workflow::{Stage, StagePayload};
use crate::ports::{InventorySource, SessionRepository};

use super::support::{load_session, require_stage};
use super::AssessmentError;

#[derive(Debug, Clone)]
pub struct UploadInventoryCommand {
    pub session_id: SessionId,
    pub inventory: Inventory,
}

#[derive(Debug, Clone)]
pub struct UploadInventoryResult {
    pub session: AssessmentSession,
    pub stage: Stage,
    pub record_count: usize,
}

pub struct UploadInventoryHandler {
    repository: Arc<dyn SessionRepository>,
    locks: SessionLocks,
}

impl UploadInventoryHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, locks: SessionLocks) -> Self {
        Self { repository, locks }
    }

    /// Loads the inventory from a source, then records it.
    pub async fn handle_source(
        &self,
        session_id: SessionId,
        source: &dyn InventorySource,
    ) -> Result<UploadInventoryResult, AssessmentError> {
        let inventory = source.load()?;
        info!(
            session_id = %session_id,
            source = %source.describe(),
            records = inventory.len(),
            "Inventory loaded"
        );
        self.handle(UploadInventoryCommand {
            session_id,
            inventory,
        })
        .await
    }

    /// Records the inventory. Replacing an earlier upload discards any
    /// validation report or recommendations derived from it.
    pub async fn handle(
        &self,
        cmd: UploadInventoryCommand,
    ) -> Result<UploadInventoryResult, AssessmentError> {
        let _guard = self.locks.acquire(&cmd.session_id).await;

        let mut session = load_session(self.repository.as_ref(), &cmd.session_id).await?;
        require_stage(&session, Stage::DataAcquisition)?;

        let record_count = cmd.inventory.len();
        let stage = session.advance(Some(StagePayload::Inventory(cmd.inventory)))?;
        self.repository.update(&session).await?;

        info!(
            session_id = %cmd.session_id,
            stage = %stage,
            records = record_count,
            "Inventory recorded"
        );

        Ok(UploadInventoryResult {
            session,
            stage,
            record_count,
        })
    }
}
