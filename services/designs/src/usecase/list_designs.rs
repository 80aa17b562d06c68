use uuid::Uuid;

use crate::domain::repository::DesignRepository;
use crate::domain::types::DesignDetail;
use crate::error::DesignsServiceError;

// ── ListDesigns ──────────────────────────────────────────────────────────────

/// The caller's designs with catalog references resolved.
pub struct ListDesignsUseCase<D: DesignRepository> {
    pub designs: D,
}

impl<D: DesignRepository> ListDesignsUseCase<D> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<DesignDetail>, DesignsServiceError> {
        self.designs.list_by_creator(user_id).await
    }
}

// ── SearchDesigns ────────────────────────────────────────────────────────────

/// Every design in the system, with the furniture's store additionally
/// resolved. Available to any authenticated caller.
pub struct SearchDesignsUseCase<D: DesignRepository> {
    pub designs: D,
}

impl<D: DesignRepository> SearchDesignsUseCase<D> {
    pub async fn execute(&self) -> Result<Vec<DesignDetail>, DesignsServiceError> {
        self.designs.list_all().await
    }
}
