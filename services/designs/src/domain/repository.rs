#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{
    Color, ColorTone, Design, DesignDetail, FetchedImage, FurnitureItem, GenerationRecord,
    ImagePart, Preference, PriceCeiling, Recommendation, StoredArtifact,
};
use crate::error::DesignsServiceError;

/// Read access to the catalog and saved preferences.
pub trait CatalogRepository: Send + Sync {
    async fn find_preference(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Preference>, DesignsServiceError>;

    async fn find_color_by_tone(
        &self,
        tone: ColorTone,
    ) -> Result<Option<Color>, DesignsServiceError>;

    /// All furniture for the room type priced under the ceiling, further
    /// filtered by color when one is given.
    async fn find_matching_furniture(
        &self,
        room_type_id: Uuid,
        ceiling: PriceCeiling,
        color_id: Option<Uuid>,
    ) -> Result<Vec<FurnitureItem>, DesignsServiceError>;
}

/// Write and read access to generation records.
pub trait DesignRepository: Send + Sync {
    /// Persist the Recommendation and the Design referencing it in one
    /// transaction — either both records exist afterwards or neither does.
    async fn create_with_recommendation(
        &self,
        record: &GenerationRecord,
    ) -> Result<(Recommendation, Design), DesignsServiceError>;

    /// The creator's designs with furniture, material and recommendation
    /// resolved.
    async fn list_by_creator(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<DesignDetail>, DesignsServiceError>;

    /// All designs, additionally resolving each furniture item's store.
    async fn list_all(&self) -> Result<Vec<DesignDetail>, DesignsServiceError>;
}

/// Port for fetching remote catalog reference images.
pub trait ReferenceImageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedImage, DesignsServiceError>;
}

/// Port for the external image-synthesis API.
pub trait SynthesisClient: Send + Sync {
    /// Submit one multi-part synthesis request and return the decoded
    /// image bytes.
    async fn synthesize(
        &self,
        prompt: &str,
        images: &[ImagePart],
    ) -> Result<Vec<u8>, DesignsServiceError>;
}

/// Port for durable artifact storage.
pub trait ArtifactStore: Send + Sync {
    async fn store(
        &self,
        user_id: Uuid,
        bytes: &[u8],
    ) -> Result<StoredArtifact, DesignsServiceError>;
}

/// Injectable randomness so catalog selection is deterministic in tests.
pub trait RandomSource: Send + Sync {
    /// An index in `0..len`. `len` is always at least 1.
    fn pick(&self, len: usize) -> usize;
}
