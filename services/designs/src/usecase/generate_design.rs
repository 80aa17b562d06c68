use anyhow::Context as _;
use uuid::Uuid;

use crate::domain::repository::{
    ArtifactStore, CatalogRepository, DesignRepository, RandomSource, ReferenceImageFetcher,
    SynthesisClient,
};
use crate::domain::types::{
    Design, FurnitureItem, GenerationRecord, ImagePart, PriceCeiling, Recommendation,
    ResolvedPreference, RoomPhoto, Vibe,
};
use crate::error::DesignsServiceError;

/// Pipeline stages in execution order. Attached to log lines so a failed
/// run can be placed without reading the whole trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    ResolvingPreferences,
    MatchingCatalog,
    GatheringReferences,
    SynthesizingImage,
    StoringArtifact,
    RecordingResult,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::ResolvingPreferences => "resolving_preferences",
            Self::MatchingCatalog => "matching_catalog",
            Self::GatheringReferences => "gathering_references",
            Self::SynthesizingImage => "synthesizing_image",
            Self::StoringArtifact => "storing_artifact",
            Self::RecordingResult => "recording_result",
        };
        f.write_str(name)
    }
}

/// Build the synthesis prompt for the selected item, flavored by the
/// user's vibe preference when one exists.
pub fn synthesis_prompt(furniture_name: &str, vibe: Option<Vibe>) -> String {
    match vibe {
        Some(vibe) => format!("Merge room with {furniture_name} with schema {}", vibe.as_str()),
        None => format!("Merge room with {furniture_name}"),
    }
}

// ── GenerateDesign ───────────────────────────────────────────────────────────

pub struct GenerateDesignInput {
    pub user_id: Uuid,
    pub room_type_id: Uuid,
    pub price_ceiling: PriceCeiling,
    /// Spooled room photos. Their temp-directory guard is owned by the
    /// caller and released after this usecase returns, whichever way it
    /// returns.
    pub photos: Vec<RoomPhoto>,
}

#[derive(Debug)]
pub struct GenerateDesignOutput {
    pub image_url: String,
    pub design: Design,
    pub recommendation: Recommendation,
}

/// The generation pipeline: resolve preferences, match the catalog under
/// budget and color constraints, gather reference imagery, call the
/// synthesis API, store the artifact, and record the run. Stages execute
/// strictly in order; each returns its own error variant.
pub struct GenerateDesignUseCase<Cat, Rec, Fetch, Synth, Art, Rng> {
    pub catalog: Cat,
    pub records: Rec,
    pub fetcher: Fetch,
    pub synthesis: Synth,
    pub artifacts: Art,
    pub rng: Rng,
}

impl<Cat, Rec, Fetch, Synth, Art, Rng> GenerateDesignUseCase<Cat, Rec, Fetch, Synth, Art, Rng>
where
    Cat: CatalogRepository,
    Rec: DesignRepository,
    Fetch: ReferenceImageFetcher,
    Synth: SynthesisClient,
    Art: ArtifactStore,
    Rng: RandomSource,
{
    pub async fn execute(
        &self,
        input: GenerateDesignInput,
    ) -> Result<GenerateDesignOutput, DesignsServiceError> {
        if input.photos.is_empty() {
            return Err(DesignsServiceError::MissingImage);
        }

        let preference = self.resolve_preference(input.user_id).await?;
        let (selected, candidates) = self
            .match_catalog(input.room_type_id, input.price_ceiling, preference.color_id)
            .await?;
        let images = self.gather_references(&input.photos, &candidates).await?;

        let prompt = synthesis_prompt(&selected.name, preference.vibe);
        tracing::info!(
            stage = %PipelineStage::SynthesizingImage,
            prompt,
            image_count = images.len(),
            "submitting synthesis request"
        );
        let artifact_bytes = self.synthesis.synthesize(&prompt, &images).await?;

        tracing::info!(
            stage = %PipelineStage::StoringArtifact,
            size = artifact_bytes.len(),
            "storing synthesized artifact"
        );
        let artifact = self.artifacts.store(input.user_id, &artifact_bytes).await?;

        let (recommendation, design) = self
            .records
            .create_with_recommendation(&GenerationRecord {
                user_id: input.user_id,
                furniture_id: selected.id,
                material_id: selected.material_id,
                room_type_id: input.room_type_id,
                budget: input.price_ceiling.bound(),
                model_url: artifact.url.clone(),
            })
            .await?;
        tracing::info!(
            stage = %PipelineStage::RecordingResult,
            design_id = %design.id,
            recommendation_id = %recommendation.id,
            "generation recorded"
        );

        Ok(GenerateDesignOutput {
            image_url: artifact.url,
            design,
            recommendation,
        })
    }

    /// Load the user's saved preference and resolve its color tone to a
    /// catalog color id. Absence of a preference — or a tone no catalog
    /// color carries — leaves the corresponding field unset.
    async fn resolve_preference(
        &self,
        user_id: Uuid,
    ) -> Result<ResolvedPreference, DesignsServiceError> {
        let Some(preference) = self.catalog.find_preference(user_id).await? else {
            tracing::info!(
                stage = %PipelineStage::ResolvingPreferences,
                "no saved preference, proceeding unconstrained"
            );
            return Ok(ResolvedPreference::default());
        };
        let color_id = match preference.color_tone {
            Some(tone) => self
                .catalog
                .find_color_by_tone(tone)
                .await?
                .map(|color| color.id),
            None => None,
        };
        Ok(ResolvedPreference {
            color_id,
            vibe: preference.vibe,
        })
    }

    /// Query the catalog under the given filters and pick one candidate
    /// uniformly at random. The full candidate set is returned as well —
    /// reference gathering forwards every candidate's picture.
    async fn match_catalog(
        &self,
        room_type_id: Uuid,
        ceiling: PriceCeiling,
        color_id: Option<Uuid>,
    ) -> Result<(FurnitureItem, Vec<FurnitureItem>), DesignsServiceError> {
        let candidates = self
            .catalog
            .find_matching_furniture(room_type_id, ceiling, color_id)
            .await?;
        if candidates.is_empty() {
            return Err(DesignsServiceError::NoMatch {
                room_type_id,
                price_ceiling: ceiling,
                color_id,
            });
        }
        let selected = candidates[self.rng.pick(candidates.len())].clone();
        tracing::info!(
            stage = %PipelineStage::MatchingCatalog,
            candidates = candidates.len(),
            furniture_id = %selected.id,
            "selected catalog item"
        );
        Ok((selected, candidates))
    }

    /// Combine the uploaded photos with every reachable candidate picture,
    /// in submission order. A single unreachable picture is skipped, never
    /// fatal.
    async fn gather_references(
        &self,
        photos: &[RoomPhoto],
        candidates: &[FurnitureItem],
    ) -> Result<Vec<ImagePart>, DesignsServiceError> {
        let mut parts = Vec::with_capacity(photos.len() + candidates.len());
        for photo in photos {
            let bytes = tokio::fs::read(&photo.path)
                .await
                .context("read uploaded image")?;
            parts.push(ImagePart {
                file_name: photo.file_name.clone(),
                content_type: photo.content_type.clone(),
                bytes,
            });
        }
        for (index, item) in candidates.iter().enumerate() {
            let Some(url) = item.picture_url.as_deref() else {
                continue;
            };
            match self.fetcher.fetch(url).await {
                Ok(image) => parts.push(ImagePart {
                    file_name: format!("furniture-image-{index}.jpeg"),
                    content_type: image.content_type,
                    bytes: image.bytes,
                }),
                Err(e) => tracing::warn!(
                    stage = %PipelineStage::GatheringReferences,
                    furniture_id = %item.id,
                    url,
                    error = %e,
                    "skipping unreachable reference image"
                ),
            }
        }
        Ok(parts)
    }
}
