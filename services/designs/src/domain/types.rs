use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Color tone bucket shared by catalog colors and user preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTone {
    Neutral,
    Bold,
    Pastel,
    Monochromatic,
    Earthy,
    Vibrant,
}

impl ColorTone {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "Neutral",
            Self::Bold => "Bold",
            Self::Pastel => "Pastel",
            Self::Monochromatic => "Monochromatic",
            Self::Earthy => "Earthy",
            Self::Vibrant => "Vibrant",
        }
    }

    /// Parse a stored tone value. Returns `None` for unknown values — a
    /// stale preference row must never fail a pipeline run.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Neutral" => Some(Self::Neutral),
            "Bold" => Some(Self::Bold),
            "Pastel" => Some(Self::Pastel),
            "Monochromatic" => Some(Self::Monochromatic),
            "Earthy" => Some(Self::Earthy),
            "Vibrant" => Some(Self::Vibrant),
            _ => None,
        }
    }
}

/// Interior style preference used to flavor the synthesis prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vibe {
    Minimalist,
    Rustic,
    Modern,
    Bohemian,
    Industrial,
    Traditional,
}

impl Vibe {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minimalist => "Minimalist",
            Self::Rustic => "Rustic",
            Self::Modern => "Modern",
            Self::Bohemian => "Bohemian",
            Self::Industrial => "Industrial",
            Self::Traditional => "Traditional",
        }
    }

    /// Parse a stored vibe value. Unknown values are treated as unset.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Minimalist" => Some(Self::Minimalist),
            "Rustic" => Some(Self::Rustic),
            "Modern" => Some(Self::Modern),
            "Bohemian" => Some(Self::Bohemian),
            "Industrial" => Some(Self::Industrial),
            "Traditional" => Some(Self::Traditional),
            _ => None,
        }
    }
}

/// Exclusive upper budget bound for catalog matching.
///
/// `Unlimited` is the explicit "caller supplied no price" representation —
/// it applies no price filter and persists as a NULL budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceCeiling {
    Unlimited,
    Below(i64),
}

impl PriceCeiling {
    /// The bound as an optional value: `None` means unlimited.
    pub fn bound(self) -> Option<i64> {
        match self {
            Self::Unlimited => None,
            Self::Below(v) => Some(v),
        }
    }

    pub fn admits(self, price: i64) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Below(v) => price < v,
        }
    }
}

/// Catalog color row.
#[derive(Debug, Clone)]
pub struct Color {
    pub id: Uuid,
    pub name: String,
    pub tone: ColorTone,
}

/// A user's saved style preference.
#[derive(Debug, Clone)]
pub struct Preference {
    pub user_id: Uuid,
    pub vibe: Option<Vibe>,
    pub color_tone: Option<ColorTone>,
}

/// Outcome of preference resolution. Both fields may be unset — absence of
/// a preference record is not an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolvedPreference {
    pub color_id: Option<Uuid>,
    pub vibe: Option<Vibe>,
}

/// Catalog furniture item as seen by the pipeline.
#[derive(Debug, Clone)]
pub struct FurnitureItem {
    pub id: Uuid,
    pub name: String,
    pub category_id: Uuid,
    pub color_id: Uuid,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub price: i64,
    pub picture_url: Option<String>,
    pub material_id: Uuid,
    pub store_id: Uuid,
    pub room_type_id: Uuid,
}

/// Catalog material row.
#[derive(Debug, Clone)]
pub struct Material {
    pub id: Uuid,
    pub name: String,
    pub material_type: String,
    pub description: String,
    pub hex: String,
    pub image_url: Option<String>,
}

/// Store carrying a furniture item.
#[derive(Debug, Clone)]
pub struct Store {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub longitude: f64,
    pub latitude: f64,
    pub website: Option<String>,
    pub image_url: String,
}

/// Furniture/material suggestions captured for one generation event.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub furniture_ids: Vec<Uuid>,
    pub material_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// One persisted generation event.
#[derive(Debug, Clone)]
pub struct Design {
    pub id: Uuid,
    pub furniture_used_id: Uuid,
    pub materials_used_id: Uuid,
    pub recommendation_id: Uuid,
    pub room_type_id: Uuid,
    pub budget: Option<i64>,
    pub created_by: Uuid,
    pub model_url: String,
    pub created_at: DateTime<Utc>,
}

/// A design with its catalog references resolved for listing responses.
/// `store` is only populated by the search listing.
#[derive(Debug, Clone)]
pub struct DesignDetail {
    pub design: Design,
    pub furniture: Option<FurnitureItem>,
    pub material: Option<Material>,
    pub recommendation: Option<Recommendation>,
    pub store: Option<Store>,
}

/// Input for the atomic recommendation + design write.
#[derive(Debug, Clone)]
pub struct GenerationRecord {
    pub user_id: Uuid,
    pub furniture_id: Uuid,
    pub material_id: Uuid,
    pub room_type_id: Uuid,
    pub budget: Option<i64>,
    pub model_url: String,
}

/// An uploaded room photo spooled to temporary storage.
#[derive(Debug, Clone)]
pub struct RoomPhoto {
    pub path: PathBuf,
    pub file_name: String,
    pub content_type: String,
}

/// One image forwarded to the synthesis request, in submission order.
#[derive(Debug, Clone)]
pub struct ImagePart {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// A remote reference image fetched from the catalog.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// A stored artifact and its public URL.
#[derive(Debug, Clone)]
pub struct StoredArtifact {
    pub url: String,
    pub path: PathBuf,
}
