//! sea-orm entities for the designs service.
//!
//! One module per table. Catalog tables (colors, categories, materials,
//! stores, room types, furniture) are read-only from this service's
//! perspective; their CRUD lives in the catalog service.

pub mod designs;
pub mod furniture_categories;
pub mod furniture_colors;
pub mod furniture_items;
pub mod materials;
pub mod preferences;
pub mod recommendations;
pub mod room_types;
pub mod stores;
