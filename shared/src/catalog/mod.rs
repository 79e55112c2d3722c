//! Catalog helpers
//!
//! Pure transforms over server-fetched catalog data: category hierarchy
//! resolution and variant matrix generation.

pub mod tree;
pub mod variant;

pub use tree::{
    belongs_to_category, category_path, descendant_ids, filter_products, find_category,
    flatten_at_level, parent_candidates,
};
pub use variant::{
    DEFAULT_VARIANT_ID, RegenerationMode, VariantAxes, VariantAxis, VariantEdit, VariantMatrix,
    generate, update_variant_field, variant_id,
};
