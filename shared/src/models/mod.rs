//! Data models
//!
//! Wire types for the POS REST API. Field names are camelCase on the wire
//! and ids are opaque server strings (`_id` accepted as an alias).

pub mod category;
pub mod product;
pub mod report;
pub mod sale;

// Re-exports
pub use category::*;
pub use product::*;
pub use report::*;
pub use sale::*;
