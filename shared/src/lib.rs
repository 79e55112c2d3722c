//! Shared types for the POS client
//!
//! Wire models, domain errors, money helpers and the pure in-memory
//! components (category resolution, variant matrix, cart). Nothing in this
//! crate performs I/O.

pub mod cart;
pub mod catalog;
pub mod error;
pub mod models;
pub mod money;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use cart::{Cart, CartItem};
pub use error::{DomainError, DomainResult};
