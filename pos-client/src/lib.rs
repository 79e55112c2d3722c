//! POS Client - typed HTTP client for the POS REST API
//!
//! Wraps the products, sales, categories and reports endpoints, and adds the
//! client-side flows built on them: sale checkout with receipt hand-off and
//! the catalog page loader.

pub mod api;
pub mod checkout;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod page;
pub mod receipt;

pub use checkout::{Checkout, CheckoutOutcome};
pub use client::PosClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use page::{CatalogPage, CatalogState, LoadOutcome, PageHandle};
pub use receipt::{LogReceiptSink, MemoryReceiptSink, ReceiptError, ReceiptSink};

// Re-export shared types for convenience
pub use shared::{Cart, CartItem, DomainError};
