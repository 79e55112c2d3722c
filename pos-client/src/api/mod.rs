//! Per-resource API wrappers
//!
//! Thin, borrowed views over [`HttpClient`](crate::HttpClient): one method
//! per endpoint, no state of their own.

pub mod categories;
pub mod products;
pub mod reports;
pub mod sales;

pub use categories::CategoriesApi;
pub use products::ProductsApi;
pub use reports::ReportsApi;
pub use sales::SalesApi;
