//! High-level client facade

use crate::api::{CategoriesApi, ProductsApi, ReportsApi, SalesApi};
use crate::{ClientConfig, ClientResult, HttpClient};

/// Entry point to the POS API
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PosClient {
    http: HttpClient,
}

impl PosClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// Client configured from `POS_API_*` environment variables
    pub fn from_env() -> ClientResult<Self> {
        Self::new(&ClientConfig::from_env())
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(&self.http)
    }

    pub fn sales(&self) -> SalesApi<'_> {
        SalesApi::new(&self.http)
    }

    pub fn categories(&self) -> CategoriesApi<'_> {
        CategoriesApi::new(&self.http)
    }

    pub fn reports(&self) -> ReportsApi<'_> {
        ReportsApi::new(&self.http)
    }
}
