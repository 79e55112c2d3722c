//! Catalog page state
//!
//! Products and the category tree are fetched concurrently on load. Each
//! result updates only its own slice of state, so one failing fetch never
//! blocks the other. Responses that land after the page was invalidated
//! are dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use shared::catalog::filter_products;
use shared::models::{Category, Product};

use crate::PosClient;

/// Loaded page data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    /// User-facing message of the last failed products fetch
    pub products_error: Option<String>,
    /// User-facing message of the last failed categories fetch
    pub categories_error: Option<String>,
}

/// What a [`CatalogPage::load`] call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied { products_ok: bool, categories_ok: bool },
    /// The page was invalidated while the requests were in flight
    Stale,
}

/// Invalidates a page from outside (navigation, unmount)
#[derive(Debug, Clone)]
pub struct PageHandle {
    generation: Arc<AtomicU64>,
}

impl PageHandle {
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

/// Catalog listing page
#[derive(Debug)]
pub struct CatalogPage {
    client: PosClient,
    generation: Arc<AtomicU64>,
    state: CatalogState,
}

impl CatalogPage {
    pub fn new(client: PosClient) -> Self {
        Self {
            client,
            generation: Arc::new(AtomicU64::new(0)),
            state: CatalogState::default(),
        }
    }

    pub fn handle(&self) -> PageHandle {
        PageHandle {
            generation: Arc::clone(&self.generation),
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn invalidate(&self) {
        self.handle().invalidate();
    }

    /// Fetch products and categories in parallel and apply what arrived
    pub async fn load(&mut self) -> LoadOutcome {
        let token = self.generation.load(Ordering::SeqCst);
        let products_api = self.client.products();
        let categories_api = self.client.categories();

        let (products, categories) = tokio::join!(products_api.get_all(), categories_api.get_all());

        if self.generation.load(Ordering::SeqCst) != token {
            tracing::debug!(token, "Discarding stale catalog responses");
            return LoadOutcome::Stale;
        }

        let products_ok = match products {
            Ok(products) => {
                self.state.products = products;
                self.state.products_error = None;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load products");
                self.state.products_error = Some(e.user_message());
                false
            }
        };

        let categories_ok = match categories {
            Ok(categories) => {
                self.state.categories = categories;
                self.state.categories_error = None;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load categories");
                self.state.categories_error = Some(e.user_message());
                false
            }
        };

        LoadOutcome::Applied {
            products_ok,
            categories_ok,
        }
    }

    /// Loaded products filtered by category (empty id = all)
    pub fn visible_products(&self, category_id: &str) -> Vec<&Product> {
        filter_products(&self.state.products, &self.state.categories, category_id)
    }
}
