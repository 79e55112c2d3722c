//! Products API

use shared::models::{
    PricingUpdate, Product, ProductBulkUpdate, ProductCreate, ProductSearchQuery, ProductUpdate,
    StockChange,
};
use shared::money::proportional_selling_price;
use urlencoding::encode;
use validator::Validate;

use crate::http::{HttpClient, with_query};
use crate::ClientResult;

/// `/products` endpoints
#[derive(Debug, Clone, Copy)]
pub struct ProductsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> ProductsApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn get_all(&self) -> ClientResult<Vec<Product>> {
        self.http.get("/products").await
    }

    pub async fn get_by_id(&self, id: &str) -> ClientResult<Product> {
        self.http.get(&format!("/products/{}", encode(id))).await
    }

    /// Validates the payload, then `POST /products`
    pub async fn create(&self, data: &ProductCreate) -> ClientResult<Product> {
        data.validate()?;
        self.http.post("/products", data).await
    }

    /// Full replacement (`PUT`)
    pub async fn update(&self, id: &str, data: &ProductCreate) -> ClientResult<Product> {
        data.validate()?;
        self.http.put(&format!("/products/{}", encode(id)), data).await
    }

    /// Partial update (`PATCH`)
    pub async fn partial_update(&self, id: &str, data: &ProductUpdate) -> ClientResult<Product> {
        self.http.patch(&format!("/products/{}", encode(id)), data).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let _: serde_json::Value = self.http.delete(&format!("/products/{}", encode(id))).await?;
        Ok(())
    }

    /// Apply a signed stock delta server-side
    pub async fn update_stock(&self, id: &str, stock_change: i64) -> ClientResult<Product> {
        self.http
            .put(
                &format!("/products/{}/stock", encode(id)),
                &StockChange { stock_change },
            )
            .await
    }

    pub async fn update_pricing(&self, id: &str, pricing: &PricingUpdate) -> ClientResult<Product> {
        self.http
            .put(&format!("/products/{}/pricing", encode(id)), pricing)
            .await
    }

    /// Sets the selling price from a purchase price and a margin in percent
    ///
    /// The selling price is computed here and sent with the purchase price as
    /// a partial update.
    pub async fn update_proportional_pricing(
        &self,
        id: &str,
        purchased_price: f64,
        profit_margin: f64,
    ) -> ClientResult<Product> {
        let selling_price = proportional_selling_price(purchased_price, profit_margin)?;
        tracing::debug!(product_id = %id, purchased_price, profit_margin, selling_price, "Proportional pricing");

        let update = ProductUpdate {
            purchased_price: Some(purchased_price),
            selling_price: Some(selling_price),
            ..ProductUpdate::default()
        };
        self.partial_update(id, &update).await
    }

    pub async fn search(&self, query: &ProductSearchQuery) -> ClientResult<Vec<Product>> {
        self.http
            .get(&with_query("/products/search", &query.to_pairs()))
            .await
    }

    pub async fn get_by_category(&self, category: &str) -> ClientResult<Vec<Product>> {
        self.http
            .get(&format!("/products/category/{}", encode(category)))
            .await
    }

    pub async fn get_low_stock(&self, threshold: u32) -> ClientResult<Vec<Product>> {
        self.http
            .get(&with_query(
                "/products/low-stock",
                &[("threshold", threshold.to_string())],
            ))
            .await
    }

    pub async fn bulk_update(&self, updates: &ProductBulkUpdate) -> ClientResult<Vec<Product>> {
        self.http.put("/products/bulk-update", updates).await
    }

    /// Products with stock, as offered on the sale-entry screen
    pub async fn get_available_for_sale(&self) -> ClientResult<Vec<Product>> {
        self.http.get("/sales/products/available").await
    }
}
