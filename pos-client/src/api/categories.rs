//! Categories API

use shared::models::{Category, CategoryCreate, CategoryLevel, CategoryUpdate};
use urlencoding::encode;
use validator::Validate;

use crate::http::HttpClient;
use crate::ClientResult;

/// `/categories` endpoints
#[derive(Debug, Clone, Copy)]
pub struct CategoriesApi<'a> {
    http: &'a HttpClient,
}

impl<'a> CategoriesApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Full category tree
    pub async fn get_all(&self) -> ClientResult<Vec<Category>> {
        self.http.get("/categories").await
    }

    pub async fn get_by_id(&self, id: &str) -> ClientResult<Category> {
        self.http.get(&format!("/categories/{}", encode(id))).await
    }

    /// Validates name and level/parent shape, then `POST /categories`
    pub async fn create(&self, data: &CategoryCreate) -> ClientResult<Category> {
        data.validate()?;
        data.check_shape()?;
        self.http.post("/categories", data).await
    }

    /// Like [`create`](Self::create), also checking the parent against `tree`
    pub async fn create_in(&self, data: &CategoryCreate, tree: &[Category]) -> ClientResult<Category> {
        data.validate()?;
        data.validate_against(tree)?;
        self.http.post("/categories", data).await
    }

    pub async fn update(&self, id: &str, data: &CategoryUpdate) -> ClientResult<Category> {
        self.http.put(&format!("/categories/{}", encode(id)), data).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let _: serde_json::Value = self
            .http
            .delete(&format!("/categories/{}", encode(id)))
            .await?;
        Ok(())
    }

    pub async fn get_by_level(&self, level: CategoryLevel) -> ClientResult<Vec<Category>> {
        self.http
            .get(&format!("/categories/level/{}", level.as_u8()))
            .await
    }

    pub async fn get_subcategories(&self, id: &str) -> ClientResult<Vec<Category>> {
        self.http
            .get(&format!("/categories/{}/subcategories", encode(id)))
            .await
    }

    pub async fn get_hierarchy(&self) -> ClientResult<Vec<Category>> {
        self.http.get("/categories/hierarchy").await
    }
}
