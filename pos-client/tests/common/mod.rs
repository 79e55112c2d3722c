//! In-process mock of the POS REST API for integration tests

#![allow(dead_code)]

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use chrono::Utc;
use pos_client::{ClientConfig, PosClient};
use serde_json::{Value, json};
use shared::models::{
    Category, CategoryCreate, CategoryLevel, Product, ProductCreate, ProductUpdate, Sale,
    SaleCreate, StockChange,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default)]
pub struct MockState {
    /// Flat list; the tree is assembled on read
    pub categories: Mutex<Vec<Category>>,
    pub products: Mutex<Vec<Product>>,
    pub sales: Mutex<Vec<Sale>>,
    pub patch_bodies: Mutex<Vec<Value>>,
    pub sale_posts: AtomicUsize,
    pub requests: AtomicUsize,
    pub next_id: AtomicU64,
    /// Delay applied to `GET /products`
    pub products_delay_ms: AtomicU64,
    pub fail_categories: AtomicBool,
    pub fail_receipts: AtomicBool,
}

impl MockState {
    fn next_id(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn insert_product(&self, product: Product) {
        self.products.lock().unwrap().push(product);
    }
}

type Shared = Arc<MockState>;

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

fn build_tree(flat: &[Category], parent: Option<&str>) -> Vec<Category> {
    flat.iter()
        .filter(|c| c.parent_id.as_deref() == parent)
        .map(|c| {
            let mut node = c.clone();
            node.sub_categories = build_tree(flat, Some(&c.id));
            node
        })
        .collect()
}

async fn list_categories(State(state): State<Shared>) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    if state.fail_categories.load(Ordering::SeqCst) {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "Category store unavailable");
    }
    let flat = state.categories.lock().unwrap().clone();
    Json(build_tree(&flat, None)).into_response()
}

async fn create_category(State(state): State<Shared>, Json(body): Json<CategoryCreate>) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let category = Category {
        id: state.next_id("cat"),
        name: body.name,
        level: body.level,
        parent_id: body.parent_id,
        sub_categories: Vec::new(),
    };
    state.categories.lock().unwrap().push(category.clone());
    (StatusCode::CREATED, Json(category)).into_response()
}

async fn categories_by_level(State(state): State<Shared>, Path(level): Path<u8>) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let Ok(level) = CategoryLevel::try_from(level) else {
        return error(StatusCode::BAD_REQUEST, "Invalid level");
    };
    let found: Vec<Category> = state
        .categories
        .lock()
        .unwrap()
        .iter()
        .filter(|c| c.level == level)
        .cloned()
        .collect();
    Json(found).into_response()
}

async fn list_products(State(state): State<Shared>) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let delay = state.products_delay_ms.load(Ordering::SeqCst);
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }
    Json(state.products.lock().unwrap().clone()).into_response()
}

async fn create_product(State(state): State<Shared>, Json(body): Json<ProductCreate>) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let product = Product {
        id: state.next_id("prod"),
        name: body.name,
        brand: body.brand,
        base_price: body.base_price,
        purchased_price: body.purchased_price,
        selling_price: body.selling_price,
        main_category: body.main_category,
        sub_category: body.sub_category,
        sub_sub_category: body.sub_sub_category,
        description: body.description,
        images: body.images,
        specifications: body.specifications,
        available_options: body.available_options,
        variants: body.variants,
        created_at: Some(Utc::now()),
        updated_at: None,
    };
    state.products.lock().unwrap().push(product.clone());
    (StatusCode::CREATED, Json(product)).into_response()
}

async fn get_product(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    match state.products.lock().unwrap().iter().find(|p| p.id == id) {
        Some(p) => Json(p.clone()).into_response(),
        None => error(StatusCode::NOT_FOUND, "Product not found"),
    }
}

async fn patch_product(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    state.patch_bodies.lock().unwrap().push(body.clone());
    let Ok(update) = serde_json::from_value::<ProductUpdate>(body) else {
        return error(StatusCode::BAD_REQUEST, "Malformed update");
    };
    let mut products = state.products.lock().unwrap();
    let Some(product) = products.iter_mut().find(|p| p.id == id) else {
        return error(StatusCode::NOT_FOUND, "Product not found");
    };
    if let Some(price) = update.purchased_price {
        product.purchased_price = price;
    }
    if let Some(price) = update.selling_price {
        product.selling_price = price;
    }
    if let Some(name) = update.name {
        product.name = name;
    }
    Json(product.clone()).into_response()
}

async fn delete_product(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let mut products = state.products.lock().unwrap();
    let before = products.len();
    products.retain(|p| p.id != id);
    if products.len() == before {
        return error(StatusCode::NOT_FOUND, "Product not found");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn update_stock(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<StockChange>,
) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let mut products = state.products.lock().unwrap();
    let Some(product) = products.iter_mut().find(|p| p.id == id) else {
        return error(StatusCode::NOT_FOUND, "Product not found");
    };
    let Some(variant) = product.variants.first_mut() else {
        return error(StatusCode::BAD_REQUEST, "Product has no variants");
    };
    let next = variant.stock as i64 + body.stock_change;
    if next < 0 {
        return error(StatusCode::BAD_REQUEST, "Stock cannot go negative");
    }
    variant.stock = next as u32;
    Json(product.clone()).into_response()
}

async fn low_stock(
    State(state): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let threshold: u32 = params
        .get("threshold")
        .and_then(|t| t.parse().ok())
        .unwrap_or(5);
    let found: Vec<Product> = state
        .products
        .lock()
        .unwrap()
        .iter()
        .filter(|p| p.total_stock() <= threshold)
        .cloned()
        .collect();
    Json(found).into_response()
}

async fn search_products(
    State(state): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let q = params.get("q").cloned().unwrap_or_default().to_lowercase();
    let found: Vec<Product> = state
        .products
        .lock()
        .unwrap()
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&q))
        .cloned()
        .collect();
    Json(found).into_response()
}

async fn create_sale(State(state): State<Shared>, Json(body): Json<SaleCreate>) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    state.sale_posts.fetch_add(1, Ordering::SeqCst);

    let mut products = state.products.lock().unwrap();
    for item in &body.items {
        let Some(product) = products.iter().find(|p| p.id == item.product_id) else {
            return error(StatusCode::NOT_FOUND, "Product not found");
        };
        if product.total_stock() < item.quantity {
            return error(StatusCode::BAD_REQUEST, "Insufficient stock");
        }
    }
    for item in &body.items {
        if let Some(variant) = products
            .iter_mut()
            .find(|p| p.id == item.product_id)
            .and_then(|p| p.variants.first_mut())
        {
            variant.stock = variant.stock.saturating_sub(item.quantity);
        }
    }

    let total = body
        .items
        .iter()
        .map(|i| i.price * f64::from(i.quantity))
        .sum();
    let sale = Sale {
        id: state.next_id("sale"),
        items: body.items,
        total,
        customer_name: body.customer_name,
        created_at: Utc::now(),
    };
    state.sales.lock().unwrap().push(sale.clone());
    (StatusCode::CREATED, Json(sale)).into_response()
}

async fn print_receipt(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    if state.fail_receipts.load(Ordering::SeqCst) {
        return error(StatusCode::SERVICE_UNAVAILABLE, "Receipt service down");
    }
    let sales = state.sales.lock().unwrap();
    let Some(sale) = sales.iter().find(|s| s.id == id) else {
        return error(StatusCode::NOT_FOUND, "Sale not found");
    };
    let text = format!("RECEIPT {}\nTOTAL {:.2}", sale.id, sale.total);
    Json(json!({ "receiptText": text })).into_response()
}

async fn monthly_report(
    State(state): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let month: u32 = params.get("month").and_then(|m| m.parse().ok()).unwrap_or(0);
    let year: i32 = params.get("year").and_then(|y| y.parse().ok()).unwrap_or(0);
    let sales = state.sales.lock().unwrap();
    let revenue: f64 = sales.iter().map(|s| s.total).sum();
    Json(json!({
        "month": month,
        "year": year,
        "summary": { "totalSales": sales.len(), "totalRevenue": revenue }
    }))
    .into_response()
}

async fn unavailable() -> Response {
    (StatusCode::BAD_GATEWAY, "<html>upstream down</html>").into_response()
}

pub fn router(state: Shared) -> Router {
    let api = Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route("/categories/level/{level}", get(categories_by_level))
        .route("/products", get(list_products).post(create_product))
        .route("/products/search", get(search_products))
        .route("/products/low-stock", get(low_stock))
        .route(
            "/products/{id}",
            get(get_product).patch(patch_product).delete(delete_product),
        )
        .route("/products/{id}/stock", put(update_stock))
        .route("/sales", axum::routing::post(create_sale))
        .route("/sales/{id}/receipt/print", get(print_receipt))
        .route("/reports/monthly", get(monthly_report))
        .route("/reports/overview", get(unavailable));

    Router::new().nest("/api", api).with_state(state)
}

/// Start the mock on an ephemeral port; returns the state and a client for it
pub async fn spawn() -> (Arc<MockState>, PosClient) {
    let state = Arc::new(MockState::default());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = router(Arc::clone(&state));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = ClientConfig::new(format!("http://{}/api", addr)).with_timeout(5);
    let client = PosClient::new(&config).unwrap();
    (state, client)
}
