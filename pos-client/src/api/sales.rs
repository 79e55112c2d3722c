//! Sales API

use chrono::NaiveDate;
use shared::models::{PrintableReceipt, Sale, SaleCreate, SalesReportQuery};
use urlencoding::encode;

use crate::http::{HttpClient, with_query};
use crate::ClientResult;

/// `/sales` endpoints
#[derive(Debug, Clone, Copy)]
pub struct SalesApi<'a> {
    http: &'a HttpClient,
}

impl<'a> SalesApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn get_all(&self) -> ClientResult<Vec<Sale>> {
        self.http.get("/sales").await
    }

    pub async fn get_by_id(&self, id: &str) -> ClientResult<Sale> {
        self.http.get(&format!("/sales/{}", encode(id))).await
    }

    /// Record a sale; the server computes the total and decrements stock
    pub async fn create(&self, data: &SaleCreate) -> ClientResult<Sale> {
        self.http.post("/sales", data).await
    }

    pub async fn update(&self, id: &str, data: &SaleCreate) -> ClientResult<Sale> {
        self.http.put(&format!("/sales/{}", encode(id)), data).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let _: serde_json::Value = self.http.delete(&format!("/sales/{}", encode(id))).await?;
        Ok(())
    }

    /// Structured receipt as served by the API
    pub async fn get_receipt(&self, id: &str) -> ClientResult<serde_json::Value> {
        self.http.get(&format!("/sales/{}/receipt", encode(id))).await
    }

    /// Preformatted receipt text for the print surface
    pub async fn get_print_receipt(&self, id: &str) -> ClientResult<PrintableReceipt> {
        self.http
            .get(&format!("/sales/{}/receipt/print", encode(id)))
            .await
    }

    pub async fn get_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> ClientResult<Vec<Sale>> {
        self.http
            .get(&with_query(
                "/sales/date-range",
                &[
                    ("start", start.format("%Y-%m-%d").to_string()),
                    ("end", end.format("%Y-%m-%d").to_string()),
                ],
            ))
            .await
    }

    /// Server-side sales report; shape varies with the filters
    pub async fn get_report(&self, query: &SalesReportQuery) -> ClientResult<serde_json::Value> {
        self.http
            .get(&with_query("/sales/report", &query.to_pairs()))
            .await
    }
}
