//! Report Models
//!
//! Aggregation is done server-side. Missing numeric fields default to zero
//! and missing lists to empty.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::sale::Sale;

/// Totals shared by every report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalesSummary {
    pub total_sales: u64,
    pub total_revenue: f64,
    pub total_items_sold: u64,
    pub average_sale_value: f64,
}

/// Product with remaining stock below the server threshold
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LowStockEntry {
    pub product_id: String,
    pub name: String,
    pub stock: u32,
}

/// Best-selling product entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopProduct {
    pub product_id: String,
    pub name: String,
    pub quantity_sold: u64,
    pub revenue: f64,
}

/// `GET /reports/overview`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverviewReport {
    pub summary: SalesSummary,
    pub low_stock_products: Vec<LowStockEntry>,
    pub top_products: Vec<TopProduct>,
}

/// `GET /reports/daily?date=`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyReport {
    pub date: Option<NaiveDate>,
    pub summary: SalesSummary,
    pub sales: Vec<Sale>,
}

/// Per-day row of a monthly report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyBreakdown {
    pub date: Option<NaiveDate>,
    pub total_sales: u64,
    pub total_revenue: f64,
}

/// `GET /reports/monthly?month=&year=`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonthlyReport {
    pub month: u32,
    pub year: i32,
    pub summary: SalesSummary,
    pub daily_breakdown: Vec<DailyBreakdown>,
}

/// `GET /reports/date-range?startDate=&endDate=`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateRangeReport {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub summary: SalesSummary,
    pub sales: Vec<Sale>,
}
