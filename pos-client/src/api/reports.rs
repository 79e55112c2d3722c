//! Reports API

use chrono::NaiveDate;
use shared::models::{DailyReport, DateRangeReport, MonthlyReport, OverviewReport};

use crate::http::{HttpClient, with_query};
use crate::{ClientError, ClientResult};

fn ymd(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `/reports` endpoints
#[derive(Debug, Clone, Copy)]
pub struct ReportsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> ReportsApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn overview(&self) -> ClientResult<OverviewReport> {
        self.http.get("/reports/overview").await
    }

    pub async fn daily(&self, date: NaiveDate) -> ClientResult<DailyReport> {
        self.http
            .get(&with_query("/reports/daily", &[("date", ymd(date))]))
            .await
    }

    /// `month` is 1-based
    pub async fn monthly(&self, month: u32, year: i32) -> ClientResult<MonthlyReport> {
        if !(1..=12).contains(&month) {
            return Err(ClientError::Validation(format!(
                "month must be between 1 and 12, got {}",
                month
            )));
        }
        self.http
            .get(&with_query(
                "/reports/monthly",
                &[("month", month.to_string()), ("year", year.to_string())],
            ))
            .await
    }

    pub async fn date_range(&self, start_date: NaiveDate, end_date: NaiveDate) -> ClientResult<DateRangeReport> {
        if end_date < start_date {
            return Err(ClientError::Validation(format!(
                "end date {} is before start date {}",
                end_date, start_date
            )));
        }
        self.http
            .get(&with_query(
                "/reports/date-range",
                &[("startDate", ymd(start_date)), ("endDate", ymd(end_date))],
            ))
            .await
    }
}
