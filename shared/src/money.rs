//! Money helpers using rust_decimal for precision
//!
//! Prices travel as `f64` on the wire. Arithmetic is done in `Decimal` and
//! rounded back to two decimal places, half away from zero.

use rust_decimal::prelude::*;

use crate::error::{DomainError, DomainResult};

const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round a price to two decimal places
pub fn round2(value: f64) -> f64 {
    to_f64(to_decimal(value))
}

/// Selling price for a purchase price and a profit margin in percent
///
/// `purchased * (1 + margin / 100)`, rounded to two decimals.
pub fn proportional_selling_price(purchased_price: f64, profit_margin: f64) -> DomainResult<f64> {
    if !purchased_price.is_finite() || !profit_margin.is_finite() {
        return Err(DomainError::validation(format!(
            "purchased price and profit margin must be finite numbers, got {} and {}",
            purchased_price, profit_margin
        )));
    }
    if purchased_price < 0.0 {
        return Err(DomainError::validation(format!(
            "purchased price must be non-negative, got {}",
            purchased_price
        )));
    }

    let factor = Decimal::ONE + to_decimal(profit_margin) / Decimal::ONE_HUNDRED;
    Ok(to_f64(to_decimal(purchased_price) * factor))
}

/// Format an amount for display with two decimals
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", round2(value))
}
