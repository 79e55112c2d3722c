//! Domain errors for the POS core
//!
//! Every rejection raised by the in-memory components (cart, variant matrix,
//! category validation) is a [`DomainError`]. Rejections never mutate the
//! state holder that raised them.

use thiserror::Error;

/// Domain rule violation detected client-side
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Stock exceeded for {product_id}: requested {requested}, available {available}")]
    StockExceeded {
        product_id: String,
        requested: u32,
        available: u32,
    },

    #[error("Invalid quantity {quantity} for {product_id}")]
    InvalidQuantity { product_id: String, quantity: u32 },

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Product {0} is not in the cart")]
    LineNotFound(String),

    #[error("Duplicate {axis} value: {value}")]
    DuplicateAxisValue { axis: String, value: String },

    #[error("Invalid parent category: {0}")]
    InvalidCategoryParent(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
