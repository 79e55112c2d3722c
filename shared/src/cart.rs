//! Sale-entry cart
//!
//! In-memory line items for one sale-entry session. Every operation either
//! succeeds or leaves the cart exactly as it was.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{DomainError, DomainResult};
use crate::models::{Product, SaleCreate, SaleItem, Variant};
use crate::money::to_decimal;

/// One cart line
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product_id: String,
    pub variant_id: String,
    pub name: String,
    /// Unit price (variant selling price at the time of adding)
    pub price: f64,
    pub quantity: u32,
    /// Variant stock seen when the line was last added to or resized
    pub available_stock: u32,
}

impl CartItem {
    pub fn line_total(&self) -> Decimal {
        to_decimal(self.price) * Decimal::from(self.quantity)
    }
}

/// Ordered list of cart lines, one per product
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Adds one unit of `variant`
    ///
    /// An existing line for the product is incremented while it stays within
    /// the variant's stock; otherwise a new line of quantity 1 is appended.
    pub fn add_item(&mut self, product: &Product, variant: &Variant) -> DomainResult<()> {
        if let Some(line) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            if line.quantity >= variant.stock {
                return Err(DomainError::StockExceeded {
                    product_id: product.id.clone(),
                    requested: line.quantity + 1,
                    available: variant.stock,
                });
            }
            line.quantity += 1;
            line.available_stock = variant.stock;
            return Ok(());
        }

        if variant.stock == 0 {
            return Err(DomainError::StockExceeded {
                product_id: product.id.clone(),
                requested: 1,
                available: 0,
            });
        }

        self.items.push(CartItem {
            product_id: product.id.clone(),
            variant_id: variant.id.clone(),
            name: product.name.clone(),
            price: variant.selling_price,
            quantity: 1,
            available_stock: variant.stock,
        });
        Ok(())
    }

    /// Drops the product's line; unknown ids are a no-op
    pub fn remove_item(&mut self, product_id: &str) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Replaces a line's quantity, bounded by the variant's stock in `catalog`
    ///
    /// The line's variant is looked up in the current catalog; a product or
    /// variant no longer listed there counts as out of stock. On success the
    /// line's `available_stock` is refreshed from the catalog.
    pub fn set_quantity(
        &mut self,
        product_id: &str,
        quantity: u32,
        catalog: &[Product],
    ) -> DomainResult<()> {
        let line = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product_id)
            .ok_or_else(|| DomainError::LineNotFound(product_id.to_string()))?;

        if quantity < 1 {
            return Err(DomainError::InvalidQuantity {
                product_id: product_id.to_string(),
                quantity,
            });
        }

        let stock = catalog
            .iter()
            .find(|p| p.id == product_id)
            .and_then(|p| p.variant(&line.variant_id))
            .map(|v| v.stock)
            .unwrap_or(0);
        if quantity > stock {
            return Err(DomainError::StockExceeded {
                product_id: product_id.to_string(),
                requested: quantity,
                available: stock,
            });
        }
        line.quantity = quantity;
        line.available_stock = stock;
        Ok(())
    }

    /// Sum of `price * quantity` in exact decimal
    pub fn total_decimal(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Unrounded sum of `price * quantity`; format with [`format_amount`](crate::money::format_amount)
    pub fn total(&self) -> f64 {
        self.total_decimal().to_f64().unwrap_or_default()
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// `POST /sales` payload for the current lines
    pub fn to_sale_create(&self, customer_name: Option<&str>) -> DomainResult<SaleCreate> {
        if self.items.is_empty() {
            return Err(DomainError::EmptyCart);
        }
        Ok(SaleCreate {
            items: self
                .items
                .iter()
                .map(|i| SaleItem {
                    product_id: i.product_id.clone(),
                    quantity: i.quantity,
                    price: i.price,
                })
                .collect(),
            customer_name: customer_name
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
        })
    }
}
