//! Sale submission
//!
//! Turns a cart into a recorded sale. The cart is cleared only after the
//! server accepted the sale; receipt printing happens afterwards and cannot
//! undo it.

use shared::Cart;
use shared::models::Sale;

use crate::receipt::ReceiptSink;
use crate::{ClientResult, PosClient};

/// Result of a successful submission
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutOutcome {
    pub sale: Sale,
    /// False when the sale was recorded but the receipt could not be printed
    pub receipt_printed: bool,
}

/// Submits carts and hands receipts to a print surface
pub struct Checkout<'a, S: ReceiptSink> {
    client: &'a PosClient,
    sink: S,
}

impl<'a, S: ReceiptSink> Checkout<'a, S> {
    pub fn new(client: &'a PosClient, sink: S) -> Self {
        Self { client, sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Submit `cart` as a sale
    ///
    /// Empty carts fail before any request. On a failed `POST /sales` the
    /// cart is untouched so the caller can retry.
    pub async fn submit(&self, cart: &mut Cart, customer_name: Option<&str>) -> ClientResult<CheckoutOutcome> {
        let payload = cart.to_sale_create(customer_name)?;
        let sale = self.client.sales().create(&payload).await?;

        tracing::info!(sale_id = %sale.id, total = sale.total, lines = payload.items.len(), "Sale recorded");
        cart.clear();

        let receipt_printed = self.print_receipt(&sale.id).await;
        Ok(CheckoutOutcome {
            sale,
            receipt_printed,
        })
    }

    async fn print_receipt(&self, sale_id: &str) -> bool {
        let receipt = match self.client.sales().get_print_receipt(sale_id).await {
            Ok(receipt) => receipt,
            Err(e) => {
                tracing::warn!(sale_id = %sale_id, error = %e, "Failed to fetch receipt");
                return false;
            }
        };

        match self.sink.print(&receipt.receipt_text).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(sale_id = %sale_id, error = %e, "Failed to print receipt");
                false
            }
        }
    }
}
