// pos-client/examples/pos_session.rs
// Walks through a till session against a running POS API:
// load the catalog, fill a cart, submit the sale, print the receipt.
//
// POS_API_BASE_URL=http://localhost:5000/api cargo run --example pos_session -- [category-id]

use pos_client::{Cart, CatalogPage, Checkout, LoadOutcome, LogReceiptSink, PosClient, logger};
use shared::money::format_amount;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init_logger();

    let category = std::env::args().nth(1).unwrap_or_default();
    let client = PosClient::from_env()?;
    tracing::info!(base_url = client.http().base_url(), "Connecting");

    let mut page = CatalogPage::new(client.clone());
    if let LoadOutcome::Applied {
        products_ok: false, ..
    } = page.load().await
    {
        let message = page.state().products_error.clone().unwrap_or_default();
        anyhow::bail!("could not load products: {}", message);
    }

    let mut cart = Cart::new();
    for product in page.visible_products(&category) {
        let Some(variant) = product.variants.iter().find(|v| v.stock > 0) else {
            continue;
        };
        match cart.add_item(product, variant) {
            Ok(()) => tracing::info!(product = %product.name, variant = %variant.id, "Added to cart"),
            Err(e) => tracing::warn!(product = %product.name, error = %e, "Skipped"),
        }
        if cart.len() >= 3 {
            break;
        }
    }

    if cart.is_empty() {
        tracing::info!("Nothing in stock for this category");
        return Ok(());
    }
    tracing::info!(lines = cart.len(), total = %format_amount(cart.total()), "Submitting sale");

    let checkout = Checkout::new(&client, LogReceiptSink);
    match checkout.submit(&mut cart, Some("Walk-in")).await {
        Ok(outcome) => tracing::info!(
            sale_id = %outcome.sale.id,
            total = %format_amount(outcome.sale.total),
            receipt_printed = outcome.receipt_printed,
            "Sale completed"
        ),
        Err(e) => tracing::error!(error = %e, "Sale failed: {}", e.user_message()),
    }

    Ok(())
}
