//! Receipt print surface
//!
//! The client only produces receipt text; rendering and the physical or
//! on-screen print happen behind a [`ReceiptSink`].

use async_trait::async_trait;
use std::sync::Mutex;

/// Destination for preformatted receipt text
#[async_trait]
pub trait ReceiptSink: Send + Sync {
    /// Hand off one receipt
    async fn print(&self, receipt_text: &str) -> Result<(), ReceiptError>;
}

/// Print surface failure
#[derive(Debug, thiserror::Error)]
#[error("Receipt print failed: {0}")]
pub struct ReceiptError(pub String);

/// Writes receipts to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReceiptSink;

#[async_trait]
impl ReceiptSink for LogReceiptSink {
    async fn print(&self, receipt_text: &str) -> Result<(), ReceiptError> {
        tracing::info!(lines = receipt_text.lines().count(), "Receipt\n{}", receipt_text);
        Ok(())
    }
}

/// Keeps every printed receipt in memory
#[derive(Debug, Default)]
pub struct MemoryReceiptSink {
    printed: Mutex<Vec<String>>,
}

impl MemoryReceiptSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn printed(&self) -> Vec<String> {
        self.printed
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ReceiptSink for MemoryReceiptSink {
    async fn print(&self, receipt_text: &str) -> Result<(), ReceiptError> {
        self.printed
            .lock()
            .map_err(|e| ReceiptError(e.to_string()))?
            .push(receipt_text.to_string());
        Ok(())
    }
}
