//! Recent invoicing activity.
//!
//! Only a placeholder feed exists for now; it serves a fixed list after a
//! simulated delay.

use crate::error::InvoicingError;
use crate::models::InvoicingCalendarItem;
use async_trait::async_trait;
use std::time::Duration;
use tracing::instrument;
use validator::Validate;

#[async_trait]
pub trait RecentInvoicesSource: Send + Sync {
    async fn recent_invoices(&self) -> Result<Vec<InvoicingCalendarItem>, InvoicingError>;
}

/// Feed body served by [`StaticInvoiceFeed`].
pub const PLACEHOLDER_FEED: &str = r#"[
  { "id": 101, "type": "Boleta", "serie": "B001-1234",
    "clientName": "Juan Pérez", "amount": 150.00, "date": "2025-07-28",
    "status": "Aceptado" },
  { "id": 102, "type": "Factura", "serie": "F001-5678",
    "clientName": "Tech Solutions SAC", "amount": 4500.50, "date": "2025-07-27",
    "status": "Aceptado" },
  { "id": 103, "type": "Nota Crédito", "serie": "NC01-0012",
    "clientName": "María Sánchez", "amount": -50.00, "date": "2025-07-27",
    "status": "Aceptado" },
  { "id": 104, "type": "Boleta", "serie": "B001-1235",
    "clientName": "Cliente Anónimo", "amount": 85.90, "date": "2025-07-26",
    "status": "Pendiente" },
  { "id": 105, "type": "Factura", "serie": "F001-5679",
    "clientName": "Global Corp S.A.", "amount": 12000.00, "date": "2025-07-25",
    "status": "Rechazado" },
  { "id": 106, "type": "Boleta", "serie": "B001-1236",
    "clientName": "Pedro Gómez", "amount": 25.00, "date": "2025-07-25",
    "status": "Aceptado" }
]"#;

/// Parse a JSON array of feed entries, keeping their order.
pub fn calendar_items_from_feed(body: &str) -> Result<Vec<InvoicingCalendarItem>, InvoicingError> {
    let items: Vec<InvoicingCalendarItem> =
        serde_json::from_str(body).map_err(|e| InvoicingError::Processing(e.to_string()))?;

    for item in &items {
        item.validate()
            .map_err(|e| InvoicingError::Processing(format!("feed item {}: {}", item.id, e)))?;
    }

    Ok(items)
}

/// Placeholder source returning [`PLACEHOLDER_FEED`].
#[derive(Debug, Clone)]
pub struct StaticInvoiceFeed {
    delay: Duration,
}

impl StaticInvoiceFeed {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for StaticInvoiceFeed {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

#[async_trait]
impl RecentInvoicesSource for StaticInvoiceFeed {
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    async fn recent_invoices(&self) -> Result<Vec<InvoicingCalendarItem>, InvoicingError> {
        tokio::time::sleep(self.delay).await;
        calendar_items_from_feed(PLACEHOLDER_FEED)
    }
}
