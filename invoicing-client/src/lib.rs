//! Electronic invoicing client.
//!
//! Issues boletas (sales receipts) against a remote invoicing API, requests
//! and downloads their PDFs, looks up buyers in the internal member store and
//! serves recent invoicing activity.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use client::InvoicingClient;
pub use error::InvoicingError;

use config::TelemetrySettings;
use service_core::error::CoreError;

/// Install the tracing subscriber and register metrics.
pub fn init_telemetry(settings: &TelemetrySettings) -> Result<(), CoreError> {
    service_core::observability::init_tracing(
        &settings.service_name,
        &settings.log_level,
        settings.otlp_endpoint.as_deref(),
    )?;
    services::metrics::init_metrics();
    Ok(())
}
