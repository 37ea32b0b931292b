//! Services for invoicing-client.

pub mod client_lookup;
pub mod database;
pub mod invoicing_api;
pub mod metrics;
pub mod pdf_sink;
pub mod recent_invoices;

pub use client_lookup::{fetch_client_by_document, SocioTitularStore};
pub use database::Database;
pub use invoicing_api::InvoicingApiClient;
pub use pdf_sink::{LocalPdfSink, PdfSink};
pub use recent_invoices::{RecentInvoicesSource, StaticInvoiceFeed};
