//! Domain models for invoicing-client.

pub mod amount;
mod boleta;
mod calendar;
mod client;
mod detalle;
mod issue;
mod pdf;
mod socio_titular;
pub mod validation;

pub use boleta::{BoletaFormValues, BoletaPayload, FormaPagoTipo, Moneda};
pub use calendar::{CalendarStatus, DocumentKind, InvoicingCalendarItem};
pub use client::{Client, DOCUMENT_TYPE_DNI};
pub use detalle::Detalle;
pub use issue::{IssueResponse, IssueResponseData};
pub use pdf::{pdf_filename, GeneratePdfRequest, PdfFormat};
pub use socio_titular::SocioTitular;
