//! Recent invoicing activity for the calendar view.

use super::validation::iso_date_shape;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    Boleta,
    Factura,
    #[serde(rename = "Nota Crédito")]
    NotaCredito,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarStatus {
    Aceptado,
    Pendiente,
    Rechazado,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InvoicingCalendarItem {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    pub serie: String,
    pub client_name: String,
    /// Signed amount; credit notes are negative.
    #[serde(with = "crate::models::amount")]
    pub amount: Decimal,
    #[validate(custom(function = "iso_date_shape"))]
    pub date: String,
    pub status: CalendarStatus,
}
