//! Successful issuance response.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueResponseData {
    pub id: i64,
    pub serie: String,
    pub correlativo: String,
    /// Full document number, e.g. `B001-000026`.
    pub numero_completo: String,
    pub tipo_documento: String,
    pub fecha_emision: String,
    /// Sale total; upstream sends either a string or a number.
    #[serde(with = "crate::models::amount")]
    pub mto_imp_venta: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueResponse {
    pub success: bool,
    pub data: IssueResponseData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
