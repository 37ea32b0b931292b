//! Boleta line item.

use super::validation::{igv_percentage, quantity_at_least_one, unit_value_at_least_one_cent};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Detalle {
    #[validate(length(min = 1, message = "Code is required"))]
    pub codigo: String,

    #[validate(length(min = 3, message = "Description is required"))]
    pub descripcion: String,

    /// Unit of measure code, e.g. `NIU` or `ZZ`.
    #[validate(length(min = 1, message = "Unit is required (e.g., NIU, ZZ)"))]
    pub unidad: String,

    #[serde(with = "crate::models::amount")]
    #[validate(custom(function = "quantity_at_least_one"))]
    pub cantidad: Decimal,

    #[serde(with = "crate::models::amount")]
    #[validate(custom(function = "unit_value_at_least_one_cent"))]
    pub mto_valor_unitario: Decimal,

    #[serde(with = "crate::models::amount")]
    #[validate(custom(function = "igv_percentage"))]
    pub porcentaje_igv: Decimal,

    /// IGV affectation type code.
    #[validate(length(min = 1, message = "IGV affectation type is required"))]
    pub tip_afe_igv: String,

    #[validate(length(min = 1, message = "SUNAT product code is required"))]
    pub codigo_producto_sunat: String,
}
