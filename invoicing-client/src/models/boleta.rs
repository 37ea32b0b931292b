//! Boleta issuance request and the form shape it is built from.

use super::validation::iso_date_shape;
use super::{Client, Detalle};
use crate::error::InvoicingError;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Currency of the boleta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Moneda {
    #[serde(rename = "PEN")]
    Pen,
    #[serde(rename = "USD")]
    Usd,
}

/// Payment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormaPagoTipo {
    Contado,
    Credito,
}

/// Body of `POST /boletas`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct BoletaPayload {
    pub company_id: i64,
    pub branch_id: i64,

    #[validate(length(min = 1, message = "Series is required"))]
    pub serie: String,

    #[validate(custom(function = "iso_date_shape"))]
    pub fecha_emision: String,

    pub moneda: Moneda,
    pub tipo_operacion: String,
    pub metodo_envio: String,
    pub forma_pago_tipo: FormaPagoTipo,

    #[validate(nested)]
    pub client: Client,

    #[validate(length(min = 1, message = "At least one line item is required"), nested)]
    pub detalles: Vec<Detalle>,

    #[validate(length(min = 1, message = "Creating user is required"))]
    pub usuario_creacion: String,
}

impl BoletaPayload {
    /// Return the payload if it satisfies every field rule.
    ///
    /// Issuing does not call this; callers validate before sending.
    pub fn validated(self) -> Result<Self, InvoicingError> {
        self.validate()?;
        Ok(self)
    }
}

/// Form state upstream of a payload: company and branch are supplied later
/// by the calling context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoletaFormValues {
    pub serie: String,
    pub fecha_emision: String,
    pub moneda: Moneda,
    pub tipo_operacion: String,
    pub metodo_envio: String,
    pub forma_pago_tipo: FormaPagoTipo,
    pub client: Client,
    pub detalles: Vec<Detalle>,
    pub usuario_creacion: String,
}

impl BoletaFormValues {
    pub fn into_payload(self, company_id: i64, branch_id: i64) -> BoletaPayload {
        BoletaPayload {
            company_id,
            branch_id,
            serie: self.serie,
            fecha_emision: self.fecha_emision,
            moneda: self.moneda,
            tipo_operacion: self.tipo_operacion,
            metodo_envio: self.metodo_envio,
            forma_pago_tipo: self.forma_pago_tipo,
            client: self.client,
            detalles: self.detalles,
            usuario_creacion: self.usuario_creacion,
        }
    }
}
