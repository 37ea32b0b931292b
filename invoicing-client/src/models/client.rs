//! Buyer identity and address.

use super::validation::{email_or_empty, ubigeo_or_empty};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Document type code for DNI (national identity document).
pub const DOCUMENT_TYPE_DNI: &str = "1";

/// Buyer as sent inside a boleta.
///
/// Optional fields may be absent or an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Client {
    #[validate(length(min = 1, message = "Document type is required"))]
    pub tipo_documento: String,

    #[validate(length(min = 8, message = "Invalid document number"))]
    pub numero_documento: String,

    #[validate(length(min = 3, message = "Legal name is required"))]
    pub razon_social: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre_comercial: Option<String>,

    #[validate(length(min = 5, message = "Address is required"))]
    pub direccion: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "ubigeo_or_empty"))]
    pub ubigeo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distrito: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provincia: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departamento: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "email_or_empty"))]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client {
            tipo_documento: DOCUMENT_TYPE_DNI.to_string(),
            numero_documento: "45678912".to_string(),
            razon_social: "Juan Pérez Quispe".to_string(),
            nombre_comercial: None,
            direccion: "Av. Los Olivos 123".to_string(),
            ubigeo: Some(String::new()),
            distrito: None,
            provincia: None,
            departamento: None,
            telefono: None,
            email: Some(String::new()),
        }
    }

    #[test]
    fn test_valid_client_with_empty_optionals() {
        assert!(client().validate().is_ok());
    }

    #[test]
    fn test_short_document_number_is_rejected() {
        let mut invalid = client();
        invalid.numero_documento = "1234567".to_string();

        let errors = invalid.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("numero_documento"));
    }

    #[test]
    fn test_bad_email_and_ubigeo_are_rejected() {
        let mut invalid = client();
        invalid.email = Some("juan-at-example".to_string());
        invalid.ubigeo = Some("1501".to_string());

        let errors = invalid.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("ubigeo"));
    }

    #[test]
    fn test_absent_optionals_are_not_serialized() {
        let value = serde_json::to_value(Client {
            ubigeo: None,
            email: None,
            ..client()
        })
        .unwrap();

        assert!(value.get("nombre_comercial").is_none());
        assert!(value.get("email").is_none());
        assert_eq!(value["tipo_documento"], "1");
    }
}
