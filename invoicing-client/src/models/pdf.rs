use serde::{Deserialize, Serialize};
use std::fmt;

/// PDF layout requested from the invoicing API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PdfFormat {
    #[default]
    A4,
    #[serde(rename = "TICKET")]
    Ticket,
}

impl PdfFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PdfFormat::A4 => "A4",
            PdfFormat::Ticket => "TICKET",
        }
    }
}

impl fmt::Display for PdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /boletas/{id}/generate-pdf`.
#[derive(Debug, Serialize)]
pub struct GeneratePdfRequest {
    pub format: PdfFormat,
}

/// Saved filename for a downloaded boleta, e.g. `B001-1234_A4.pdf`.
pub fn pdf_filename(serie_correlativo: &str, format: PdfFormat) -> String {
    format!("{}_{}.pdf", serie_correlativo, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_a4() {
        assert_eq!(PdfFormat::default(), PdfFormat::A4);
    }

    #[test]
    fn test_generate_body() {
        let body = serde_json::to_value(GeneratePdfRequest {
            format: PdfFormat::Ticket,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "format": "TICKET" }));
    }

    #[test]
    fn test_pdf_filename() {
        assert_eq!(pdf_filename("B001-1234", PdfFormat::A4), "B001-1234_A4.pdf");
        assert_eq!(
            pdf_filename("B001-1234", PdfFormat::Ticket),
            "B001-1234_TICKET.pdf"
        );
    }
}
