use thiserror::Error;

/// Generic message for callers that do not surface store details to users.
pub const CLIENT_LOOKUP_FAILED: &str = "Failed to look up client in the internal database";

#[derive(Debug, Error)]
pub enum InvoicingError {
    /// The invoicing API answered boleta issuance with an HTTP error.
    #[error("Invoicing API error: {0}")]
    Api(String),

    /// The response did not match its schema, or no response arrived.
    #[error("Failed to process response or network error: {0}")]
    Processing(String),

    #[error("API error while generating PDF: {0}")]
    PdfGeneration(String),

    /// Binary responses carry no readable error body, only the status.
    #[error("API error while downloading PDF. Status: {status}")]
    PdfDownload { status: u16 },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Client record could not be mapped: {0}")]
    ClientMapping(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("{message}")]
    Unexpected {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl InvoicingError {
    pub fn unexpected(message: &'static str, source: impl Into<anyhow::Error>) -> Self {
        InvoicingError::Unexpected {
            message,
            source: source.into(),
        }
    }

    /// Metric label for this error.
    pub fn kind(&self) -> &'static str {
        match self {
            InvoicingError::Api(_) => "api",
            InvoicingError::Processing(_) => "processing",
            InvoicingError::PdfGeneration(_) => "pdf_generation",
            InvoicingError::PdfDownload { .. } => "pdf_download",
            InvoicingError::Database(_) => "database",
            InvoicingError::ClientMapping(_) => "client_mapping",
            InvoicingError::Validation(_) => "validation",
            InvoicingError::Unexpected { .. } => "unexpected",
        }
    }

    /// True for failures raised while looking up a client record.
    pub fn is_client_lookup_failure(&self) -> bool {
        matches!(
            self,
            InvoicingError::Database(_) | InvoicingError::ClientMapping(_)
        )
    }

    /// [`CLIENT_LOOKUP_FAILED`] for lookup failures, `None` otherwise.
    pub fn client_lookup_summary(&self) -> Option<&'static str> {
        self.is_client_lookup_failure().then_some(CLIENT_LOOKUP_FAILED)
    }
}
