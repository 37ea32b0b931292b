//! HTTP client for the remote invoicing API.
//!
//! Covers boleta issuance and PDF generation/download. Every request carries
//! the configured bearer token, an `x-request-id` and the current trace
//! context. Nothing is retried; transport defaults (no timeout) apply.

use crate::config::InvoicingApiSettings;
use crate::error::InvoicingError;
use crate::models::{BoletaPayload, GeneratePdfRequest, IssueResponse, PdfFormat};
use crate::services::metrics::{record_api_outcome, API_REQUEST_DURATION};
use reqwest::Client;
use secrecy::ExposeSecret;
use service_core::observability::{new_request_id, TracedClientExt};
use tracing::instrument;

const GENERATE_FAILED: &str = "Unknown error while requesting PDF generation";
pub(crate) const DOWNLOAD_FAILED: &str = "Unknown error while downloading the PDF";

/// Invoicing API client.
#[derive(Clone)]
pub struct InvoicingApiClient {
    client: Client,
    settings: InvoicingApiSettings,
}

impl InvoicingApiClient {
    pub fn new(settings: InvoicingApiSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    pub fn base_url(&self) -> &str {
        self.settings.base_url.trim_end_matches('/')
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Issue a boleta and return the validated issuance record.
    ///
    /// The payload is sent as given: validating it (see
    /// [`BoletaPayload::validated`]) is the caller's responsibility. The
    /// response, however, must match [`IssueResponse`] or the call fails.
    #[instrument(
        skip(self, payload),
        fields(serie = %payload.serie, detalles = payload.detalles.len())
    )]
    pub async fn issue_boleta(
        &self,
        payload: &BoletaPayload,
    ) -> Result<IssueResponse, InvoicingError> {
        let timer = API_REQUEST_DURATION
            .with_label_values(&["issue_boleta"])
            .start_timer();

        let result = self.send_issue(payload).await;

        timer.observe_duration();
        record_api_outcome("issue_boleta", result.as_ref().map(|_| ()));

        result
    }

    async fn send_issue(
        &self,
        payload: &BoletaPayload,
    ) -> Result<IssueResponse, InvoicingError> {
        let url = self.url("/boletas");
        let request_id = new_request_id();

        let response = self
            .client
            .traced_post(&url)
            .bearer_auth(self.settings.auth_token.expose_secret())
            .json(payload)
            .send_with_request_id(&request_id)
            .await
            .map_err(|e| {
                tracing::error!(
                    request_id = %request_id,
                    error = %e,
                    "Failed to send boleta to {}",
                    url
                );
                InvoicingError::Processing(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| InvoicingError::Processing(e.to_string()))?;

        tracing::debug!(
            request_id = %request_id,
            status = %status,
            "Invoicing API issue_boleta response"
        );

        if !status.is_success() {
            tracing::error!(
                request_id = %request_id,
                status = %status,
                body = %body,
                "Boleta issuance failed"
            );
            return Err(InvoicingError::Api(api_error_message(&body)));
        }

        let issued: IssueResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                request_id = %request_id,
                error = %e,
                "Issuance response did not match schema"
            );
            InvoicingError::Processing(e.to_string())
        })?;

        if !issued.success {
            tracing::warn!(
                request_id = %request_id,
                message = ?issued.message,
                "Invoicing API reported success=false"
            );
        }

        tracing::info!(
            request_id = %request_id,
            boleta_id = issued.data.id,
            numero_completo = %issued.data.numero_completo,
            "Boleta issued"
        );

        Ok(issued)
    }

    /// Ask the API to start generating the PDF of a boleta.
    ///
    /// Success means the request was accepted (typically 200/202); the PDF
    /// itself is fetched with [`InvoicingApiClient::fetch_boleta_pdf`].
    #[instrument(skip(self))]
    pub async fn generate_boleta_pdf(
        &self,
        boleta_id: i64,
        format: PdfFormat,
    ) -> Result<(), InvoicingError> {
        let timer = API_REQUEST_DURATION
            .with_label_values(&["generate_boleta_pdf"])
            .start_timer();

        let result = self.send_generate(boleta_id, format).await;

        timer.observe_duration();
        record_api_outcome("generate_boleta_pdf", result.as_ref().copied());

        result
    }

    async fn send_generate(&self, boleta_id: i64, format: PdfFormat) -> Result<(), InvoicingError> {
        let url = self.url(&format!("/boletas/{}/generate-pdf", boleta_id));
        let request_id = new_request_id();

        let response = self
            .client
            .traced_post(&url)
            .bearer_auth(self.settings.auth_token.expose_secret())
            .json(&GeneratePdfRequest { format })
            .send_with_request_id(&request_id)
            .await
            .map_err(|e| {
                tracing::error!(
                    request_id = %request_id,
                    error = %e,
                    "Failed to send POST request to {}",
                    url
                );
                InvoicingError::unexpected(GENERATE_FAILED, e)
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(request_id = %request_id, status = %status, "PDF generation accepted");
            return Ok(());
        }

        let body = response
            .text()
            .await
            .map_err(|e| InvoicingError::unexpected(GENERATE_FAILED, e))?;

        tracing::error!(
            request_id = %request_id,
            status = %status,
            body = %body,
            "PDF generation request failed"
        );

        Err(InvoicingError::PdfGeneration(api_error_message(&body)))
    }

    /// Download the rendered PDF of a boleta as raw bytes.
    ///
    /// Error responses are not parsed: only their status is reported.
    #[instrument(skip(self))]
    pub async fn fetch_boleta_pdf(
        &self,
        boleta_id: i64,
        format: PdfFormat,
    ) -> Result<Vec<u8>, InvoicingError> {
        let timer = API_REQUEST_DURATION
            .with_label_values(&["download_boleta_pdf"])
            .start_timer();

        let result = self.send_download(boleta_id, format).await;

        timer.observe_duration();
        record_api_outcome("download_boleta_pdf", result.as_ref().map(|_| ()));

        result
    }

    async fn send_download(
        &self,
        boleta_id: i64,
        format: PdfFormat,
    ) -> Result<Vec<u8>, InvoicingError> {
        let url = self.url(&format!("/boletas/{}/download-pdf", boleta_id));
        let request_id = new_request_id();

        let response = self
            .client
            .traced_get(&url)
            .bearer_auth(self.settings.auth_token.expose_secret())
            .query(&[("format", format.as_str())])
            .send_with_request_id(&request_id)
            .await
            .map_err(|e| {
                tracing::error!(
                    request_id = %request_id,
                    error = %e,
                    "Failed to send GET request to {}",
                    url
                );
                InvoicingError::unexpected(DOWNLOAD_FAILED, e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(request_id = %request_id, status = %status, "PDF download failed");
            return Err(InvoicingError::PdfDownload {
                status: status.as_u16(),
            });
        }

        let data = response.bytes().await.map_err(|e| {
            tracing::error!(request_id = %request_id, error = %e, "Failed to read PDF bytes");
            InvoicingError::unexpected(DOWNLOAD_FAILED, e)
        })?;

        tracing::info!(request_id = %request_id, size = data.len(), "PDF downloaded");

        Ok(data.to_vec())
    }
}

/// Message to surface for an API error body.
///
/// Prefers a top-level string `message`, then the JSON body re-serialized,
/// then the raw text for bodies that are not JSON.
pub fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .filter(|message| !message.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        Err(_) => body.to_string(),
    }
}
