//! Entry point bundling every invoicing capability.

use crate::config::Settings;
use crate::error::InvoicingError;
use crate::models::{
    pdf_filename, BoletaPayload, Client, InvoicingCalendarItem, IssueResponse, PdfFormat,
};
use crate::services::client_lookup::{self, SocioTitularStore};
use crate::services::database::Database;
use crate::services::invoicing_api::{InvoicingApiClient, DOWNLOAD_FAILED};
use crate::services::pdf_sink::{LocalPdfSink, PdfSink};
use crate::services::recent_invoices::{RecentInvoicesSource, StaticInvoiceFeed};
use secrecy::ExposeSecret;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

/// Invoicing client.
///
/// Each call is independent; cloning shares the HTTP client, the pool and
/// the sinks.
#[derive(Clone)]
pub struct InvoicingClient {
    api: InvoicingApiClient,
    socios: Arc<dyn SocioTitularStore>,
    pdf_sink: Arc<dyn PdfSink>,
    feed: Arc<dyn RecentInvoicesSource>,
}

impl InvoicingClient {
    pub fn new(
        api: InvoicingApiClient,
        socios: Arc<dyn SocioTitularStore>,
        pdf_sink: Arc<dyn PdfSink>,
        feed: Arc<dyn RecentInvoicesSource>,
    ) -> Self {
        Self {
            api,
            socios,
            pdf_sink,
            feed,
        }
    }

    /// Build every part from configuration. Connects to Postgres and creates
    /// the download directory.
    pub async fn from_settings(settings: &Settings) -> Result<Self, InvoicingError> {
        let api = InvoicingApiClient::new(settings.invoicing_api.clone());

        let database = Database::new(
            settings.database.url.expose_secret(),
            settings.database.max_connections,
            settings.database.min_connections,
        )
        .await?;

        let pdf_sink = LocalPdfSink::new(&settings.downloads.directory)
            .await
            .map_err(|e| {
                InvoicingError::unexpected("Failed to prepare the download directory", e)
            })?;

        let feed =
            StaticInvoiceFeed::new(Duration::from_millis(settings.recent_invoices.delay_ms));

        Ok(Self::new(
            api,
            Arc::new(database),
            Arc::new(pdf_sink),
            Arc::new(feed),
        ))
    }

    /// Issue a boleta. See [`InvoicingApiClient::issue_boleta`].
    pub async fn issue_boleta(
        &self,
        payload: &BoletaPayload,
    ) -> Result<IssueResponse, InvoicingError> {
        self.api.issue_boleta(payload).await
    }

    /// Request PDF generation for an issued boleta.
    pub async fn generate_boleta_pdf(
        &self,
        boleta_id: i64,
        format: PdfFormat,
    ) -> Result<(), InvoicingError> {
        self.api.generate_boleta_pdf(boleta_id, format).await
    }

    /// Download a boleta PDF and save it as `{serie_correlativo}_{format}.pdf`.
    pub async fn download_boleta_pdf(
        &self,
        boleta_id: i64,
        serie_correlativo: &str,
        format: PdfFormat,
    ) -> Result<(), InvoicingError> {
        self.download_boleta_pdf_to(boleta_id, serie_correlativo, format)
            .await
            .map(|_| ())
    }

    /// Same as [`InvoicingClient::download_boleta_pdf`], returning the saved path.
    #[instrument(skip(self))]
    pub async fn download_boleta_pdf_to(
        &self,
        boleta_id: i64,
        serie_correlativo: &str,
        format: PdfFormat,
    ) -> Result<PathBuf, InvoicingError> {
        let data = self.api.fetch_boleta_pdf(boleta_id, format).await?;
        let filename = pdf_filename(serie_correlativo, format);

        let path = self.pdf_sink.save(&filename, data).await.map_err(|e| {
            tracing::error!(error = %e, filename = %filename, "Failed to save PDF");
            InvoicingError::unexpected(DOWNLOAD_FAILED, e)
        })?;

        tracing::info!(path = %path.display(), "PDF saved");

        Ok(path)
    }

    /// Look up a buyer in the member store by document number.
    pub async fn fetch_client_by_document(
        &self,
        document_number: &str,
    ) -> Result<Option<Client>, InvoicingError> {
        client_lookup::fetch_client_by_document(self.socios.as_ref(), document_number).await
    }

    /// Recent invoicing activity, newest first.
    #[instrument(skip(self))]
    pub async fn fetch_recent_invoices(
        &self,
    ) -> Result<Vec<InvoicingCalendarItem>, InvoicingError> {
        let items = self.feed.recent_invoices().await?;
        tracing::debug!(count = items.len(), "Recent invoices fetched");
        Ok(items)
    }
}
