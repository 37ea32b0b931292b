use secrecy::Secret;
use serde::Deserialize;
use service_core::error::CoreError;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub invoicing_api: InvoicingApiSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub recent_invoices: RecentInvoicesSettings,
    #[serde(default)]
    pub downloads: DownloadSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InvoicingApiSettings {
    /// Base URL of the invoicing API, e.g. `https://facturacion.example.com/api/v1`.
    pub base_url: String,
    /// Bearer token sent on every request.
    pub auth_token: Secret<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    /// Postgres URL of the store holding `socio_titulares`.
    pub url: Secret<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

fn default_min_connections() -> u32 {
    0
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecentInvoicesSettings {
    /// Simulated latency of the placeholder feed.
    #[serde(default = "default_feed_delay_ms")]
    pub delay_ms: u64,
}

impl Default for RecentInvoicesSettings {
    fn default() -> Self {
        Self {
            delay_ms: default_feed_delay_ms(),
        }
    }
}

fn default_feed_delay_ms() -> u64 {
    500
}

#[derive(Debug, Deserialize, Clone)]
pub struct DownloadSettings {
    /// Directory where downloaded PDFs are saved.
    #[serde(default = "default_download_directory")]
    pub directory: PathBuf,
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            directory: default_download_directory(),
        }
    }
}

fn default_download_directory() -> PathBuf {
    PathBuf::from("downloads")
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetrySettings {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// OTLP collector endpoint; spans are not exported when unset.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

fn default_service_name() -> String {
    "invoicing-client".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Load `invoicing-client/config/base.yaml` overlaid with `APP_` variables,
/// e.g. `APP_INVOICING_API__AUTH_TOKEN`.
pub fn get_configuration() -> Result<Settings, CoreError> {
    service_core::config::load_layered("invoicing-client")
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_defaults_fill_optional_sections() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("base.yaml"),
            r#"
invoicing_api:
  base_url: "http://localhost:8000/api/v1"
  auth_token: "token-123"
database:
  url: "postgres://localhost/socios"
"#,
        )
        .unwrap();

        let settings: Settings = service_core::config::load_from_directory(dir.path()).unwrap();

        assert_eq!(settings.invoicing_api.base_url, "http://localhost:8000/api/v1");
        assert_eq!(settings.invoicing_api.auth_token.expose_secret(), "token-123");
        assert_eq!(settings.database.max_connections, 5);
        assert_eq!(settings.recent_invoices.delay_ms, 500);
        assert_eq!(settings.downloads.directory, PathBuf::from("downloads"));
        assert_eq!(settings.telemetry.service_name, "invoicing-client");
        assert!(settings.telemetry.otlp_endpoint.is_none());
    }

    #[test]
    fn test_bundled_base_yaml_parses() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("config");
        let settings: Settings = service_core::config::load_from_directory(&dir).unwrap();

        assert!(!settings.invoicing_api.base_url.is_empty());
    }
}
