use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Configuration directory not found: {0}")]
    ConfigDirectory(String),

    #[error("Telemetry error: {0}")]
    TelemetryError(anyhow::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
