//! Postgres access to the internal member store.

use crate::error::InvoicingError;
use crate::models::SocioTitular;
use crate::services::client_lookup::SocioTitularStore;
use crate::services::metrics::DB_QUERY_DURATION;
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument};

/// Database connection pool wrapper.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool.
    #[instrument(skip(database_url), fields(service = "invoicing-client"))]
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, InvoicingError> {
        info!(
            max_connections = max_connections,
            min_connections = min_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .connect(database_url)
            .await
            .map_err(|e| InvoicingError::Database(format!("Failed to connect: {}", e)))?;

        info!("PostgreSQL connection pool established");

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check database health.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<(), InvoicingError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| InvoicingError::Database(format!("Health check failed: {}", e)))?;
        Ok(())
    }
}

/// Rows that do not fit [`SocioTitular`] are mapping errors; everything else
/// is a database error.
fn socio_query_error(e: sqlx::Error) -> InvoicingError {
    match e {
        sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_) => InvoicingError::ClientMapping(e.to_string()),
        other => InvoicingError::Database(format!("Failed to fetch socio titular: {}", other)),
    }
}

#[async_trait]
impl SocioTitularStore for Database {
    #[instrument(skip(self))]
    async fn find_by_dni(&self, dni: &str) -> Result<Option<SocioTitular>, InvoicingError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["find_socio_titular"])
            .start_timer();

        let socio = sqlx::query_as::<_, SocioTitular>(
            r#"
            SELECT dni, nombres, "apellidoPaterno", "apellidoMaterno",
                   "direccionDNI", "direccionVivienda", ubigeo,
                   "distritoDNI", "distritoVivienda", "provinciaDNI", "provinciaVivienda",
                   "regionDNI", "regionVivienda", celular
            FROM socio_titulares
            WHERE dni = $1
            LIMIT 1
            "#,
        )
        .bind(dni)
        .fetch_optional(&self.pool)
        .await
        .map_err(socio_query_error)?;

        timer.observe_duration();

        Ok(socio)
    }
}
