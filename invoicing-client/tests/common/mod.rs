//! Common test utilities for invoicing-client integration tests.
//!
//! The invoicing API is mocked with wiremock, the member store with the
//! in-memory stores below and downloads land in a temporary directory.

#![allow(dead_code)]

use async_trait::async_trait;
use invoicing_client::config::InvoicingApiSettings;
use invoicing_client::models::{
    BoletaPayload, Client, Detalle, FormaPagoTipo, Moneda, SocioTitular, DOCUMENT_TYPE_DNI,
};
use invoicing_client::services::{
    InvoicingApiClient, LocalPdfSink, SocioTitularStore, StaticInvoiceFeed,
};
use invoicing_client::{InvoicingClient, InvoicingError};
use rust_decimal::Decimal;
use secrecy::Secret;
use std::path::Path;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use std::time::Duration;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-token";
pub const BEARER_HEADER: &str = "Bearer test-token";
pub const API_PREFIX: &str = "/api/v1";

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,invoicing_client=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub fn api_settings(base_url: &str) -> InvoicingApiSettings {
    InvoicingApiSettings {
        base_url: base_url.to_string(),
        auth_token: Secret::new(TEST_TOKEN.to_string()),
    }
}

/// API client pointed at the mock server, with a trailing slash to exercise
/// URL joining.
pub fn api_client(server: &MockServer) -> InvoicingApiClient {
    InvoicingApiClient::new(api_settings(&format!("{}{}/", server.uri(), API_PREFIX)))
}

/// Facade wired to the mock server, an in-memory store and a local sink.
pub async fn spawn_client(
    server: &MockServer,
    downloads: &Path,
    store: Arc<dyn SocioTitularStore>,
) -> InvoicingClient {
    init_tracing();

    let sink = LocalPdfSink::new(downloads)
        .await
        .expect("Failed to create download directory");

    InvoicingClient::new(
        api_client(server),
        store,
        Arc::new(sink),
        Arc::new(StaticInvoiceFeed::new(Duration::from_millis(20))),
    )
}

pub fn sample_client() -> Client {
    Client {
        tipo_documento: DOCUMENT_TYPE_DNI.to_string(),
        numero_documento: "45678912".to_string(),
        razon_social: "Juan Pérez Quispe".to_string(),
        nombre_comercial: Some("Juan Pérez".to_string()),
        direccion: "Av. Los Olivos 123".to_string(),
        ubigeo: Some("150101".to_string()),
        distrito: Some("Lima".to_string()),
        provincia: Some("Lima".to_string()),
        departamento: Some("Lima".to_string()),
        telefono: Some("987654321".to_string()),
        email: Some(String::new()),
    }
}

pub fn sample_payload() -> BoletaPayload {
    BoletaPayload {
        company_id: 1,
        branch_id: 1,
        serie: "B001".to_string(),
        fecha_emision: "2025-07-28".to_string(),
        moneda: Moneda::Pen,
        tipo_operacion: "0101".to_string(),
        metodo_envio: "individual".to_string(),
        forma_pago_tipo: FormaPagoTipo::Contado,
        client: sample_client(),
        detalles: vec![Detalle {
            codigo: "P001".to_string(),
            descripcion: "Cuota mensual".to_string(),
            unidad: "ZZ".to_string(),
            cantidad: Decimal::from(1),
            mto_valor_unitario: Decimal::from_str("127.12").expect("valid decimal"),
            porcentaje_igv: Decimal::from(18),
            tip_afe_igv: "10".to_string(),
            codigo_producto_sunat: "80131500".to_string(),
        }],
        usuario_creacion: "cajero01".to_string(),
    }
}

/// Issuance response body with the given `mto_imp_venta`.
pub fn issue_response_body(mto_imp_venta: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "data": {
            "id": 26,
            "serie": "B001",
            "correlativo": "000026",
            "numero_completo": "B001-000026",
            "tipo_documento": "03",
            "fecha_emision": "2025-07-28",
            "mto_imp_venta": mto_imp_venta
        },
        "message": "Boleta creada"
    })
}

pub fn sample_socio() -> SocioTitular {
    SocioTitular {
        dni: "45678912".to_string(),
        nombres: Some("Juan".to_string()),
        apellido_paterno: Some("Pérez".to_string()),
        apellido_materno: Some("Quispe".to_string()),
        direccion_dni: Some("Av. Los Olivos 123".to_string()),
        direccion_vivienda: Some("Jr. Las Flores 456".to_string()),
        ubigeo: Some("150101".to_string()),
        distrito_dni: Some("Lima".to_string()),
        distrito_vivienda: Some("Miraflores".to_string()),
        provincia_dni: Some("Lima".to_string()),
        provincia_vivienda: Some("Lima".to_string()),
        region_dni: Some("Lima".to_string()),
        region_vivienda: Some("Lima".to_string()),
        celular: Some("987654321".to_string()),
    }
}

/// Store backed by a fixed list of records, counting lookups.
#[derive(Default)]
pub struct InMemorySocioStore {
    socios: Vec<SocioTitular>,
    calls: AtomicUsize,
}

impl InMemorySocioStore {
    pub fn with(socios: Vec<SocioTitular>) -> Self {
        Self {
            socios,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SocioTitularStore for InMemorySocioStore {
    async fn find_by_dni(&self, dni: &str) -> Result<Option<SocioTitular>, InvoicingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.socios.iter().find(|socio| socio.dni == dni).cloned())
    }
}

/// Store whose every lookup fails like a dropped connection.
pub struct FailingSocioStore;

#[async_trait]
impl SocioTitularStore for FailingSocioStore {
    async fn find_by_dni(&self, _dni: &str) -> Result<Option<SocioTitular>, InvoicingError> {
        Err(InvoicingError::Database(
            "Failed to fetch socio titular: connection reset by peer".to_string(),
        ))
    }
}
