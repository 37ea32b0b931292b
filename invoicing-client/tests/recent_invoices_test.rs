mod common;

use common::{spawn_client, InMemorySocioStore};
use invoicing_client::models::{CalendarStatus, DocumentKind};
use std::sync::Arc;
use std::time::{Duration, Instant};
use wiremock::MockServer;

#[tokio::test]
async fn recent_invoices_returns_six_items_in_order() {
    let server = MockServer::start().await;
    let downloads = tempfile::tempdir().expect("Failed to create temp dir");
    let client = spawn_client(
        &server,
        downloads.path(),
        Arc::new(InMemorySocioStore::default()),
    )
    .await;

    let started = Instant::now();
    let items = client
        .fetch_recent_invoices()
        .await
        .expect("Failed to fetch recent invoices");

    // spawn_client configures a 20ms feed delay.
    assert!(started.elapsed() >= Duration::from_millis(20));

    let series: Vec<&str> = items.iter().map(|item| item.serie.as_str()).collect();
    assert_eq!(
        series,
        vec!["B001-1234", "F001-5678", "NC01-0012", "B001-1235", "F001-5679", "B001-1236"]
    );

    assert_eq!(items[0].kind, DocumentKind::Boleta);
    assert_eq!(items[1].client_name, "Tech Solutions SAC");
    assert_eq!(items[2].kind, DocumentKind::NotaCredito);
    assert!(items[2].amount.is_sign_negative());
    assert_eq!(items[4].status, CalendarStatus::Rechazado);
    assert_eq!(items[5].date, "2025-07-25");
}

#[tokio::test]
async fn recent_invoices_serialize_with_calendar_field_names() {
    let server = MockServer::start().await;
    let downloads = tempfile::tempdir().expect("Failed to create temp dir");
    let client = spawn_client(
        &server,
        downloads.path(),
        Arc::new(InMemorySocioStore::default()),
    )
    .await;

    let items = client
        .fetch_recent_invoices()
        .await
        .expect("Failed to fetch recent invoices");
    let value = serde_json::to_value(&items).expect("Failed to serialize");

    assert_eq!(value[2]["type"], "Nota Crédito");
    assert_eq!(value[2]["clientName"], "María Sánchez");
    assert_eq!(value[2]["amount"], -50.0);
    assert_eq!(value[3]["status"], "Pendiente");
}
