//! Client lookup against the internal member store.

use crate::error::InvoicingError;
use crate::models::{Client, SocioTitular, DOCUMENT_TYPE_DNI};
use async_trait::async_trait;
use tracing::instrument;
use validator::Validate;

/// Shortest document number worth a store lookup.
pub const MIN_DOCUMENT_LENGTH: usize = 8;

/// Read access to `socio_titulares`.
#[async_trait]
pub trait SocioTitularStore: Send + Sync {
    /// The first record whose `dni` equals `dni`, if any.
    async fn find_by_dni(&self, dni: &str) -> Result<Option<SocioTitular>, InvoicingError>;
}

/// Client address fields that fall back from the DNI-registered value to the
/// residential one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    Direccion,
    Distrito,
    Provincia,
    Departamento,
}

impl AddressField {
    /// Candidate values in priority order.
    pub fn sources(self, socio: &SocioTitular) -> [Option<&str>; 2] {
        let (dni, vivienda) = match self {
            AddressField::Direccion => (&socio.direccion_dni, &socio.direccion_vivienda),
            AddressField::Distrito => (&socio.distrito_dni, &socio.distrito_vivienda),
            AddressField::Provincia => (&socio.provincia_dni, &socio.provincia_vivienda),
            AddressField::Departamento => (&socio.region_dni, &socio.region_vivienda),
        };
        [dni.as_deref(), vivienda.as_deref()]
    }

    pub fn resolve(self, socio: &SocioTitular) -> String {
        first_present(self.sources(socio))
    }
}

/// First non-empty value, or an empty string.
pub fn first_present<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> String {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .unwrap_or_default()
        .to_string()
}

fn join_names<'a>(parts: impl IntoIterator<Item = &'a Option<String>>) -> String {
    parts
        .into_iter()
        .filter_map(|part| part.as_deref())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Map a member record to a pre-filled buyer.
///
/// The result is not validated: fields the record lacks come back empty for
/// the caller to complete before issuing.
pub fn client_from_socio(socio: &SocioTitular) -> Client {
    Client {
        tipo_documento: DOCUMENT_TYPE_DNI.to_string(),
        numero_documento: socio.dni.clone(),
        razon_social: join_names([
            &socio.nombres,
            &socio.apellido_paterno,
            &socio.apellido_materno,
        ]),
        nombre_comercial: Some(join_names([&socio.nombres, &socio.apellido_paterno])),
        direccion: AddressField::Direccion.resolve(socio),
        ubigeo: Some(socio.ubigeo.clone().unwrap_or_default()),
        distrito: Some(AddressField::Distrito.resolve(socio)),
        provincia: Some(AddressField::Provincia.resolve(socio)),
        departamento: Some(AddressField::Departamento.resolve(socio)),
        telefono: Some(socio.celular.clone().unwrap_or_default()),
        email: Some(String::new()),
    }
}

/// Look up a buyer by document number.
///
/// Numbers shorter than [`MIN_DOCUMENT_LENGTH`] characters return `None`
/// without querying the store.
#[instrument(skip(store, document_number), fields(len = document_number.chars().count()))]
pub async fn fetch_client_by_document(
    store: &dyn SocioTitularStore,
    document_number: &str,
) -> Result<Option<Client>, InvoicingError> {
    if document_number.chars().count() < MIN_DOCUMENT_LENGTH {
        tracing::debug!("Document number too short, skipping lookup");
        return Ok(None);
    }

    let Some(socio) = store.find_by_dni(document_number).await? else {
        tracing::info!("No socio titular found for document");
        return Ok(None);
    };

    let client = client_from_socio(&socio);
    if client.validate().is_err() {
        tracing::info!("Socio titular is missing buyer fields");
    }

    Ok(Some(client))
}
