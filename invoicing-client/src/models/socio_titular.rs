//! Member/titleholder record from the internal store.

use sqlx::FromRow;

/// Row of `socio_titulares`. Column names are camelCase in the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow)]
pub struct SocioTitular {
    pub dni: String,
    pub nombres: Option<String>,
    #[sqlx(rename = "apellidoPaterno")]
    pub apellido_paterno: Option<String>,
    #[sqlx(rename = "apellidoMaterno")]
    pub apellido_materno: Option<String>,
    #[sqlx(rename = "direccionDNI")]
    pub direccion_dni: Option<String>,
    #[sqlx(rename = "direccionVivienda")]
    pub direccion_vivienda: Option<String>,
    pub ubigeo: Option<String>,
    #[sqlx(rename = "distritoDNI")]
    pub distrito_dni: Option<String>,
    #[sqlx(rename = "distritoVivienda")]
    pub distrito_vivienda: Option<String>,
    #[sqlx(rename = "provinciaDNI")]
    pub provincia_dni: Option<String>,
    #[sqlx(rename = "provinciaVivienda")]
    pub provincia_vivienda: Option<String>,
    #[sqlx(rename = "regionDNI")]
    pub region_dni: Option<String>,
    #[sqlx(rename = "regionVivienda")]
    pub region_vivienda: Option<String>,
    pub celular: Option<String>,
}
