//! Modelo de Driver
//!
//! Este módulo contiene el struct Driver que mapea exactamente a la tabla
//! drivers. Los nombres JSON siguen el contrato camelCase de la API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Driver principal - mapea exactamente a la tabla drivers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub rc_number: Option<String>,
    pub fc_date: Option<String>,
    pub insurance_number: Option<String>,
    pub insurance_expiry_date: Option<String>,
    pub driving_license: Option<String>,
    pub driving_license_expiry_date: Option<String>,
    pub aadhar_number: Option<String>,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Datos de un conductor nuevo, con el password ya hasheado
#[derive(Debug, Clone)]
pub struct NewDriver {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub rc_number: Option<String>,
    pub fc_date: Option<String>,
    pub insurance_number: Option<String>,
    pub insurance_expiry_date: Option<String>,
    pub driving_license: Option<String>,
    pub driving_license_expiry_date: Option<String>,
    pub aadhar_number: Option<String>,
}

/// Proyección liviana para el listado de conductores
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DriverSummary {
    pub email: String,
    pub name: String,
}

/// Columnas de drivers escribibles vía update parcial.
///
/// El update parcial escribe cualquier columna que el cliente mande (la
/// debilidad documentada del diseño original se conserva), pero el nombre de
/// columna sale siempre de esta tabla fija, nunca del JSON del cliente.
pub const UPDATABLE_COLUMNS: &[(&str, &str)] = &[
    ("name", "name"),
    ("email", "email"),
    ("phoneNumber", "phone_number"),
    ("password", "password"),
    ("rcNumber", "rc_number"),
    ("fcDate", "fc_date"),
    ("insuranceNumber", "insurance_number"),
    ("insuranceExpiryDate", "insurance_expiry_date"),
    ("drivingLicense", "driving_license"),
    ("drivingLicenseExpiryDate", "driving_license_expiry_date"),
    ("aadharNumber", "aadhar_number"),
    ("status", "status"),
];

/// Resolver un campo JSON del update parcial a su columna real
pub fn updatable_column(field: &str) -> Option<&'static str> {
    UPDATABLE_COLUMNS
        .iter()
        .find(|(json_name, _)| *json_name == field)
        .map(|(_, column)| *column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_updatable_column_resolves_known_fields() {
        assert_eq!(updatable_column("phoneNumber"), Some("phone_number"));
        assert_eq!(updatable_column("status"), Some("status"));
    }

    #[test]
    fn test_updatable_column_rejects_unknown_fields() {
        assert_eq!(updatable_column("id"), None);
        assert_eq!(updatable_column("created_at"), None);
        assert_eq!(updatable_column("phone_number; DROP TABLE drivers"), None);
    }
}
