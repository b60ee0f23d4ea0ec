//! Modelo de Trip
//!
//! Este módulo contiene el struct Trip, las constantes de estado del ciclo
//! de vida y la lógica del conjunto accepted_drivers. La columna
//! accepted_drivers guarda un array JSON de emails serializado como texto;
//! el orden de inserción refleja el orden de llegada de los aceptes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estados del ciclo de vida: created → accept → WIP → completed
pub mod status {
    pub const CREATED: &str = "created";
    pub const ACCEPT: &str = "accept";
    pub const WIP: &str = "WIP";
    pub const COMPLETED: &str = "completed";
}

/// Trip principal - mapea exactamente a la tabla trips
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: i64,
    pub pickup_location: Option<String>,
    pub drop_location: Option<String>,
    pub trip_type: Option<String>,
    pub car: Option<String>,
    pub pickup_date: Option<String>,
    pub pickup_time: Option<String>,
    pub days: i32,
    pub km_price: f64,
    pub km: f64,
    pub betta: f64,
    pub phone: Option<String>,
    pub state: Option<String>,
    pub customer_name: Option<String>,
    pub customer_remark: Option<String>,
    pub adult: i32,
    pub child: i32,
    pub luggage: f64,
    pub customer_current_location: Option<String>,
    pub status: String,
    pub accepted_drivers: Option<String>,
    pub driver_email: Option<String>,
    pub assigned_at: Option<DateTime<Utc>>,
    pub start_meter: Option<f64>,
    pub end_meter: Option<f64>,
    pub pet: Option<f64>,
    pub toll: Option<f64>,
    pub hills: Option<f64>,
    pub total_km: Option<f64>,
    pub final_km: Option<f64>,
    pub final_bill: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl Trip {
    /// Conjunto de conductores que aceptaron este viaje, ya parseado
    pub fn accepted_driver_set(&self) -> Vec<String> {
        parse_accepted_drivers(self.accepted_drivers.as_deref())
    }

    /// Membresía exacta en accepted_drivers. Un email que sea substring de
    /// otro (ann@x.com dentro de joanne@x.com) no cuenta como match.
    pub fn has_accepted_driver(&self, email: &str) -> bool {
        self.accepted_driver_set().iter().any(|e| e == email)
    }
}

/// Deserializar la columna accepted_drivers. JSON inválido o ausente se
/// trata como conjunto vacío, no como error.
pub fn parse_accepted_drivers(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(list) => list,
        Err(e) => {
            tracing::warn!("Error parsing acceptedDrivers JSON, treating as empty: {}", e);
            Vec::new()
        }
    }
}

/// Agregar un email al conjunto si no está. Devuelve true cuando la lista
/// cambió; el orden de llegada se conserva.
pub fn push_accepted_driver(accepted: &mut Vec<String>, email: &str) -> bool {
    if accepted.iter().any(|e| e == email) {
        return false;
    }
    accepted.push(email.to_string());
    true
}

/// Serializar el conjunto de vuelta a la columna de texto
pub fn serialize_accepted_drivers(accepted: &[String]) -> String {
    // Vec<String> a JSON nunca falla
    serde_json::to_string(accepted).unwrap_or_else(|_| "[]".to_string())
}

/// Campos de trips parchables vía update-field, con su columna real.
/// Cualquier otro campo se rechaza con error de validación.
pub const PATCHABLE_FIELDS: &[(&str, &str)] = &[
    ("startMeter", "start_meter"),
    ("endMeter", "end_meter"),
    ("luggage", "luggage"),
    ("pet", "pet"),
    ("toll", "toll"),
    ("hills", "hills"),
];

/// Resolver un campo del allow-list a su columna; None si no está permitido
pub fn patchable_column(field: &str) -> Option<&'static str> {
    PATCHABLE_FIELDS
        .iter()
        .find(|(json_name, _)| *json_name == field)
        .map(|(_, column)| *column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_treats_invalid_json_as_empty() {
        assert!(parse_accepted_drivers(Some("not json")).is_empty());
        assert!(parse_accepted_drivers(Some("{\"a\":1}")).is_empty());
        assert!(parse_accepted_drivers(None).is_empty());
        assert!(parse_accepted_drivers(Some("")).is_empty());
    }

    #[test]
    fn test_push_is_idempotent() {
        let mut accepted = Vec::new();

        assert!(push_accepted_driver(&mut accepted, "a@x.com"));
        assert!(!push_accepted_driver(&mut accepted, "a@x.com"));

        assert_eq!(accepted, vec!["a@x.com"]);
    }

    #[test]
    fn test_push_preserves_arrival_order() {
        let mut accepted = Vec::new();

        push_accepted_driver(&mut accepted, "a@x.com");
        push_accepted_driver(&mut accepted, "b@x.com");
        push_accepted_driver(&mut accepted, "a@x.com");

        assert_eq!(accepted, vec!["a@x.com", "b@x.com"]);
    }

    #[test]
    fn test_round_trip_through_column_text() {
        let mut accepted = parse_accepted_drivers(Some("[\"a@x.com\"]"));
        push_accepted_driver(&mut accepted, "b@x.com");

        let raw = serialize_accepted_drivers(&accepted);
        assert_eq!(raw, "[\"a@x.com\",\"b@x.com\"]");
    }

    #[test]
    fn test_membership_is_exact_not_substring() {
        let raw = Some("[\"joanne@x.com\"]");
        let accepted = parse_accepted_drivers(raw);

        assert!(accepted.iter().any(|e| e == "joanne@x.com"));
        assert!(!accepted.iter().any(|e| e == "ann@x.com"));
    }

    #[test]
    fn test_patchable_column_allow_list() {
        assert_eq!(patchable_column("startMeter"), Some("start_meter"));
        assert_eq!(patchable_column("hills"), Some("hills"));

        assert_eq!(patchable_column("status"), None);
        assert_eq!(patchable_column("finalBill"), None);
        assert_eq!(patchable_column("driverEmail"), None);
    }
}
