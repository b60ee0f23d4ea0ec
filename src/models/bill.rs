//! Modelo de Bill
//!
//! Una fila de bills es una foto denormalizada de los cargos de un viaje
//! completado. Inmutable después del insert.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Bill principal - mapea exactamente a la tabla bills
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: i64,
    pub driver_email: String,
    pub customer_name: String,
    pub phone: Option<String>,
    pub pickup_location: Option<String>,
    pub drop_location: Option<String>,
    pub pickup_date: Option<String>,
    pub pickup_time: Option<String>,
    pub trip_type: Option<String>,
    pub start_meter: f64,
    pub end_meter: f64,
    pub total_km: f64,
    pub final_km: f64,
    pub km_price: f64,
    pub total_km_price: f64,
    pub luggage_charge: f64,
    pub pet_charge: f64,
    pub toll_charge: f64,
    pub hills_charge: f64,
    pub betta_charge: f64,
    pub state_charge: f64,
    pub total_entered_charges: f64,
    pub final_bill: f64,
    pub created_at: DateTime<Utc>,
}
