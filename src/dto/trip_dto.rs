use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::trip::Trip;

// Request para crear un viaje. Todos los extras numéricos tienen default 0.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripRequest {
    pub pickup_location: Option<String>,
    pub drop_location: Option<String>,
    pub trip_type: Option<String>,
    pub car: Option<String>,
    pub pickup_date: Option<String>,
    pub pickup_time: Option<String>,
    pub days: Option<i32>,
    pub km_price: Option<f64>,
    pub km: Option<f64>,
    pub betta: Option<f64>,
    pub phone: Option<String>,
    pub state: Option<String>,
    pub customer_name: Option<String>,
    pub customer_remark: Option<String>,
    pub adult: Option<i32>,
    pub child: Option<i32>,
    pub luggage: Option<f64>,
    pub customer_current_location: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripResponse {
    pub message: String,
    pub trip_id: i64,
}

// Accept-intent: un conductor manifiesta interés sin compromiso exclusivo
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptTripRequest {
    pub driver_email: Option<String>,
}

// Asignación administrativa: liga exactamente un conductor al viaje
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignDriverRequest {
    pub trip_id: Option<i64>,
    pub driver_email: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteTripRequest {
    pub start_meter: Option<f64>,
    pub end_meter: Option<f64>,
    pub luggage: Option<f64>,
    pub pet: Option<f64>,
    pub toll: Option<f64>,
    pub hills: Option<f64>,
    pub total_km: Option<f64>,
    pub final_km: Option<f64>,
    pub final_bill: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteTripResponse {
    pub message: String,
    pub trip_id: i64,
    pub final_bill: f64,
}

// Parche de un solo campo, restringido al allow-list del modelo
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFieldRequest {
    pub trip_id: Option<i64>,
    pub field: Option<String>,
    pub value: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripStatusResponse {
    pub accepted_trips: Vec<Trip>,
    pub wip_trips: Vec<Trip>,
}
