use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Request para guardar una factura. El servidor almacena los montos tal
// cual los calculó el cliente; los cargos ausentes quedan en 0.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBillRequest {
    pub driver_email: Option<String>,
    pub customer_name: Option<String>,
    pub phone: Option<String>,
    pub pickup_location: Option<String>,
    pub drop_location: Option<String>,
    pub pickup_date: Option<String>,
    pub pickup_time: Option<String>,
    pub trip_type: Option<String>,
    pub start_meter: Option<f64>,
    pub end_meter: Option<f64>,
    pub total_km: Option<f64>,
    pub final_km: Option<f64>,
    pub km_price: Option<f64>,
    pub total_km_price: Option<f64>,
    pub luggage_charge: Option<f64>,
    pub pet_charge: Option<f64>,
    pub toll_charge: Option<f64>,
    pub hills_charge: Option<f64>,
    pub betta_charge: Option<f64>,
    pub state_charge: Option<f64>,
    pub total_entered_charges: Option<f64>,
    pub final_bill: Option<f64>,
    pub trip_id: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBillResponse {
    pub message: String,
    pub bill_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<i64>,
}
