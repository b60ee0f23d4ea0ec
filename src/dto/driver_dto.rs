use serde::{Deserialize, Serialize};

// Request para registrar un conductor. Los campos requeridos van como
// Option para que la ausencia se responda como 400 del controller y no
// como rechazo del deserializador.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDriverRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub password: Option<String>,
    pub rc_number: Option<String>,
    pub fc_date: Option<String>,
    pub insurance_number: Option<String>,
    pub insurance_expiry_date: Option<String>,
    pub driving_license: Option<String>,
    pub driving_license_expiry_date: Option<String>,
    pub aadhar_number: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDriverResponse {
    pub message: String,
    pub driver_id: i64,
}

// Pre-chequeo de unicidad: cuatro campos, cuatro booleanos independientes
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckExistsRequest {
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub rc_number: Option<String>,
    pub insurance_number: Option<String>,
}

#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CheckExistsResponse {
    pub email: bool,
    pub phone_number: bool,
    pub rc_number: bool,
    pub insurance_number: bool,
}

#[derive(Debug, Serialize)]
pub struct DriverStatusResponse {
    pub status: Option<String>,
}
