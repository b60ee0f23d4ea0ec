use serde::{Deserialize, Serialize};

use crate::models::driver::Driver;

// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

// Login response: token firmado más el registro del conductor
// (el hash no se serializa)
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: Driver,
}
