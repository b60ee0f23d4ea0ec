//! DTOs de la API
//!
//! Requests y responses por recurso. Los nombres JSON siguen el contrato
//! camelCase que consumen las apps de conductor y administración.

pub mod auth_dto;
pub mod bill_dto;
pub mod driver_dto;
pub mod trip_dto;

use serde::Serialize;

// Respuesta genérica de mensaje
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
