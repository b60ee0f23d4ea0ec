//! Utilidades JWT
//!
//! Este módulo contiene funciones helper para emitir los tokens
//! de sesión de los conductores.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::utils::errors::AppError;

/// Vigencia absoluta del token: 7 días, sin rotación ni refresh
const TOKEN_EXPIRATION_DAYS: i64 = 7;

/// Claims del JWT token
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub id: i64,
    pub email: String,
    pub exp: usize,
    pub iat: usize,
}

/// Generar JWT token para un conductor
pub fn generate_token(driver_id: i64, email: &str, secret: &str) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::days(TOKEN_EXPIRATION_DAYS);

    let claims = JwtClaims {
        id: driver_id,
        email: email.to_string(),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = EncodingKey::from_secret(secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Internal(format!("Error creating token: {}", e)))
}

/// Verificar y decodificar JWT token
pub fn verify_token(token: &str, secret: &str) -> Result<JwtClaims, AppError> {
    let decoding_key = DecodingKey::from_secret(secret.as_ref());

    let token_data = decode::<JwtClaims>(token, &decoding_key, &Validation::default())
        .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret-key";

    #[test]
    fn test_token_round_trip() {
        let token = generate_token(42, "driver@example.com", TEST_SECRET).unwrap();
        let claims = verify_token(&token, TEST_SECRET).unwrap();

        assert_eq!(claims.id, 42);
        assert_eq!(claims.email, "driver@example.com");
    }

    #[test]
    fn test_token_carries_seven_day_expiry() {
        let token = generate_token(1, "a@x.com", TEST_SECRET).unwrap();
        let claims = verify_token(&token, TEST_SECRET).unwrap();

        let seven_days = 7 * 24 * 60 * 60;
        assert_eq!(claims.exp - claims.iat, seven_days);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = generate_token(1, "a@x.com", TEST_SECRET).unwrap();
        assert!(verify_token(&token, "other-secret").is_err());
    }
}
