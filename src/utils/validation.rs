//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos.

use validator::ValidationError;

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un campo opcional esté presente y no vacío
pub fn validate_required(value: Option<&String>) -> Result<(), ValidationError> {
    match value {
        Some(v) => validate_not_empty(v),
        None => Err(ValidationError::new("required")),
    }
}

/// Validar formato de email
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !value.contains('@') || !value.contains('.') {
        let mut error = ValidationError::new("email");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("test").is_ok());
        assert!(validate_not_empty("").is_err());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_required() {
        let value = "present".to_string();
        assert!(validate_required(Some(&value)).is_ok());
        assert!(validate_required(None).is_err());

        let blank = "  ".to_string();
        assert!(validate_required(Some(&blank)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("invalid-email").is_err());
        assert!(validate_email("test@").is_err());
    }
}
