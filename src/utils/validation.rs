//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos. Cada restricción es un check explícito que
//! devuelve un resultado tipado; no hay validación por anotaciones.

use chrono::NaiveDate;
use serde::Serialize;
use validator::ValidationError;

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar que un string no esté vacío (ignorando espacios)
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar longitud máxima (en caracteres, no bytes)
pub fn validate_max_length(value: &str, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > max {
        let mut error = ValidationError::new("max_length");
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &len);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea estrictamente positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor alcance un mínimo
pub fn validate_min<T: PartialOrd + std::fmt::Display + Serialize>(
    value: T,
    min: T,
) -> Result<(), ValidationError> {
    if value < min {
        let mut error = ValidationError::new("min");
        error.add_param("min".into(), &min);
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date() {
        let valid_date = "2024-01-15";
        assert!(validate_date(valid_date).is_ok());

        let invalid_date = "2024/01/15";
        assert!(validate_date(invalid_date).is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("Paris").is_ok());
        assert!(validate_not_empty("").is_err());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_max_length() {
        assert!(validate_max_length("test", 10).is_ok());
        assert!(validate_max_length("test", 4).is_ok());
        assert!(validate_max_length("test", 3).is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(5.0).is_ok());
        assert!(validate_positive(0.0).is_err());
        assert!(validate_positive(-5.0).is_err());
    }

    #[test]
    fn test_validate_min() {
        assert!(validate_min(2, 1).is_ok());
        assert!(validate_min(1, 1).is_ok());
        assert!(validate_min(0, 1).is_err());
    }
}
