//! Validador de registros de viaje
//!
//! Checks explícitos de todas las restricciones de campo, aplicados en
//! create y en update (sobre el candidato de reemplazo completo). Se
//! acumulan todas las violaciones en un solo rechazo.
//!
//! Nota: no se exige departure_date <= return_date; ambas fechas solo
//! tienen que estar presentes.

use validator::ValidationErrors;

use crate::dto::travel_dto::TravelRequest;
use crate::utils::errors::AppError;
use crate::utils::validation::{
    validate_max_length, validate_min, validate_not_empty, validate_positive,
};

/// Validar un candidato a registro de viaje
pub fn validate_travel(request: &TravelRequest) -> Result<(), AppError> {
    let mut errors = ValidationErrors::new();

    if let Err(e) = validate_not_empty(&request.origin) {
        errors.add("origin", e);
    }
    if let Err(e) = validate_max_length(&request.origin, 100) {
        errors.add("origin", e);
    }

    if let Err(e) = validate_not_empty(&request.destination) {
        errors.add("destination", e);
    }
    if let Err(e) = validate_max_length(&request.destination, 100) {
        errors.add("destination", e);
    }

    if let Err(e) = validate_not_empty(&request.travel_type) {
        errors.add("travel_type", e);
    }

    if let Err(e) = validate_positive(request.price) {
        errors.add("price", e);
    }

    if let Err(e) = validate_not_empty(&request.currency) {
        errors.add("currency", e);
    }

    if let Err(e) = validate_min(request.passengers, 1) {
        errors.add("passengers", e);
    }

    if let Some(notes) = &request.notes {
        if let Err(e) = validate_max_length(notes, 500) {
            errors.add("notes", e);
        }
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn valid_request() -> TravelRequest {
        TravelRequest {
            origin: "NYC".to_string(),
            destination: "LAX".to_string(),
            departure_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            return_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            travel_type: "Round-trip".to_string(),
            price: 450.0,
            currency: "USD".to_string(),
            passengers: 2,
            notes: None,
        }
    }

    fn rejected_fields(request: &TravelRequest) -> Vec<&'static str> {
        match validate_travel(request) {
            Err(AppError::Validation(errors)) => {
                let mut fields: Vec<&'static str> = errors.errors().keys().copied().collect();
                fields.sort();
                fields
            }
            other => panic!("expected validation error, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate_travel(&valid_request()).is_ok());
    }

    #[test]
    fn test_blank_origin_is_rejected() {
        let mut request = valid_request();
        request.origin = "   ".to_string();
        assert_eq!(rejected_fields(&request), vec!["origin"]);
    }

    #[test]
    fn test_overlong_destination_is_rejected() {
        let mut request = valid_request();
        request.destination = "x".repeat(101);
        assert_eq!(rejected_fields(&request), vec!["destination"]);
    }

    #[test]
    fn test_price_must_be_strictly_positive() {
        let mut request = valid_request();
        request.price = 0.0;
        assert_eq!(rejected_fields(&request), vec!["price"]);

        request.price = -10.0;
        assert_eq!(rejected_fields(&request), vec!["price"]);
    }

    #[test]
    fn test_passengers_must_be_at_least_one() {
        let mut request = valid_request();
        request.passengers = 0;
        assert_eq!(rejected_fields(&request), vec!["passengers"]);

        request.passengers = 1;
        assert!(validate_travel(&request).is_ok());
    }

    #[test]
    fn test_overlong_notes_are_rejected() {
        let mut request = valid_request();
        request.notes = Some("x".repeat(501));
        assert_eq!(rejected_fields(&request), vec!["notes"]);

        request.notes = Some("x".repeat(500));
        assert!(validate_travel(&request).is_ok());
    }

    #[test]
    fn test_all_violations_are_accumulated() {
        let mut request = valid_request();
        request.origin = String::new();
        request.currency = String::new();
        request.price = 0.0;
        assert_eq!(rejected_fields(&request), vec!["currency", "origin", "price"]);
    }
}
