//! Motor de búsqueda de viajes
//!
//! Cada predicado es una función pura sobre el snapshot completo del
//! store: filtra y preserva el orden de entrada. A esta escala no hace
//! falta índice; los filtros por texto son containment case-insensitive,
//! los de igualdad son exactos y case-sensitive, y los rangos son
//! inclusivos en ambos extremos.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::travel::Travel;

/// Filtrar por destino: substring case-insensitive
pub fn by_destination(records: Vec<Travel>, destination: &str) -> Vec<Travel> {
    let needle = destination.to_lowercase();
    records
        .into_iter()
        .filter(|t| t.destination.to_lowercase().contains(&needle))
        .collect()
}

/// Filtrar por origen: substring case-insensitive
pub fn by_origin(records: Vec<Travel>, origin: &str) -> Vec<Travel> {
    let needle = origin.to_lowercase();
    records
        .into_iter()
        .filter(|t| t.origin.to_lowercase().contains(&needle))
        .collect()
}

/// Filtrar por tipo de viaje: igualdad exacta, case-sensitive
pub fn by_travel_type(records: Vec<Travel>, travel_type: &str) -> Vec<Travel> {
    records
        .into_iter()
        .filter(|t| t.travel_type == travel_type)
        .collect()
}

/// Filtrar por fecha de salida dentro del rango [start, end], ambos inclusive
pub fn by_date_range(records: Vec<Travel>, start: NaiveDate, end: NaiveDate) -> Vec<Travel> {
    records
        .into_iter()
        .filter(|t| t.departure_date >= start && t.departure_date <= end)
        .collect()
}

/// Filtrar por precio dentro del rango [min, max], ambos inclusive
pub fn by_price_range(records: Vec<Travel>, min: Decimal, max: Decimal) -> Vec<Travel> {
    records
        .into_iter()
        .filter(|t| t.price >= min && t.price <= max)
        .collect()
}

/// Filtrar por moneda: igualdad exacta, case-sensitive
pub fn by_currency(records: Vec<Travel>, currency: &str) -> Vec<Travel> {
    records
        .into_iter()
        .filter(|t| t.currency == currency)
        .collect()
}

/// Filtrar por pasajeros estrictamente mayor que el umbral
pub fn by_passengers_greater_than(records: Vec<Travel>, passengers: i32) -> Vec<Travel> {
    records
        .into_iter()
        .filter(|t| t.passengers > passengers)
        .collect()
}

/// Búsqueda global: substring case-insensitive en origen O destino.
/// Una sola pasada, así que la unión no produce duplicados.
pub fn search(records: Vec<Travel>, query: &str) -> Vec<Travel> {
    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|t| {
            t.origin.to_lowercase().contains(&needle)
                || t.destination.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn travel(
        id: i64,
        origin: &str,
        destination: &str,
        travel_type: &str,
        price: Decimal,
        currency: &str,
        passengers: i32,
        departure: NaiveDate,
    ) -> Travel {
        let now = Utc::now();
        Travel {
            id,
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure_date: departure,
            return_date: departure,
            travel_type: travel_type.to_string(),
            price,
            currency: currency.to_string(),
            passengers,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fixture() -> Vec<Travel> {
        vec![
            travel(1, "New York", "Los Angeles", "Round-trip", Decimal::new(45000, 2), "USD", 2, date(2024, 6, 1)),
            travel(2, "Paris", "Tokyo", "One-way", Decimal::new(89990, 2), "EUR", 1, date(2024, 6, 15)),
            travel(3, "Tokyo", "Berlin", "Round-trip", Decimal::new(120000, 2), "EUR", 4, date(2024, 7, 1)),
        ]
    }

    #[test]
    fn test_by_destination_is_case_insensitive_substring() {
        let matches = by_destination(fixture(), "tok");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, 2);
    }

    #[test]
    fn test_by_origin_is_case_insensitive_substring() {
        let matches = by_origin(fixture(), "TOKYO");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, 3);
    }

    #[test]
    fn test_by_travel_type_is_exact_and_case_sensitive() {
        assert_eq!(by_travel_type(fixture(), "Round-trip").len(), 2);
        assert!(by_travel_type(fixture(), "round-trip").is_empty());
        assert!(by_travel_type(fixture(), "Round").is_empty());
    }

    #[test]
    fn test_by_date_range_is_inclusive_at_both_bounds() {
        let matches = by_date_range(fixture(), date(2024, 6, 1), date(2024, 6, 15));
        let ids: Vec<i64> = matches.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_by_price_range_is_inclusive_at_both_bounds() {
        let matches = by_price_range(fixture(), Decimal::new(45000, 2), Decimal::new(89990, 2));
        let ids: Vec<i64> = matches.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);

        assert!(by_price_range(fixture(), Decimal::new(50000, 2), Decimal::new(60000, 2)).is_empty());
    }

    #[test]
    fn test_by_currency_is_exact_and_case_sensitive() {
        assert_eq!(by_currency(fixture(), "EUR").len(), 2);
        assert!(by_currency(fixture(), "eur").is_empty());
    }

    #[test]
    fn test_by_passengers_is_strictly_greater_than() {
        let matches = by_passengers_greater_than(fixture(), 2);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, 3);

        // passengers == umbral no cuenta
        assert_eq!(by_passengers_greater_than(fixture(), 1).len(), 2);
    }

    #[test]
    fn test_search_matches_origin_or_destination_without_duplicates() {
        let matches = search(fixture(), "tokyo");
        let ids: Vec<i64> = matches.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);

        // Un registro que coincide por ambos campos aparece una sola vez
        let mut records = fixture();
        records.push(travel(4, "Tokyo", "Tokyo Narita", "One-way", Decimal::new(10000, 2), "JPY", 1, date(2024, 8, 1)));
        assert_eq!(search(records, "tokyo").len(), 3);
    }

    #[test]
    fn test_predicates_preserve_input_order() {
        let matches = search(fixture(), "o");
        let ids: Vec<i64> = matches.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
