//! DTOs de Travel
//!
//! El contrato JSON usa nombres de campos en camelCase (`departureDate`,
//! `createdAt`, ...). El precio viaja como número JSON y se convierte a
//! `Decimal` en el controller.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::models::travel::Travel;

/// Request para crear o reemplazar un viaje (reemplazo de todos los campos)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelRequest {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub travel_type: String,
    pub price: f64,
    pub currency: String,
    pub passengers: i32,
    pub notes: Option<String>,
}

/// Response de viaje
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelResponse {
    pub id: i64,
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub travel_type: String,
    pub price: f64,
    pub currency: String,
    pub passengers: i32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Travel> for TravelResponse {
    fn from(travel: Travel) -> Self {
        Self {
            id: travel.id,
            origin: travel.origin,
            destination: travel.destination,
            departure_date: travel.departure_date,
            return_date: travel.return_date,
            travel_type: travel.travel_type,
            price: travel.price.to_f64().unwrap_or(0.0),
            currency: travel.currency,
            passengers: travel.passengers,
            notes: travel.notes,
            created_at: travel.created_at,
            updated_at: travel.updated_at,
        }
    }
}

/// Query params para búsqueda por rango de fechas
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeParams {
    pub start_date: String,
    pub end_date: String,
}

/// Query params para búsqueda por rango de precio
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeParams {
    pub min_price: f64,
    pub max_price: f64,
}
