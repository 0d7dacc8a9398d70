//! Modelo de Travel
//!
//! Este módulo contiene el struct Travel y el borrador de campos mutables
//! usado por las operaciones de create/replace. Mapea exactamente a la
//! tabla `travels` con primary key `id`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Registro de viaje - copia canónica propiedad del store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Travel {
    pub id: i64,
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub travel_type: String,
    pub price: Decimal,
    pub currency: String,
    pub passengers: i32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Campos mutables de un viaje: payload de `create` y `replace`.
/// `id` y `created_at` los asigna el store y nunca cambian.
#[derive(Debug, Clone)]
pub struct TravelDraft {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub travel_type: String,
    pub price: Decimal,
    pub currency: String,
    pub passengers: i32,
    pub notes: Option<String>,
}
