//! Controller de viajes
//!
//! Fachada fina sobre validador, store, motor de búsqueda y estadísticas.
//! Las escrituras pasan primero por el validador; las lecturas toman un
//! snapshot del store y lo entregan a los predicados. Aquí no vive
//! ninguna regla de negocio adicional.

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::dto::travel_dto::{TravelRequest, TravelResponse};
use crate::models::travel::TravelDraft;
use crate::repositories::travel_repository::TravelStore;
use crate::services::{query, stats, validator};
use crate::utils::errors::{bad_request_error, not_found_error, validation_error, AppError};
use crate::utils::validation::validate_date;

pub struct TravelController {
    store: Arc<dyn TravelStore>,
}

impl TravelController {
    pub fn new(store: Arc<dyn TravelStore>) -> Self {
        Self { store }
    }

    fn draft_from_request(request: TravelRequest) -> Result<TravelDraft, AppError> {
        let price = Decimal::from_f64_retain(request.price)
            .ok_or_else(|| validation_error("price", "Invalid price value"))?;

        Ok(TravelDraft {
            origin: request.origin,
            destination: request.destination,
            departure_date: request.departure_date,
            return_date: request.return_date,
            travel_type: request.travel_type,
            price,
            currency: request.currency,
            passengers: request.passengers,
            notes: request.notes,
        })
    }

    pub async fn create(&self, request: TravelRequest) -> Result<TravelResponse, AppError> {
        validator::validate_travel(&request)?;
        let draft = Self::draft_from_request(request)?;
        let travel = self.store.create(draft).await?;
        Ok(travel.into())
    }

    pub async fn get_all(&self) -> Result<Vec<TravelResponse>, AppError> {
        let travels = self.store.find_all().await?;
        Ok(travels.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<TravelResponse, AppError> {
        let travel = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Travel", &id.to_string()))?;
        Ok(travel.into())
    }

    pub async fn update(&self, id: i64, request: TravelRequest) -> Result<TravelResponse, AppError> {
        validator::validate_travel(&request)?;
        let draft = Self::draft_from_request(request)?;
        let travel = self
            .store
            .replace(id, draft)
            .await?
            .ok_or_else(|| not_found_error("Travel", &id.to_string()))?;
        Ok(travel.into())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.store.delete(id).await? {
            Ok(())
        } else {
            Err(not_found_error("Travel", &id.to_string()))
        }
    }

    pub async fn find_by_destination(&self, destination: &str) -> Result<Vec<TravelResponse>, AppError> {
        let travels = self.store.find_all().await?;
        Ok(query::by_destination(travels, destination)
            .into_iter()
            .map(Into::into)
            .collect())
    }

    pub async fn find_by_origin(&self, origin: &str) -> Result<Vec<TravelResponse>, AppError> {
        let travels = self.store.find_all().await?;
        Ok(query::by_origin(travels, origin)
            .into_iter()
            .map(Into::into)
            .collect())
    }

    pub async fn find_by_travel_type(&self, travel_type: &str) -> Result<Vec<TravelResponse>, AppError> {
        let travels = self.store.find_all().await?;
        Ok(query::by_travel_type(travels, travel_type)
            .into_iter()
            .map(Into::into)
            .collect())
    }

    pub async fn find_by_date_range(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<TravelResponse>, AppError> {
        let start = validate_date(start_date)
            .map_err(|_| bad_request_error(&format!("Invalid start date: {}", start_date)))?;
        let end = validate_date(end_date)
            .map_err(|_| bad_request_error(&format!("Invalid end date: {}", end_date)))?;

        let travels = self.store.find_all().await?;
        Ok(query::by_date_range(travels, start, end)
            .into_iter()
            .map(Into::into)
            .collect())
    }

    pub async fn find_by_price_range(
        &self,
        min_price: f64,
        max_price: f64,
    ) -> Result<Vec<TravelResponse>, AppError> {
        let min = Decimal::from_f64_retain(min_price)
            .ok_or_else(|| bad_request_error("Invalid minimum price"))?;
        let max = Decimal::from_f64_retain(max_price)
            .ok_or_else(|| bad_request_error("Invalid maximum price"))?;

        let travels = self.store.find_all().await?;
        Ok(query::by_price_range(travels, min, max)
            .into_iter()
            .map(Into::into)
            .collect())
    }

    pub async fn find_by_currency(&self, currency: &str) -> Result<Vec<TravelResponse>, AppError> {
        let travels = self.store.find_all().await?;
        Ok(query::by_currency(travels, currency)
            .into_iter()
            .map(Into::into)
            .collect())
    }

    pub async fn find_by_passengers_greater_than(
        &self,
        passengers: i32,
    ) -> Result<Vec<TravelResponse>, AppError> {
        let travels = self.store.find_all().await?;
        Ok(query::by_passengers_greater_than(travels, passengers)
            .into_iter()
            .map(Into::into)
            .collect())
    }

    pub async fn search(&self, query_text: &str) -> Result<Vec<TravelResponse>, AppError> {
        let travels = self.store.find_all().await?;
        Ok(query::search(travels, query_text)
            .into_iter()
            .map(Into::into)
            .collect())
    }

    pub async fn statistics_by_type(&self) -> Result<HashMap<String, i64>, AppError> {
        let travels = self.store.find_all().await?;
        Ok(stats::count_by_travel_type(&travels))
    }
}
