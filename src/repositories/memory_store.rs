//! Store de viajes en memoria
//!
//! Implementación del contrato `TravelStore` sobre un HashMap protegido
//! por RwLock. El contador de ids es monótono: un id borrado no se vuelve
//! a asignar. Usado por los tests de integración.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::travel::{Travel, TravelDraft};
use crate::repositories::travel_repository::TravelStore;
use crate::utils::errors::AppError;

pub struct InMemoryTravelStore {
    records: RwLock<HashMap<i64, Travel>>,
    next_id: AtomicI64,
}

impl InMemoryTravelStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryTravelStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TravelStore for InMemoryTravelStore {
    async fn create(&self, draft: TravelDraft) -> Result<Travel, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();

        let travel = Travel {
            id,
            origin: draft.origin,
            destination: draft.destination,
            departure_date: draft.departure_date,
            return_date: draft.return_date,
            travel_type: draft.travel_type,
            price: draft.price,
            currency: draft.currency,
            passengers: draft.passengers,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        };

        self.records.write().await.insert(id, travel.clone());
        Ok(travel)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Travel>, AppError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn replace(&self, id: i64, draft: TravelDraft) -> Result<Option<Travel>, AppError> {
        let mut records = self.records.write().await;

        match records.get_mut(&id) {
            Some(existing) => {
                existing.origin = draft.origin;
                existing.destination = draft.destination;
                existing.departure_date = draft.departure_date;
                existing.return_date = draft.return_date;
                existing.travel_type = draft.travel_type;
                existing.price = draft.price;
                existing.currency = draft.currency;
                existing.passengers = draft.passengers;
                existing.notes = draft.notes;
                existing.updated_at = Utc::now();
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.records.write().await.remove(&id).is_some())
    }

    async fn find_all(&self) -> Result<Vec<Travel>, AppError> {
        let records = self.records.read().await;
        let mut travels: Vec<Travel> = records.values().cloned().collect();
        travels.sort_by_key(|t| t.id);
        Ok(travels)
    }
}
