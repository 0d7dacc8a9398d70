//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El store se construye explícitamente y se
//! inyecta por constructor; no hay singletons globales.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::travel_repository::TravelStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TravelStore>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn TravelStore>, config: EnvironmentConfig) -> Self {
        Self { store, config }
    }
}
