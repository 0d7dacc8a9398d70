//! Travel Booking API
//!
//! Servicio de gestión de registros de viajes: CRUD, búsquedas por criterio
//! y estadísticas agrupadas por tipo de viaje.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
