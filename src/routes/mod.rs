//! Rutas de la API

pub mod travel_routes;
