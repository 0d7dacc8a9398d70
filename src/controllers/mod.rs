//! Controllers de la API

pub mod travel_controller;
