//! DTOs de la API

pub mod travel_dto;

pub use travel_dto::*;
