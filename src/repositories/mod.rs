//! Repositorios de persistencia
//!
//! El contrato del store es un trait explícito con dos implementaciones:
//! PostgreSQL para producción y un HashMap en memoria para tests.

pub mod memory_store;
pub mod travel_repository;
