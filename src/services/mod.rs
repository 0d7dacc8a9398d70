//! Servicios de dominio
//!
//! Predicados de búsqueda, agregación y validación de registros.
//! Todos operan sobre snapshots del store; ninguno guarda estado.

pub mod query;
pub mod stats;
pub mod validator;
