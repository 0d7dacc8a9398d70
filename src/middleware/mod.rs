//! Middleware del servidor
//!
//! Por ahora solo CORS; la API no lleva autenticación.

pub mod cors;
