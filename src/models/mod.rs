//! Modelos de dominio

pub mod travel;

pub use travel::*;
