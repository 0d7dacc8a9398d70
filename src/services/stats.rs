//! Estadísticas de viajes
//!
//! Agrupa el snapshot completo por valor exacto de `travel_type` y cuenta
//! los miembros de cada grupo. La suma de los conteos siempre es igual al
//! total de registros; no hay garantía de orden de iteración.

use std::collections::HashMap;

use crate::models::travel::Travel;

/// Conteo de viajes agrupado por tipo
pub fn count_by_travel_type(records: &[Travel]) -> HashMap<String, i64> {
    let mut counts = HashMap::new();
    for travel in records {
        *counts.entry(travel.travel_type.clone()).or_insert(0) += 1;
    }
    counts
}
