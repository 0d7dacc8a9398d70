//! Record Store de viajes
//!
//! El store es dueño de las copias canónicas: asigna los ids (nunca se
//! reutilizan tras un delete) y gestiona los timestamps. Cada mutación de
//! un registro es una sola sentencia SQL, así que concurrentemente se
//! comporta como read-committed: no hay updates perdidos ni lecturas de
//! registros a medio escribir.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use crate::models::travel::{Travel, TravelDraft};
use crate::utils::errors::AppError;

/// Contrato del almacenamiento de viajes
#[async_trait]
pub trait TravelStore: Send + Sync {
    /// Persistir un registro nuevo: asigna id y created_at = updated_at = ahora
    async fn create(&self, draft: TravelDraft) -> Result<Travel, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Travel>, AppError>;

    /// Reemplazar todos los campos mutables de un registro existente.
    /// Devuelve `None` si el id no existe; nunca crea un registro.
    async fn replace(&self, id: i64, draft: TravelDraft) -> Result<Option<Travel>, AppError>;

    /// Eliminar por id; devuelve si el registro existía
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Snapshot completo en orden de inserción (por id)
    async fn find_all(&self) -> Result<Vec<Travel>, AppError>;
}

pub struct PgTravelStore {
    pool: PgPool,
}

impl PgTravelStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TravelStore for PgTravelStore {
    async fn create(&self, draft: TravelDraft) -> Result<Travel, AppError> {
        let now = Utc::now();

        let travel = sqlx::query_as::<_, Travel>(
            r#"
            INSERT INTO travels (origin, destination, departure_date, return_date, travel_type, price, currency, passengers, notes, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
            RETURNING *
            "#,
        )
        .bind(draft.origin)
        .bind(draft.destination)
        .bind(draft.departure_date)
        .bind(draft.return_date)
        .bind(draft.travel_type)
        .bind(draft.price)
        .bind(draft.currency)
        .bind(draft.passengers)
        .bind(draft.notes)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(travel)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Travel>, AppError> {
        let travel = sqlx::query_as::<_, Travel>("SELECT * FROM travels WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(travel)
    }

    async fn replace(&self, id: i64, draft: TravelDraft) -> Result<Option<Travel>, AppError> {
        // UPDATE de una sola sentencia: o reemplaza todo o deja el registro como estaba
        let travel = sqlx::query_as::<_, Travel>(
            r#"
            UPDATE travels
            SET origin = $2, destination = $3, departure_date = $4, return_date = $5,
                travel_type = $6, price = $7, currency = $8, passengers = $9, notes = $10,
                updated_at = $11
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(draft.origin)
        .bind(draft.destination)
        .bind(draft.departure_date)
        .bind(draft.return_date)
        .bind(draft.travel_type)
        .bind(draft.price)
        .bind(draft.currency)
        .bind(draft.passengers)
        .bind(draft.notes)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(travel)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM travels WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_all(&self) -> Result<Vec<Travel>, AppError> {
        let travels = sqlx::query_as::<_, Travel>("SELECT * FROM travels ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(travels)
    }
}
