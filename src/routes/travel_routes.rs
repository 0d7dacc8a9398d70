//! Rutas de viajes
//!
//! Shell HTTP: traduce requests a llamadas del controller y errores a
//! status codes. Las rutas estáticas (`/search/dates`, `/statistics/type`)
//! tienen prioridad sobre `/search/:query` y `/:id`.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use std::collections::HashMap;

use crate::controllers::travel_controller::TravelController;
use crate::dto::travel_dto::{DateRangeParams, PriceRangeParams, TravelRequest, TravelResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_travel_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_travel))
        .route("/", get(get_all_travels))
        .route("/:id", get(get_travel_by_id))
        .route("/:id", put(update_travel))
        .route("/:id", delete(delete_travel))
        .route("/search/destination/:destination", get(find_by_destination))
        .route("/search/origin/:origin", get(find_by_origin))
        .route("/search/type/:travel_type", get(find_by_travel_type))
        .route("/search/dates", get(find_by_date_range))
        .route("/search/price", get(find_by_price_range))
        .route("/search/currency/:currency", get(find_by_currency))
        .route("/search/passengers/:passengers", get(find_by_passengers))
        .route("/search/:query", get(search_travels))
        .route("/statistics/type", get(statistics_by_type))
}

async fn create_travel(
    State(state): State<AppState>,
    Json(request): Json<TravelRequest>,
) -> Result<(StatusCode, Json<TravelResponse>), AppError> {
    let controller = TravelController::new(state.store.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_all_travels(
    State(state): State<AppState>,
) -> Result<Json<Vec<TravelResponse>>, AppError> {
    let controller = TravelController::new(state.store.clone());
    let response = controller.get_all().await?;
    Ok(Json(response))
}

async fn get_travel_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TravelResponse>, AppError> {
    let controller = TravelController::new(state.store.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_travel(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<TravelRequest>,
) -> Result<Json<TravelResponse>, AppError> {
    let controller = TravelController::new(state.store.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_travel(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = TravelController::new(state.store.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "message": format!("Travel record deleted successfully: {}", id)
    })))
}

async fn find_by_destination(
    State(state): State<AppState>,
    Path(destination): Path<String>,
) -> Result<Json<Vec<TravelResponse>>, AppError> {
    let controller = TravelController::new(state.store.clone());
    let response = controller.find_by_destination(&destination).await?;
    Ok(Json(response))
}

async fn find_by_origin(
    State(state): State<AppState>,
    Path(origin): Path<String>,
) -> Result<Json<Vec<TravelResponse>>, AppError> {
    let controller = TravelController::new(state.store.clone());
    let response = controller.find_by_origin(&origin).await?;
    Ok(Json(response))
}

async fn find_by_travel_type(
    State(state): State<AppState>,
    Path(travel_type): Path<String>,
) -> Result<Json<Vec<TravelResponse>>, AppError> {
    let controller = TravelController::new(state.store.clone());
    let response = controller.find_by_travel_type(&travel_type).await?;
    Ok(Json(response))
}

async fn find_by_date_range(
    State(state): State<AppState>,
    Query(params): Query<DateRangeParams>,
) -> Result<Json<Vec<TravelResponse>>, AppError> {
    let controller = TravelController::new(state.store.clone());
    let response = controller
        .find_by_date_range(&params.start_date, &params.end_date)
        .await?;
    Ok(Json(response))
}

async fn find_by_price_range(
    State(state): State<AppState>,
    Query(params): Query<PriceRangeParams>,
) -> Result<Json<Vec<TravelResponse>>, AppError> {
    let controller = TravelController::new(state.store.clone());
    let response = controller
        .find_by_price_range(params.min_price, params.max_price)
        .await?;
    Ok(Json(response))
}

async fn find_by_currency(
    State(state): State<AppState>,
    Path(currency): Path<String>,
) -> Result<Json<Vec<TravelResponse>>, AppError> {
    let controller = TravelController::new(state.store.clone());
    let response = controller.find_by_currency(&currency).await?;
    Ok(Json(response))
}

async fn find_by_passengers(
    State(state): State<AppState>,
    Path(passengers): Path<i32>,
) -> Result<Json<Vec<TravelResponse>>, AppError> {
    let controller = TravelController::new(state.store.clone());
    let response = controller.find_by_passengers_greater_than(passengers).await?;
    Ok(Json(response))
}

async fn search_travels(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<Vec<TravelResponse>>, AppError> {
    let controller = TravelController::new(state.store.clone());
    let response = controller.search(&query).await?;
    Ok(Json(response))
}

async fn statistics_by_type(
    State(state): State<AppState>,
) -> Result<Json<HashMap<String, i64>>, AppError> {
    let controller = TravelController::new(state.store.clone());
    let response = controller.statistics_by_type().await?;
    Ok(Json(response))
}
