//! House-type catalog endpoints.

use crate::error::AppError;
use crate::response::{success_created, success_data, success_list, success_message};
use crate::service::house_types::HouseTypePayload;
use crate::service::HouseTypeStore;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct ListQuery {
    pub include_inactive: Option<String>,
}

#[derive(Deserialize)]
pub struct ReorderRequest {
    pub display_order: Option<i32>,
}

/// GET /api/house-types[?include_inactive=true]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let include_inactive = query
        .include_inactive
        .as_deref()
        .is_some_and(|v| v.eq_ignore_ascii_case("true"));
    let rows = HouseTypeStore::get_all(&state.pool, include_inactive).await?;
    Ok(success_list(rows))
}

/// GET /api/house-types/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let row = HouseTypeStore::get_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("House type not found".into()))?;
    Ok(success_data(row))
}

/// GET /api/house-types/category/:category
pub async fn get_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let rows = HouseTypeStore::get_by_category(&state.pool, &category).await?;
    Ok(success_list(rows))
}

/// POST /api/house-types — `name` required; defaults applied server-side.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<HouseTypePayload>,
) -> Result<impl IntoResponse, AppError> {
    let id = HouseTypeStore::create(&state.pool, &payload).await?;
    Ok(success_created(id, "House type created successfully"))
}

/// PUT /api/house-types/:id — any subset of catalog fields.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<HouseTypePayload>,
) -> Result<impl IntoResponse, AppError> {
    if !HouseTypeStore::update(&state.pool, id, &payload).await? {
        return Err(AppError::NotFound("House type not found".into()));
    }
    Ok(success_message("House type updated successfully"))
}

/// DELETE /api/house-types/:id — soft delete.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !HouseTypeStore::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("House type not found".into()));
    }
    Ok(success_message("House type deleted successfully"))
}

/// PUT /api/house-types/:id/toggle-active
pub async fn toggle_active(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !HouseTypeStore::toggle_active(&state.pool, id).await? {
        return Err(AppError::NotFound("House type not found".into()));
    }
    Ok(success_message("House type status toggled successfully"))
}

/// PUT /api/house-types/:id/reorder — body `{display_order}` required.
pub async fn reorder(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<ReorderRequest>,
) -> Result<impl IntoResponse, AppError> {
    let display_order = body
        .display_order
        .ok_or_else(|| AppError::BadRequest("display_order is required".into()))?;
    if !HouseTypeStore::reorder(&state.pool, id, display_order).await? {
        return Err(AppError::NotFound("House type not found".into()));
    }
    Ok(success_message("House type order updated successfully"))
}
