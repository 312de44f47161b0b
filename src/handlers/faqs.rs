//! FAQ endpoints: full list for admin, active subset for the public site.

use crate::error::AppError;
use crate::response::{success_created, success_data, success_list, success_message};
use crate::service::faqs::FaqPayload;
use crate::service::FaqStore;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

/// GET /api/faqs
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = FaqStore::get_all(&state.pool).await?;
    Ok(success_list(rows))
}

/// GET /api/faqs/active
pub async fn list_active(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = FaqStore::get_active(&state.pool).await?;
    Ok(success_list(rows))
}

/// GET /api/faqs/category/:category
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let rows = FaqStore::get_by_category(&state.pool, &category).await?;
    Ok(success_list(rows))
}

/// GET /api/faqs/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let row = FaqStore::get_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("FAQ not found".into()))?;
    Ok(success_data(row))
}

/// POST /api/faqs — question and answer required.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<FaqPayload>,
) -> Result<impl IntoResponse, AppError> {
    let id = FaqStore::create(&state.pool, &payload).await?;
    Ok(success_created(id, "FAQ created successfully"))
}

/// PUT /api/faqs/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<FaqPayload>,
) -> Result<impl IntoResponse, AppError> {
    if !FaqStore::update(&state.pool, id, &payload).await? {
        return Err(AppError::NotFound("FAQ not found".into()));
    }
    Ok(success_message("FAQ updated successfully"))
}

/// DELETE /api/faqs/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !FaqStore::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("FAQ not found".into()));
    }
    Ok(success_message("FAQ deleted successfully"))
}
