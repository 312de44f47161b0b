//! Social media link endpoints.

use crate::error::AppError;
use crate::response::{success_created, success_list, success_message};
use crate::service::social::SocialMediaPayload;
use crate::service::SocialMediaStore;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

/// GET /api/social-media
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = SocialMediaStore::get_all(&state.pool).await?;
    Ok(success_list(rows))
}

/// GET /api/social-media/active
pub async fn list_active(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = SocialMediaStore::get_active(&state.pool).await?;
    Ok(success_list(rows))
}

/// POST /api/social-media — platform and url required.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<SocialMediaPayload>,
) -> Result<impl IntoResponse, AppError> {
    let id = SocialMediaStore::create(&state.pool, &payload).await?;
    Ok(success_created(id, "Social media link created successfully"))
}

/// PUT /api/social-media/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SocialMediaPayload>,
) -> Result<impl IntoResponse, AppError> {
    if !SocialMediaStore::update(&state.pool, id, &payload).await? {
        return Err(AppError::NotFound("Social media link not found".into()));
    }
    Ok(success_message("Social media link updated successfully"))
}

/// DELETE /api/social-media/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !SocialMediaStore::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("Social media link not found".into()));
    }
    Ok(success_message("Social media link deleted successfully"))
}
