//! Contact-form endpoints: public submission, admin inbox.

use crate::error::AppError;
use crate::response::{success_created, success_list, success_message};
use crate::service::contacts::ContactPayload;
use crate::service::ContactStore;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

/// POST /api/contact — name, email, and message required.
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<ContactPayload>,
) -> Result<impl IntoResponse, AppError> {
    let id = ContactStore::submit(&state.pool, &payload).await?;
    Ok(success_created(id, "Message sent successfully"))
}

/// GET /api/contact/messages — newest first.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = ContactStore::get_all(&state.pool).await?;
    Ok(success_list(rows))
}

/// GET /api/contact/messages/unread
pub async fn list_unread(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = ContactStore::get_unread(&state.pool).await?;
    Ok(success_list(rows))
}

/// PUT /api/contact/messages/:id/read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !ContactStore::mark_read(&state.pool, id).await? {
        return Err(AppError::NotFound("Message not found".into()));
    }
    Ok(success_message("Message marked as read"))
}

/// DELETE /api/contact/messages/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !ContactStore::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("Message not found".into()));
    }
    Ok(success_message("Message deleted successfully"))
}
