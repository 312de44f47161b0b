//! Service status endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct StatusBody {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// GET /api/status — liveness probe; no database round trip.
pub async fn status() -> Json<StatusBody> {
    Json(StatusBody {
        status: "success",
        service: "FurniLayout API",
        version: env!("CARGO_PKG_VERSION"),
    })
}
