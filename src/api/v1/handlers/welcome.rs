/*
 * Responsibility
 * - GET /api/v1/welcome
 * - path/query/body は読まない, 常に 200 + 固定 JSON
 */
use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::api::v1::dto::welcome::WelcomeResponse;

pub async fn welcome() -> impl IntoResponse {
    (StatusCode::OK, Json(WelcomeResponse::new()))
}
