/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - GET 以外のメソッドは 405 (handler は呼ばれない)
 *   - axum の get() は HEAD も GET handler に流すので、HEAD は明示的に拒否する
 */
use axum::{
    Router,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};

use crate::api::v1::handlers::welcome::welcome;
use crate::state::AppState;

/// Mount point of the v1 API.
pub const PREFIX: &str = "/api/v1";

/// Path of the welcome route relative to [`PREFIX`].
pub const WELCOME_PATH: &str = "/welcome";

pub fn routes() -> Router<AppState> {
    Router::new().route(WELCOME_PATH, get(welcome).head(get_only))
}

async fn get_only() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET")])
}
