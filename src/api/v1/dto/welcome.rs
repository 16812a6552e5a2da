/*
 * Responsibility
 * - Welcome の response DTO
 * - field は message ひとつだけ (追加しないこと)
 */
use serde::Serialize;

pub const WELCOME_MESSAGE: &str = "Welcome to the ALX Travel App API";

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

impl WelcomeResponse {
    pub fn new() -> Self {
        Self {
            message: WELCOME_MESSAGE,
        }
    }
}
