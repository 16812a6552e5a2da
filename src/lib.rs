/*
 * Responsibility
 * - crate の公開モジュール
 * - binary (main.rs) と tests/ の両方から app::build_app() を使えるようにする
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod state;
