/*
 * Responsibility
 * - バージョン非依存のルート (health) と v1 の公開
 */
pub mod health;
pub mod v1;
