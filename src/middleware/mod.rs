/*
 * Responsibility
 * - middleware の公開インターフェース
 * - 各 apply(router, ...) は Router 単位で適用する (handler 内では使わない)
 */
pub mod cors;
pub mod http;
pub mod security_headers;
