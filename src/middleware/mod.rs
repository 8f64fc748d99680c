/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth: bearer 認証 (access) と endpoint 単位の認可 (guard)
 * - http: request id / access log / timeout / body limit
 */
pub mod auth;
pub mod http;
