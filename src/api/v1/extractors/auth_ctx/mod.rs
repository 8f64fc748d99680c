/*!
 * Authentication context extractor
 *
 * Responsibility:
 * - 認証済みリクエストのコンテキスト（UserPrincipal）を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - UserPrincipal
 * - Authenticated / MaybeAuthenticated
 */

mod core;
mod types;

pub use core::{Authenticated, MaybeAuthenticated};
pub use types::UserPrincipal;
