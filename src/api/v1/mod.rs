/*
 * Responsibility
 * - v1 の公開ポイント (routes() / management_routes() の re-export など)
 */
pub mod authorities;
pub mod dto;
pub mod extractors;
pub mod handlers;
mod routes;

pub use routes::{management_routes, routes};
