//! advert-portal resource server.
//!
//! Stateless bearer-token authentication (`middleware::auth::access`),
//! per-route authority guards (`middleware::auth::guard`) and the routes that
//! rely on them.
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
