#![allow(dead_code)]

use std::sync::Arc;

use advert_portal::{
    app::build_router,
    config::Config,
    middleware::auth::BypassRoutes,
    services::{
        auth::build_token_verifier,
        directory::{MemoryDirectory, User},
    },
    state::AppState,
};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::{Value, json};
use tower::ServiceExt;

pub const SECRET: &str = "test-secret";

pub fn config() -> Config {
    Config::from_lookup(|key| match key {
        "JWT_SECRET" => Some(SECRET.to_string()),
        _ => None,
    })
    .expect("test config")
}

pub fn state_with(config: &Config, directory: Arc<MemoryDirectory>) -> AppState {
    AppState::new(
        build_token_verifier(config),
        BypassRoutes::new(config.auth_bypass_paths.iter().cloned()),
        directory.clone(),
        directory,
    )
}

pub fn app_with(directory: Arc<MemoryDirectory>) -> Router {
    let config = config();
    build_router(state_with(&config, directory), &config)
}

pub fn app() -> Router {
    app_with(Arc::new(MemoryDirectory::new()))
}

pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

pub fn claims(sub: &str, id: i64, company_id: Option<i64>, roles: &[&str]) -> Value {
    json!({
        "sub": sub,
        "id": id,
        "companyId": company_id,
        "roles": roles,
        "iat": now(),
        "exp": now() + 600,
    })
}

pub fn sign_with(payload: &Value, secret: &str) -> String {
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        payload,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("sign token")
}

pub fn sign(payload: &Value) -> String {
    sign_with(payload, SECRET)
}

pub fn user(id: i64, company_id: Option<i64>) -> User {
    User {
        id,
        login: format!("user{id}"),
        name: "Jan".into(),
        surname: "Kowalski".into(),
        email: format!("user{id}@example.com"),
        company_id,
        active: false,
    }
}

pub fn request(method: &str, uri: &str, bearer: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send one request; the body is parsed as JSON when non-empty.
pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.expect("request");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    if bytes.is_empty() {
        return (status, Value::Null);
    }
    (status, serde_json::from_slice(&bytes).expect("parse JSON"))
}
