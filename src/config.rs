/*
 * Responsibility
 * - 環境変数の読み込み (PORT, JWT_SECRET, 認証スキップ対象のパスなど)
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::services::auth::{SharedSecret, access_jwt::MAX_LEEWAY_SECONDS};

/// Token issuance and refresh live on the auth server; tokens are not required there.
pub const DEFAULT_BYPASS_PATHS: [&str; 2] = ["/api/v1/auth", "/api/v1/auth/refreshToken"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw
            .unwrap_or("development")
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    // HS256 secret shared with the token issuer
    pub jwt_secret: SharedSecret,
    pub access_token_leeway_seconds: u64,
    pub auth_bypass_paths: Vec<String>,

    pub request_timeout_seconds: u64,
    pub request_body_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source (the process environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV").as_deref());

        let jwt_secret = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        let jwt_secret = SharedSecret::new(jwt_secret).ok_or(ConfigError::Invalid("JWT_SECRET"))?;

        let access_token_leeway_seconds: u64 = match lookup("ACCESS_TOKEN_LEEWAY_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("ACCESS_TOKEN_LEEWAY_SECONDS"))?,
            None => 0,
        };
        if access_token_leeway_seconds > MAX_LEEWAY_SECONDS {
            return Err(ConfigError::Invalid("ACCESS_TOKEN_LEEWAY_SECONDS"));
        }

        let auth_bypass_paths = match lookup("AUTH_BYPASS_PATHS") {
            Some(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>(),
            None => DEFAULT_BYPASS_PATHS.iter().map(|s| s.to_string()).collect(),
        };

        let request_timeout_seconds = lookup("REQUEST_TIMEOUT_SECONDS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(30);

        let request_body_limit_bytes = lookup("REQUEST_BODY_LIMIT_BYTES")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(1024 * 1024);

        Ok(Self {
            addr,
            app_env,
            jwt_secret,
            access_token_leeway_seconds,
            auth_bypass_paths,
            request_timeout_seconds,
            request_body_limit_bytes,
        })
    }
}
