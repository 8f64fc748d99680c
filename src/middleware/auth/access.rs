//! access token (HS256 JWT) 検証 → UserPrincipal を extensions に入れる
//!
//! 1 リクエストにつき 1 回だけ、ルーティングより前に走る:
//! - 認証スキップ対象のパス (token 発行 / refresh) はそのまま通す
//! - `Authorization: Bearer <jwt>` が無い / 形式が違う / `Bearer null` は匿名として通す
//! - 検証成功なら UserPrincipal を extensions に格納して次へ
//! - 検証失敗なら 401 `{"error_message": ...}` を返して打ち切る
//!
//! 匿名アクセスの拒否はこの層ではなく、各 endpoint の guard が担当する。

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::UserPrincipal;
use crate::error::AppError;
use crate::services::auth::VerificationFailure;
use crate::state::AppState;

const BEARER_PREFIX: &[u8] = b"Bearer ";

// Some clients serialise a missing token as the literal text "null".
const NULL_TOKEN: &[u8] = b"null";

/// Exact-match list of paths that skip authentication entirely.
#[derive(Debug, Clone)]
pub struct BypassRoutes(Vec<String>);

impl BypassRoutes {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self(paths.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.iter().any(|p| p == path)
    }
}

/// What the middleware decided to do with a request before verification.
#[derive(Debug, PartialEq, Eq)]
enum Credential<'a> {
    Bypass,
    Anonymous,
    Bearer(&'a [u8]),
}

fn classify<'a>(path: &str, headers: &'a HeaderMap, bypass: &BypassRoutes) -> Credential<'a> {
    if bypass.contains(path) {
        return Credential::Bypass;
    }

    let Some(raw) = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.as_bytes().strip_prefix(BEARER_PREFIX))
    else {
        return Credential::Anonymous;
    };

    if raw == NULL_TOKEN {
        return Credential::Anonymous;
    }

    Credential::Bearer(raw)
}

/// Apply authentication to every route of `router`.
///
/// Must wrap the fully assembled router (after `nest`), so the bypass list is
/// matched against the full request path.
///
/// ```ignore
/// let app = Router::new().nest("/api/v1", api::v1::routes()).with_state(state.clone());
/// let app = middleware::auth::access::apply(app, state);
/// ```
pub fn apply(router: Router, state: AppState) -> Router {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let raw = match classify(req.uri().path(), req.headers(), &state.bypass) {
        Credential::Bypass => {
            tracing::debug!(path = %req.uri().path(), "authentication bypassed");
            return Ok(next.run(req).await);
        }
        Credential::Anonymous => {
            tracing::debug!(path = %req.uri().path(), "no bearer token, continuing anonymously");
            return Ok(next.run(req).await);
        }
        Credential::Bearer(raw) => raw,
    };

    let verified = std::str::from_utf8(raw)
        .map_err(|_| VerificationFailure::MalformedToken("token is not valid UTF-8".to_string()))
        .and_then(|token| state.auth.verify(token));

    let claims = match verified {
        Ok(claims) => claims,
        Err(err) => {
            tracing::warn!(
                kind = err.kind(),
                error = %err,
                path = %req.uri().path(),
                "access token verification failed"
            );
            return Err(err.into());
        }
    };

    let principal = UserPrincipal::from(claims);
    tracing::debug!(
        user_id = principal.user_id,
        company_id = ?principal.company_id,
        "request authenticated"
    );

    // middleware → guard / extractor への受け渡し
    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}
