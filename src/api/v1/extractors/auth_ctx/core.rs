use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;

use super::UserPrincipal;

/// Handler で、認証済みの UserPrincipal を受け取るための extractor
/// middleware が request.extensions() に insert 済みである前提
/// 見つからない場合は 401 を返す（匿名リクエスト）
pub struct Authenticated(pub UserPrincipal);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<UserPrincipal>()
            .cloned()
            .map(Authenticated)
            .ok_or_else(|| {
                AppError::Unauthenticated(
                    "Full authentication is required to access this resource".to_string(),
                )
            })
    }
}

/// Anonymous requests yield `None` instead of a rejection.
pub struct MaybeAuthenticated(pub Option<UserPrincipal>);

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthenticated(
            parts.extensions.get::<UserPrincipal>().cloned(),
        ))
    }
}
