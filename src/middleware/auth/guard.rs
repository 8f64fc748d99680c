//! Endpoint-level authorization.
//!
//! A guard is attached per route with `route_layer`, so it only runs once the
//! route matched and always after the access middleware. Anonymous requests
//! never satisfy a guard.

use std::sync::Arc;

use axum::{
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::MethodRouter,
};
use thiserror::Error;

use crate::api::v1::extractors::UserPrincipal;
use crate::error::AppError;

/// Predicate over the caller's authority set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorityRule {
    Has(String),
    HasAny(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("authorization denied: {rule:?}")]
pub struct AuthorizationDenied {
    pub rule: AuthorityRule,
}

impl AuthorityRule {
    pub fn has_authority(authority: impl Into<String>) -> Self {
        Self::Has(authority.into())
    }

    pub fn has_any_authority<I, A>(authorities: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self::HasAny(authorities.into_iter().map(Into::into).collect())
    }

    pub fn permits(&self, principal: Option<&UserPrincipal>) -> bool {
        let Some(principal) = principal else {
            return false;
        };
        match self {
            Self::Has(authority) => principal.has_authority(authority),
            Self::HasAny(authorities) => {
                principal.has_any_authority(authorities.iter().map(String::as_str))
            }
        }
    }

    pub fn check(&self, principal: Option<&UserPrincipal>) -> Result<(), AuthorizationDenied> {
        if self.permits(principal) {
            Ok(())
        } else {
            Err(AuthorizationDenied { rule: self.clone() })
        }
    }
}

/// Wrap a method router so `rule` is enforced before its handler runs.
///
/// ```ignore
/// .route("/{id}", guarded(delete(delete_user), AuthorityRule::has_authority("USER_WRITE")))
/// ```
pub fn guarded<S>(route: MethodRouter<S>, rule: AuthorityRule) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    let rule = Arc::new(rule);
    route.route_layer(middleware::from_fn(move |req: Request<Body>, next: Next| {
        let rule = Arc::clone(&rule);
        async move { enforce(&rule, req, next).await }
    }))
}

async fn enforce(rule: &AuthorityRule, req: Request<Body>, next: Next) -> Response {
    let principal = req.extensions().get::<UserPrincipal>();

    if let Err(denied) = rule.check(principal) {
        tracing::warn!(
            path = %req.uri().path(),
            user_id = ?principal.map(|p| p.user_id),
            rule = ?denied.rule,
            "authorization denied"
        );
        return AppError::from(denied).into_response();
    }

    next.run(req).await
}
