use serde::Deserialize;

/// Access token claims as they appear on the wire.
///
/// - `sub` is the login name
/// - `id` / `companyId` / `roles` are issuer-specific claims
/// - `exp` / `nbf` are checked by `jsonwebtoken::Validation`, so they are not kept here
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccessTokenClaims {
    pub sub: String,

    #[serde(rename = "id")]
    pub user_id: i64,

    // Absent or null means the user has no company yet.
    #[serde(rename = "companyId", default)]
    pub company_id: Option<i64>,

    #[serde(default)]
    pub roles: Vec<String>,
}
