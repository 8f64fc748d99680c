/*
 * Responsibility
 * - Handler / guard から見える「認証済み主体」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - 署名検証は services/auth 側の責務
 * - authorities は roles をそのまま写したフラットな集合 (継承・展開はしない)
 */
use std::collections::BTreeSet;

use crate::services::auth::AccessTokenClaims;

/// Identity attached to a request whose bearer token verified.
///
/// Lives in the request extensions only; never cached across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPrincipal {
    pub subject: String,
    pub user_id: i64,
    pub company_id: Option<i64>,
    pub authorities: BTreeSet<String>,
}

impl UserPrincipal {
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.contains(authority)
    }

    pub fn has_any_authority<'a, I>(&self, authorities: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        authorities.into_iter().any(|a| self.has_authority(a))
    }
}

impl From<AccessTokenClaims> for UserPrincipal {
    fn from(claims: AccessTokenClaims) -> Self {
        Self {
            subject: claims.sub,
            user_id: claims.user_id,
            company_id: claims.company_id,
            authorities: claims.roles.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(roles: &[&str]) -> AccessTokenClaims {
        AccessTokenClaims {
            sub: "alice".into(),
            user_id: 7,
            company_id: Some(3),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn authorities_mirror_roles() {
        let principal = UserPrincipal::from(claims(&["COMPANY_ADMIN", "USER_READ"]));

        assert_eq!(principal.subject, "alice");
        assert_eq!(principal.user_id, 7);
        assert_eq!(principal.company_id, Some(3));
        assert_eq!(
            principal.authorities,
            BTreeSet::from(["COMPANY_ADMIN".to_string(), "USER_READ".to_string()])
        );
    }

    #[test]
    fn duplicate_roles_collapse() {
        let principal = UserPrincipal::from(claims(&["USER_WRITE", "USER_WRITE"]));
        assert_eq!(principal.authorities.len(), 1);
    }

    #[test]
    fn no_role_hierarchy_is_applied() {
        let principal = UserPrincipal::from(claims(&["COMPANY_ADMIN"]));

        assert!(principal.has_authority("COMPANY_ADMIN"));
        assert!(!principal.has_authority("COMPANY_USER"));
        assert!(principal.has_any_authority(["USER_WRITE", "COMPANY_ADMIN"]));
        assert!(!principal.has_any_authority(["USER_WRITE"]));
        assert!(!principal.has_any_authority([]));
    }
}
