use jsonwebtoken::{Algorithm, DecodingKey, Validation, errors::ErrorKind};
use thiserror::Error;

use crate::services::auth::claims::AccessTokenClaims;
use crate::services::auth::secret::SharedSecret;

/// Upper bound for clock-skew tolerance. `jsonwebtoken` subtracts the leeway
/// from the current Unix time, so it must stay far below it.
pub const MAX_LEEWAY_SECONDS: u64 = 300;

/// Why an access token was rejected.
///
/// Every variant ends up as the same 401 response; the distinction is for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationFailure {
    #[error("malformed token: {0}")]
    MalformedToken(String),
    #[error("token signature is invalid")]
    BadSignature,
    #[error("token has expired")]
    Expired,
    #[error("token is not valid yet")]
    NotYetValid,
}

impl VerificationFailure {
    /// Stable label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedToken(_) => "malformed_token",
            Self::BadSignature => "bad_signature",
            Self::Expired => "expired",
            Self::NotYetValid => "not_yet_valid",
        }
    }
}

impl From<jsonwebtoken::errors::Error> for VerificationFailure {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        match e.kind() {
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => Self::BadSignature,
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::ImmatureSignature => Self::NotYetValid,
            _ => Self::MalformedToken(e.to_string()),
        }
    }
}

/// HS256 access-token verifier.
///
/// - Built once from the process-wide secret, then shared read-only between requests.
/// - `exp` / `nbf` are checked only when the token carries them.
/// - Key material is not printable via Debug.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    pub fn new(secret: &SharedSecret, leeway_seconds: u64) -> Self {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        // The issuer never sets aud/iss, and exp is optional on our tokens.
        validation.required_spec_claims.clear();
        validation.validate_aud = false;
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = leeway_seconds.min(MAX_LEEWAY_SECONDS);

        Self {
            decoding_key,
            validation,
        }
    }

    /// Verify signature + time claims, then decode the payload.
    ///
    /// Pure apart from the clock read inside `jsonwebtoken`.
    pub fn verify(&self, token: &str) -> Result<AccessTokenClaims, VerificationFailure> {
        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)?;
        let claims = data.claims;

        if claims.sub.trim().is_empty() {
            return Err(VerificationFailure::MalformedToken(
                "empty 'sub' claim".to_string(),
            ));
        }

        Ok(claims)
    }
}

/// One-shot verification with zero clock leeway.
pub fn verify(token: &str, secret: &SharedSecret) -> Result<AccessTokenClaims, VerificationFailure> {
    TokenVerifier::new(secret, 0).verify(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header};
    use serde_json::{Value, json};

    fn secret(s: &str) -> SharedSecret {
        SharedSecret::new(s).unwrap()
    }

    fn sign(payload: &Value, key: &str) -> String {
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            payload,
            &EncodingKey::from_secret(key.as_bytes()),
        )
        .unwrap()
    }

    fn now() -> i64 {
        chrono::Utc::now().timestamp()
    }

    fn alice(exp: i64) -> Value {
        json!({
            "sub": "alice",
            "id": 7,
            "companyId": 3,
            "roles": ["COMPANY_ADMIN"],
            "exp": exp,
        })
    }

    #[test]
    fn valid_token_yields_claims() {
        let token = sign(&alice(now() + 600), "S");
        let claims = verify(&token, &secret("S")).unwrap();

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.company_id, Some(3));
        assert_eq!(claims.roles, vec!["COMPANY_ADMIN".to_string()]);
    }

    #[test]
    fn different_secret_is_bad_signature() {
        let token = sign(&alice(now() + 600), "S");
        assert_eq!(
            verify(&token, &secret("S-prime")),
            Err(VerificationFailure::BadSignature)
        );
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let token = sign(&alice(now() + 600), "S");
        let (head, sig) = token.rsplit_once('.').unwrap();
        let flipped = if sig.starts_with('A') { "B" } else { "A" };
        let tampered = format!("{head}.{flipped}{}", &sig[1..]);

        assert_eq!(
            verify(&tampered, &secret("S")),
            Err(VerificationFailure::BadSignature)
        );
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = sign(&alice(now() - 120), "S");
        assert_eq!(verify(&token, &secret("S")), Err(VerificationFailure::Expired));
    }

    #[test]
    fn leeway_tolerates_small_clock_skew() {
        let token = sign(&alice(now() - 5), "S");
        let verifier = TokenVerifier::new(&secret("S"), 60);
        assert!(verifier.verify(&token).is_ok());
    }

    #[test]
    fn oversized_leeway_is_capped() {
        let verifier = TokenVerifier::new(&secret("S"), u64::MAX);

        assert!(verifier.verify(&sign(&alice(now() + 600), "S")).is_ok());
        assert_eq!(
            verifier.verify(&sign(&alice(now() - 3600), "S")),
            Err(VerificationFailure::Expired)
        );
    }

    #[test]
    fn future_nbf_is_not_yet_valid() {
        let mut payload = alice(now() + 600);
        payload["nbf"] = json!(now() + 300);
        let token = sign(&payload, "S");

        assert_eq!(
            verify(&token, &secret("S")),
            Err(VerificationFailure::NotYetValid)
        );
    }

    #[test]
    fn token_without_exp_is_accepted() {
        let token = sign(&json!({"sub": "bob", "id": 2}), "S");
        let claims = verify(&token, &secret("S")).unwrap();

        assert_eq!(claims.company_id, None);
        assert!(claims.roles.is_empty());
    }

    #[test]
    fn garbage_is_malformed() {
        for raw in ["", "abc", "a.b", "a.b.c"] {
            assert!(
                matches!(
                    verify(raw, &secret("S")),
                    Err(VerificationFailure::MalformedToken(_))
                ),
                "expected malformed for {raw:?}"
            );
        }
    }

    #[test]
    fn missing_user_id_is_malformed() {
        let token = sign(&json!({"sub": "alice", "exp": now() + 600}), "S");
        assert!(matches!(
            verify(&token, &secret("S")),
            Err(VerificationFailure::MalformedToken(_))
        ));
    }

    #[test]
    fn empty_subject_is_malformed() {
        let token = sign(&json!({"sub": " ", "id": 1, "exp": now() + 600}), "S");
        assert_eq!(
            verify(&token, &secret("S")),
            Err(VerificationFailure::MalformedToken(
                "empty 'sub' claim".to_string()
            ))
        );
    }

    #[test]
    fn other_hmac_algorithm_is_bad_signature() {
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS512),
            &alice(now() + 600),
            &EncodingKey::from_secret(b"S"),
        )
        .unwrap();

        assert_eq!(
            verify(&token, &secret("S")),
            Err(VerificationFailure::BadSignature)
        );
    }

    #[test]
    fn verifying_twice_is_idempotent() {
        let token = sign(&alice(now() + 600), "S");
        let verifier = TokenVerifier::new(&secret("S"), 0);

        let first = verifier.verify(&token).unwrap();
        let second = verifier.verify(&token).unwrap();
        assert_eq!(first, second);
    }
}
