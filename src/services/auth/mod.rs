pub mod access_jwt;
pub mod claims;
pub mod factory;
pub mod secret;

pub use access_jwt::{TokenVerifier, VerificationFailure};
pub use claims::AccessTokenClaims;
pub use factory::build_token_verifier;
pub use secret::SharedSecret;
