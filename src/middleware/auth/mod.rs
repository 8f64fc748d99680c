pub mod access;
pub mod guard;

pub use access::BypassRoutes;
pub use guard::{AuthorityRule, AuthorizationDenied, guarded};
