//! Authority labels carried in the `roles` claim.

pub const USER_WRITE: &str = "USER_WRITE";
pub const COMPANY_USER: &str = "COMPANY_USER";
pub const COMPANY_ADMIN: &str = "COMPANY_ADMIN";
