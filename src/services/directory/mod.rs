//! Business collaborators behind the guarded routes.
//!
//! Persistence lives elsewhere (relational store); this module only fixes the
//! interface handlers call with the caller's tenant scope, plus an in-memory
//! backend for local runs and tests.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

pub mod memory;

pub use memory::MemoryDirectory;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(String),
    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub login: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub company_id: Option<i64>,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub company_id: i64,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: usize,
    pub offset: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
        }
    }
}

#[async_trait]
pub trait UserService: Send + Sync + 'static {
    async fn get_user(&self, user_id: i64) -> ServiceResult<Option<User>>;

    // Returns `None` when the user does not exist.
    async fn update_user(&self, update: UserUpdate) -> ServiceResult<Option<User>>;

    // Returns `false` when nothing was deleted.
    async fn delete_user(&self, user_id: i64) -> ServiceResult<bool>;

    async fn list_users(&self, company_id: i64, page: Page) -> ServiceResult<Vec<User>>;

    async fn activate_user(&self, user_id: i64) -> ServiceResult<Option<User>>;
}

#[async_trait]
pub trait TagService: Send + Sync + 'static {
    // `Conflict` when the company already owns a tag with that name.
    async fn save_tag(&self, name: &str, company_id: i64, user_id: i64) -> ServiceResult<Tag>;

    async fn available_tags(&self, company_id: i64, user_id: i64) -> ServiceResult<Vec<Tag>>;
}
