/*
 * Responsibility
 * - user management の request/response DTO
 * - validation (形式チェック) 用の validate() を持たせる
 */
use serde::{Deserialize, Serialize};

use crate::services::directory::{Page, User, UserUpdate};

const MAX_PAGE_SIZE: usize = 200;

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
}

impl UpdateUserRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name is required");
        }
        if self.surname.trim().is_empty() {
            return Err("surname is required");
        }
        if !self.email.contains('@') || self.email.len() > 256 {
            return Err("email is invalid");
        }
        Ok(())
    }
}

impl From<UpdateUserRequest> for UserUpdate {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            id: req.id,
            name: req.name.trim().to_string(),
            surname: req.surname.trim().to_string(),
            email: req.email.trim().to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl ListUsersQuery {
    pub fn page(&self) -> Page {
        let default = Page::default();
        Page {
            limit: self.limit.unwrap_or(default.limit).min(MAX_PAGE_SIZE),
            offset: self.offset.unwrap_or(default.offset),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub login: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub company_id: Option<i64>,
    pub active: bool,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            login: u.login,
            name: u.name,
            surname: u.surname,
            email: u.email,
            company_id: u.company_id,
            active: u.active,
        }
    }
}
