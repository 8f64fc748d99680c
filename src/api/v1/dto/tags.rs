use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::directory::Tag;

#[derive(Debug, Deserialize)]
pub struct CreateTagRequest {
    pub name: Option<String>,
}

impl CreateTagRequest {
    /// Trimmed tag name, or `None` when missing/blank.
    pub fn name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResponse {
    pub id: i64,
    pub name: String,
    pub company_id: i64,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Tag> for TagResponse {
    fn from(t: Tag) -> Self {
        Self {
            id: t.id,
            name: t.name,
            company_id: t.company_id,
            created_by: t.created_by,
            created_at: t.created_at,
        }
    }
}
