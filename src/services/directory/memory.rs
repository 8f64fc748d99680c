use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Page, ServiceError, ServiceResult, Tag, TagService, User, UserService, UserUpdate};

#[derive(Debug, Default)]
struct Inner {
    users: BTreeMap<i64, User>,
    tags: Vec<Tag>,
    next_tag_id: i64,
}

/// In-process directory used when no database is wired in (local runs, tests).
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    inner: RwLock<Inner>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let inner = Inner {
            users: users.into_iter().map(|u| (u.id, u)).collect(),
            ..Inner::default()
        };
        Self {
            inner: RwLock::new(inner),
        }
    }
}

#[async_trait]
impl UserService for MemoryDirectory {
    async fn get_user(&self, user_id: i64) -> ServiceResult<Option<User>> {
        Ok(self.inner.read().await.users.get(&user_id).cloned())
    }

    async fn update_user(&self, update: UserUpdate) -> ServiceResult<Option<User>> {
        let mut inner = self.inner.write().await;
        let Some(user) = inner.users.get_mut(&update.id) else {
            return Ok(None);
        };
        user.name = update.name;
        user.surname = update.surname;
        user.email = update.email;
        Ok(Some(user.clone()))
    }

    async fn delete_user(&self, user_id: i64) -> ServiceResult<bool> {
        Ok(self.inner.write().await.users.remove(&user_id).is_some())
    }

    async fn list_users(&self, company_id: i64, page: Page) -> ServiceResult<Vec<User>> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .values()
            .filter(|u| u.company_id == Some(company_id))
            .skip(page.offset)
            .take(page.limit)
            .cloned()
            .collect())
    }

    async fn activate_user(&self, user_id: i64) -> ServiceResult<Option<User>> {
        let mut inner = self.inner.write().await;
        Ok(inner.users.get_mut(&user_id).map(|user| {
            user.active = true;
            user.clone()
        }))
    }
}

#[async_trait]
impl TagService for MemoryDirectory {
    async fn save_tag(&self, name: &str, company_id: i64, user_id: i64) -> ServiceResult<Tag> {
        let mut inner = self.inner.write().await;
        let exists = inner
            .tags
            .iter()
            .any(|t| t.company_id == company_id && t.name.eq_ignore_ascii_case(name));
        if exists {
            return Err(ServiceError::Conflict("tag already exists".to_string()));
        }

        inner.next_tag_id += 1;
        let tag = Tag {
            id: inner.next_tag_id,
            name: name.to_string(),
            company_id,
            created_by: user_id,
            created_at: chrono::Utc::now(),
        };
        inner.tags.push(tag.clone());
        Ok(tag)
    }

    // Every tag of the company is visible to all of its users.
    async fn available_tags(&self, company_id: i64, _user_id: i64) -> ServiceResult<Vec<Tag>> {
        let inner = self.inner.read().await;
        Ok(inner
            .tags
            .iter()
            .filter(|t| t.company_id == company_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, company_id: Option<i64>) -> User {
        User {
            id,
            login: format!("user{id}"),
            name: "Name".into(),
            surname: "Surname".into(),
            email: format!("user{id}@example.com"),
            company_id,
            active: false,
        }
    }

    #[tokio::test]
    async fn list_is_scoped_to_company_and_paged() {
        let dir = MemoryDirectory::with_users([
            user(1, Some(3)),
            user(2, Some(4)),
            user(3, Some(3)),
            user(4, None),
        ]);

        let all = dir.list_users(3, Page::default()).await.unwrap();
        assert_eq!(all.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 3]);

        let second = dir
            .list_users(3, Page { limit: 1, offset: 1 })
            .await
            .unwrap();
        assert_eq!(second.iter().map(|u| u.id).collect::<Vec<_>>(), vec![3]);
    }

    #[tokio::test]
    async fn duplicate_tag_in_company_conflicts() {
        let dir = MemoryDirectory::new();

        dir.save_tag("promo", 3, 7).await.unwrap();
        assert!(matches!(
            dir.save_tag("PROMO", 3, 8).await,
            Err(ServiceError::Conflict(_))
        ));
        // Same name in another company is fine.
        dir.save_tag("promo", 4, 9).await.unwrap();

        let visible = dir.available_tags(3, 7).await.unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].created_by, 7);
    }

    #[tokio::test]
    async fn activate_and_delete() {
        let dir = MemoryDirectory::with_users([user(1, Some(3))]);

        assert!(dir.activate_user(1).await.unwrap().unwrap().active);
        assert!(dir.activate_user(2).await.unwrap().is_none());
        assert!(dir.delete_user(1).await.unwrap());
        assert!(!dir.delete_user(1).await.unwrap());
    }
}
