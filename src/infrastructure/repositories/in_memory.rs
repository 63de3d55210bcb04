use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    models::{User, UserFields},
    repositories::UserRepository,
    value_objects::RecordId,
};

/// Keeps records in insertion order.
#[derive(Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert_one(&self, fields: &UserFields) -> anyhow::Result<RecordId> {
        let id = RecordId::generate();
        let mut users = self.users.write().await;
        users.push(fields.clone().into_user(id));
        Ok(id)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn update_one(&self, id: &RecordId, fields: &UserFields) -> anyhow::Result<bool> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| &u.id == id) {
            Some(existing) => {
                existing.name = fields.name().to_string();
                existing.email = fields.email().to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_one(&self, id: &RecordId) -> anyhow::Result<bool> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| &u.id != id);
        Ok(users.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str) -> UserFields {
        UserFields::new(Some(name.to_string()), Some(email.to_string())).unwrap()
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order() {
        let repo = InMemoryUserRepository::new();
        let first = repo.insert_one(&fields("A", "a@x.com")).await.unwrap();
        let second = repo.insert_one(&fields("B", "b@x.com")).await.unwrap();

        let ids: Vec<_> = repo.find_all().await.unwrap().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[tokio::test]
    async fn update_replaces_both_fields_in_place() {
        let repo = InMemoryUserRepository::new();
        let id = repo.insert_one(&fields("A", "a@x.com")).await.unwrap();

        assert!(repo.update_one(&id, &fields("B", "b@x.com")).await.unwrap());

        let users = repo.find_all().await.unwrap();
        assert_eq!(users, vec![User { id, name: "B".into(), email: "b@x.com".into() }]);
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_records() {
        let repo = InMemoryUserRepository::new();
        let unknown = RecordId::from_bytes([0; 12]);

        assert!(!repo.update_one(&unknown, &fields("B", "b@x.com")).await.unwrap());
        assert!(!repo.delete_one(&unknown).await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_only_the_matching_record() {
        let repo = InMemoryUserRepository::new();
        let keep = repo.insert_one(&fields("A", "a@x.com")).await.unwrap();
        let gone = repo.insert_one(&fields("B", "b@x.com")).await.unwrap();

        assert!(repo.delete_one(&gone).await.unwrap());
        assert!(!repo.delete_one(&gone).await.unwrap());

        let users = repo.find_all().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, keep);
    }
}
