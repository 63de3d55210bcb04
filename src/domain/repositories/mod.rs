use async_trait::async_trait;

use crate::domain::{
    models::{User, UserFields},
    value_objects::RecordId,
};

/// Document collection holding user records.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert_one(&self, fields: &UserFields) -> anyhow::Result<RecordId>;

    /// Every record, in the store's iteration order.
    async fn find_all(&self) -> anyhow::Result<Vec<User>>;

    /// Replaces name and email of the matching record. Returns whether a record matched.
    async fn update_one(&self, id: &RecordId, fields: &UserFields) -> anyhow::Result<bool>;

    /// Returns whether a record was removed.
    async fn delete_one(&self, id: &RecordId) -> anyhow::Result<bool>;
}
