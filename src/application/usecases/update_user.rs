use std::sync::Arc;

use tracing::info;

use crate::domain::{
    errors::DomainError, models::UserFields, repositories::UserRepository,
    value_objects::RecordId,
};

pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

pub struct UpdateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

pub struct UpdateUserRequest {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UpdateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Presence check first, then identifier parsing, then the store.
    pub async fn execute(&self, request: UpdateUserRequest) -> Result<(), DomainError> {
        let fields = UserFields::new(request.name, request.email)?;
        let id: RecordId = request.id.parse()?;

        if !self.repo.update_one(&id, &fields).await? {
            return Err(DomainError::NotFound(USER_NOT_FOUND_MESSAGE.to_string()));
        }

        info!(user_id = %id, "user updated");
        Ok(())
    }
}
