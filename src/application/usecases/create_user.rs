use std::sync::Arc;

use tracing::info;

use crate::domain::{
    errors::DomainError, models::UserFields, repositories::UserRepository,
    value_objects::RecordId,
};

pub struct CreateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CreateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: CreateUserRequest) -> Result<RecordId, DomainError> {
        let fields = UserFields::new(request.name, request.email)?;
        let id = self.repo.insert_one(&fields).await?;
        info!(user_id = %id, "user created");
        Ok(id)
    }
}
