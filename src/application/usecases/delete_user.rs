use std::sync::Arc;

use tracing::info;

use crate::{
    application::usecases::update_user::USER_NOT_FOUND_MESSAGE,
    domain::{errors::DomainError, repositories::UserRepository, value_objects::RecordId},
};

pub struct DeleteUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str) -> Result<(), DomainError> {
        let id: RecordId = id.parse()?;

        if !self.repo.delete_one(&id).await? {
            return Err(DomainError::NotFound(USER_NOT_FOUND_MESSAGE.to_string()));
        }

        info!(user_id = %id, "user deleted");
        Ok(())
    }
}
