use poem_openapi::payload::Json;
use tracing::error;

use crate::{
    domain::{errors::DomainError, models::User},
    presentation::http::responses::{
        CreateUserResponse, DeleteUserResponse, ListUsersResponse, MessageDto,
        UpdateUserResponse, UserDto,
    },
};

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

pub fn map_user(user: &User) -> UserDto {
    UserDto {
        id: user.id.to_string(),
        name: user.name.clone(),
        email: user.email.clone(),
    }
}

enum Failure {
    BadRequest(MessageDto),
    NotFound(MessageDto),
    Internal(MessageDto),
}

// Store errors are logged here and reach the caller only as a generic message.
fn classify(err: DomainError) -> Failure {
    match err {
        DomainError::Validation(message) => Failure::BadRequest(MessageDto::new(message)),
        DomainError::MalformedIdentifier(err) => Failure::BadRequest(MessageDto::new(err.to_string())),
        DomainError::NotFound(message) => Failure::NotFound(MessageDto::new(message)),
        DomainError::Store(err) => {
            error!(error = %format!("{err:#}"), "store operation failed");
            Failure::Internal(MessageDto::new(INTERNAL_ERROR_MESSAGE))
        }
    }
}

impl From<DomainError> for ListUsersResponse {
    fn from(err: DomainError) -> Self {
        match classify(err) {
            Failure::Internal(body) => Self::InternalError(Json(body)),
            Failure::BadRequest(body) | Failure::NotFound(body) => {
                error!(message = %body.message, "unexpected client error while listing users");
                Self::InternalError(Json(MessageDto::new(INTERNAL_ERROR_MESSAGE)))
            }
        }
    }
}

impl From<DomainError> for CreateUserResponse {
    fn from(err: DomainError) -> Self {
        match classify(err) {
            Failure::BadRequest(body) => Self::BadRequest(Json(body)),
            Failure::Internal(body) => Self::InternalError(Json(body)),
            Failure::NotFound(body) => {
                error!(message = %body.message, "unexpected not found while creating user");
                Self::InternalError(Json(MessageDto::new(INTERNAL_ERROR_MESSAGE)))
            }
        }
    }
}

impl From<DomainError> for UpdateUserResponse {
    fn from(err: DomainError) -> Self {
        match classify(err) {
            Failure::BadRequest(body) => Self::BadRequest(Json(body)),
            Failure::NotFound(body) => Self::NotFound(Json(body)),
            Failure::Internal(body) => Self::InternalError(Json(body)),
        }
    }
}

impl From<DomainError> for DeleteUserResponse {
    fn from(err: DomainError) -> Self {
        match classify(err) {
            Failure::BadRequest(body) => Self::BadRequest(Json(body)),
            Failure::NotFound(body) => Self::NotFound(Json(body)),
            Failure::Internal(body) => Self::InternalError(Json(body)),
        }
    }
}
