use poem_openapi::{ApiResponse, Object, payload::Json};

#[derive(Object, Debug, Clone, PartialEq, Eq)]
pub struct UserDto {
    #[oai(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Object, Debug, Clone, PartialEq, Eq)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Object, Debug, Clone, PartialEq, Eq)]
pub struct CreatedUserDto {
    pub message: String,
    pub id: String,
}

#[derive(ApiResponse)]
pub enum ListUsersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<UserDto>>),
    #[oai(status = 500)]
    InternalError(Json<MessageDto>),
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "malformed_create_payload")]
pub enum CreateUserResponse {
    #[oai(status = 201)]
    Created(Json<CreatedUserDto>),
    #[oai(status = 400)]
    BadRequest(Json<MessageDto>),
    #[oai(status = 500)]
    InternalError(Json<MessageDto>),
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "malformed_update_payload")]
pub enum UpdateUserResponse {
    #[oai(status = 200)]
    Ok(Json<MessageDto>),
    #[oai(status = 400)]
    BadRequest(Json<MessageDto>),
    #[oai(status = 404)]
    NotFound(Json<MessageDto>),
    #[oai(status = 500)]
    InternalError(Json<MessageDto>),
}

#[derive(ApiResponse)]
pub enum DeleteUserResponse {
    #[oai(status = 200)]
    Ok(Json<MessageDto>),
    #[oai(status = 400)]
    BadRequest(Json<MessageDto>),
    #[oai(status = 404)]
    NotFound(Json<MessageDto>),
    #[oai(status = 500)]
    InternalError(Json<MessageDto>),
}

fn malformed_create_payload(err: poem::Error) -> CreateUserResponse {
    CreateUserResponse::BadRequest(Json(MessageDto::new(err.to_string())))
}

fn malformed_update_payload(err: poem::Error) -> UpdateUserResponse {
    UpdateUserResponse::BadRequest(Json(MessageDto::new(err.to_string())))
}
