use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use crate::{
    application::usecases::{create_user::CreateUserRequest, update_user::UpdateUserRequest},
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::map_user,
        requests::UserRequestDto,
        responses::{
            CreateUserResponse, CreatedUserDto, DeleteUserResponse, ListUsersResponse,
            MessageDto, UpdateUserResponse,
        },
    },
};

#[derive(Clone)]
pub struct UsersEndpoints {
    state: Arc<ApiState>,
}

impl UsersEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl UsersEndpoints {
    /// List every user
    #[oai(path = "/get_data", method = "get", tag = EndpointsTags::Users)]
    pub async fn get_data(&self) -> ListUsersResponse {
        match self.state.list_users_usecase.execute().await {
            Ok(users) => ListUsersResponse::Ok(Json(users.iter().map(map_user).collect())),
            Err(err) => err.into(),
        }
    }

    /// Add a new user
    #[oai(path = "/add_data", method = "post", tag = EndpointsTags::Users)]
    pub async fn add_data(&self, request: Json<UserRequestDto>) -> CreateUserResponse {
        let (name, email) = request.0.into_fields();
        match self
            .state
            .create_user_usecase
            .execute(CreateUserRequest { name, email })
            .await
        {
            Ok(id) => CreateUserResponse::Created(Json(CreatedUserDto {
                message: "User added successfully".to_string(),
                id: id.to_string(),
            })),
            Err(err) => err.into(),
        }
    }

    /// Replace name and email of a user
    #[oai(path = "/update_data/:id", method = "put", tag = EndpointsTags::Users)]
    pub async fn update_data(
        &self,
        id: Path<String>,
        request: Json<UserRequestDto>,
    ) -> UpdateUserResponse {
        let (name, email) = request.0.into_fields();
        let payload = UpdateUserRequest {
            id: id.0,
            name,
            email,
        };

        match self.state.update_user_usecase.execute(payload).await {
            Ok(()) => UpdateUserResponse::Ok(Json(MessageDto::new("User updated"))),
            Err(err) => err.into(),
        }
    }

    /// Delete a user
    #[oai(path = "/delete_data/:id", method = "delete", tag = EndpointsTags::Users)]
    pub async fn delete_data(&self, id: Path<String>) -> DeleteUserResponse {
        match self.state.delete_user_usecase.execute(&id.0).await {
            Ok(()) => DeleteUserResponse::Ok(Json(MessageDto::new("User deleted"))),
            Err(err) => err.into(),
        }
    }
}
