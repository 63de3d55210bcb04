use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use thiserror::Error;

use crate::models::{UserForm, UserRow};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server answered with status {0}")]
    Status(StatusCode),
}

/// The four calls the dashboard makes against the user API.
#[async_trait]
pub trait UsersApi: Send + Sync {
    async fn list_users(&self) -> Result<Vec<UserRow>, ClientError>;
    async fn add_user(&self, form: &UserForm) -> Result<(), ClientError>;
    async fn update_user(&self, id: &str, form: &UserForm) -> Result<(), ClientError>;
    async fn delete_user(&self, id: &str) -> Result<(), ClientError>;
}

pub struct HttpUsersApi {
    http: Client,
    base_url: String,
}

impl HttpUsersApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ClientError::Status(status))
    }
}

#[async_trait]
impl UsersApi for HttpUsersApi {
    async fn list_users(&self) -> Result<Vec<UserRow>, ClientError> {
        let response = self.http.get(self.url("/get_data")).send().await?;
        Ok(ensure_success(response)?.json().await?)
    }

    async fn add_user(&self, form: &UserForm) -> Result<(), ClientError> {
        let response = self.http.post(self.url("/add_data")).json(form).send().await?;
        ensure_success(response).map(drop)
    }

    async fn update_user(&self, id: &str, form: &UserForm) -> Result<(), ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/update_data/{id}")))
            .json(form)
            .send()
            .await?;
        ensure_success(response).map(drop)
    }

    async fn delete_user(&self, id: &str) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/delete_data/{id}")))
            .send()
            .await?;
        ensure_success(response).map(drop)
    }
}
