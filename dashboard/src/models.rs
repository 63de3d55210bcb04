use serde::{Deserialize, Serialize};

/// One entry of `GET /get_data`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRow {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Body sent by the add and update actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserForm {
    pub name: String,
    pub email: String,
}
