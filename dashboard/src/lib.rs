//! Terminal dashboard for the user manager API.

pub mod client;
pub mod models;
pub mod session;
pub mod view;

pub use client::{ClientError, HttpUsersApi, UsersApi};
pub use session::{Dashboard, Mode};
