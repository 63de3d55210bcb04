pub mod health;
pub mod root;
pub mod users;

pub use health::HealthEndpoints;
pub use root::{ApiState, EndpointsTags};
pub use users::UsersEndpoints;
