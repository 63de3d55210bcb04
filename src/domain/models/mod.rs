pub mod user;

pub use user::{MISSING_FIELDS_MESSAGE, User, UserFields};
