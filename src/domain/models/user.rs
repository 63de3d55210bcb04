use crate::domain::{errors::DomainError, value_objects::RecordId};

pub const MISSING_FIELDS_MESSAGE: &str = "Name and Email are required";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
}

/// The name/email pair a record is created or replaced with.
///
/// Only constructible through [`UserFields::new`], so both fields are
/// always non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    name: String,
    email: String,
}

impl UserFields {
    pub fn new(name: Option<String>, email: Option<String>) -> Result<Self, DomainError> {
        match (name, email) {
            (Some(name), Some(email)) if !name.is_empty() && !email.is_empty() => {
                Ok(Self { name, email })
            }
            _ => Err(DomainError::Validation(MISSING_FIELDS_MESSAGE.to_string())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn into_user(self, id: RecordId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_present() {
        let fields = UserFields::new(Some("Alice".into()), Some("alice@example.com".into())).unwrap();
        assert_eq!(fields.name(), "Alice");
        assert_eq!(fields.email(), "alice@example.com");
    }

    #[test]
    fn missing_or_empty_fields_are_the_same_failure() {
        let cases = [
            (None, Some("a@x.com".to_string())),
            (Some("A".to_string()), None),
            (Some(String::new()), Some("a@x.com".to_string())),
            (Some("A".to_string()), Some(String::new())),
            (None, None),
        ];

        for (name, email) in cases {
            let err = UserFields::new(name, email).unwrap_err();
            assert!(matches!(err, DomainError::Validation(ref msg) if msg == MISSING_FIELDS_MESSAGE));
        }
    }
}
