use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

const RECORD_ID_LEN: usize = 12;

/// Store-assigned identifier of a record.
///
/// Twelve bytes: a big-endian creation timestamp in seconds followed by eight
/// random bytes. At the API boundary it is always rendered as 24 lowercase
/// hexadecimal characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId([u8; RECORD_ID_LEN]);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordIdError {
    #[error("'{value}' is not a valid identifier: expected 24 hexadecimal characters, got {length}")]
    InvalidLength { value: String, length: usize },
    #[error(
        "'{value}' is not a valid identifier: non-hexadecimal character '{character}' at position {position}"
    )]
    InvalidCharacter {
        value: String,
        character: char,
        position: usize,
    },
}

impl RecordId {
    pub fn generate() -> Self {
        let seconds = u32::try_from(Utc::now().timestamp()).unwrap_or(u32::MAX);
        let entropy = Uuid::new_v4();

        let mut bytes = [0u8; RECORD_ID_LEN];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..].copy_from_slice(&entropy.as_bytes()[..RECORD_ID_LEN - 4]);
        Self(bytes)
    }

    pub const fn from_bytes(bytes: [u8; RECORD_ID_LEN]) -> Self {
        Self(bytes)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for RecordId {
    type Err = RecordIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.len() != RECORD_ID_LEN * 2 {
            return Err(RecordIdError::InvalidLength {
                value: value.to_string(),
                length: value.chars().count(),
            });
        }

        // positions are counted in characters of the input, not bytes
        if let Some((position, character)) = value
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(RecordIdError::InvalidCharacter {
                value: value.to_string(),
                character,
                position,
            });
        }

        let mut bytes = [0u8; RECORD_ID_LEN];
        hex::decode_to_slice(value, &mut bytes).map_err(|_| RecordIdError::InvalidLength {
            value: value.to_string(),
            length: value.chars().count(),
        })?;
        Ok(Self(bytes))
    }
}
