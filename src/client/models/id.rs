//! Opaque record identifiers

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Server-assigned identifier of an Organization, User or Membership.
///
/// The backend emits integer primary keys, but nothing here relies on that:
/// identifiers are compared and echoed back, never computed with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse operator input into an identifier, treating blank input as "none".
    pub fn from_input(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self::new(trimmed))
        }
    }

    /// The integer key this identifier spells, if it round-trips exactly.
    fn as_integer(&self) -> Option<u64> {
        self.0.parse::<u64>().ok().filter(|n| n.to_string() == self.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Echo numeric keys back as numbers so request bodies match what the backend sent
        match self.as_integer() {
            Some(n) => serializer.serialize_u64(n),
            None => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Number(u64),
            Text(String),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Number(n) => RecordId(n.to_string()),
            Wire::Text(s) => RecordId(s),
        })
    }
}
