//! Core identifier newtypes with smart constructors.
//!
//! String identifiers validate non-empty input at construction time.
//! Raw constructors are never exported - use smart constructors only.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Stable identity of a story (`objectID` on the wire).
///
/// The search API sends it as a decimal string; locally synthesized
/// stories get one from an [`IdAllocator`](crate::model::IdAllocator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct StoryId(u64);

impl StoryId {
    /// Wrap a raw id. Every `u64` is a valid story id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw numeric id.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for StoryId {
    type Err = InvalidStoryId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| InvalidStoryId::NotNumeric(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for StoryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Self(n)),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Identifier of a reorderable user. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Smart constructor: validates non-empty user ID
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidUserId> {
        let raw = raw.into();
        if raw.is_empty() {
            Err(InvalidUserId::Empty)
        } else {
            Ok(Self(raw))
        }
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UserId {
    type Error = InvalidUserId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

// ===== Error Types =====

/// Error returned when a story id cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidStoryId {
    /// Input was not a non-negative decimal integer.
    #[error("Story ID must be a non-negative integer, got '{0}'")]
    NotNumeric(String),
}

/// Error returned when constructing an invalid user id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidUserId {
    /// User id was empty.
    #[error("User ID cannot be empty")]
    Empty,
}

// ===== Tests =====
