//! Users shown in the reorderable list.

use crate::model::UserId;
use serde::{Deserialize, Serialize};

/// A reorderable entity. Only its position in a list ever changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identity; stable across reorders.
    pub id: UserId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl User {
    /// Create a user.
    pub fn new(id: UserId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// "First Last", as shown in the list.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Users the reorderable list starts with.
pub fn default_roster() -> Vec<User> {
    [
        ("1", "Robin", "Wieruch"),
        ("2", "Aiden", "Kettel"),
        ("3", "Jannet", "Layn"),
    ]
    .into_iter()
    .filter_map(|(id, first, last)| UserId::new(id).ok().map(|id| User::new(id, first, last)))
    .collect()
}
