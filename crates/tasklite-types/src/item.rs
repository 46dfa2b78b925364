use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time;

/// Opaque identifier of a single todo item.
///
/// Assigned once at creation, immutable afterwards, never reused within a
/// running session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One task record.
///
/// Maps 1:1 to an entry of the persisted `todos` array. Text is always the
/// trimmed, validated form; raw user input never lands here directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique item id (stable across edits)
    pub id: ItemId,

    /// Task text, trimmed and non-empty
    pub text: String,

    /// Completion flag
    pub completed: bool,

    /// Creation timestamp (UTC, millisecond precision)
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,

    /// Last mutation timestamp, bumped on every text or completion change
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Create a fresh, not-yet-completed item with both timestamps set to now.
    ///
    /// `text` must already have passed [`crate::validate_text`].
    pub fn new(id: ItemId, text: String) -> Self {
        let now = time::now();
        Self {
            id,
            text,
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }
}
