use serde::{Deserialize, Serialize};

use crate::item::{Item, ItemId};

/// Which subset of the list a derived view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every item, unchanged order
    All,
    /// Items not yet completed
    Active,
    /// Completed items only
    Completed,
}

impl Default for Filter {
    fn default() -> Self {
        Self::All
    }
}

impl Filter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    /// Parse a stored filter name. Anything outside the closed set is `None`;
    /// callers decide the fallback (persistence defaults to `All`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Filter::All),
            "active" => Some(Filter::Active),
            "completed" => Some(Filter::Completed),
            _ => None,
        }
    }
}

/// The full persisted unit: authoritative item list, active filter and
/// in-place editing pointer.
///
/// Serializes to the snapshot shape existing stored data uses:
/// `{"todos": [...], "filter": "all", "editingId": null}`. The item list is
/// called `todos` on the wire for round-trip compatibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Authoritative item list, newest first
    #[serde(rename = "todos")]
    pub items: Vec<Item>,

    /// Active derived-view filter
    #[serde(default)]
    pub filter: Filter,

    /// Item currently targeted for in-place editing.
    /// Invariant: when set, an item with this id exists in `items`.
    #[serde(rename = "editingId", default)]
    pub editing_id: Option<ItemId>,
}
