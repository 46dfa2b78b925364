use serde_json::Value;

use tasklite_types::{AppState, Filter, Item, ItemId};

use crate::storage::StringStore;

/// Fixed key the full application snapshot lives under
pub const STORAGE_KEY: &str = "todos-app-data";

/// Persistence adapter: serializes the full [`AppState`] into a single
/// string-store entry and restores it defensively.
///
/// Neither direction fails outward. `load` degrades to the default state on
/// any read or parse problem; `save` logs and swallows backend errors, so a
/// full or unavailable medium never reaches the store.
pub struct SnapshotStore<S: StringStore> {
    backend: S,
}

impl<S: StringStore> SnapshotStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Read the stored snapshot, or the default state when it is absent or
    /// unusable.
    pub fn load(&self) -> AppState {
        let raw = match self.backend.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return AppState::default(),
            Err(err) => {
                log::warn!("failed to read stored todos, starting empty: {err:#}");
                return AppState::default();
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => coerce_state(&value),
            Err(err) => {
                log::warn!("stored todos are not valid JSON, starting empty: {err}");
                AppState::default()
            }
        }
    }

    /// Write the full snapshot, overwriting any prior value. Best effort:
    /// a failed write leaves the previous snapshot in place and the
    /// in-memory state untouched.
    pub fn save(&mut self, state: &AppState) {
        let payload = match serde_json::to_string(state) {
            Ok(payload) => payload,
            Err(err) => {
                log::error!("failed to serialize todos: {err}");
                return;
            }
        };

        if let Err(err) = self.backend.set(STORAGE_KEY, &payload) {
            log::error!("failed to persist todos: {err:#}");
        }
    }
}

/// Rebuild an [`AppState`] from an untrusted JSON value, field by field.
///
/// A non-array `todos` becomes the empty list, entries that do not parse
/// are dropped, an unknown `filter` falls back to `all`, and an `editingId`
/// referencing no surviving item is reset to null so the state invariant
/// holds from the first observable frame.
fn coerce_state(value: &Value) -> AppState {
    let items: Vec<Item> = match value.get("todos") {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(|entry| match serde_json::from_value(entry.clone()) {
                Ok(item) => Some(item),
                Err(err) => {
                    log::warn!("dropping malformed stored todo: {err}");
                    None
                }
            })
            .collect(),
        _ => Vec::new(),
    };

    let filter = value
        .get("filter")
        .and_then(Value::as_str)
        .and_then(Filter::parse)
        .unwrap_or_default();

    let editing_id = value
        .get("editingId")
        .and_then(Value::as_str)
        .map(ItemId::new)
        .filter(|id| items.iter().any(|item| &item.id == id));

    AppState {
        items,
        filter,
        editing_id,
    }
}
