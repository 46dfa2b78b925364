use tasklite_engine::{Counts, count_items, visible_items};
use tasklite_types::{AppState, Filter, IdGenerator, Item, ItemId, time, validate_text};

use crate::snapshot::SnapshotStore;
use crate::storage::StringStore;

/// Partial update applied to a single item. Absent fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    /// Replacement text; validated before anything is applied
    pub text: Option<String>,
    /// Replacement completion flag
    pub completed: Option<bool>,
}

impl ItemPatch {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            completed: None,
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            text: None,
            completed: Some(completed),
        }
    }
}

/// The stateful core: owns the authoritative [`AppState`], applies every
/// mutation, and writes the full snapshot back after each one.
///
/// Operations are single-threaded and run to completion; the next call
/// observes the full effect of the previous one. The store is an owned
/// value with an explicit lifecycle, not a process-wide singleton:
/// construct one per application (or per test) and hand it to whatever
/// drives the UI.
pub struct TodoStore<S: StringStore> {
    state: AppState,
    ids: IdGenerator,
    snapshots: SnapshotStore<S>,
}

impl<S: StringStore> TodoStore<S> {
    /// Open the store over `backend`, seeding state from the stored
    /// snapshot (or defaults when none is usable).
    pub fn open(backend: S) -> Self {
        let snapshots = SnapshotStore::new(backend);
        let state = snapshots.load();
        Self {
            state,
            ids: IdGenerator::new(),
            snapshots,
        }
    }

    // ==========================================
    // Queries
    // ==========================================

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Authoritative list, newest first
    pub fn items(&self) -> &[Item] {
        &self.state.items
    }

    pub fn filter(&self) -> Filter {
        self.state.filter
    }

    pub fn editing_id(&self) -> Option<&ItemId> {
        self.state.editing_id.as_ref()
    }

    /// Items matching the current filter, recomputed on demand
    pub fn visible_items(&self) -> Vec<&Item> {
        visible_items(&self.state.items, self.state.filter)
    }

    /// Aggregate counts over the full list (not the filtered view)
    pub fn counts(&self) -> Counts {
        count_items(&self.state.items)
    }

    // ==========================================
    // Mutations (each one persists the snapshot)
    // ==========================================

    /// Validate `raw_text` and prepend a fresh item (newest first).
    ///
    /// Returns `false` without touching state when validation rejects the
    /// text. The rejection reason goes to the log; showing it to the user
    /// is the UI layer's concern.
    pub fn add_item(&mut self, raw_text: &str) -> bool {
        let text = match validate_text(raw_text) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("rejected todo text: {err}");
                return false;
            }
        };

        let item = Item::new(self.ids.next_id(), text);
        self.state.items.insert(0, item);
        self.persist();
        true
    }

    /// Apply `patch` to the item with `id`, stamping `updated_at`.
    ///
    /// A missing id is a no-op. A patch whose text fails validation is
    /// discarded whole: no field is applied and `updated_at` keeps its old
    /// value. A snapshot write happens after every call either way,
    /// mirroring the save-on-every-state-change timing of the persistence
    /// contract.
    pub fn update_item(&mut self, id: &ItemId, patch: ItemPatch) {
        if let Some(item) = self.state.items.iter_mut().find(|item| &item.id == id)
            && let Err(err) = apply_patch(item, patch)
        {
            log::warn!("rejected todo text: {err}");
        }
        self.persist();
    }

    /// Remove the item with `id`, if present.
    ///
    /// Clears the editing pointer in the same transition when it pointed at
    /// the removed item; no observable state ever has the pointer aimed at
    /// a deleted id.
    pub fn delete_item(&mut self, id: &ItemId) {
        self.state.items.retain(|item| &item.id != id);
        if self.state.editing_id.as_ref() == Some(id) {
            self.state.editing_id = None;
        }
        self.persist();
    }

    /// Flip the completion flag of the item with `id`.
    ///
    /// A missing id reads as not-completed, flips to `true`, and the update
    /// is then a no-op on the absent item. Kept as a harmless degenerate
    /// case; no caller path passes ids outside the list.
    pub fn toggle_item(&mut self, id: &ItemId) {
        let completed = self
            .state
            .items
            .iter()
            .find(|item| &item.id == id)
            .map(|item| item.completed)
            .unwrap_or(false);

        self.update_item(id, ItemPatch::completed(!completed));
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.state.filter = filter;
        self.persist();
    }

    /// Point the in-place editor at an item, or clear it with `None`.
    pub fn set_editing(&mut self, id: Option<ItemId>) {
        self.state.editing_id = id;
        self.persist();
    }

    /// Drop every completed item.
    ///
    /// Leaves the editing pointer alone even when it referenced a removed
    /// item: the edit UI prevents editing a completed item, and the next
    /// load resets a dangling pointer.
    pub fn clear_completed(&mut self) {
        self.state.items.retain(|item| !item.completed);
        self.persist();
    }

    fn persist(&mut self) {
        self.snapshots.save(&self.state);
    }
}

/// Merge `patch` into `item` transactionally.
///
/// Text is validated before anything is written, so a failing patch leaves
/// the item byte-for-byte unchanged. An empty patch still stamps
/// `updated_at`; the call itself counts as a mutation of the item.
fn apply_patch(item: &mut Item, patch: ItemPatch) -> tasklite_types::Result<()> {
    let text = patch.text.as_deref().map(validate_text).transpose()?;

    if let Some(text) = text {
        item.text = text;
    }
    if let Some(completed) = patch.completed {
        item.completed = completed;
    }
    item.updated_at = time::now();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn open_empty() -> TodoStore<MemoryStore> {
        TodoStore::open(MemoryStore::new())
    }

    #[test]
    fn test_add_prepends_and_returns_true() {
        let mut store = open_empty();

        assert!(store.add_item("first"));
        assert!(store.add_item("second"));

        let texts: Vec<&str> = store.items().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, ["second", "first"]);
    }

    #[test]
    fn test_add_rejects_invalid_text() {
        let mut store = open_empty();

        assert!(!store.add_item(""));
        assert!(!store.add_item("   "));
        assert!(!store.add_item(&"x".repeat(501)));
        assert!(store.items().is_empty());

        assert!(store.add_item(&"x".repeat(500)));
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn test_update_text_is_validated_and_trimmed() {
        let mut store = open_empty();
        store.add_item("original");
        let id = store.items()[0].id.clone();

        store.update_item(&id, ItemPatch::text("  edited  "));
        assert_eq!(store.items()[0].text, "edited");

        store.update_item(&id, ItemPatch::text("   "));
        assert_eq!(store.items()[0].text, "edited");
    }

    #[test]
    fn test_failed_text_patch_discards_whole_update() {
        let mut store = open_empty();
        store.add_item("original");
        let before = store.items()[0].clone();

        // completed=true rides along with a failing text patch; nothing applies
        store.update_item(
            &before.id,
            ItemPatch {
                text: Some("  ".to_string()),
                completed: Some(true),
            },
        );

        assert_eq!(store.items()[0], before);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut store = open_empty();
        store.add_item("only");
        let before = store.state().clone();

        store.update_item(&ItemId::new("not-there"), ItemPatch::completed(true));
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_toggle_missing_id_is_noop() {
        let mut store = open_empty();
        store.add_item("only");
        let before = store.state().clone();

        store.toggle_item(&ItemId::new("not-there"));
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_delete_clears_editing_pointer() {
        let mut store = open_empty();
        store.add_item("editable");
        let id = store.items()[0].id.clone();

        store.set_editing(Some(id.clone()));
        assert_eq!(store.editing_id(), Some(&id));

        store.delete_item(&id);
        assert!(store.items().is_empty());
        assert_eq!(store.editing_id(), None);
    }

    #[test]
    fn test_delete_other_item_keeps_editing_pointer() {
        let mut store = open_empty();
        store.add_item("kept");
        store.add_item("doomed");
        let kept = store.items()[1].id.clone();
        let doomed = store.items()[0].id.clone();

        store.set_editing(Some(kept.clone()));
        store.delete_item(&doomed);

        assert_eq!(store.editing_id(), Some(&kept));
    }

    #[test]
    fn test_clear_completed_keeps_editing_pointer() {
        let mut store = open_empty();
        store.add_item("done");
        let id = store.items()[0].id.clone();

        store.toggle_item(&id);
        store.set_editing(Some(id.clone()));
        store.clear_completed();

        // The pointer dangles on purpose; see the operation's contract.
        assert!(store.items().is_empty());
        assert_eq!(store.editing_id(), Some(&id));
    }
}
