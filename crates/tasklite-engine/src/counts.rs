use tasklite_types::Item;

/// Aggregate counts over the authoritative list.
///
/// Never persisted; always recomputed, so `total == active + completed`
/// holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

pub fn count_items(items: &[Item]) -> Counts {
    let total = items.len();
    let completed = items.iter().filter(|item| item.completed).count();

    Counts {
        total,
        active: total - completed,
        completed,
    }
}
