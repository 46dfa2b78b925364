use tasklite_types::{Filter, Item};

/// Project the item list into the subset matching `filter`.
///
/// Pure and recomputed from scratch on demand; list order is preserved.
/// `All` is the identity projection, `Active` and `Completed` partition the
/// list by completion flag.
pub fn visible_items(items: &[Item], filter: Filter) -> Vec<&Item> {
    match filter {
        Filter::All => items.iter().collect(),
        Filter::Active => items.iter().filter(|item| !item.completed).collect(),
        Filter::Completed => items.iter().filter(|item| item.completed).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklite_types::ItemId;

    fn item(id: &str, completed: bool) -> Item {
        let mut item = Item::new(ItemId::new(id), format!("task {}", id));
        item.completed = completed;
        item
    }

    #[test]
    fn test_all_is_identity() {
        let items = vec![item("1", false), item("2", true), item("3", false)];

        let visible = visible_items(&items, Filter::All);
        assert_eq!(visible.len(), 3);
        assert!(visible.iter().zip(&items).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_active_and_completed_partition_the_list() {
        let items = vec![
            item("1", false),
            item("2", true),
            item("3", false),
            item("4", true),
        ];

        let active = visible_items(&items, Filter::Active);
        let completed = visible_items(&items, Filter::Completed);

        assert_eq!(active.len() + completed.len(), items.len());
        assert!(active.iter().all(|i| !i.completed));
        assert!(completed.iter().all(|i| i.completed));
        // disjoint by id
        assert!(active.iter().all(|a| completed.iter().all(|c| a.id != c.id)));
    }

    #[test]
    fn test_order_preserved_within_subset() {
        let items = vec![item("1", true), item("2", false), item("3", true)];

        let completed = visible_items(&items, Filter::Completed);
        let ids: Vec<&str> = completed.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn test_empty_list() {
        for filter in [Filter::All, Filter::Active, Filter::Completed] {
            assert!(visible_items(&[], filter).is_empty());
        }
    }
}
