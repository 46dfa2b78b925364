use uuid::Uuid;

use crate::item::ItemId;

/// Session-scoped source of fresh item ids.
///
/// Combines a random per-process salt with a monotonic counter: uniqueness
/// within a session is structural (the counter), uniqueness across sessions
/// rests on the uuid salt. Ids are opaque to everything downstream; nothing
/// may parse them back apart.
#[derive(Debug)]
pub struct IdGenerator {
    session: String,
    counter: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            session: Uuid::new_v4().simple().to_string(),
            counter: 0,
        }
    }

    /// Next unique id. Never returns the same value twice for one generator.
    pub fn next_id(&mut self) -> ItemId {
        self.counter += 1;
        ItemId::new(format!("{}-{}", self.session, self.counter))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
