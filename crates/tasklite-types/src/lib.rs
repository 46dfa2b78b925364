pub mod error;
pub mod id;
pub mod item;
pub mod state;
pub mod time;
pub mod validate;

pub use error::{Result, ValidationError};
pub use id::IdGenerator;
pub use item::{Item, ItemId};
pub use state::{AppState, Filter};
pub use validate::{TEXT_MAX_CHARS, validate_text};
