//! Catalog value types and the picker's interactive state container.

pub mod picker;
pub mod types;

pub use picker::PickerState;
pub use types::{CatalogStatus, Direction, EmojiCollection, EmojiItem, EmojiKind};
