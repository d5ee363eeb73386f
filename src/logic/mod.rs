//! Picker transition logic.
//!
//! Free functions that mutate [`crate::state::PickerState`] in response to
//! control input and emit [`crate::events::PickerEvent`]s over the
//! renderer-bound channel. Every function here is synchronous; the async
//! edges (debounce, loading) live in [`crate::events`].

pub mod catalog;
pub mod query;
pub mod selection;
pub mod tabs;

pub use catalog::{apply_catalog, apply_load_result};
pub use query::apply_query;
pub use selection::{activate_selected, move_selection};
pub use tabs::{next_tab, prev_tab, switch_collection};
