//! Library entry for owopick, the engine behind an emoji picker.
//!
//! The crate ingests OWO-format catalog files from configured URLs, merges
//! them into one de-duplicated catalog, and drives incremental search plus
//! keyboard-driven selection over the result. Rendering, settings
//! persistence, and the modal lifecycle belong to the embedding application
//! and talk to this crate through [`events`] channels and the [`sources`]
//! traits.
//!
//! Typical wiring:
//! - Build a [`sources::CatalogLoader`] from a fetcher and a cache store,
//!   then hand it to [`events::spawn_loader_worker`].
//! - Feed raw keystrokes through [`events::spawn_query_worker`] and the
//!   settled queries (plus every other control input) through
//!   [`events::handle_command`].
//! - Forward [`events::PickerEvent`]s to the renderer.

pub mod error;
pub mod events;
pub mod index;
pub mod logic;
pub mod owo;
pub mod sources;
pub mod state;
