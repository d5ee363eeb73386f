//! The OWO catalog wire format.
//!
//! An OWO document is a top-level JSON object mapping category names to
//! `{ "type": "emoticon"|"emoji"|"image", "container": [{icon, text}, ...] }`.
//! [`parse`] turns one document into collections with typed warnings;
//! [`merge`] combines collections from many documents into one catalog.

pub mod merge;
pub mod parse;

pub use merge::merge_collections;
pub use parse::{ParseOutcome, parse_document};
