//! Catalog retrieval: cache store, HTTP fetch, and the per-URL loader.
//!
//! The loader is built by injection: it takes a [`CatalogFetcher`] and a
//! [`CacheStore`] at construction and never reaches for process-global
//! state. Both collaborators are trait objects so hosts (and tests) can
//! swap in their own transports and stores.

pub mod cache;
pub mod fetch;
pub mod loader;

pub use cache::{CacheStore, CachedCatalog, MemoryCacheStore};
pub use fetch::{CatalogFetcher, FetchedDocument, HttpFetcher};
pub use loader::{CatalogLoader, LoadOutcome};
