//! Per-URL fetch-or-cache orchestration.

use std::sync::Arc;

use serde_json::Value;
use url::Url;

use crate::error::{CatalogError, SourceFailure, SourceWarning};
use crate::owo::parse::ParseOutcome;
use crate::owo::{merge_collections, parse_document};
use crate::sources::cache::CacheStore;
use crate::sources::fetch::CatalogFetcher;
use crate::state::EmojiCollection;

/// Result of a multi-URL load: the merged catalog plus everything that
/// went wrong along the way. `load_all` never fails as a whole; a bad
/// source contributes a [`SourceFailure`] instead of aborting the rest.
#[derive(Clone, Debug, Default)]
pub struct LoadOutcome {
    /// Merged collections in first-appearance order across sources.
    pub collections: Vec<EmojiCollection>,
    /// Sources that were skipped, with the reason each one failed.
    pub failures: Vec<SourceFailure>,
    /// Non-fatal parse findings, tagged with their source.
    pub warnings: Vec<SourceWarning>,
}

impl LoadOutcome {
    /// Whether at least one source was attempted and every one failed.
    #[must_use]
    pub fn fully_failed(&self) -> bool {
        self.collections.is_empty() && !self.failures.is_empty()
    }
}

/// Fetches, caches, parses, and merges catalog sources.
///
/// Collaborators are injected at construction; the loader holds no global
/// state and can be cloned cheaply behind [`Arc`]s by the worker layer.
pub struct CatalogLoader {
    /// Transport for cache misses and forced refreshes.
    fetcher: Arc<dyn CatalogFetcher>,
    /// Payload store read before and written after every fetch.
    cache: Arc<dyn CacheStore>,
}

impl CatalogLoader {
    /// Build a loader from its two collaborators.
    #[must_use]
    pub fn new(fetcher: Arc<dyn CatalogFetcher>, cache: Arc<dyn CacheStore>) -> Self {
        Self { fetcher, cache }
    }

    /// What: Load every configured source and merge the results.
    ///
    /// Inputs:
    /// - `urls`: Source URLs, processed sequentially in the given order.
    /// - `force_refresh`: Skip cache reads and fetch every source anew.
    ///
    /// Output:
    /// - [`LoadOutcome`] whose collection order follows first appearance
    ///   across the URL sequence. Failures are isolated per URL and
    ///   reported in the outcome, never raised.
    pub async fn load_all(&self, urls: &[String], force_refresh: bool) -> LoadOutcome {
        let mut collections = Vec::new();
        let mut outcome = LoadOutcome::default();
        for url in urls {
            let url = url.trim();
            if url.is_empty() {
                continue;
            }
            match self.load_url(url, force_refresh).await {
                Ok(parsed) => {
                    outcome.warnings.extend(parsed.warnings.into_iter().map(|warning| {
                        SourceWarning {
                            origin: url.to_string(),
                            warning,
                        }
                    }));
                    collections.extend(parsed.collections);
                }
                Err(error) => {
                    tracing::warn!(url = %url, error = %error, "skipping catalog source");
                    outcome.failures.push(SourceFailure {
                        url: url.to_string(),
                        error,
                    });
                }
            }
        }
        outcome.collections = merge_collections(collections);
        outcome
    }

    /// What: Load one source, from cache when possible.
    ///
    /// Inputs:
    /// - `url`: Source URL; blank input yields an empty outcome.
    /// - `force_refresh`: Bypass the cache read (the write-back after a
    ///   successful fetch still happens).
    ///
    /// Output:
    /// - Parsed collections and warnings for this source.
    ///
    /// # Errors
    /// - [`CatalogError::InvalidUrl`] for syntactically malformed URLs.
    /// - [`CatalogError::Network`] for transport failures.
    /// - [`CatalogError::HttpStatus`] for non-2xx responses.
    /// - [`CatalogError::JsonSyntax`] / [`CatalogError::SchemaValidation`]
    ///   for undecodable or non-OWO payloads (cached payloads included).
    ///
    /// Details:
    /// - A cache-store failure is logged and treated as a miss; it never
    ///   fails the source.
    pub async fn load_url(
        &self,
        url: &str,
        force_refresh: bool,
    ) -> Result<ParseOutcome, CatalogError> {
        let url = url.trim();
        if url.is_empty() {
            return Ok(ParseOutcome::default());
        }
        Url::parse(url).map_err(|e| CatalogError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if !force_refresh {
            match self.cache.get(url).await {
                Ok(Some(entry)) => {
                    tracing::debug!(url = %url, "catalog served from cache");
                    return parse_document(&entry.json, url);
                }
                Ok(None) => {}
                Err(error) => {
                    tracing::warn!(url = %url, error = %error, "cache read failed, fetching");
                }
            }
        }

        let document = self.fetcher.fetch(url).await?;
        if !(200..300).contains(&document.status) {
            return Err(CatalogError::HttpStatus {
                url: url.to_string(),
                status: document.status,
            });
        }
        let json: Value =
            serde_json::from_str(&document.body).map_err(|e| CatalogError::JsonSyntax {
                origin: url.to_string(),
                message: e.to_string(),
            })?;
        if let Err(error) = self.cache.set(url, json.clone(), document.etag).await {
            tracing::warn!(url = %url, error = %error, "cache write failed");
        }
        parse_document(&json, url)
    }

    /// What: Parse a single known payload outside the URL path.
    ///
    /// Inputs:
    /// - `content`: Raw catalog text (e.g. a local file's contents).
    /// - `origin`: Label recorded on collections and in diagnostics.
    ///
    /// Output:
    /// - Parsed collections and warnings.
    ///
    /// # Errors
    /// - [`CatalogError::JsonSyntax`] / [`CatalogError::SchemaValidation`]
    ///   surface directly; unlike [`Self::load_all`], this entry point is
    ///   deliberately fail-fast so the caller can decide.
    pub fn parse_content(content: &str, origin: &str) -> Result<ParseOutcome, CatalogError> {
        let json: Value = serde_json::from_str(content).map_err(|e| CatalogError::JsonSyntax {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;
        parse_document(&json, origin)
    }
}
