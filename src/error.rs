//! Error taxonomy for catalog ingestion.
//!
//! Fatal, per-source conditions live in [`CatalogError`]; non-fatal item and
//! category findings live in [`ParseWarning`] and ride alongside parsed data
//! so callers can decide whether to surface, aggregate, or drop them.

use thiserror::Error;

/// A condition that fails one catalog source (or, for the standalone
/// content-parsing path, the whole call).
///
/// The multi-URL loader converts every variant into "skip this source" with
/// a logged diagnostic; only the single-payload entry points let these
/// escape to the caller.
#[derive(Clone, Debug, Error)]
pub enum CatalogError {
    /// The configured source string is not a syntactically valid URL.
    #[error("invalid URL `{url}`: {reason}")]
    InvalidUrl {
        /// The offending source string.
        url: String,
        /// Parser-reported reason.
        reason: String,
    },
    /// The transport layer failed before an HTTP status was available
    /// (DNS, connect, read).
    #[error("network error fetching `{url}`: {message}")]
    Network {
        /// The URL being fetched.
        url: String,
        /// Transport-level failure description.
        message: String,
    },
    /// The server answered with a non-success status.
    #[error("HTTP status {status} fetching `{url}`")]
    HttpStatus {
        /// The URL being fetched.
        url: String,
        /// The non-2xx status code.
        status: u16,
    },
    /// The response body (or provided content) is not valid JSON.
    #[error("invalid JSON in `{origin}`: {message}")]
    JsonSyntax {
        /// Source URL or file label the payload came from.
        origin: String,
        /// JSON parser error text.
        message: String,
    },
    /// The document parsed as JSON but does not match the OWO catalog
    /// schema. Document-level validation is all-or-nothing.
    #[error("invalid OWO structure in `{origin}`: {reason}")]
    SchemaValidation {
        /// Source URL or file label the payload came from.
        origin: String,
        /// First structural violation found.
        reason: String,
    },
    /// The cache store could not be read or written. Loaders treat this as
    /// a cache miss; it is never fatal on the multi-URL path.
    #[error("cache unavailable: {0}")]
    CacheUnavailable(String),
}

/// A non-fatal finding produced while parsing a structurally valid
/// document. Warnings never abort a category or a source.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseWarning {
    /// An item failed sanitation and was dropped from its category.
    #[error("dropped item {index} in category `{category}`: {reason}")]
    InvalidItem {
        /// Category the item belonged to.
        category: String,
        /// Positional index within the source container array.
        index: usize,
        /// Why the item was rejected.
        reason: String,
    },
    /// Two items in one category synthesized the same key. Both copies are
    /// kept at parse time; the merger resolves the collision first-wins.
    #[error("duplicate key `{key}` in category `{category}`")]
    DuplicateKey {
        /// Category containing the collision.
        category: String,
        /// The colliding key.
        key: String,
    },
    /// A category yielded no valid items and was omitted from the result.
    #[error("category `{category}` has no valid items")]
    EmptyCategory {
        /// Name of the omitted category.
        category: String,
    },
}

/// One failed source URL from a multi-URL load, for diagnostics.
#[derive(Clone, Debug)]
pub struct SourceFailure {
    /// The source URL that was skipped.
    pub url: String,
    /// Why it was skipped.
    pub error: CatalogError,
}

/// A parse warning tagged with the source it came from.
#[derive(Clone, Debug)]
pub struct SourceWarning {
    /// Source URL or file label.
    pub origin: String,
    /// The finding itself.
    pub warning: ParseWarning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Error display strings carry the offending source and reason
    ///
    /// - Input: Representative `CatalogError` and `ParseWarning` values
    /// - Output: Rendered messages mention URL/category and detail
    fn error_display_mentions_origin() {
        let e = CatalogError::HttpStatus {
            url: "https://example.com/owo.json".into(),
            status: 404,
        };
        assert_eq!(
            e.to_string(),
            "HTTP status 404 fetching `https://example.com/owo.json`"
        );

        let w = ParseWarning::DuplicateKey {
            category: "Faces".into(),
            key: "faces_0".into(),
        };
        assert_eq!(w.to_string(), "duplicate key `faces_0` in category `Faces`");
    }
}
