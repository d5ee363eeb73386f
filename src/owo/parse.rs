//! OWO document validation and parsing.
//!
//! Validation is two-tiered: the document shape is checked strictly up
//! front (a file that is not an OWO catalog is rejected outright), while
//! individual items are sanitized leniently (one bad entry is dropped with
//! a warning and never takes its category down with it).

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::{CatalogError, ParseWarning};
use crate::state::{EmojiCollection, EmojiItem, EmojiKind};

/// Matches the `src` attribute of an HTML `<img>` tag, case-insensitively.
static IMG_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)src=['"]([^'"]+)['"]"#).expect("img src pattern is valid")
});

/// Collections parsed from one document, together with every non-fatal
/// finding made along the way.
#[derive(Clone, Debug, Default)]
pub struct ParseOutcome {
    /// Collections in document order; zero-item categories are omitted.
    pub collections: Vec<EmojiCollection>,
    /// Item drops, duplicate keys, and omitted categories.
    pub warnings: Vec<ParseWarning>,
}

/// What: Parse a validated OWO document into emoji collections.
///
/// Inputs:
/// - `data`: Decoded JSON document.
/// - `origin`: Source URL or file label, recorded on each collection and
///   used in diagnostics.
///
/// Output:
/// - `ParseOutcome` with collections in document order and typed warnings.
///
/// # Errors
/// - Returns [`CatalogError::SchemaValidation`] when the document shape
///   does not match the OWO catalog schema; the whole document is rejected
///   and nothing is partially accepted at this level.
///
/// Details:
/// - Item-level defects (fields that trim to empty) are reported as
///   [`ParseWarning::InvalidItem`] and skip only that item.
/// - Duplicate keys within a category are kept and warned about; the
///   merger resolves them first-occurrence-wins.
pub fn parse_document(data: &Value, origin: &str) -> Result<ParseOutcome, CatalogError> {
    let categories = validate_structure(data).map_err(|reason| CatalogError::SchemaValidation {
        origin: origin.to_string(),
        reason,
    })?;

    let mut outcome = ParseOutcome::default();
    for (name, kind, container) in categories {
        if let Some(collection) = parse_category(name, kind, container, origin, &mut outcome.warnings)
        {
            outcome.collections.push(collection);
        }
    }
    Ok(outcome)
}

/// What: Validate the document shape and borrow its categories.
///
/// Inputs:
/// - `data`: Decoded JSON document.
///
/// Output:
/// - `(name, kind, container)` triples in document order, or the first
///   structural violation as a human-readable reason.
///
/// Details:
/// - Strict by design: one malformed category anywhere rejects the whole
///   document, so a file that is not an OWO catalog is never half-imported.
#[allow(clippy::type_complexity)]
fn validate_structure(data: &Value) -> Result<Vec<(&str, EmojiKind, &[Value])>, String> {
    let Some(document) = data.as_object() else {
        return Err("top level is not an object".to_string());
    };

    let mut categories = Vec::with_capacity(document.len());
    for (name, value) in document {
        if name.trim().is_empty() {
            return Err("category with a blank name".to_string());
        }
        let Some(category) = value.as_object() else {
            return Err(format!("category `{name}` is not an object"));
        };
        let Some(kind) = category
            .get("type")
            .and_then(Value::as_str)
            .and_then(EmojiKind::from_wire)
        else {
            return Err(format!("category `{name}` has a missing or unknown `type`"));
        };
        let Some(container) = category.get("container").and_then(Value::as_array) else {
            return Err(format!("category `{name}` has no `container` array"));
        };
        for (index, entry) in container.iter().enumerate() {
            let Some(entry) = entry.as_object() else {
                return Err(format!("entry {index} in `{name}` is not an object"));
            };
            for field in ["icon", "text"] {
                match entry.get(field).and_then(Value::as_str) {
                    Some(s) if !s.is_empty() => {}
                    _ => {
                        return Err(format!(
                            "entry {index} in `{name}` has a missing or empty `{field}`"
                        ));
                    }
                }
            }
        }
        categories.push((name.as_str(), kind, container.as_slice()));
    }
    Ok(categories)
}

/// What: Parse one category's container into a collection.
///
/// Inputs:
/// - `name`/`kind`/`container`: Validated category pieces.
/// - `origin`: Source label recorded on the collection.
/// - `warnings`: Sink for item drops, duplicate keys, and omission.
///
/// Output:
/// - `Some(EmojiCollection)` when at least one item survives sanitation;
///   `None` (with an [`ParseWarning::EmptyCategory`] entry) otherwise.
fn parse_category(
    name: &str,
    kind: EmojiKind,
    container: &[Value],
    origin: &str,
    warnings: &mut Vec<ParseWarning>,
) -> Option<EmojiCollection> {
    let mut items = Vec::with_capacity(container.len());
    for (index, entry) in container.iter().enumerate() {
        match parse_item(entry, name, kind, index) {
            Ok(item) => items.push(item),
            Err(reason) => {
                tracing::warn!(
                    category = %name,
                    index,
                    reason = %reason,
                    "dropping invalid catalog item"
                );
                warnings.push(ParseWarning::InvalidItem {
                    category: name.to_string(),
                    index,
                    reason,
                });
            }
        }
    }

    // Soft invariant only: both copies stay, the merger keeps the first.
    let mut seen = HashSet::new();
    for item in &items {
        if !seen.insert(item.key.as_str()) {
            tracing::warn!(category = %name, key = %item.key, "duplicate emoji key");
            warnings.push(ParseWarning::DuplicateKey {
                category: name.to_string(),
                key: item.key.clone(),
            });
        }
    }

    if items.is_empty() {
        warnings.push(ParseWarning::EmptyCategory {
            category: name.to_string(),
        });
        return None;
    }
    Some(EmojiCollection {
        name: name.to_string(),
        kind,
        items,
        source: origin.to_string(),
    })
}

/// What: Sanitize one container entry into an [`EmojiItem`].
///
/// Inputs:
/// - `entry`: Validated container object (string `icon` and `text` exist).
/// - `category`/`kind`/`index`: Context for key synthesis and typing.
///
/// Output:
/// - The sanitized item, or a reason string when a field trims to empty.
///
/// Details:
/// - Image items resolve their URL from an `<img src=...>` attribute when
///   the icon carries markup; otherwise the raw icon value is the URL.
fn parse_item(
    entry: &Value,
    category: &str,
    kind: EmojiKind,
    index: usize,
) -> Result<EmojiItem, String> {
    let icon = entry
        .get("icon")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim();
    let text = entry
        .get("text")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim();
    if icon.is_empty() {
        return Err("`icon` is empty after trimming".to_string());
    }
    if text.is_empty() {
        return Err("`text` is empty after trimming".to_string());
    }

    let (icon, url) = if kind == EmojiKind::Image {
        match extract_img_src(icon) {
            Some(src) => (src.clone(), Some(src)),
            None => (icon.to_string(), Some(icon.to_string())),
        }
    } else {
        (icon.to_string(), None)
    };

    Ok(EmojiItem {
        key: item_key(category, index),
        icon,
        text: text.to_string(),
        kind,
        category: category.to_string(),
        url,
    })
}

/// What: Synthesize the stable item key.
///
/// Inputs:
/// - `category`: Raw category name.
/// - `index`: Positional index within the source container array.
///
/// Output:
/// - Lower-cased category with each whitespace run collapsed to one `_`,
///   followed by `_{index}`.
fn item_key(category: &str, index: usize) -> String {
    let mut slug = String::with_capacity(category.len() + 4);
    let mut in_whitespace = false;
    for ch in category.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('_');
            }
            in_whitespace = true;
        } else {
            slug.push(ch);
            in_whitespace = false;
        }
    }
    format!("{slug}_{index}")
}

/// Extract the `src` attribute of an `<img>` tag, if the string carries one.
fn extract_img_src(html: &str) -> Option<String> {
    IMG_SRC
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
