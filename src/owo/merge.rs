//! Merging collections across catalog sources.

use std::collections::HashSet;

use crate::state::EmojiCollection;

/// What: Combine collections sharing a name into one catalog.
///
/// Inputs:
/// - `collections`: Per-source collections in load order.
///
/// Output:
/// - One collection per name, ordered by first appearance. Item sequences
///   are concatenated in input order and de-duplicated by key, keeping the
///   first occurrence; later sources never override an earlier item with
///   the same key. `source` labels of merged inputs are joined with `", "`.
///
/// Details:
/// - Pure and idempotent: merging an already-merged list yields the same
///   result.
#[must_use]
pub fn merge_collections(collections: Vec<EmojiCollection>) -> Vec<EmojiCollection> {
    let mut merged: Vec<EmojiCollection> = Vec::new();
    for mut collection in collections {
        if let Some(existing) = merged.iter_mut().find(|c| c.name == collection.name) {
            existing.source.push_str(", ");
            existing.source.push_str(&collection.source);
            existing.items.append(&mut collection.items);
            dedup_by_key(existing);
        } else {
            dedup_by_key(&mut collection);
            merged.push(collection);
        }
    }
    merged
}

/// Drop every item whose key was already seen earlier in the collection.
fn dedup_by_key(collection: &mut EmojiCollection) {
    let mut seen = HashSet::new();
    collection.items.retain(|item| seen.insert(item.key.clone()));
}
