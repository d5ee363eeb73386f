//! Read-only view over the merged catalog: listing, lookup, and search.
//!
//! The index is rebuilt wholesale whenever a load completes; there is no
//! incremental patching. All answers come back in catalog order (collection
//! load order, then item order within each collection).

use crate::state::{EmojiCollection, EmojiItem};

/// Sentinel collection name for the virtual "everything" view. The "all"
/// view is computed on demand and never stored as a real collection.
pub const ALL_COLLECTION: &str = "all";

/// In-memory catalog answering list and search queries.
#[derive(Clone, Debug, Default)]
pub struct CatalogIndex {
    /// Merged collections in load order.
    collections: Vec<EmojiCollection>,
}

impl CatalogIndex {
    /// Build an index over merged collections, keeping their order.
    #[must_use]
    pub const fn new(collections: Vec<EmojiCollection>) -> Self {
        Self { collections }
    }

    /// Whether the catalog holds no collections at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// All collections in load order.
    #[must_use]
    pub fn all_collections(&self) -> &[EmojiCollection] {
        &self.collections
    }

    /// Look up one collection by its exact name.
    #[must_use]
    pub fn collection(&self, name: &str) -> Option<&EmojiCollection> {
        self.collections.iter().find(|c| c.name == name)
    }

    /// Every item across every collection, in catalog order.
    #[must_use]
    pub fn all_items(&self) -> Vec<EmojiItem> {
        self.collections
            .iter()
            .flat_map(|c| c.items.iter().cloned())
            .collect()
    }

    /// Total number of items across all collections (tab badge for "all").
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.collections.iter().map(|c| c.items.len()).sum()
    }

    /// What: Items for one collection, or everything for the sentinel.
    ///
    /// Inputs:
    /// - `name`: A collection name or [`ALL_COLLECTION`].
    ///
    /// Output:
    /// - The named collection's items, [`Self::all_items`] for the
    ///   sentinel, or an empty list for an unknown name.
    #[must_use]
    pub fn items_for(&self, name: &str) -> Vec<EmojiItem> {
        if name == ALL_COLLECTION {
            return self.all_items();
        }
        self.collection(name)
            .map(|c| c.items.clone())
            .unwrap_or_default()
    }

    /// What: Case-insensitive substring search over the whole catalog.
    ///
    /// Inputs:
    /// - `query`: Raw query text; it is trimmed here.
    ///
    /// Output:
    /// - Items whose display `text`, `key`, or `category` contains the
    ///   trimmed query, compared case-insensitively; catalog order, no
    ///   relevance ranking.
    ///
    /// Details:
    /// - An empty or whitespace-only query matches every item, because the
    ///   empty string is a substring of everything. The selection layer
    ///   never routes empty queries here; it shows the active collection
    ///   instead.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<EmojiItem> {
        let needle = query.trim().to_lowercase();
        self.collections
            .iter()
            .flat_map(|c| c.items.iter())
            .filter(|item| {
                item.text.to_lowercase().contains(&needle)
                    || item.key.to_lowercase().contains(&needle)
                    || item.category.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EmojiKind;

    fn collection(name: &str, texts: &[&str]) -> EmojiCollection {
        EmojiCollection {
            name: name.to_string(),
            kind: EmojiKind::Emoji,
            items: texts
                .iter()
                .enumerate()
                .map(|(i, text)| EmojiItem {
                    key: format!("{}_{i}", name.to_lowercase()),
                    icon: "😀".into(),
                    text: (*text).to_string(),
                    kind: EmojiKind::Emoji,
                    category: name.to_string(),
                    url: None,
                })
                .collect(),
            source: "owo.json".into(),
        }
    }

    fn index() -> CatalogIndex {
        CatalogIndex::new(vec![
            collection("Faces", &["grin", "grin2", "smile"]),
            collection("Animals", &["cat", "dog"]),
        ])
    }

    #[test]
    /// What: The sentinel returns the concatenation of every collection
    ///
    /// - Input: Two collections of sizes 3 and 2
    /// - Output: Five items in catalog order; `total_items` agrees
    fn items_for_all_concatenates_in_order() {
        let idx = index();
        let all = idx.items_for(ALL_COLLECTION);
        let texts: Vec<&str> = all.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, ["grin", "grin2", "smile", "cat", "dog"]);
        assert_eq!(idx.total_items(), 5);
        assert_eq!(idx.all_items().len(), 5);
    }

    #[test]
    /// What: Named lookup returns that collection's items; unknown is empty
    ///
    /// - Input: A known and an unknown collection name
    /// - Output: Items for the known one, empty list for the other
    fn items_for_named_collection() {
        let idx = index();
        let texts: Vec<String> = idx
            .items_for("Animals")
            .into_iter()
            .map(|i| i.text)
            .collect();
        assert_eq!(texts, ["cat", "dog"]);
        assert!(idx.items_for("Vehicles").is_empty());
    }

    #[test]
    /// What: Search is a case-insensitive substring over text in order
    ///
    /// - Input: Query `gri` over texts grin, grin2, smile
    /// - Output: `[grin, grin2]` in original catalog order
    fn search_matches_text_substring_in_catalog_order() {
        let idx = index();
        let texts: Vec<String> = idx.search("gri").into_iter().map(|i| i.text).collect();
        assert_eq!(texts, ["grin", "grin2"]);
        let texts: Vec<String> = idx.search("GRIN").into_iter().map(|i| i.text).collect();
        assert_eq!(texts, ["grin", "grin2"]);
    }

    #[test]
    /// What: Search also matches key and category substrings
    ///
    /// - Input: Queries hitting a key prefix and a category name
    /// - Output: Items of the matching key/category
    fn search_matches_key_and_category() {
        let idx = index();
        // Keys are faces_0..faces_2; "faces_1" pins one item.
        let keys: Vec<String> = idx.search("faces_1").into_iter().map(|i| i.key).collect();
        assert_eq!(keys, ["faces_1"]);
        // Category match returns the whole collection.
        let texts: Vec<String> = idx.search("animal").into_iter().map(|i| i.text).collect();
        assert_eq!(texts, ["cat", "dog"]);
    }

    #[test]
    /// What: Query trimming before matching
    ///
    /// - Input: Query padded with whitespace
    /// - Output: Same results as the trimmed query
    fn search_trims_query() {
        let idx = index();
        assert_eq!(idx.search("  grin "), idx.search("grin"));
    }
}
