//! Incremental search transitions.

use tokio::sync::mpsc;

use crate::events::PickerEvent;
use crate::state::{EmojiItem, PickerState};

/// What: Apply a settled search query to the picker.
///
/// Inputs:
/// - `state`: Picker state to transition.
/// - `raw`: Query text as typed; trimmed here.
/// - `events_tx`: Renderer-bound event channel.
///
/// Output:
/// - No-op when the trimmed query equals the current one. An empty query
///   shows the active collection; anything else shows search results. The
///   filtered list, highlight, and `FilteredChanged` notification only
///   change when the resulting list actually differs.
pub fn apply_query(
    state: &mut PickerState,
    raw: &str,
    events_tx: &mpsc::UnboundedSender<PickerEvent>,
) {
    let trimmed = raw.trim();
    if trimmed == state.query {
        return;
    }
    state.query = trimmed.to_string();
    let items = if trimmed.is_empty() {
        state.index.items_for(&state.active_collection)
    } else {
        state.index.search(trimmed)
    };
    replace_filtered(state, items, events_tx);
}

/// What: Swap in a new filtered list if it differs from the current one.
///
/// Details:
/// - Difference is the cheap check: same length and same ordered key
///   sequence count as equal, skipping redundant downstream work.
/// - A real swap resets the highlight and emits `FilteredChanged` (which
///   implies the reset to the renderer).
pub(crate) fn replace_filtered(
    state: &mut PickerState,
    items: Vec<EmojiItem>,
    events_tx: &mpsc::UnboundedSender<PickerEvent>,
) {
    if same_items(&state.filtered, &items) {
        return;
    }
    state.filtered = items;
    state.selected = None;
    let _ = events_tx.send(PickerEvent::FilteredChanged {
        items: state.filtered.clone(),
    });
}

/// Length plus ordered-key equality between two item lists.
fn same_items(a: &[EmojiItem], b: &[EmojiItem]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.key == y.key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{ALL_COLLECTION, CatalogIndex};
    use crate::state::{EmojiCollection, EmojiKind};

    fn ready_state() -> PickerState {
        let mut state = PickerState::new(None);
        state.loading = false;
        state.index = CatalogIndex::new(vec![EmojiCollection {
            name: "Faces".into(),
            kind: EmojiKind::Emoji,
            items: ["grin", "grin2", "smile"]
                .iter()
                .enumerate()
                .map(|(i, text)| EmojiItem {
                    key: format!("faces_{i}"),
                    icon: "😀".into(),
                    text: (*text).to_string(),
                    kind: EmojiKind::Emoji,
                    category: "Faces".into(),
                    url: None,
                })
                .collect(),
            source: "owo.json".into(),
        }]);
        state.active_collection = "Faces".into();
        state.filtered = state.index.items_for("Faces");
        state
    }

    #[test]
    /// What: A non-empty query switches to the search view once
    ///
    /// - Input: Query `gri`, then the same query padded with spaces
    /// - Output: Filtered narrows to two items and one event; the repeat
    ///   is a no-op
    fn query_switches_to_search_view() {
        let mut state = ready_state();
        let (tx, mut rx) = mpsc::unbounded_channel();

        apply_query(&mut state, "gri", &tx);
        assert_eq!(state.query, "gri");
        assert_eq!(state.filtered.len(), 2);
        assert_eq!(state.selected, None);
        assert!(matches!(
            rx.try_recv(),
            Ok(PickerEvent::FilteredChanged { items }) if items.len() == 2
        ));

        apply_query(&mut state, "  gri ", &tx);
        assert!(rx.try_recv().is_err(), "repeat query must not re-notify");
    }

    #[test]
    /// What: Clearing the query restores the active collection view
    ///
    /// - Input: Query `gri` then the empty query
    /// - Output: Filtered returns to the collection's full item set
    fn empty_query_routes_to_collection_view() {
        let mut state = ready_state();
        let (tx, mut rx) = mpsc::unbounded_channel();

        apply_query(&mut state, "gri", &tx);
        let _ = rx.try_recv();
        apply_query(&mut state, "", &tx);
        assert_eq!(state.query, "");
        assert_eq!(state.filtered.len(), 3);
        assert!(matches!(
            rx.try_recv(),
            Ok(PickerEvent::FilteredChanged { items }) if items.len() == 3
        ));
    }

    #[test]
    /// What: Unchanged result sets swap nothing and keep the highlight
    ///
    /// - Input: A query matching the entire active collection
    /// - Output: No event; the existing highlight survives
    fn equal_result_set_is_not_replaced() {
        let mut state = ready_state();
        state.selected = Some(1);
        let (tx, mut rx) = mpsc::unbounded_channel();

        // Every Faces item matches its own category name.
        apply_query(&mut state, "faces", &tx);
        assert!(rx.try_recv().is_err());
        assert_eq!(state.selected, Some(1), "highlight must survive a no-op swap");
    }

    #[test]
    /// What: The sentinel view searches across the whole catalog
    ///
    /// - Input: Active collection `all` with an empty query
    /// - Output: Filtered equals every item
    fn empty_query_on_all_shows_everything() {
        let mut state = ready_state();
        state.active_collection = ALL_COLLECTION.to_string();
        state.filtered.clear();
        state.query = "stale".into();
        let (tx, _rx) = mpsc::unbounded_channel();

        apply_query(&mut state, "", &tx);
        assert_eq!(state.filtered.len(), 3);
    }
}
