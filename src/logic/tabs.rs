//! Collection (tab) switching.

use tokio::sync::mpsc;

use crate::events::PickerEvent;
use crate::index::ALL_COLLECTION;
use crate::logic::query::replace_filtered;
use crate::state::PickerState;

/// What: Make `name` the active collection.
///
/// Inputs:
/// - `state`: Picker state to transition.
/// - `name`: A collection name or the `"all"` sentinel.
/// - `events_tx`: Renderer-bound event channel.
///
/// Output:
/// - No-op when `name` is already active. Otherwise the query is cleared
///   (a collection switch always wins over an in-progress search) and the
///   filtered list is recomputed from the new collection.
pub fn switch_collection(
    state: &mut PickerState,
    name: &str,
    events_tx: &mpsc::UnboundedSender<PickerEvent>,
) {
    if state.active_collection == name {
        return;
    }
    state.active_collection = name.to_string();
    state.query.clear();
    let items = state.index.items_for(name);
    replace_filtered(state, items, events_tx);
}

/// Switch to the tab after the active one, wrapping past `"all"`.
pub fn next_tab(state: &mut PickerState, events_tx: &mpsc::UnboundedSender<PickerEvent>) {
    step_tab(state, 1, events_tx);
}

/// Switch to the tab before the active one, wrapping past `"all"`.
pub fn prev_tab(state: &mut PickerState, events_tx: &mpsc::UnboundedSender<PickerEvent>) {
    step_tab(state, -1, events_tx);
}

/// What: Move through the tab ring `[collections..., "all"]`.
///
/// Details:
/// - An active name missing from the ring (e.g. before the first catalog
///   arrives) is treated as position zero.
fn step_tab(state: &mut PickerState, delta: isize, events_tx: &mpsc::UnboundedSender<PickerEvent>) {
    let mut ring: Vec<String> = state
        .index
        .all_collections()
        .iter()
        .map(|c| c.name.clone())
        .collect();
    ring.push(ALL_COLLECTION.to_string());

    let len = ring.len() as isize;
    let current = ring
        .iter()
        .position(|name| *name == state.active_collection)
        .unwrap_or(0) as isize;
    let next = (current + delta).rem_euclid(len) as usize;
    let target = ring[next].clone();
    switch_collection(state, &target, events_tx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::CatalogIndex;
    use crate::state::{EmojiCollection, EmojiItem, EmojiKind};

    fn collection(name: &str, count: usize) -> EmojiCollection {
        EmojiCollection {
            name: name.to_string(),
            kind: EmojiKind::Emoji,
            items: (0..count)
                .map(|i| EmojiItem {
                    key: format!("{}_{i}", name.to_lowercase()),
                    icon: "😀".into(),
                    text: format!("{name}{i}"),
                    kind: EmojiKind::Emoji,
                    category: name.to_string(),
                    url: None,
                })
                .collect(),
            source: "owo.json".into(),
        }
    }

    fn ready_state() -> PickerState {
        let mut state = PickerState::new(None);
        state.loading = false;
        state.index = CatalogIndex::new(vec![collection("Faces", 2), collection("Animals", 3)]);
        state.active_collection = "Faces".into();
        state.filtered = state.index.items_for("Faces");
        state
    }

    #[test]
    /// What: Switching tabs during a search clears the query first
    ///
    /// - Input: Active search, then a switch to `Animals`
    /// - Output: Query empty; filtered is the new collection's full set
    fn switch_clears_active_search() {
        let mut state = ready_state();
        let (tx, mut rx) = mpsc::unbounded_channel();

        crate::logic::apply_query(&mut state, "Faces0", &tx);
        let _ = rx.try_recv();
        assert_eq!(state.filtered.len(), 1);

        switch_collection(&mut state, "Animals", &tx);
        assert_eq!(state.query, "");
        assert_eq!(state.active_collection, "Animals");
        assert_eq!(state.filtered.len(), 3);
        assert_eq!(state.selected, None);
        assert!(matches!(
            rx.try_recv(),
            Ok(PickerEvent::FilteredChanged { items }) if items.len() == 3
        ));
    }

    #[test]
    /// What: Switching to the already-active tab is a no-op
    ///
    /// - Input: Switch to the current collection
    /// - Output: No event, state untouched
    fn switch_to_same_collection_is_noop() {
        let mut state = ready_state();
        state.selected = Some(1);
        let (tx, mut rx) = mpsc::unbounded_channel();

        switch_collection(&mut state, "Faces", &tx);
        assert!(rx.try_recv().is_err());
        assert_eq!(state.selected, Some(1));
    }

    #[test]
    /// What: Tab cycling wraps through the ring including `"all"`
    ///
    /// - Input: Next from the last collection, next from `all`, and a
    ///   previous step from the first collection
    /// - Output: `Animals -> all -> Faces`; `Faces -> all` backwards
    fn tab_cycle_wraps_through_all() {
        let mut state = ready_state();
        let (tx, _rx) = mpsc::unbounded_channel();

        switch_collection(&mut state, "Animals", &tx);
        next_tab(&mut state, &tx);
        assert_eq!(state.active_collection, ALL_COLLECTION);
        assert_eq!(state.filtered.len(), 5);

        next_tab(&mut state, &tx);
        assert_eq!(state.active_collection, "Faces");

        prev_tab(&mut state, &tx);
        assert_eq!(state.active_collection, ALL_COLLECTION);
    }
}
