//! Applying load results to the picker.

use tokio::sync::mpsc;

use crate::events::{LoadResult, PickerEvent};
use crate::index::{ALL_COLLECTION, CatalogIndex};
use crate::logic::query::replace_filtered;
use crate::state::{EmojiCollection, PickerState};

/// What: Route a finished load into the picker.
///
/// Inputs:
/// - `state`: Picker state to transition.
/// - `result`: The load outcome plus whether it ran in the background.
/// - `events_tx`: Renderer-bound event channel.
///
/// Output:
/// - Fresh collections swap the catalog in atomically. A load that
///   produced nothing leaves already-shown data untouched: in the
///   background that is always silent, in the foreground it surfaces
///   either `CatalogLoadFailed` (every source failed) or an empty
///   `CatalogLoaded` (nothing configured to load).
pub fn apply_load_result(
    state: &mut PickerState,
    result: LoadResult,
    events_tx: &mpsc::UnboundedSender<PickerEvent>,
) {
    let LoadResult {
        outcome,
        background,
    } = result;

    if !outcome.collections.is_empty() {
        apply_catalog(state, outcome.collections, events_tx);
        return;
    }

    if background {
        // Cached results stay on screen; a failed refresh is log-only.
        tracing::warn!(
            failures = outcome.failures.len(),
            "background catalog refresh produced nothing"
        );
        return;
    }

    state.loading = false;
    if let Some(failure) = outcome.failures.last() {
        let message = failure.error.to_string();
        state.last_error = Some(message.clone());
        let _ = events_tx.send(PickerEvent::CatalogLoadFailed { message });
    } else {
        // Zero configured sources: not an error, just nothing to show.
        state.last_error = None;
        let _ = events_tx.send(PickerEvent::CatalogLoaded {
            collections: Vec::new(),
        });
    }
}

/// What: Swap a freshly merged catalog into the picker wholesale.
///
/// Inputs:
/// - `state`: Picker state to transition.
/// - `collections`: Merged collections in load order.
/// - `events_tx`: Renderer-bound event channel.
///
/// Output:
/// - Rebuilds the index, resolves the active collection (current if it
///   still exists, else the remembered one, else the first collection,
///   else `"all"`), recomputes the current view, and announces
///   `CatalogLoaded` followed by `FilteredChanged` when the view moved.
///
/// Details:
/// - A pending search query survives the swap and is re-run against the
///   fresh index.
pub fn apply_catalog(
    state: &mut PickerState,
    collections: Vec<EmojiCollection>,
    events_tx: &mpsc::UnboundedSender<PickerEvent>,
) {
    state.index = CatalogIndex::new(collections);
    state.loading = false;
    state.last_error = None;

    if state.active_collection.is_empty() || !state.active_collection_exists() {
        state.active_collection = initial_collection(state);
    }

    let _ = events_tx.send(PickerEvent::CatalogLoaded {
        collections: state.index.all_collections().to_vec(),
    });

    let items = if state.query.is_empty() {
        state.index.items_for(&state.active_collection)
    } else {
        state.index.search(&state.query)
    };
    replace_filtered(state, items, events_tx);
}

/// Pick the collection to land on when the current one is unusable.
fn initial_collection(state: &PickerState) -> String {
    if let Some(remembered) = &state.remembered_collection
        && (remembered == ALL_COLLECTION || state.index.collection(remembered).is_some())
    {
        return remembered.clone();
    }
    state
        .index
        .all_collections()
        .first()
        .map_or_else(|| ALL_COLLECTION.to_string(), |c| c.name.clone())
}
