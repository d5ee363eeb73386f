//! Highlight movement and activation.

use tokio::sync::mpsc;

use crate::events::PickerEvent;
use crate::state::{Direction, PickerState};

/// What: Move the highlight one step through the filtered list.
///
/// Inputs:
/// - `state`: Picker state to transition.
/// - `direction`: Up or down.
/// - `events_tx`: Renderer-bound event channel.
///
/// Output:
/// - Circular movement: down from the last item wraps to the first, up
///   from the first wraps to the last. From no highlight, down lands on
///   the first item and up on the last. No-op on an empty list.
pub fn move_selection(
    state: &mut PickerState,
    direction: Direction,
    events_tx: &mpsc::UnboundedSender<PickerEvent>,
) {
    if state.filtered.is_empty() {
        return;
    }
    let len = state.filtered.len();
    let next = match direction {
        Direction::Down => state.selected.map_or(0, |i| (i + 1) % len),
        Direction::Up => state
            .selected
            .map_or(len - 1, |i| if i == 0 { len - 1 } else { i - 1 }),
    };
    set_selected(state, next, events_tx);
}

/// Update the highlight, notifying only on an actual change.
fn set_selected(
    state: &mut PickerState,
    index: usize,
    events_tx: &mpsc::UnboundedSender<PickerEvent>,
) {
    if state.selected == Some(index) {
        return;
    }
    state.selected = Some(index);
    let _ = events_tx.send(PickerEvent::HighlightChanged {
        index: state.selected,
    });
}

/// What: Activate the highlighted item.
///
/// Output:
/// - With a valid highlight, emits `ItemActivated` carrying the item and
///   the multi-select flag; the host closes the picker when the flag is
///   off and keeps it open for further picks when it is on. Without a
///   highlight this does nothing.
pub fn activate_selected(state: &PickerState, events_tx: &mpsc::UnboundedSender<PickerEvent>) {
    if let Some(index) = state.selected
        && let Some(item) = state.filtered.get(index)
    {
        let _ = events_tx.send(PickerEvent::ItemActivated {
            item: item.clone(),
            multi_select: state.multi_select,
        });
    }
}
