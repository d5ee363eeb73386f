//! Control surface of the picker: inbound commands, outbound events, and
//! the background workers that feed them.
//!
//! The host's event loop owns a [`crate::state::PickerState`], pushes every
//! control input through [`handle_command`], applies worker results via
//! [`crate::logic::apply_load_result`], and forwards [`PickerEvent`]s to
//! its renderer. Raw keystrokes should pass through [`spawn_query_worker`]
//! first so rapid typing settles before it reaches the state machine.

use tokio::sync::mpsc;

use crate::sources::LoadOutcome;
use crate::state::{Direction, EmojiCollection, EmojiItem, PickerState};

mod worker;

pub use worker::{spawn_loader_worker, spawn_query_worker};

/// Inbound control input, produced by the host UI layer.
#[derive(Clone, Debug)]
pub enum PickerCommand {
    /// A settled search query (already debounced).
    SubmitQuery(String),
    /// Activate the named collection tab, or the `"all"` sentinel.
    SwitchCollection(String),
    /// Move the highlight one step.
    Navigate(Direction),
    /// Activate the highlighted item.
    Activate,
    /// Flip multi-select mode; the filtered list and highlight stay put.
    ToggleMultiSelect,
    /// Re-fetch every configured source, bypassing the cache.
    ForceRefresh,
}

/// Outbound notification for the rendering layer.
#[derive(Clone, Debug)]
pub enum PickerEvent {
    /// A catalog finished loading; carries every collection for the tab
    /// row. Empty means nothing is configured.
    CatalogLoaded {
        /// Merged collections in load order.
        collections: Vec<EmojiCollection>,
    },
    /// Every configured source failed on a foreground load.
    CatalogLoadFailed {
        /// The last failure's message.
        message: String,
    },
    /// The displayed result set changed; implies the highlight was reset.
    FilteredChanged {
        /// The new result set, in catalog order.
        items: Vec<EmojiItem>,
    },
    /// The highlight moved.
    HighlightChanged {
        /// New highlight position, `None` when nothing is highlighted.
        index: Option<usize>,
    },
    /// The highlighted item was activated.
    ItemActivated {
        /// The activated item.
        item: EmojiItem,
        /// Whether the picker expects to stay open for further picks.
        multi_select: bool,
    },
}

/// One unit of work for the loader worker.
#[derive(Clone, Copy, Debug)]
pub struct RefreshRequest {
    /// Bypass cache reads and hit the network for every source.
    pub force: bool,
    /// Whether this is a refresh behind already-shown data; background
    /// failures stay out of the UI entirely.
    pub background: bool,
}

/// A finished load, handed back to the host to apply to its state.
#[derive(Clone, Debug)]
pub struct LoadResult {
    /// What the loader produced.
    pub outcome: LoadOutcome,
    /// Echoed from the originating [`RefreshRequest`].
    pub background: bool,
}

/// What: Dispatch one control input onto the state machine.
///
/// Inputs:
/// - `command`: The inbound input.
/// - `state`: Picker state to transition.
/// - `events_tx`: Renderer-bound event channel.
/// - `refresh_tx`: Loader-worker channel for refresh requests.
///
/// Details:
/// - `ForceRefresh` is forwarded to the loader worker as a foreground
///   forced request; everything else mutates `state` synchronously.
pub fn handle_command(
    command: PickerCommand,
    state: &mut PickerState,
    events_tx: &mpsc::UnboundedSender<PickerEvent>,
    refresh_tx: &mpsc::UnboundedSender<RefreshRequest>,
) {
    match command {
        PickerCommand::SubmitQuery(query) => crate::logic::apply_query(state, &query, events_tx),
        PickerCommand::SwitchCollection(name) => {
            crate::logic::switch_collection(state, &name, events_tx);
        }
        PickerCommand::Navigate(direction) => {
            crate::logic::move_selection(state, direction, events_tx);
        }
        PickerCommand::Activate => crate::logic::activate_selected(state, events_tx),
        PickerCommand::ToggleMultiSelect => state.multi_select = !state.multi_select,
        PickerCommand::ForceRefresh => {
            let _ = refresh_tx.send(RefreshRequest {
                force: true,
                background: false,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Multi-select toggle flips only the flag
    ///
    /// - Input: Two toggles around an existing highlight
    /// - Output: Flag flips each time; highlight and list untouched; no
    ///   events
    fn toggle_multi_select_changes_nothing_else() {
        let mut state = PickerState::new(None);
        state.selected = Some(0);
        let (events_tx, mut events_rx) = mpsc::unbounded_channel();
        let (refresh_tx, _refresh_rx) = mpsc::unbounded_channel();

        handle_command(
            PickerCommand::ToggleMultiSelect,
            &mut state,
            &events_tx,
            &refresh_tx,
        );
        assert!(state.multi_select);
        handle_command(
            PickerCommand::ToggleMultiSelect,
            &mut state,
            &events_tx,
            &refresh_tx,
        );
        assert!(!state.multi_select);
        assert_eq!(state.selected, Some(0));
        assert!(events_rx.try_recv().is_err());
    }

    #[test]
    /// What: Force refresh becomes a forced foreground request
    ///
    /// - Input: `ForceRefresh` command
    /// - Output: One `RefreshRequest { force: true, background: false }`
    fn force_refresh_reaches_loader_channel() {
        let mut state = PickerState::new(None);
        let (events_tx, _events_rx) = mpsc::unbounded_channel();
        let (refresh_tx, mut refresh_rx) = mpsc::unbounded_channel();

        handle_command(
            PickerCommand::ForceRefresh,
            &mut state,
            &events_tx,
            &refresh_tx,
        );
        let request = refresh_rx.try_recv().expect("request forwarded");
        assert!(request.force);
        assert!(!request.background);
    }
}
