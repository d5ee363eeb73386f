//! The picker's interactive state container.

use crate::index::{ALL_COLLECTION, CatalogIndex};
use crate::state::types::{CatalogStatus, EmojiItem};

/// State of one open picker session.
///
/// Created fresh every time the picker opens and dropped on close; the only
/// thing that survives across opens is the externally remembered "last
/// active collection", which the host passes back in. The fields are
/// mutated by the transition functions in [`crate::logic`] in response to
/// [`crate::events::PickerCommand`]s.
#[derive(Debug, Default)]
pub struct PickerState {
    /// Read view over the merged catalog; swapped wholesale on each load.
    pub index: CatalogIndex,
    /// Active collection name, or the `"all"` sentinel. Empty until the
    /// first catalog arrives.
    pub active_collection: String,
    /// Current trimmed search query; empty means "collection view".
    pub query: String,
    /// The currently displayed result set, in catalog order.
    pub filtered: Vec<EmojiItem>,
    /// Highlighted index into `filtered`; `None` when nothing is
    /// highlighted.
    pub selected: Option<usize>,
    /// Whether activations keep the picker open for additional picks.
    pub multi_select: bool,
    /// Whether the initial load is still in flight.
    pub loading: bool,
    /// Message of the most recent total load failure, if any.
    pub last_error: Option<String>,
    /// Collection name remembered by the host's settings layer, restored
    /// when the next catalog arrives (if it still exists there).
    pub remembered_collection: Option<String>,
}

impl PickerState {
    /// What: Fresh state for a newly opened picker.
    ///
    /// Inputs:
    /// - `remembered_collection`: Last active collection restored from the
    ///   host's settings, if that feature is enabled there.
    ///
    /// Output:
    /// - A loading-state picker with an empty catalog.
    #[must_use]
    pub fn new(remembered_collection: Option<String>) -> Self {
        Self {
            loading: true,
            remembered_collection,
            ..Self::default()
        }
    }

    /// What: Derive the user-visible catalog readiness.
    ///
    /// Output:
    /// - `Loading` until the first load settles; then `Failed` when every
    ///   source failed, `NoSources` when there was nothing to load, and
    ///   `Ready` once any collection is available.
    ///
    /// Details:
    /// - A background refresh failure after a successful load does not
    ///   regress the status: an available catalog stays `Ready`.
    #[must_use]
    pub fn status(&self) -> CatalogStatus {
        if !self.index.is_empty() {
            return CatalogStatus::Ready;
        }
        if self.loading {
            return CatalogStatus::Loading;
        }
        self.last_error.as_ref().map_or(CatalogStatus::NoSources, |message| {
            CatalogStatus::Failed(message.clone())
        })
    }

    /// Whether `active_collection` still names something resolvable in the
    /// current index (the sentinel always does).
    #[must_use]
    pub fn active_collection_exists(&self) -> bool {
        self.active_collection == ALL_COLLECTION
            || self.index.collection(&self.active_collection).is_some()
    }
}
