//! Core value types for the emoji catalog.

/// Item style shared by every entry of a catalog category.
///
/// The wire format spells these lowercase (`"emoticon"`, `"emoji"`,
/// `"image"`); serde mirrors that spelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiKind {
    /// Text-art emoticon, inserted verbatim (e.g. `(~ ̄▽ ̄)~`).
    Emoticon,
    /// Unicode emoji glyph or shortcode.
    Emoji,
    /// Remote image referenced by URL.
    Image,
}

impl EmojiKind {
    /// Parse the wire-format spelling used by OWO documents.
    ///
    /// Inputs: `s` raw `type` string from a category object.
    ///
    /// Output: `Some(EmojiKind)` for a recognized spelling; `None` otherwise.
    #[must_use]
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "emoticon" => Some(Self::Emoticon),
            "emoji" => Some(Self::Emoji),
            "image" => Some(Self::Image),
            _ => None,
        }
    }

    /// Return the wire-format spelling for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emoticon => "emoticon",
            Self::Emoji => "emoji",
            Self::Image => "image",
        }
    }
}

/// One selectable catalog entry.
///
/// Compact enough to hand to a list renderer wholesale; the `key` is the
/// identity used for de-duplication and for cheap list-equality checks.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EmojiItem {
    /// Stable identifier derived from the category name and the item's
    /// positional index in its source container array. Not guaranteed
    /// globally unique across differently named categories.
    pub key: String,
    /// Glyph, shortcode, or (for image items) the resolved image URL.
    pub icon: String,
    /// Display label and insertion trigger text. Non-empty after sanitation.
    pub text: String,
    /// Item style, shared with the owning category.
    #[serde(rename = "type")]
    pub kind: EmojiKind,
    /// Human-readable name of the originating category.
    pub category: String,
    /// Resolved image URL; present only for [`EmojiKind::Image`] items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One named category, possibly aggregated from multiple source files.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EmojiCollection {
    /// Category identifier; doubles as the tab label and navigation key.
    pub name: String,
    /// Item style shared by every item in this collection.
    #[serde(rename = "type")]
    pub kind: EmojiKind,
    /// Items in source order, duplicates removed after merging.
    pub items: Vec<EmojiItem>,
    /// Comma-joined list of originating file/URL labels, diagnostics only.
    pub source: String,
}

/// Direction of a highlight move through the filtered list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Toward lower indices, wrapping from the first item to the last.
    Up,
    /// Toward higher indices, wrapping from the last item to the first.
    Down,
}

/// User-visible readiness of the catalog, derived from picker state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogStatus {
    /// The initial load has not finished yet.
    Loading,
    /// Loading finished but produced nothing and no error: there is
    /// nothing configured to show.
    NoSources,
    /// Every configured source failed; carries the last failure's message.
    Failed(String),
    /// At least one collection is available.
    Ready,
}
