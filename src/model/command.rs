use serde::{Deserialize, Serialize};

/// One reference entry: a description plus an optional literal command line
/// and/or key shortcut, an optional note, and search tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Unique across the whole catalog; doubles as the jump anchor
    pub id: String,
    /// Display label, also searched
    pub description: String,
    /// Key sequence pressed after the prefix key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
    /// Literal command line to display and copy (may be multi-line)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmd: Option<String>,
    /// Extra context. Display-only, not searched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Search keywords, never displayed directly
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A named group of related commands, rendered as one scrollable section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique across the catalog; used as the navigation anchor key
    pub id: String,
    pub title: String,
    pub description: String,
    /// Commands in display order (not alphabetical)
    pub items: Vec<Command>,
}
