use serde::{Deserialize, Serialize};

/// A single wrapping alternative offered at the caret.
///
/// The action itself is opaque to this crate: picking one means executing
/// `command` on the host side. This core only ranks actions and never applies
/// edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrapAction {
    /// Shown in the host UI.
    pub title: String,
    /// Optional alternate ranking key.
    ///
    /// Families of related actions ("wrap every argument", "wrap long
    /// argument lists") share a sort title so invoking any member biases the
    /// whole family, while each member keeps its own display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_title: Option<String>,
    /// Host command invoked when the user picks this action.
    pub command: lsp_types::Command,
}

impl WrapAction {
    pub fn new(title: impl Into<String>, command: lsp_types::Command) -> Self {
        Self {
            title: title.into(),
            sort_title: None,
            command,
        }
    }

    pub fn with_sort_title(mut self, sort_title: impl Into<String>) -> Self {
        self.sort_title = Some(sort_title.into());
        self
    }

    /// The identity used for history lookups: the sort title when present,
    /// the display title otherwise.
    #[inline]
    pub fn ranking_title(&self) -> &str {
        self.sort_title.as_deref().unwrap_or(&self.title)
    }
}
