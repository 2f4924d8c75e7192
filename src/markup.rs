//! Markup content handed to the rendering surface
//!
//! Mirrors the editor protocol's `MarkupContent` shape so a result can be
//! serialized straight into a hover response:
//!
//! ```json
//! { "kind": "markdown", "value": "**bold**" }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Format of a [`MarkupContent`] value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkupKind {
    /// Rendered verbatim
    #[serde(rename = "plaintext")]
    PlainText,
    /// Rendered as Markdown
    #[serde(rename = "markdown")]
    Markdown,
}

/// A string tagged with the format it is written in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupContent {
    pub kind: MarkupKind,
    pub value: String,
}

impl MarkupContent {
    /// Wrap a Markdown string
    pub fn markdown(value: impl Into<String>) -> Self {
        Self {
            kind: MarkupKind::Markdown,
            value: value.into(),
        }
    }
}

impl fmt::Display for MarkupContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl PartialEq<&str> for MarkupContent {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}
