//! Documentation HTML to Markdown converter
//!
//! This library turns the HTML fragments found in API documentation (javadoc
//! comments, tooltips, help text) into Markdown for editor surfaces such as
//! hover popups, which render Markdown but not arbitrary HTML.
//!
//! # Architecture
//!
//! The library is structured into several modules:
//! - `fast_path`: plain-text detection and entity decoding
//! - `parser`: HTML5 parsing using html5ever, byte decoding, node accessors
//! - `converter`: Markdown generation from the DOM tree
//! - `markup`: the Markdown-tagged result handed to the editor
//! - `error`: conversion errors for byte input
//!
//! # Example
//!
//! ```rust
//! let hover = doc_markdown_converter::convert("<b>Since:</b> 1.8");
//! assert_eq!(hover.value, "**Since:** 1.8");
//! ```

// Module declarations
pub mod converter;
pub mod error;
pub mod fast_path;
pub mod markup;
pub mod parser;

// Re-export main types for convenience
pub use converter::{ConversionOptions, MarkdownConverter};
pub use error::ConversionError;
pub use markup::{MarkupContent, MarkupKind};
pub use parser::parse_html;

/// Convert an HTML fragment with default options
///
/// Shorthand for `MarkdownConverter::new().convert(html)`.
pub fn convert(html: &str) -> MarkupContent {
    MarkdownConverter::new().convert(html)
}
