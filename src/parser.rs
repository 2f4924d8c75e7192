//! HTML5 parsing using html5ever
//!
//! Documentation fragments are parsed with Mozilla's html5ever, which follows
//! the WHATWG parsing algorithm. Malformed markup (unclosed tags, stray text,
//! misnested inline elements) is normalized into a best-effort tree rather than
//! rejected, so parsing a `&str` cannot fail.
//!
//! The module also hosts the small set of node accessors the converter needs:
//! tag name, attribute lookup and descendant text inspection.
//!
//! # Examples
//!
//! ```rust
//! use doc_markdown_converter::parser::parse_html;
//!
//! // Fragments are wrapped into html/head/body by the tree builder
//! let dom = parse_html("<p>Returns the <b>value</b>");
//! assert!(!dom.document.children.borrow().is_empty());
//! ```

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom};
use std::borrow::Cow;

use crate::error::ConversionError;

/// Parse an HTML fragment into a DOM tree
///
/// The whole input is materialized into a fresh `RcDom`; nothing is shared
/// between calls.
pub fn parse_html(html: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default()).one(html)
}

/// Decode raw bytes into UTF-8 text
///
/// With no charset (or any UTF-8 label) the bytes are validated as UTF-8 and
/// borrowed as-is, skipping a leading byte order mark. Any other label is
/// resolved through `encoding_rs` and transcoded.
///
/// # Errors
///
/// Returns `ConversionError::EncodingError` when the label is unknown or the
/// bytes are invalid for the charset.
///
/// # Examples
///
/// ```rust
/// use doc_markdown_converter::parser::decode_html;
///
/// let text = decode_html(b"Caf\xE9", Some("ISO-8859-1")).expect("latin-1 input");
/// assert_eq!(text, "Café");
/// ```
pub fn decode_html<'a>(
    html: &'a [u8],
    charset: Option<&str>,
) -> Result<Cow<'a, str>, ConversionError> {
    let Some(label) = charset
        .map(str::trim)
        .filter(|label| !label.is_empty() && !is_utf8_label(label))
    else {
        let bytes = html.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(html);
        return std::str::from_utf8(bytes).map(Cow::Borrowed).map_err(|e| {
            ConversionError::EncodingError(format!(
                "Invalid UTF-8 at byte position {}: {}",
                e.valid_up_to(),
                e
            ))
        });
    };

    let encoding = encoding_rs::Encoding::for_label(label.as_bytes()).ok_or_else(|| {
        ConversionError::EncodingError(format!("Unsupported charset '{}'", label))
    })?;

    encoding
        .decode_without_bom_handling_and_without_replacement(html)
        .ok_or_else(|| {
            ConversionError::EncodingError(format!(
                "Invalid byte sequence for charset '{}'",
                label
            ))
        })
}

fn is_utf8_label(label: &str) -> bool {
    label.eq_ignore_ascii_case("utf-8") || label.eq_ignore_ascii_case("utf8")
}

/// Local tag name of an element node, `None` for any other node kind
pub fn element_name(node: &Node) -> Option<&str> {
    match node.data {
        NodeData::Element { ref name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// Value of the named attribute on an element node
pub fn attribute(node: &Node, attr_name: &str) -> Option<String> {
    match node.data {
        NodeData::Element { ref attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| attr.name.local.as_ref() == attr_name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

/// Returns true if any text below `node` (at any depth) contains a line break
///
/// Raw text is inspected, so whitespace that the normal text flow would
/// collapse still counts. The tree is searched with an explicit stack, so
/// arbitrarily deep markup cannot exhaust the call stack.
pub fn has_line_break(node: &Handle) -> bool {
    let mut pending = vec![node.clone()];
    while let Some(current) = pending.pop() {
        match current.data {
            NodeData::Text { ref contents } => {
                if contents.borrow().contains(['\n', '\r']) {
                    return true;
                }
            }
            NodeData::Element { .. } | NodeData::Document => {
                pending.extend(current.children.borrow().iter().cloned());
            }
            _ => {}
        }
    }
    false
}

/// Append the raw text of `node` and all its descendants to `output`
///
/// Text is appended in document order; the walk is iterative like
/// [`has_line_break`].
pub fn descendant_text(node: &Handle, output: &mut String) {
    let mut pending = vec![node.clone()];
    while let Some(current) = pending.pop() {
        match current.data {
            NodeData::Text { ref contents } => output.push_str(&contents.borrow()),
            NodeData::Element { .. } | NodeData::Document => {
                // reversed so the first child is popped first
                pending.extend(current.children.borrow().iter().rev().cloned());
            }
            _ => {}
        }
    }
}
