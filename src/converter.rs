//! Markdown converter - transforms documentation HTML into hover Markdown
//!
//! This module holds the conversion engine: a plain-text shortcut in front of a
//! recursive walk over the html5ever DOM that appends Markdown to a single
//! output buffer.
//!
//! # Conversion Strategy
//!
//! 1. **Fast Path**: Input with no tag outside backtick spans is only
//!    entity-decoded (see [`crate::fast_path`])
//! 2. **Tree Walk**: Anything else is parsed and walked depth-first,
//!    left-to-right, starting at the document root's children
//! 3. **No Post-Processing**: Blank lines are emitted exactly as each element
//!    rule dictates; the buffer is returned untouched
//!
//! # Traversal State
//!
//! The walker carries four values for the duration of one call:
//!
//! - `element_depth`: number of open elements, counted from the document root
//! - `pre_depth`: number of open `<pre>` elements
//! - `code_depth`: number of open `<code>` elements
//! - `in_code_block`: set while emitting the body of a multi-line `<code>`
//!
//! Depth counters rather than flags keep `<code>` inside `<pre>` and `<code>`
//! inside `<code>` correct when the inner element closes.
//!
//! # Nesting Limit
//!
//! An element found at `max_nesting_depth` is not walked: its descendant text
//! is emitted as if it were a single text node in the current context. The
//! limit counts the `html` and `body` elements the parser wraps around a
//! fragment.
//!
//! # Element Rules
//!
//! Tags are looked up in a table keyed by tag name. Tags missing from the table
//! are transparent: their children are emitted with no markup around them.
//!
//! | Tag | Output |
//! |---|---|
//! | `h1`-`h6` | blank line, `#` x level, space, children, blank line |
//! | `a` | `[children](href)`, or children only for internal doc links |
//! | `b` | `**children**` |
//! | `em` | `_children_` |
//! | `br` | blank line |
//! | `p` | children |
//! | `div`, `section` | blank line, children, blank line |
//! | `dl` | children, blank line |
//! | `dt` | blank line, `**children**` |
//! | `dd` | blank line, children |
//! | `ol`, `ul` | blank line, children, newline |
//! | `li` | `1. ` under `ol`, `* ` otherwise, children, newline |
//! | `pre` | children with whitespace preserved |
//! | `code` | inline backticks, or a 4-space indented block when multi-line |
//!
//! # Examples
//!
//! Input HTML:
//! ```html
//! <p>Returns the index.</p>
//! <dl><dt>Parameters:</dt><dd><code>key</code> - the key</dd></dl>
//! ```
//!
//! Output Markdown:
//! ```markdown
//! Returns the index.
//!
//! **Parameters:**
//!
//! `key` - the key
//! ```

use markup5ever_rcdom::{Handle, NodeData, RcDom};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::{debug, trace};

use crate::error::ConversionError;
use crate::fast_path::{has_tag_outside_backticks, unescape_entities};
use crate::markup::MarkupContent;
use crate::parser::{self, attribute, descendant_text, element_name, has_line_break, parse_html};

/// Link scheme used by Eclipse-based tooling for cross references into javadoc
pub const ECLIPSE_JAVADOC_SCHEME: &str = "eclipse-javadoc:";

/// Indentation of each line inside a multi-line code block
const CODE_BLOCK_INDENT: &str = "    ";

/// Default element nesting limit; keeps the walk within a 2 MiB thread stack
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 512;

/// Conversion options
///
/// Hosts may deserialize these from JSON initialization options; missing fields
/// keep their defaults.
///
/// ```rust
/// use doc_markdown_converter::converter::ConversionOptions;
///
/// let options: ConversionOptions =
///     serde_json::from_str(r#"{"internalLinkSchemes":["jdt:"]}"#).unwrap();
/// assert_eq!(options.internal_link_schemes, vec!["jdt:".to_string()]);
/// assert!(options.fast_path);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConversionOptions {
    /// `href` prefixes of links that only make sense inside the tool that
    /// produced them; such links are reduced to their text
    pub internal_link_schemes: Vec<String>,
    /// Skip parsing when no tag appears outside backtick spans
    pub fast_path: bool,
    /// Elements nested deeper than this are reduced to their text
    pub max_nesting_depth: usize,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            internal_link_schemes: vec![ECLIPSE_JAVADOC_SCHEME.to_string()],
            fast_path: true,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

/// List flavour, handed to the immediate children of `ol` / `ul`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Ordered,
    Unordered,
}

/// Emission rule attached to a tag name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementRule {
    Heading(usize),
    Link,
    Bold,
    Italic,
    LineBreak,
    Paragraph,
    Block,
    DefinitionList,
    DefinitionTerm,
    DefinitionDescription,
    List(ListKind),
    ListItem,
    Preformatted,
    Code,
}

static ELEMENT_RULES: LazyLock<HashMap<&'static str, ElementRule>> = LazyLock::new(|| {
    HashMap::from([
        ("h1", ElementRule::Heading(1)),
        ("h2", ElementRule::Heading(2)),
        ("h3", ElementRule::Heading(3)),
        ("h4", ElementRule::Heading(4)),
        ("h5", ElementRule::Heading(5)),
        ("h6", ElementRule::Heading(6)),
        ("a", ElementRule::Link),
        ("b", ElementRule::Bold),
        ("em", ElementRule::Italic),
        ("br", ElementRule::LineBreak),
        ("p", ElementRule::Paragraph),
        ("div", ElementRule::Block),
        ("section", ElementRule::Block),
        ("dl", ElementRule::DefinitionList),
        ("dt", ElementRule::DefinitionTerm),
        ("dd", ElementRule::DefinitionDescription),
        ("ol", ElementRule::List(ListKind::Ordered)),
        ("ul", ElementRule::List(ListKind::Unordered)),
        ("li", ElementRule::ListItem),
        ("pre", ElementRule::Preformatted),
        ("code", ElementRule::Code),
    ])
});

/// Context tracked while walking one tree
#[derive(Debug, Default)]
struct TraversalState {
    element_depth: usize,
    pre_depth: usize,
    code_depth: usize,
    in_code_block: bool,
}

/// Single-use walker: created per conversion, consumed by [`TreeWalker::finish`]
struct TreeWalker<'a> {
    options: &'a ConversionOptions,
    state: TraversalState,
    output: String,
}

impl<'a> TreeWalker<'a> {
    fn new(options: &'a ConversionOptions) -> Self {
        Self {
            options,
            state: TraversalState::default(),
            output: String::with_capacity(256),
        }
    }

    fn finish(self) -> String {
        self.output
    }

    /// Walk every child of `node` in document order
    ///
    /// `parent_list` is only set when `node` is an `ol` / `ul`; it is not
    /// inherited by grandchildren.
    fn walk_children(&mut self, node: &Handle, parent_list: Option<ListKind>) {
        for child in node.children.borrow().iter() {
            self.walk_node(child, parent_list);
        }
    }

    fn walk_node(&mut self, node: &Handle, parent_list: Option<ListKind>) {
        match node.data {
            NodeData::Document => self.walk_children(node, None),
            NodeData::Element { .. } => self.walk_element(node, parent_list),
            NodeData::Text { ref contents } => self.handle_text(&contents.borrow()),
            // Comments, doctypes and processing instructions carry no content
            NodeData::Comment { .. }
            | NodeData::Doctype { .. }
            | NodeData::ProcessingInstruction { .. } => {}
        }
    }

    /// Emit a text node according to the current context
    ///
    /// Checked in priority order:
    /// 1. Inside a code block: each line indented by four spaces
    /// 2. Inside `<pre>`: raw text, whitespace preserved
    /// 3. Otherwise: whitespace-only text dropped, whitespace runs collapsed
    fn handle_text(&mut self, text: &str) {
        if self.state.in_code_block {
            let mut lines: Vec<&str> = text.lines().collect();
            while lines.last().is_some_and(|line| line.is_empty()) {
                lines.pop();
            }
            for line in lines {
                self.output.push_str(CODE_BLOCK_INDENT);
                self.output.push_str(line);
                self.output.push('\n');
            }
        } else if self.state.pre_depth > 0 {
            self.output.push_str(text);
        } else if !is_blank(text) {
            push_collapsed(&mut self.output, text);
        }
    }

    fn walk_element(&mut self, node: &Handle, parent_list: Option<ListKind>) {
        if self.state.element_depth >= self.options.max_nesting_depth {
            trace!(
                depth = self.state.element_depth,
                "nesting limit reached, emitting subtree as text"
            );
            let mut text = String::new();
            descendant_text(node, &mut text);
            self.handle_text(&text);
            return;
        }

        self.state.element_depth += 1;
        self.handle_element(node, parent_list);
        self.state.element_depth -= 1;
    }

    fn handle_element(&mut self, node: &Handle, parent_list: Option<ListKind>) {
        let tag_name = element_name(node).unwrap_or_default();
        let Some(&rule) = ELEMENT_RULES.get(tag_name) else {
            trace!(tag = tag_name, "transparent element");
            self.walk_children(node, None);
            return;
        };

        match rule {
            ElementRule::Heading(level) => self.handle_heading(node, level),
            ElementRule::Link => self.handle_link(node),
            ElementRule::Bold => self.wrap_children(node, "**", "**"),
            ElementRule::Italic => self.wrap_children(node, "_", "_"),
            ElementRule::LineBreak => self.output.push_str("\n\n"),
            ElementRule::Paragraph => self.walk_children(node, None),
            ElementRule::Block => self.wrap_children(node, "\n\n", "\n\n"),
            ElementRule::DefinitionList => self.wrap_children(node, "", "\n\n"),
            ElementRule::DefinitionTerm => self.wrap_children(node, "\n\n**", "**"),
            ElementRule::DefinitionDescription => self.wrap_children(node, "\n\n", ""),
            ElementRule::List(kind) => self.handle_list(node, kind),
            ElementRule::ListItem => self.handle_list_item(node, parent_list),
            ElementRule::Preformatted => self.handle_preformatted(node),
            ElementRule::Code => self.handle_code(node),
        }
    }

    fn wrap_children(&mut self, node: &Handle, prefix: &str, suffix: &str) {
        self.output.push_str(prefix);
        self.walk_children(node, None);
        self.output.push_str(suffix);
    }

    /// ATX heading surrounded by blank lines
    fn handle_heading(&mut self, node: &Handle, level: usize) {
        self.output.push_str("\n\n");
        for _ in 0..level {
            self.output.push('#');
        }
        self.output.push(' ');
        self.walk_children(node, None);
        self.output.push_str("\n\n");
    }

    /// Markdown link, or bare text for internal doc links and anchors
    ///
    /// ```html
    /// <a href="https://example.com">Example</a>       -> [Example](https://example.com)
    /// <a href="eclipse-javadoc:%3Cjava.util">List</a> -> List
    /// <a name="section">Section</a>                   -> Section
    /// ```
    fn handle_link(&mut self, node: &Handle) {
        match attribute(node, "href") {
            Some(href) if !self.is_internal_link(&href) => {
                self.output.push('[');
                self.walk_children(node, None);
                self.output.push_str("](");
                self.output.push_str(&href);
                self.output.push(')');
            }
            href => {
                trace!(href = href.as_deref(), "link reduced to text");
                self.walk_children(node, None);
            }
        }
    }

    fn is_internal_link(&self, href: &str) -> bool {
        self.options
            .internal_link_schemes
            .iter()
            .any(|scheme| href.starts_with(scheme.as_str()))
    }

    fn handle_list(&mut self, node: &Handle, kind: ListKind) {
        self.output.push_str("\n\n");
        self.walk_children(node, Some(kind));
        self.output.push('\n');
    }

    fn handle_list_item(&mut self, node: &Handle, parent_list: Option<ListKind>) {
        let marker = match parent_list {
            Some(ListKind::Ordered) => "1. ",
            Some(ListKind::Unordered) | None => "* ",
        };
        self.wrap_children(node, marker, "\n");
    }

    fn handle_preformatted(&mut self, node: &Handle) {
        self.state.pre_depth += 1;
        self.walk_children(node, None);
        self.state.pre_depth -= 1;
    }

    /// Classify a `<code>` element and emit it
    ///
    /// - nested inside another `<code>`: transparent
    /// - no children: nothing
    /// - any descendant text with a line break: indented block between blank lines
    /// - otherwise: inline backticks
    fn handle_code(&mut self, node: &Handle) {
        self.state.code_depth += 1;

        if self.state.code_depth > 1 {
            self.walk_children(node, None);
        } else if node.children.borrow().is_empty() {
            // empty <code/>
        } else if has_line_break(node) {
            self.output.push_str("\n\n");
            self.state.in_code_block = true;
            self.walk_children(node, None);
            self.state.in_code_block = false;
            self.output.push_str("\n\n");
        } else {
            self.wrap_children(node, "`", "`");
        }

        self.state.code_depth -= 1;
    }
}

/// True when `text` holds nothing but HTML whitespace
fn is_blank(text: &str) -> bool {
    text.chars().all(|ch| ch.is_ascii_whitespace())
}

/// Append `text` with every run of HTML whitespace replaced by one space
///
/// Non-breaking spaces are content and are kept.
fn push_collapsed(output: &mut String, text: &str) {
    let mut in_whitespace = false;
    for ch in text.chars() {
        if ch.is_ascii_whitespace() {
            if !in_whitespace {
                output.push(' ');
                in_whitespace = true;
            }
        } else {
            output.push(ch);
            in_whitespace = false;
        }
    }
}

/// Main Markdown converter
///
/// Holds configuration only; every call builds its own traversal state and
/// output buffer, so one converter can serve concurrent callers.
///
/// # Usage
///
/// ```rust
/// use doc_markdown_converter::converter::{ConversionOptions, MarkdownConverter};
///
/// let converter = MarkdownConverter::new();
/// let hover = converter.convert("<b>Deprecated.</b> Use <code>next()</code>");
/// assert_eq!(hover.value, "**Deprecated.** Use `next()`");
///
/// // Keep links of a custom scheme as plain text
/// let options = ConversionOptions {
///     internal_link_schemes: vec!["jdt:".to_string()],
///     ..Default::default()
/// };
/// let converter = MarkdownConverter::with_options(options);
/// assert_eq!(converter.convert(r#"<a href="jdt:Foo">Foo</a>"#).value, "Foo");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MarkdownConverter {
    options: ConversionOptions,
}

impl MarkdownConverter {
    /// Create a new converter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new converter with custom options
    pub fn with_options(options: ConversionOptions) -> Self {
        Self { options }
    }

    /// Convert an HTML fragment to Markdown
    ///
    /// Plain text (no tag outside backtick spans) is returned entity-decoded;
    /// everything else is parsed and walked. This never fails: malformed HTML
    /// is normalized by the parser.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use doc_markdown_converter::converter::MarkdownConverter;
    ///
    /// let converter = MarkdownConverter::new();
    /// assert_eq!(converter.convert("a &amp; b").value, "a & b");
    /// assert_eq!(converter.convert("<h2>Title</h2>").value, "\n\n## Title\n\n");
    /// ```
    pub fn convert(&self, html: &str) -> MarkupContent {
        if self.options.fast_path && !has_tag_outside_backticks(html) {
            debug!(len = html.len(), "no tags outside code spans, skipping parse");
            return MarkupContent::markdown(unescape_entities(html));
        }

        debug!(len = html.len(), "converting HTML tree");
        let dom = parse_html(html);
        MarkupContent::markdown(self.convert_dom(&dom))
    }

    /// Walk an already parsed document and return the Markdown buffer
    pub fn convert_dom(&self, dom: &RcDom) -> String {
        let mut walker = TreeWalker::new(&self.options);
        walker.walk_children(&dom.document, None);
        walker.finish()
    }

    /// Convert raw bytes, decoding them with `charset` (UTF-8 when `None`)
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::EncodingError` when the bytes are invalid for
    /// the charset or the charset label is unknown.
    pub fn convert_bytes(
        &self,
        html: &[u8],
        charset: Option<&str>,
    ) -> Result<MarkupContent, ConversionError> {
        let text = parser::decode_html(html, charset)?;
        Ok(self.convert(&text))
    }
}
