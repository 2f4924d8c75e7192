//! Plain-text shortcut
//!
//! Most documentation strings handed to a hover are plain sentences, sometimes
//! with backtick code spans that themselves contain `<` or `>` (generic types,
//! comparisons). Those never need a parser: when no tag appears outside a
//! backtick span the text is only entity-decoded.
//!
//! # Backtick Spans
//!
//! A backtick toggles between "outside" and "inside". An odd number of
//! backticks leaves the remainder of the string inside the span, so
//! ``see `Map<K, V>`` is plain text. A `<` left open when a span starts is
//! dropped: a tag never straddles a code span.

use std::borrow::Cow;

/// Returns true if `text` contains a `<...>` pair outside of backtick spans
///
/// # Examples
///
/// ```rust
/// use doc_markdown_converter::fast_path::has_tag_outside_backticks;
///
/// assert!(has_tag_outside_backticks("Returns <b>true</b>"));
/// assert!(!has_tag_outside_backticks("Returns `List<String>`"));
/// assert!(!has_tag_outside_backticks("a < b"));
/// ```
pub fn has_tag_outside_backticks(text: &str) -> bool {
    let mut in_backticks = false;
    let mut tag_open = false;

    for byte in text.bytes() {
        match byte {
            b'`' => {
                in_backticks = !in_backticks;
                tag_open = false;
            }
            b'<' if !in_backticks => tag_open = true,
            b'>' if !in_backticks && tag_open => return true,
            _ => {}
        }
    }

    false
}

/// Named references recognized by XML
const XML_NAMED_ENTITIES: &[&str] = &["amp", "lt", "gt", "quot", "apos"];

/// Decode XML character references
///
/// The five XML named references (`&amp;`, `&lt;`, `&gt;`, `&quot;`,
/// `&apos;`) and numeric references (`&#60;`, `&#x3C;`) become their literal
/// characters. HTML-only names such as `&copy;` or `&nbsp;` are left as
/// written. Text without `&` is borrowed unchanged.
///
/// # Examples
///
/// ```rust
/// use doc_markdown_converter::fast_path::unescape_entities;
///
/// assert_eq!(unescape_entities("&copy; &amp;"), "&copy; &");
/// assert_eq!(unescape_entities("&#169;"), "©");
/// ```
pub fn unescape_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        output.push_str(&rest[..amp]);
        rest = &rest[amp..];

        match xml_reference_len(rest) {
            Some(len) => {
                output.push_str(&html_escape::decode_html_entities(&rest[..len]));
                rest = &rest[len..];
            }
            None => {
                output.push('&');
                rest = &rest[1..];
            }
        }
    }

    output.push_str(rest);
    Cow::Owned(output)
}

/// Byte length of the XML reference at the start of `text` (`&` through `;`)
fn xml_reference_len(text: &str) -> Option<usize> {
    let after_amp = &text[1..];
    let body_len = after_amp
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'#')
        .count();
    if after_amp.as_bytes().get(body_len) != Some(&b';') {
        return None;
    }
    let body = &after_amp[..body_len];
    let semicolon = body_len + 1;

    let is_numeric = match body.strip_prefix('#') {
        Some(digits) => match digits.strip_prefix(['x', 'X']) {
            Some(hex) => !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()),
            None => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        },
        None => false,
    };

    (is_numeric || XML_NAMED_ENTITIES.contains(&body)).then_some(semicolon + 1)
}
