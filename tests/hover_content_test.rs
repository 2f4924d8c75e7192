//! Hover content shape tests
//!
//! Converted results are serialized directly into editor hover responses, so
//! the JSON shape and the host-facing options format are part of the contract.

use doc_markdown_converter::converter::{ConversionOptions, MarkdownConverter};
use doc_markdown_converter::{MarkupContent, MarkupKind, convert};

/// Test that a converted result serializes as `{kind, value}`
#[test]
fn test_converted_result_json_shape() {
    let content = convert("<b>Deprecated</b>");
    let json = serde_json::to_string(&content).expect("serialize");
    assert_eq!(json, r#"{"kind":"markdown","value":"**Deprecated**"}"#);
}

/// Test that a fast-path result is still tagged as Markdown
#[test]
fn test_fast_path_result_kind() {
    let content = convert("plain &amp; simple");
    assert_eq!(content, MarkupContent::markdown("plain & simple"));
    assert_eq!(content.kind, MarkupKind::Markdown);
}

/// Test that serialized content round-trips through the protocol shape
#[test]
fn test_result_deserializes_back() {
    let content = convert("<h1>Title</h1>");
    let json = serde_json::to_value(&content).expect("serialize");
    let back: MarkupContent = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, content);
}

/// Test that host initialization options configure link handling
#[test]
fn test_options_from_host_json() {
    let options: ConversionOptions = serde_json::from_str(
        r#"{ "internalLinkSchemes": ["eclipse-javadoc:", "jdt:"], "fastPath": true }"#,
    )
    .expect("options JSON");
    let converter = MarkdownConverter::with_options(options);

    assert_eq!(converter.convert(r#"<a href="jdt:X">X</a>"#), "X");
    assert_eq!(converter.convert(r#"<a href="eclipse-javadoc:Y">Y</a>"#), "Y");
    assert_eq!(
        converter.convert(r#"<a href="file:///z.html">Z</a>"#),
        "[Z](file:///z.html)"
    );
}

/// Test that an empty scheme list keeps every link
#[test]
fn test_no_internal_schemes() {
    let options: ConversionOptions =
        serde_json::from_str(r#"{ "internalLinkSchemes": [] }"#).expect("options JSON");
    let converter = MarkdownConverter::with_options(options);
    assert_eq!(
        converter.convert(r#"<a href="eclipse-javadoc:Y">Y</a>"#),
        "[Y](eclipse-javadoc:Y)"
    );
}
