#![no_main]

use doc_markdown_converter::MarkdownConverter;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let converter = MarkdownConverter::new();
    // Invalid UTF-8 must surface as an error, never a panic
    let from_bytes = converter.convert_bytes(data, None);
    let _ = converter.convert_bytes(data, Some("windows-1252"));

    match std::str::from_utf8(data) {
        Ok(text) => {
            let text = text.strip_prefix('\u{feff}').unwrap_or(text);
            assert_eq!(from_bytes.ok(), Some(converter.convert(text)));
        }
        Err(_) => assert!(from_bytes.is_err()),
    }
});
