#![no_main]

use doc_markdown_converter::convert;
use doc_markdown_converter::fast_path::{has_tag_outside_backticks, unescape_entities};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    if !has_tag_outside_backticks(text) {
        let value = convert(text).value;
        assert_eq!(value, unescape_entities(text));
        if !text.contains('&') {
            assert_eq!(value, text);
        }
    }
});
