//! Conversion throughput: plain-text shortcut vs full tree walk

use criterion::{Criterion, criterion_group, criterion_main};
use doc_markdown_converter::MarkdownConverter;
use std::hint::black_box;

const PLAIN: &str = "Returns the number of elements in this `Collection<E>`. If this collection \
    contains more than `Integer.MAX_VALUE` elements, returns `Integer.MAX_VALUE` &amp; stops.";

const JAVADOC: &str = "Returns the element at the specified position in this list.\
    <dl><dt>Parameters:</dt><dd><code>index</code> - index of the element to return</dd>\
    <dt>Returns:</dt><dd>the element at the specified position in this list</dd>\
    <dt>Throws:</dt><dd><a href=\"eclipse-javadoc:IndexOutOfBoundsException\">IndexOutOfBoundsException</a> \
    - if the index is out of range</dd></dl>\
    <pre><code>List&lt;String&gt; list = List.of(\"a\");\nString first = list.get(0);</code></pre>";

fn bench_convert(c: &mut Criterion) {
    let converter = MarkdownConverter::new();

    c.bench_function("fast_path_plain_text", |b| {
        b.iter(|| converter.convert(black_box(PLAIN)))
    });

    c.bench_function("tree_walk_javadoc", |b| {
        b.iter(|| converter.convert(black_box(JAVADOC)))
    });
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
