//! Hover conversion demo: documentation HTML in, hover Markdown out

use doc_markdown_converter::MarkdownConverter;

fn main() {
    println!("=== Documentation Hover Conversion ===\n");

    let converter = MarkdownConverter::new();

    // Example 1: plain text with code spans takes the fast path
    show(
        &converter,
        "Plain text with code spans",
        "Returns a `Map<K, V>` &amp; never null",
    );

    // Example 2: javadoc method comment
    show(
        &converter,
        "Javadoc method comment",
        "Removes all elements.<dl><dt>Throws:</dt>\
         <dd><a href=\"eclipse-javadoc:UnsupportedOperationException\">UnsupportedOperationException</a>\
         - if not supported</dd></dl>",
    );

    // Example 3: multi-line code sample
    show(
        &converter,
        "Code sample",
        "<p>Usage:</p><pre><code>var list = new ArrayList&lt;String&gt;();\nlist.add(\"x\");</code></pre>",
    );

    // Example 4: lists and external links
    show(
        &converter,
        "Lists and links",
        "<ul><li>See <a href=\"https://www.w3.org/TR/xmlschema-1/\">XML Schema</a></li>\
         <li><b>Since</b> 1.0</li></ul>",
    );
}

fn show(converter: &MarkdownConverter, title: &str, html: &str) {
    println!("{}", title);
    println!("Input HTML:");
    println!("{}\n", html);

    let hover = converter.convert(html);

    println!("Output Markdown:");
    println!("{}", hover);
    println!("---\n");
}
