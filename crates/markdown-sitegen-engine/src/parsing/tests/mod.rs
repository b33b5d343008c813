//! End-to-end tests for the parsing pipeline.
//!
//! Fixture documents (.md) live in `fixtures/` next to this module; expected
//! HTML is kept inline with insta.

use pretty_assertions::assert_eq;

use crate::{
    error::MarkdownError,
    html::Node,
    parsing::{
        blocks::BlockKind, classify_document, inline::TextSpan, markdown_to_html,
        markdown_to_html_node,
    },
};

fn fixture(name: &str) -> String {
    let path = format!(
        "{}/src/parsing/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    );
    std::fs::read_to_string(path).unwrap()
}

// Scenarios

#[test]
fn heading_document() {
    let node = markdown_to_html_node("# Hello").unwrap();
    assert_eq!(
        node,
        Node::parent("div", vec![Node::parent("h1", vec![Node::text("Hello")])])
    );
    assert_eq!(node.to_html().unwrap(), "<div><h1>Hello</h1></div>");
}

#[test]
fn ordered_list_document() {
    insta::assert_snapshot!(
        markdown_to_html("1. a\n2. b").unwrap(),
        @"<div><ol><li>a</li><li>b</li></ol></div>"
    );
}

#[test]
fn code_block_document() {
    assert_eq!(
        markdown_to_html("```\nprint(1)\n```").unwrap(),
        "<div><pre><code>print(1)\n</code></pre></div>"
    );
}

#[test]
fn code_block_with_non_ascii_info_string() {
    assert_eq!(
        markdown_to_html("```é\nprint(1)\n```").unwrap(),
        "<div><pre><code>\nprint(1)\n</code></pre></div>"
    );
}

#[test]
fn paragraphs_document() {
    let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with _italic_ text and `code` here

";
    insta::assert_snapshot!(
        markdown_to_html(md).unwrap(),
        @"<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
    );
}

#[test]
fn code_block_is_not_inline_parsed() {
    let md = "
```
This is text that _should_ remain
the **same** even with inline stuff
```
";
    assert_eq!(
        markdown_to_html(md).unwrap(),
        "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
    );
}

#[test]
fn quote_document() {
    insta::assert_snapshot!(
        markdown_to_html("> This is a\n> blockquote block\n\nthis is paragraph text").unwrap(),
        @"<div><blockquote>This is a blockquote block</blockquote><p>this is paragraph text</p></div>"
    );
}

#[test]
fn links_and_images_document() {
    insta::assert_snapshot!(
        markdown_to_html("See [the docs](/docs) and ![logo](/logo.png)").unwrap(),
        @r#"<div><p>See <a href="/docs">the docs</a> and <img src="/logo.png" alt="logo">logo</img></p></div>"#
    );
}

#[test]
fn full_fixture_document() {
    insta::assert_snapshot!(
        markdown_to_html(&fixture("full_document")).unwrap(),
        @r#"<div><h1>Tolkien Fan Club</h1><p>Here's the deal, <b>I like Tolkien</b>.</p><blockquote>"I am in fact a Hobbit in all but size."  -- J.R.R. Tolkien</blockquote><h2>Blog posts</h2><ul><li><a href="/blog/glorfindel">Why Glorfindel is More Impressive than Legolas</a></li><li><a href="/blog/tom">Why Tom Bombadil Was a Mistake</a></li></ul><h2>Reasons I like Tolkien</h2><ol><li>You can spend years studying the legendarium</li><li>He wrote <i>The Silmarillion</i></li><li>He used <code>Old English</code> as inspiration</li></ol></div>"#
    );
}

#[test]
fn fixture_blocks_are_classified_in_order() {
    let kinds: Vec<BlockKind> = classify_document(&fixture("full_document"))
        .into_iter()
        .map(|b| b.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            BlockKind::Heading,
            BlockKind::Paragraph,
            BlockKind::Quote,
            BlockKind::Heading,
            BlockKind::UnorderedList,
            BlockKind::Heading,
            BlockKind::OrderedList,
        ]
    );
}

// Properties

#[test]
fn empty_document_is_empty_div() {
    assert_eq!(markdown_to_html("").unwrap(), "<div></div>");
    assert_eq!(markdown_to_html("\n\n  \n\n").unwrap(), "<div></div>");
}

#[test]
fn output_is_deterministic() {
    let md = fixture("full_document");
    assert_eq!(markdown_to_html(&md).unwrap(), markdown_to_html(&md).unwrap());
}

#[test]
fn broken_list_degrades_to_paragraph() {
    assert_eq!(
        markdown_to_html("1. a\n3. b").unwrap(),
        "<div><p>1. a 3. b</p></div>"
    );
}

#[test]
fn error_in_any_block_aborts_document() {
    let result = markdown_to_html_node("# Fine\n\nthis is `broken\n\nfine again");
    assert!(matches!(
        result,
        Err(MarkdownError::UnterminatedDelimiter { delimiter: "`", .. })
    ));
}

#[test]
fn italic_around_bold_is_unterminated() {
    // bold runs first and leaves each `_` alone in its own plain span
    assert_eq!(
        markdown_to_html_node("_italic with **bold** inside_"),
        Err(MarkdownError::UnterminatedDelimiter {
            delimiter: "_",
            text: "_italic with ".to_string(),
        })
    );
}

#[test]
fn inline_spans_become_paragraph_children() {
    let node = markdown_to_html_node("**a** b ![c](d)").unwrap();
    let expected: Vec<Node> = [
        TextSpan::bold("a"),
        TextSpan::plain(" b "),
        TextSpan::image("c", "d"),
    ]
    .into_iter()
    .map(crate::parsing::inline::text_span_to_node)
    .collect();
    assert_eq!(node.children()[0].children(), expected.as_slice());
}
