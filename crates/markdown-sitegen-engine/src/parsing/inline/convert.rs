use crate::html::Node;

use super::types::TextSpan;

/// Converts an inline span into its HTML leaf.
///
/// | span | node |
/// |---|---|
/// | Plain | untagged leaf |
/// | Bold / Italic / Code | `b` / `i` / `code` |
/// | Link | `a` with `href` |
/// | Image | `img` with `src`, `alt`; the alt text is also the value |
pub fn text_span_to_node(span: TextSpan) -> Node {
    match span {
        TextSpan::Plain(text) => Node::text(text),
        TextSpan::Bold(text) => Node::leaf("b", text),
        TextSpan::Italic(text) => Node::leaf("i", text),
        TextSpan::Code(text) => Node::leaf("code", text),
        TextSpan::Link { text, url } => Node::leaf("a", text).with_attribute("href", url),
        TextSpan::Image { alt, url } => Node::leaf("img", alt.clone())
            .with_attribute("src", url)
            .with_attribute("alt", alt),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarkdownError;

    #[test]
    fn plain_becomes_raw_text() {
        let node = text_span_to_node(TextSpan::plain("This is a text node"));
        assert_eq!(node.tag(), None);
        assert_eq!(node.value(), Some("This is a text node"));
    }

    #[test]
    fn styles_become_tagged_leaves() {
        assert_eq!(text_span_to_node(TextSpan::bold("x")).to_html().unwrap(), "<b>x</b>");
        assert_eq!(text_span_to_node(TextSpan::italic("x")).to_html().unwrap(), "<i>x</i>");
        assert_eq!(
            text_span_to_node(TextSpan::code("x")).to_html().unwrap(),
            "<code>x</code>"
        );
    }

    #[test]
    fn link_carries_href() {
        let node = text_span_to_node(TextSpan::link("boot", "https://boot.dev"));
        assert_eq!(
            node.to_html().unwrap(),
            r#"<a href="https://boot.dev">boot</a>"#
        );
    }

    #[test]
    fn image_carries_src_then_alt() {
        let node = text_span_to_node(TextSpan::image("a cat", "/cat.png"));
        assert_eq!(node.attributes().get("src"), Some("/cat.png"));
        assert_eq!(node.attributes().get("alt"), Some("a cat"));
        assert_eq!(
            node.to_html().unwrap(),
            r#"<img src="/cat.png" alt="a cat">a cat</img>"#
        );
    }

    #[test]
    fn image_with_empty_alt_cannot_serialize() {
        let node = text_span_to_node(TextSpan::image("", "/cat.png"));
        assert!(matches!(
            node.to_html(),
            Err(MarkdownError::EmptyLeafValue { .. })
        ));
    }
}
