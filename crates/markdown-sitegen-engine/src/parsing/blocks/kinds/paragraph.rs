use crate::{error::Result, html::Node, parsing::inline::text_to_children};

/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the fallback when no other
/// block kind matches. Lines are joined with single spaces before inline
/// parsing.
pub struct Paragraph;

impl Paragraph {
    pub fn to_node(block: &str) -> Result<Node> {
        let text = block.split('\n').collect::<Vec<_>>().join(" ");
        Ok(Node::parent("p", text_to_children(&text)?))
    }
}
