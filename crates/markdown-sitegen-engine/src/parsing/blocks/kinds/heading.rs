use crate::{
    error::{MarkdownError, Result},
    html::Node,
    parsing::inline::text_to_children,
};

/// ATX heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Number of leading `#` characters.
    pub fn level(block: &str) -> usize {
        block.chars().take_while(|c| *c == Self::MARKER).count()
    }

    /// True for 1 to 6 `#` immediately followed by a space.
    pub fn matches(block: &str) -> bool {
        let level = Self::level(block);
        (1..=Self::MAX_LEVEL).contains(&level) && block[level..].starts_with(' ')
    }

    /// Builds `h{level}` from the text after the marker and its following space.
    pub fn to_node(block: &str) -> Result<Node> {
        let level = Self::level(block);
        let mut rest = block[level..].chars();
        rest.next();
        let text = rest.as_str();
        if text.is_empty() {
            return Err(MarkdownError::InvalidHeading { level });
        }
        Ok(Node::parent(format!("h{level}"), text_to_children(text)?))
    }
}
