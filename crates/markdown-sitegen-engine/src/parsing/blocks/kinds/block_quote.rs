use crate::{
    error::{MarkdownError, Result},
    html::Node,
    parsing::inline::text_to_children,
};

/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn matches(block: &str) -> bool {
        block.split('\n').all(|line| line.starts_with(Self::PREFIX))
    }

    /// Strips every leading `>` and surrounding whitespace from a line.
    ///
    /// Returns `None` if the line is not quoted.
    pub fn strip_prefixes(line: &str) -> Option<&str> {
        if !line.starts_with(Self::PREFIX) {
            return None;
        }
        Some(line.trim_start_matches(Self::PREFIX).trim())
    }

    /// Builds a `blockquote` from all lines joined by single spaces.
    pub fn to_node(block: &str) -> Result<Node> {
        let lines = block
            .split('\n')
            .map(|line| {
                Self::strip_prefixes(line).ok_or_else(|| MarkdownError::InvalidQuote {
                    line: line.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Node::parent("blockquote", text_to_children(&lines.join(" "))?))
    }
}
