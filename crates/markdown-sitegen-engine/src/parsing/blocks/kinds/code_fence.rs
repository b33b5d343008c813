use crate::{
    error::{MarkdownError, Result},
    html::Node,
};

/// Fenced code block type with owned fence constant.
///
/// Code blocks are raw zones: their content is never inline-parsed.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Characters removed from the front: the fence and the newline after it.
    const OPEN_CHARS: usize = 4;

    /// More than one line, with the first and last lines opening with a fence.
    pub fn matches(block: &str) -> bool {
        let lines: Vec<&str> = block.split('\n').collect();
        match (lines.first(), lines.last()) {
            (Some(first), Some(last)) if lines.len() > 1 => {
                first.starts_with(Self::FENCE) && last.starts_with(Self::FENCE)
            }
            _ => false,
        }
    }

    /// Builds `pre > code > text` from the raw content between the fences.
    pub fn to_node(block: &str) -> Result<Node> {
        if !block.starts_with(Self::FENCE) || !block.ends_with(Self::FENCE) {
            return Err(MarkdownError::InvalidCodeBlock);
        }
        let start = block
            .char_indices()
            .nth(Self::OPEN_CHARS)
            .map_or(block.len(), |(i, _)| i);
        // The closing fence is ASCII, so `end` is always a char boundary.
        let end = block.len() - Self::FENCE.len();
        let text = block.get(start..end).ok_or(MarkdownError::InvalidCodeBlock)?;

        let code = Node::parent("code", vec![Node::text(text)]);
        Ok(Node::parent("pre", vec![code]))
    }
}
