/// The delimiter between blocks: one blank line.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a document into trimmed, non-empty blocks.
///
/// Splits on every `"\n\n"`; runs of blank lines therefore produce empty
/// segments, which are discarded after trimming.
pub fn split_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}
