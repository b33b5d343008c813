use crate::{error::Result, html::Node};

use super::{
    classify::MarkdownBlockClassifier,
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    types::BlockKind,
};

/// Builds the node for a block of an already-known kind.
pub fn build_block(kind: BlockKind, block: &str) -> Result<Node> {
    match kind {
        BlockKind::Paragraph => Paragraph::to_node(block),
        BlockKind::Heading => Heading::to_node(block),
        BlockKind::Code => CodeFence::to_node(block),
        BlockKind::Quote => BlockQuote::to_node(block),
        BlockKind::UnorderedList => UnorderedList::to_node(block),
        BlockKind::OrderedList => OrderedList::to_node(block),
    }
}

/// Classifies a block and builds its node.
pub fn block_to_html_node(block: &str) -> Result<Node> {
    let kind = MarkdownBlockClassifier.classify(block);
    log::trace!("block classified as {kind}");
    build_block(kind, block)
}
