pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use crate::{error::Result, html::Node};

use blocks::{BlockKind, MarkdownBlockClassifier, build_block, split_blocks};

/// Tag of the root node every document is wrapped in.
pub const ROOT_TAG: &str = "div";

/// A block of the source document with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedBlock<'a> {
    pub kind: BlockKind,
    pub text: &'a str,
}

/// Splits and classifies a document without building any nodes.
pub fn classify_document(markdown: &str) -> Vec<ClassifiedBlock<'_>> {
    let classifier = MarkdownBlockClassifier;
    split_blocks(markdown)
        .into_iter()
        .map(|text| ClassifiedBlock {
            kind: classifier.classify(text),
            text,
        })
        .collect()
}

/// Parses a markdown document into a single `div` node holding one child per block.
///
/// Any error in any block aborts the whole document.
pub fn markdown_to_html_node(markdown: &str) -> Result<Node> {
    let blocks = classify_document(markdown);
    log::debug!("parsing document with {} blocks", blocks.len());

    let children = blocks
        .iter()
        .map(|block| build_block(block.kind, block.text))
        .collect::<Result<Vec<_>>>()?;

    Ok(Node::parent(ROOT_TAG, children))
}

/// Parses a markdown document and serializes it to HTML.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    markdown_to_html_node(markdown)?.to_html()
}
