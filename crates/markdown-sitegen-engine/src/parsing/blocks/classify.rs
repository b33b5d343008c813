use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Classifies whole blocks for the block parsing phase.
///
/// Predicates are tried in a fixed order and the first match wins, so a
/// block is never ambiguous. Anything that fails every predicate - including
/// lists with a typo in one line - is a paragraph.
pub struct MarkdownBlockClassifier;

impl MarkdownBlockClassifier {
    pub fn classify(&self, block: &str) -> BlockKind {
        if Heading::matches(block) {
            BlockKind::Heading
        } else if CodeFence::matches(block) {
            BlockKind::Code
        } else if BlockQuote::matches(block) {
            BlockKind::Quote
        } else if UnorderedList::matches(block) {
            BlockKind::UnorderedList
        } else if OrderedList::matches(block) {
            BlockKind::OrderedList
        } else {
            BlockKind::Paragraph
        }
    }
}

/// Classifies a block with the default classifier.
pub fn classify_block(block: &str) -> BlockKind {
    MarkdownBlockClassifier.classify(block)
}
