use crate::{error::Result, html::Node, parsing::inline::text_to_children};

/// `- item` lists.
pub struct UnorderedList;

impl UnorderedList {
    pub const BULLET: &'static str = "- ";

    pub fn matches(block: &str) -> bool {
        block.split('\n').all(|line| line.starts_with(Self::BULLET))
    }

    pub fn item_text(line: &str) -> &str {
        line.strip_prefix(Self::BULLET).unwrap_or(line)
    }

    pub fn to_node(block: &str) -> Result<Node> {
        Ok(Node::parent("ul", list_items(block, Self::item_text)?))
    }
}

/// `1. item` lists numbered from one without gaps.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    /// Line `i` must start with `{i + 1}. `; any deviation rejects the whole block.
    pub fn matches(block: &str) -> bool {
        block
            .split('\n')
            .enumerate()
            .all(|(i, line)| line.starts_with(&format!("{}{}", i + 1, Self::SEPARATOR)))
    }

    /// Everything after the first `". "`, or the whole line if there is none.
    pub fn item_text(line: &str) -> &str {
        line.split_once(Self::SEPARATOR)
            .map_or(line, |(_, text)| text)
    }

    pub fn to_node(block: &str) -> Result<Node> {
        Ok(Node::parent("ol", list_items(block, Self::item_text)?))
    }
}

/// One `li` per line, each inline-parsed independently.
fn list_items(block: &str, item_text: fn(&str) -> &str) -> Result<Vec<Node>> {
    block
        .split('\n')
        .map(|line| -> Result<Node> {
            Ok(Node::parent("li", text_to_children(item_text(line))?))
        })
        .collect()
}
