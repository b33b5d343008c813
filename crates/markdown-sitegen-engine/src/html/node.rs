use crate::error::{MarkdownError, Result};

use super::attributes::Attributes;

/// An element of the output HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal content, optionally wrapped in a tag.
    ///
    /// An untagged leaf renders its value raw, with no surrounding element.
    Leaf {
        tag: Option<String>,
        value: String,
        attributes: Attributes,
    },
    /// An element whose content is its ordered children.
    Parent {
        tag: String,
        children: Vec<Node>,
        attributes: Attributes,
    },
}

impl Node {
    /// Creates an untagged leaf that renders as raw text.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Leaf {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// Creates a tagged leaf, e.g. `<b>value</b>`.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Node::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Parent {
            tag: tag.into(),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Adds (or replaces) an attribute, preserving first-insertion order.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            Node::Leaf { attributes, .. } | Node::Parent { attributes, .. } => {
                attributes.set(name, value)
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf { tag, .. } => tag.as_deref(),
            Node::Parent { tag, .. } => Some(tag),
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Leaf { value, .. } => Some(value),
            Node::Parent { .. } => None,
        }
    }

    /// Children of a parent node; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf { .. } => &[],
            Node::Parent { children, .. } => children,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Node::Leaf { attributes, .. } | Node::Parent { attributes, .. } => attributes,
        }
    }

    /// Serializes this node and its descendants to an HTML string.
    ///
    /// Fails with [`MarkdownError::MissingTag`] for a parent with an empty tag and
    /// [`MarkdownError::EmptyLeafValue`] for a leaf with an empty value anywhere in
    /// the tree.
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<()> {
        match self {
            Node::Leaf {
                tag,
                value,
                attributes,
            } => {
                if value.is_empty() {
                    return Err(MarkdownError::EmptyLeafValue { tag: tag.clone() });
                }
                match tag {
                    Some(tag) => {
                        open_tag(out, tag, attributes);
                        out.push_str(value);
                        close_tag(out, tag);
                    }
                    None => out.push_str(value),
                }
            }
            Node::Parent {
                tag,
                children,
                attributes,
            } => {
                if tag.is_empty() {
                    return Err(MarkdownError::MissingTag);
                }
                open_tag(out, tag, attributes);
                for child in children {
                    child.write_html(out)?;
                }
                close_tag(out, tag);
            }
        }
        Ok(())
    }
}

fn open_tag(out: &mut String, tag: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(tag);
    attributes.write_html(out);
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
