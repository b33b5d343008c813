//! # Inline Parsing
//!
//! Pass-based inline parsing over the text of a single block.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs on the leaf text of
//! paragraphs, headings, quotes and list items. Code blocks are raw and never
//! reach this module.
//!
//! The parser refines a list of spans through successive global passes:
//!
//! 1. `**` → Bold
//! 2. `_` → Italic
//! 3. `` ` `` → Code
//! 4. `![alt](url)` → Image
//! 5. `[text](url)` → Link
//!
//! Each pass only expands `Plain` spans, so styles never nest and code
//! content is never searched for references.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and `SpanKind`
//! - **`kinds`**: Inline-specific types owning their delimiters and patterns
//! - **`parser`**: `parse_inline()` entry point and the per-pass splitters
//! - **`convert`**: span → HTML leaf conversion

pub mod convert;
pub mod kinds;
pub mod parser;
pub mod types;

pub use convert::text_span_to_node;
pub use parser::parse_inline;
pub use types::{SpanKind, TextSpan};

use crate::{error::Result, html::Node};

/// Inline-parses `text` and converts every span to a leaf node.
pub fn text_to_children(text: &str) -> Result<Vec<Node>> {
    Ok(parse_inline(text)?
        .into_iter()
        .map(text_span_to_node)
        .collect())
}
