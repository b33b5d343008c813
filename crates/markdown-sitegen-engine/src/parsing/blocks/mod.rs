//! # Block Parsing
//!
//! Three-phase block parsing over a whole document.
//!
//! ## Parsing Phases
//!
//! 1. **Splitting** (`split`): the document is cut on blank lines into
//!    trimmed, non-empty blocks
//!
//! 2. **Classification** (`classify`): each block gets exactly one `BlockKind`,
//!    first matching predicate wins, `Paragraph` otherwise
//!
//! 3. **Construction** (`builder`): the kind's builder turns the block into a
//!    `Node`, inline-parsing leaf text
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`
//! - **`kinds`**: Block-specific types owning their syntax (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`split`**: `split_blocks`
//! - **`classify`**: `MarkdownBlockClassifier`
//! - **`builder`**: `build_block` dispatch and `block_to_html_node`
//!
//! ## Key Invariants
//!
//! - Classification is total: malformed blocks degrade to paragraphs
//! - Fenced code blocks are raw zones: no inline parsing inside
//! - Blocks are independent; building one never looks at another

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod split;
pub mod types;

pub use builder::{block_to_html_node, build_block};
pub use classify::{MarkdownBlockClassifier, classify_block};
pub use split::split_blocks;
pub use types::BlockKind;
