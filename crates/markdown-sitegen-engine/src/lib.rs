pub mod error;
pub mod html;
pub mod io;
pub mod page;
pub mod parsing;
pub mod site;

// Re-export key types for easier usage
pub use error::MarkdownError;
pub use html::{Attributes, Node};
pub use page::{PageError, extract_title, render_page};
pub use parsing::{
    blocks::{BlockKind, block_to_html_node, build_block, classify_block, split_blocks},
    inline::{SpanKind, TextSpan, parse_inline},
    markdown_to_html, markdown_to_html_node,
};
pub use site::{SiteBuilder, SiteError, SiteReport};
