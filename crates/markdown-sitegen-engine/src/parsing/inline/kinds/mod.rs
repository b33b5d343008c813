//! # Inline Kinds
//!
//! Inline-specific types that own their syntax.
//!
//! ## Types
//!
//! - **`Delimited`**: paired delimiters `**`, `_` and `` ` `` for bold, italic and code
//! - **`Reference`**: bracketed references `![alt](url)` and `[text](url)`
//!
//! The parser asks these types for their delimiters and patterns; it never
//! hardcodes `**` or `[`.

pub mod delimited;
pub mod reference;

pub use delimited::Delimited;
pub use reference::Reference;
