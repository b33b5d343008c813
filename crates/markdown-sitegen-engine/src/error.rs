use thiserror::Error;

/// Errors raised while turning markdown into an HTML node tree or serializing it.
///
/// Every variant aborts the document being processed; there is no partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkdownError {
    #[error("invalid markdown, unterminated `{delimiter}` in: {text}")]
    UnterminatedDelimiter {
        delimiter: &'static str,
        text: String,
    },

    #[error("invalid heading level {level}: no heading text after the marker")]
    InvalidHeading { level: usize },

    #[error("invalid code block: missing opening or closing fence")]
    InvalidCodeBlock,

    #[error("invalid quote block: line does not start with `>`: {line}")]
    InvalidQuote { line: String },

    #[error("all parent nodes must have a tag")]
    MissingTag,

    #[error("all leaf nodes must have a value (tag: {tag:?})")]
    EmptyLeafValue { tag: Option<String> },

    #[error("invalid block type: {0}")]
    InvalidBlockType(String),
}

pub type Result<T, E = MarkdownError> = std::result::Result<T, E>;
