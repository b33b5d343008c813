/// The kind of an inline span, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A typed run of inline text produced by [`parse_inline`](super::parse_inline).
///
/// Only links and images carry a URL, so the variants enforce that
/// `url()` is `Some` exactly for those two kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSpan {
    /// Text outside any inline construct. The only variant later passes expand.
    Plain(String),
    Bold(String),
    Italic(String),
    Code(String),
    /// `[text](url)`
    Link { text: String, url: String },
    /// `![alt](url)`; `text()` returns the alt text.
    Image { alt: String, url: String },
}

impl TextSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        TextSpan::Plain(text.into())
    }

    pub fn bold(text: impl Into<String>) -> Self {
        TextSpan::Bold(text.into())
    }

    pub fn italic(text: impl Into<String>) -> Self {
        TextSpan::Italic(text.into())
    }

    pub fn code(text: impl Into<String>) -> Self {
        TextSpan::Code(text.into())
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        TextSpan::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        TextSpan::Image {
            alt: alt.into(),
            url: url.into(),
        }
    }

    pub fn kind(&self) -> SpanKind {
        match self {
            TextSpan::Plain(_) => SpanKind::Plain,
            TextSpan::Bold(_) => SpanKind::Bold,
            TextSpan::Italic(_) => SpanKind::Italic,
            TextSpan::Code(_) => SpanKind::Code,
            TextSpan::Link { .. } => SpanKind::Link,
            TextSpan::Image { .. } => SpanKind::Image,
        }
    }

    /// Display text: the label for links, the alt text for images.
    pub fn text(&self) -> &str {
        match self {
            TextSpan::Plain(t) | TextSpan::Bold(t) | TextSpan::Italic(t) | TextSpan::Code(t) => t,
            TextSpan::Link { text, .. } => text,
            TextSpan::Image { alt, .. } => alt,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            TextSpan::Link { url, .. } | TextSpan::Image { url, .. } => Some(url),
            _ => None,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, TextSpan::Plain(_))
    }
}
