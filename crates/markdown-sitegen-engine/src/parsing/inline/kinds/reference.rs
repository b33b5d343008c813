use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::parsing::inline::types::TextSpan;

/// A bracketed reference to a URL: `![alt](url)` or `[text](url)`.
///
/// Labels may not contain `[` or `]`; URLs may not contain `(` or `)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    Image,
    Link,
}

/// A reference found in text, with its byte range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceMatch {
    pub start: usize,
    pub end: usize,
    pub label: String,
    pub url: String,
}

impl Reference {
    /// Pass order. Images run first so their `[alt](url)` tail is never seen as a link.
    pub const PASSES: [Reference; 2] = [Reference::Image, Reference::Link];

    /// The marker that may not directly precede a link.
    pub const IMAGE_BANG: char = '!';

    fn regex(self) -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        match self {
            Reference::Image => IMAGE_REGEX.get_or_init(|| {
                Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid image regex")
            }),
            Reference::Link => LINK_REGEX.get_or_init(|| {
                Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid link regex")
            }),
        }
    }

    /// Finds all non-overlapping references in `text`, left to right.
    ///
    /// A link candidate directly preceded by `!` is rejected and the search
    /// resumes one byte after its opening bracket.
    pub fn find_all(self, text: &str) -> Vec<ReferenceMatch> {
        let re = self.regex();
        let mut out = vec![];
        let mut pos = 0;

        while pos <= text.len() {
            let Some(caps) = re.captures_at(text, pos) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };

            if self == Reference::Link && text[..whole.start()].ends_with(Self::IMAGE_BANG) {
                // `[` is one byte, so start + 1 is always a char boundary.
                pos = whole.start() + 1;
                continue;
            }

            out.push(ReferenceMatch {
                start: whole.start(),
                end: whole.end(),
                label: group(&caps, 1),
                url: group(&caps, 2),
            });
            pos = whole.end();
        }

        out
    }

    pub fn span(self, label: &str, url: &str) -> TextSpan {
        match self {
            Reference::Image => TextSpan::image(label, url),
            Reference::Link => TextSpan::link(label, url),
        }
    }
}

fn group(caps: &Captures<'_>, i: usize) -> String {
    caps.get(i).map_or_else(String::new, |m| m.as_str().to_string())
}

/// Extracts `(alt, url)` pairs for every image in `text`.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    Reference::Image
        .find_all(text)
        .into_iter()
        .map(|m| (m.label, m.url))
        .collect()
}

/// Extracts `(text, url)` pairs for every link in `text`, ignoring images.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    Reference::Link
        .find_all(text)
        .into_iter()
        .map(|m| (m.label, m.url))
        .collect()
}
