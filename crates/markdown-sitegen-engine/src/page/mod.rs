//! # Page Rendering
//!
//! Turns one markdown document into a complete HTML page by substituting its
//! title and content into a template.
//!
//! Templates use two placeholders, `{{ Title }}` and `{{ Content }}`. Root
//! relative `href="/` and `src="/` attributes are rewritten onto the site's
//! base path so the output can be served from a sub-directory.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::{error::MarkdownError, parsing::markdown_to_html};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

#[derive(Debug, Error)]
pub enum PageError {
    #[error("no `# ` title heading found")]
    MissingTitle,
    #[error(transparent)]
    Markdown(#[from] MarkdownError),
}

/// Returns the text of the first `# ` heading line.
pub fn extract_title(markdown: &str) -> Result<String, PageError> {
    static TITLE_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = TITLE_REGEX.get_or_init(|| Regex::new(r"(?m)^# (.+)$").expect("Invalid title regex"));

    re.captures(markdown)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|title| !title.is_empty())
        .ok_or(PageError::MissingTitle)
}

/// Renders `markdown` through `template`.
///
/// `base_path` replaces the leading `/` of root-relative links and sources;
/// pass `"/"` to leave them untouched.
pub fn render_page(markdown: &str, template: &str, base_path: &str) -> Result<String, PageError> {
    let title = extract_title(markdown)?;
    let content = markdown_to_html(markdown)?;

    let page = template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content);

    Ok(rewrite_base_path(&page, base_path))
}

/// Points `href="/` and `src="/` at `base_path`.
pub fn rewrite_base_path(html: &str, base_path: &str) -> String {
    html.replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"))
}
