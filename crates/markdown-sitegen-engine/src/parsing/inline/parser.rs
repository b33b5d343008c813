use crate::error::{MarkdownError, Result};

use super::{
    kinds::{Delimited, Reference},
    types::TextSpan,
};

/// Parses inline markdown into a sequence of [`TextSpan`]s.
///
/// Starts from a single plain span holding the whole text, then runs full
/// passes in a fixed order: bold, italic, code, images, links. Each pass only
/// expands plain spans, so styled text is never re-scanned and styles do not
/// nest.
///
/// # Errors
/// [`MarkdownError::UnterminatedDelimiter`] if any plain span holds an odd
/// number of `**`, `_` or `` ` `` delimiters. The whole parse is abandoned.
pub fn parse_inline(text: &str) -> Result<Vec<TextSpan>> {
    let mut spans = vec![TextSpan::plain(text)];

    for style in Delimited::PASSES {
        spans = split_spans_delimiter(spans, style)?;
    }
    for reference in Reference::PASSES {
        spans = split_spans_reference(spans, reference);
    }

    log::trace!("inline parse produced {} spans", spans.len());
    Ok(spans)
}

/// Splits every plain span on `style`'s delimiter.
///
/// Parts alternate outside/inside the delimiter, so a valid split always has
/// an odd number of parts. Empty parts (from delimiters at either end or
/// adjacent delimiters) are dropped.
pub fn split_spans_delimiter(spans: Vec<TextSpan>, style: Delimited) -> Result<Vec<TextSpan>> {
    let delimiter = style.delimiter();
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let TextSpan::Plain(text) = span else {
            out.push(span);
            continue;
        };

        let parts: Vec<&str> = text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(MarkdownError::UnterminatedDelimiter {
                delimiter,
                text: text.clone(),
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(TextSpan::plain(part));
            } else {
                out.push(style.span(part));
            }
        }
    }

    Ok(out)
}

/// Extracts images or links from every plain span.
///
/// Text around each reference stays plain; empty leftovers are dropped. A
/// span with no references passes through unchanged.
pub fn split_spans_reference(spans: Vec<TextSpan>, reference: Reference) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let TextSpan::Plain(text) = &span else {
            out.push(span);
            continue;
        };

        let matches = reference.find_all(text);
        if matches.is_empty() {
            out.push(span);
            continue;
        }

        let mut rest = 0;
        for m in matches {
            if m.start > rest {
                out.push(TextSpan::plain(&text[rest..m.start]));
            }
            out.push(reference.span(&m.label, &m.url));
            rest = m.end;
        }
        if rest < text.len() {
            out.push(TextSpan::plain(&text[rest..]));
        }
    }

    out
}
