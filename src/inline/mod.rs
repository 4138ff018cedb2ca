//! Inline tokenizer for one line (or table cell) of text.
//!
//! Single left-to-right pass with earliest-match-wins alternation. At
//! each candidate position the recognizers are tried in priority order:
//! image before link, bold before strikethrough before inline code
//! before italic. Paired-marker content is non-greedy and may not
//! contain the marker character, so matching never backtracks past a
//! single position.
//!
//! Markers that never find a closing counterpart on the same line stay
//! literal text; the tokenizer is total and multi-line spans do not
//! exist.

mod span;

pub use span::Span;

use memchr::memchr;

/// Tokenize one line of text into inline spans.
///
/// # Example
/// ```
/// use lessonmark::{tokenize, Span};
///
/// let spans = tokenize("a **b** c");
/// assert_eq!(spans, vec![Span::Text("a "), Span::Bold("b"), Span::Text(" c")]);
/// ```
pub fn tokenize(line: &str) -> Vec<Span<'_>> {
    let bytes = line.as_bytes();
    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let matched = match bytes[i] {
            b'!' => image(line, i),
            b'[' => link(line, i),
            b'*' => bold(line, i).or_else(|| italic(line, i)),
            b'~' => strikethrough(line, i),
            b'`' => inline_code(line, i),
            _ => None,
        };

        match matched {
            Some((span, end)) => {
                if plain_start < i {
                    spans.push(Span::Text(&line[plain_start..i]));
                }
                spans.push(span);
                i = end;
                plain_start = end;
            }
            None => i += 1,
        }
    }

    if plain_start < bytes.len() {
        spans.push(Span::Text(&line[plain_start..]));
    }

    spans
}

/// Match a paired marker at `start`: the content runs to the first
/// occurrence of the marker character, may not be empty, and must be
/// closed by the full marker.
///
/// Returns the content and the position just past the closing marker.
fn paired<'a>(line: &'a str, start: usize, marker: &str) -> Option<(&'a str, usize)> {
    let inner = line[start..].strip_prefix(marker)?;
    let close = memchr(marker.as_bytes()[0], inner.as_bytes())?;
    if close == 0 || !inner[close..].starts_with(marker) {
        return None;
    }
    let content_start = start + marker.len();
    Some((&inner[..close], content_start + close + marker.len()))
}

fn bold(line: &str, start: usize) -> Option<(Span<'_>, usize)> {
    let (content, end) = paired(line, start, "**")?;
    Some((Span::Bold(content), end))
}

fn strikethrough(line: &str, start: usize) -> Option<(Span<'_>, usize)> {
    let (content, end) = paired(line, start, "~~")?;
    Some((Span::Strikethrough(content), end))
}

fn inline_code(line: &str, start: usize) -> Option<(Span<'_>, usize)> {
    let (content, end) = paired(line, start, "`")?;
    Some((Span::Code(content), end))
}

fn italic(line: &str, start: usize) -> Option<(Span<'_>, usize)> {
    let (content, end) = paired(line, start, "*")?;
    Some((Span::Italic(content), end))
}

/// Match `[text](href)` at `start`. The text may not be empty and may
/// not contain `]`; the href may not be empty and may not contain `)`.
fn link(line: &str, start: usize) -> Option<(Span<'_>, usize)> {
    let (text, href, end) = bracket_pair(line, start, "[")?;
    if text.is_empty() {
        return None;
    }
    Some((Span::Link { text, href }, end))
}

/// Match `![alt](src)` at `start`. Unlike links, the alt text may be
/// empty.
fn image(line: &str, start: usize) -> Option<(Span<'_>, usize)> {
    let (alt, src, end) = bracket_pair(line, start, "![")?;
    Some((Span::Image { alt, src }, end))
}

/// Shared shape of link and image syntax: `PREFIX text ] ( url )` with a
/// non-empty url.
fn bracket_pair<'a>(
    line: &'a str,
    start: usize,
    prefix: &str,
) -> Option<(&'a str, &'a str, usize)> {
    let rest = line[start..].strip_prefix(prefix)?;
    let text_end = memchr(b']', rest.as_bytes())?;
    let text = &rest[..text_end];
    let after = rest[text_end + 1..].strip_prefix('(')?;
    let url_end = memchr(b')', after.as_bytes())?;
    if url_end == 0 {
        return None;
    }
    let end = start + prefix.len() + text_end + 2 + url_end + 1;
    Some((text, &after[..url_end], end))
}
