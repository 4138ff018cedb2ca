//! Inline span types.

/// One styled or plain run of text within a block line.
///
/// Spans borrow slices of the input line; the syntax markers themselves
/// (`**`, `~~`, backticks, bracket/paren pairs) are consumed and do not
/// appear in any span. Styled content is flat: a bold span's interior is
/// kept as literal text, never re-tokenized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    /// Plain text between styled spans.
    Text(&'a str),
    /// `**content**`
    Bold(&'a str),
    /// `*content*`
    Italic(&'a str),
    /// `~~content~~`
    Strikethrough(&'a str),
    /// `` `content` ``
    Code(&'a str),
    /// `[text](href)`
    Link {
        /// Visible link text.
        text: &'a str,
        /// Link destination, verbatim.
        href: &'a str,
    },
    /// `![alt](src)`
    Image {
        /// Alternative text (may be empty).
        alt: &'a str,
        /// Image source, verbatim.
        src: &'a str,
    },
}

impl<'a> Span<'a> {
    /// The visible text of the span: the styled content, the link text,
    /// or the image alt text.
    pub fn text(&self) -> &'a str {
        match self {
            Span::Text(t)
            | Span::Bold(t)
            | Span::Italic(t)
            | Span::Strikethrough(t)
            | Span::Code(t) => t,
            Span::Link { text, .. } => text,
            Span::Image { alt, .. } => alt,
        }
    }
}
