//! Block-level node types.

use crate::inline::Span;

/// Column alignment for table cells, derived from the separator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// No colon, or leading colon only (`---`, `:--`).
    #[default]
    Left,
    /// Leading and trailing colon (`:-:`).
    Center,
    /// Trailing colon only (`--:`).
    Right,
}

/// One checklist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem<'a> {
    /// Checked state parsed from the bracket (`[x]`/`[X]` vs `[ ]`).
    pub checked: bool,
    /// Inline-tokenized item text.
    pub spans: Vec<Span<'a>>,
    /// Stable identity for toggle tracking: assigned from a counter
    /// owned by the parse call, so re-parsing the same document yields
    /// the same keys in the same order.
    pub key: u32,
}

/// One structural unit of a parsed document.
///
/// The block sequence accounts for every input line exactly once; only
/// code fence delimiter lines are consumed as structural syntax without
/// producing content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// `#` through `####` heading.
    Heading {
        /// Heading level (1-4).
        level: u8,
        /// Inline-tokenized heading text.
        spans: Vec<Span<'a>>,
    },

    /// A single non-blank line with no other interpretation.
    ///
    /// Consecutive plain lines are NOT merged into one reflowed
    /// paragraph; each source line is its own block.
    Paragraph {
        /// Inline-tokenized line text.
        spans: Vec<Span<'a>>,
    },

    /// Fenced code block.
    CodeBlock {
        /// Declared language (the word after the opening fence; may be
        /// empty).
        language: &'a str,
        /// Body lines, verbatim.
        lines: Vec<&'a str>,
    },

    /// Run of `> ` lines; each contained line renders as its own
    /// paragraph of spans.
    BlockQuote {
        /// Inline-tokenized quote lines, prefix stripped.
        lines: Vec<Vec<Span<'a>>>,
    },

    /// Run of `- `/`* ` lines.
    UnorderedList {
        /// Inline-tokenized item texts.
        items: Vec<Vec<Span<'a>>>,
    },

    /// Run of `<digits>. ` lines. The numeric prefix is discarded; the
    /// host owns display numbering.
    OrderedList {
        /// Inline-tokenized item texts.
        items: Vec<Vec<Span<'a>>>,
    },

    /// Run of `- [ ] ` / `- [x] ` lines.
    Checklist {
        /// Items in document order, each with a stable key.
        items: Vec<ChecklistItem<'a>>,
    },

    /// Pipe table: a header row, a separator row, and zero or more body
    /// rows.
    Table {
        /// Inline-tokenized header cells.
        headers: Vec<Vec<Span<'a>>>,
        /// Per-column alignment from the separator row.
        alignments: Vec<Alignment>,
        /// Inline-tokenized body rows.
        rows: Vec<Vec<Vec<Span<'a>>>>,
    },

    /// Horizontal rule (3+ repeated `-`, `*`, or `_`).
    ThematicBreak,

    /// Empty or all-whitespace line, preserved as a layout unit. Blank
    /// runs are not collapsed: each blank line yields one spacer.
    Blank,
}
