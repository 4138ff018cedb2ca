//! Document statistics over a parsed block tree.
//!
//! The host derives lesson reading-time and progress estimates from
//! these totals; the counts are pure functions of the tree.

use crate::block::Block;
use crate::inline::Span;

/// Aggregate counts for one parsed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentStats {
    /// Whitespace-separated words across all prose spans (headings,
    /// paragraphs, quotes, list and checklist items, table cells).
    pub words: usize,
    /// Lines inside fenced code blocks.
    pub code_lines: usize,
    /// Heading blocks of any level.
    pub headings: usize,
    /// Checklist items in the document.
    pub checklist_items: usize,
    /// Checklist items whose parsed default is checked.
    pub checklist_checked: usize,
}

/// Compute aggregate counts for a parsed document.
pub fn stats(blocks: &[Block<'_>]) -> DocumentStats {
    let mut totals = DocumentStats::default();

    for block in blocks {
        match block {
            Block::Heading { spans, .. } => {
                totals.headings += 1;
                totals.words += span_words(spans);
            }
            Block::Paragraph { spans } => {
                totals.words += span_words(spans);
            }
            Block::CodeBlock { lines, .. } => {
                totals.code_lines += lines.len();
            }
            Block::BlockQuote { lines } => {
                totals.words += lines.iter().map(|l| span_words(l)).sum::<usize>();
            }
            Block::UnorderedList { items } | Block::OrderedList { items } => {
                totals.words += items.iter().map(|i| span_words(i)).sum::<usize>();
            }
            Block::Checklist { items } => {
                for item in items {
                    totals.checklist_items += 1;
                    if item.checked {
                        totals.checklist_checked += 1;
                    }
                    totals.words += span_words(&item.spans);
                }
            }
            Block::Table { headers, rows, .. } => {
                totals.words += headers.iter().map(|c| span_words(c)).sum::<usize>();
                for row in rows {
                    totals.words += row.iter().map(|c| span_words(c)).sum::<usize>();
                }
            }
            Block::ThematicBreak | Block::Blank => {}
        }
    }

    totals
}

fn span_words(spans: &[Span<'_>]) -> usize {
    spans
        .iter()
        .map(|s| s.text().split_whitespace().count())
        .sum()
}
