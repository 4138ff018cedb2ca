//! Property tests: totality, determinism, and the partition/conservation
//! invariants over arbitrary input.

use lessonmark::{lex, parse, tokenize, Block, Span};
use proptest::prelude::*;

proptest! {
    /// No input string may make the block parser fault.
    #[test]
    fn parse_is_total(s in "\\PC*") {
        let _ = parse(&s);
    }

    /// Arbitrary (including non-printable) input is also fine.
    #[test]
    fn parse_is_total_any_unicode(s in any::<String>()) {
        let _ = parse(&s);
    }

    #[test]
    fn tokenize_is_total(s in any::<String>()) {
        let _ = tokenize(&s);
    }

    #[test]
    fn lex_is_total(s in any::<String>()) {
        let _ = lex(&s);
    }

    /// Re-parsing is deterministic: structurally identical output,
    /// checklist keys included.
    #[test]
    fn parse_is_deterministic(s in "\\PC*") {
        prop_assert_eq!(parse(&s), parse(&s));
    }

    /// The lexer partitions its line: concatenating token texts in
    /// order reproduces the line byte for byte.
    #[test]
    fn lex_partitions_the_line(s in any::<String>()) {
        for line in s.split('\n') {
            let rebuilt: String = lex(line).iter().map(|t| t.text).collect();
            prop_assert_eq!(rebuilt, line);
        }
    }

    /// Lines without any marker characters come back as one plain span.
    #[test]
    fn tokenize_plain_line_is_identity(s in "[a-zA-Z0-9 ,.;]+") {
        prop_assert_eq!(tokenize(&s), vec![Span::Text(s.as_str())]);
    }

    /// Span text never contains content that was not in the line.
    #[test]
    fn spans_are_substrings(s in "\\PC*") {
        for line in s.split('\n') {
            for span in tokenize(line) {
                prop_assert!(line.contains(span.text()));
            }
        }
    }

    /// A document with no blank lines and no multi-line constructs
    /// yields exactly one block per line.
    #[test]
    fn single_line_blocks_conserve_lines(lines in prop::collection::vec("[a-z][a-z ]{0,20}", 1..20)) {
        let doc = lines.join("\n");
        let blocks = parse(&doc);
        prop_assert_eq!(blocks.len(), lines.len());
        for block in &blocks {
            prop_assert!(matches!(block, Block::Paragraph { .. }), "expected Block::Paragraph");
        }
    }

    /// Every line of a document is accounted for by exactly one block,
    /// one captured line of a multi-line block, or one consumed fence
    /// delimiter.
    #[test]
    fn all_lines_accounted(s in "\\PC*") {
        if s.is_empty() {
            return Ok(());
        }
        let line_count = s.split('\n').count();
        let mut accounted = 0usize;
        let mut open_fences = 0usize;
        let blocks = parse(&s);
        let block_count = blocks.len();
        for (idx, block) in blocks.into_iter().enumerate() {
            accounted += match block {
                Block::Heading { .. }
                | Block::Paragraph { .. }
                | Block::ThematicBreak
                | Block::Blank => 1,
                Block::CodeBlock { lines, .. } => {
                    // The closing delimiter only exists when the fence
                    // is terminated; the last block may be unterminated.
                    if idx == block_count - 1 {
                        open_fences += 1;
                    }
                    lines.len() + 2
                }
                Block::BlockQuote { lines } => lines.len(),
                Block::UnorderedList { items } | Block::OrderedList { items } => items.len(),
                Block::Checklist { items } => items.len(),
                Block::Table { rows, .. } => rows.len() + 2,
            };
        }
        // An unterminated trailing fence accounts for one line fewer.
        prop_assert!(
            accounted == line_count || (open_fences == 1 && accounted == line_count + 1),
            "accounted {} of {} lines", accounted, line_count
        );
    }
}
