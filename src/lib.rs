//! lessonmark: parser for the constrained Markdown dialect used by
//! lesson content.
//!
//! Three cooperating pure components:
//! - [`parse`]: the block parser, turning a whole document into an
//!   ordered sequence of typed [`Block`] nodes
//! - [`tokenize`]: the inline tokenizer, turning one line or table cell
//!   into typed [`Span`]s
//! - [`lex`]: the code lexer, classifying one line of fenced-code
//!   content into [`Token`]s for syntax coloring
//!
//! # Design principles
//! - Zero-copy: nodes borrow slices of the input document
//! - Total: any input produces a best-effort tree, never an error
//! - Line-oriented: each source line maps to exactly one block or one
//!   line of a multi-line construct; blank lines and paragraph breaks
//!   are preserved rather than reflowed
//! - Deterministic: re-parsing a document reproduces the same tree,
//!   including the stable checklist item keys the host uses for toggle
//!   state
//!
//! The host application owns everything else: rendering, styling,
//! storage, and the [`ChecklistState`] toggle map.
//!
//! # Example
//! ```
//! use lessonmark::{parse, Block};
//!
//! let blocks = parse("# Hello\n\nWorld");
//! assert_eq!(blocks.len(), 3);
//! assert!(matches!(blocks[0], Block::Heading { level: 1, .. }));
//! assert!(matches!(blocks[1], Block::Blank));
//! assert!(matches!(blocks[2], Block::Paragraph { .. }));
//! ```

pub mod block;
pub mod checklist;
pub mod code;
pub mod inline;
pub mod stats;

pub use block::{Alignment, Block, BlockParser, ChecklistItem};
pub use checklist::ChecklistState;
pub use code::{lex, Token, TokenKind};
pub use inline::{tokenize, Span};
pub use stats::{stats, DocumentStats};

/// Parse a document into its block sequence.
///
/// Never fails: malformed or unterminated constructs fall back to
/// literal content, and an empty document yields an empty sequence.
pub fn parse(document: &str) -> Vec<Block<'_>> {
    BlockParser::new(document).parse()
}
