//! Block-level parser for lesson documents.
//!
//! The block parser is line-oriented and handles:
//! - Fenced code blocks
//! - Pipe tables (with one-line separator lookahead)
//! - ATX-style headings (levels 1-4)
//! - Thematic breaks
//! - Block quotes
//! - Checklists (with stable per-item keys)
//! - Unordered and ordered lists
//! - Blank spacers and single-line paragraphs

mod node;
mod parser;

pub use node::{Alignment, Block, ChecklistItem};
pub use parser::BlockParser;
