//! Lexical token types for code fence contents.

/// Classification of one lexed substring, used for syntax coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Reserved word (`if`, `return`, `class`, ...).
    Keyword,
    /// Well-known runtime/API name (`console`, `Promise`, `useState`, ...).
    Builtin,
    /// String literal, delimiters included.
    Str,
    /// Line comment (`//` through end of line).
    Comment,
    /// Tag-like markup (`<div>`, `</p>`).
    Tag,
    /// Numeric literal.
    Number,
    /// Single operator character.
    Operator,
    /// Single bracket/separator character.
    Punct,
    /// Anything else, whitespace included.
    Text,
}

/// One classified substring of a source-code line.
///
/// Tokens partition their line: concatenating `text` over a line's
/// tokens, in order, reproduces the line exactly. The host relies on
/// this to reconstruct exact column widths in the line-number gutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token classification.
    pub kind: TokenKind,
    /// Exact source substring.
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_size() {
        assert!(std::mem::size_of::<Token>() <= 24);
    }
}
