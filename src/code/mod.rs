//! Line-oriented lexer for code fence contents.
//!
//! Language-agnostic but tuned for C-family / JavaScript-like syntax: a
//! single left-to-right scan trying recognizers in fixed priority order
//! (comment, string, tag, number, word, operator, punctuation, fallback).
//! Every character of the line lands in exactly one token, whitespace
//! included, so the token stream is a total partition of the line.
//!
//! The lexer is strictly per-line: no state carries across calls, so a
//! string literal spanning multiple lines is mis-tokenized by design
//! (each fragment runs to its line's end).

mod token;

pub use token::{Token, TokenKind};

use memchr::memchr;
use rustc_hash::FxHashSet;
use std::sync::LazyLock;

/// Reserved words rendered as keywords.
static KEYWORDS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "import", "export", "from", "default", "const", "let", "var", "function", "return", "if",
        "else", "for", "while", "switch", "case", "break", "new", "class", "extends", "async",
        "await", "try", "catch", "throw", "typeof", "instanceof", "of", "in",
    ]
    .into_iter()
    .collect()
});

/// Well-known runtime/API names rendered as builtins.
static BUILTINS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "useState", "useEffect", "useMemo", "useCallback", "useRef", "useContext", "useReducer",
        "React", "console", "window", "document", "fetch", "Promise", "Array", "Object", "JSON",
        "Math", "null", "undefined", "true", "false",
    ]
    .into_iter()
    .collect()
});

const OPERATORS: &[u8] = b"=+-*/%!&|?:";
const PUNCTUATION: &[u8] = b"(){}[];,.";

/// Lex one line of source code into classified tokens.
///
/// # Example
/// ```
/// use lessonmark::{lex, TokenKind};
///
/// let tokens = lex("return 42;");
/// assert_eq!(tokens[0].kind, TokenKind::Keyword);
/// assert_eq!(tokens[2].kind, TokenKind::Number);
/// let rebuilt: String = tokens.iter().map(|t| t.text).collect();
/// assert_eq!(rebuilt, "return 42;");
/// ```
pub fn lex(line: &str) -> Vec<Token<'_>> {
    let bytes = line.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if b == b'/' && bytes.get(i + 1) == Some(&b'/') {
            tokens.push(Token::new(TokenKind::Comment, &line[i..]));
            break;
        }

        if matches!(b, b'"' | b'\'' | b'`') {
            let end = scan_string(bytes, i);
            tokens.push(Token::new(TokenKind::Str, &line[i..end]));
            i = end;
            continue;
        }

        if b == b'<' && bytes.get(i + 1).is_some_and(|&n| n.is_ascii_alphabetic() || n == b'/') {
            let end = match memchr(b'>', &bytes[i..]) {
                Some(pos) => i + pos + 1,
                None => bytes.len(),
            };
            tokens.push(Token::new(TokenKind::Tag, &line[i..end]));
            i = end;
            continue;
        }

        if b.is_ascii_digit() && (i == 0 || !is_word_prefix(bytes[i - 1])) {
            let mut end = i + 1;
            while end < bytes.len() && (bytes[end].is_ascii_digit() || bytes[end] == b'.') {
                end += 1;
            }
            tokens.push(Token::new(TokenKind::Number, &line[i..end]));
            i = end;
            continue;
        }

        if is_word_start(b) {
            let mut end = i + 1;
            while end < bytes.len() && is_word_byte(bytes[end]) {
                end += 1;
            }
            let word = &line[i..end];
            let kind = if KEYWORDS.contains(word) {
                TokenKind::Keyword
            } else if BUILTINS.contains(word) {
                TokenKind::Builtin
            } else {
                TokenKind::Text
            };
            tokens.push(Token::new(kind, word));
            i = end;
            continue;
        }

        if OPERATORS.contains(&b) {
            tokens.push(Token::new(TokenKind::Operator, &line[i..i + 1]));
            i += 1;
            continue;
        }

        if PUNCTUATION.contains(&b) {
            tokens.push(Token::new(TokenKind::Punct, &line[i..i + 1]));
            i += 1;
            continue;
        }

        // Fallback: one whole character of plain text.
        let len = line[i..].chars().next().map_or(1, char::len_utf8);
        tokens.push(Token::new(TokenKind::Text, &line[i..i + len]));
        i += len;
    }

    tokens
}

/// Scan a string literal starting at the opening quote. A backslash
/// skips the following byte so escaped delimiters do not terminate.
/// Unterminated strings run to end of line.
///
/// Returns the position just past the closing quote (or the line end).
fn scan_string(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut end = start + 1;
    while end < bytes.len() && bytes[end] != quote {
        if bytes[end] == b'\\' {
            end += 1;
        }
        end += 1;
    }
    (end + 1).min(bytes.len())
}

fn is_word_prefix(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_word_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}
