//! Block parser implementation.

use crate::inline::tokenize;

use super::node::{Alignment, Block, ChecklistItem};

/// Line-oriented block parser.
///
/// A single forward pass over the document's lines with an explicit
/// cursor. At each position the block-start detectors are tried in
/// fixed precedence order (code fence, table, heading, thematic break,
/// block quote, checklist, unordered list, ordered list, blank); the
/// first match consumes one or more lines. Anything unmatched becomes a
/// single-line paragraph, so the cursor always advances and parsing
/// never fails.
pub struct BlockParser<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    /// Shared identity counter: bumped once per emitted block and once
    /// per checklist item, so checklist keys replay deterministically on
    /// re-parse.
    next_key: u32,
}

impl<'a> BlockParser<'a> {
    /// Create a parser over a document. An empty document has no lines.
    pub fn new(document: &'a str) -> Self {
        let lines = if document.is_empty() {
            Vec::new()
        } else {
            document.split('\n').collect()
        };
        Self {
            lines,
            pos: 0,
            next_key: 0,
        }
    }

    /// Parse the whole document into its block sequence.
    pub fn parse(mut self) -> Vec<Block<'a>> {
        let mut blocks = Vec::new();
        while self.pos < self.lines.len() {
            let block = self.next_block();
            // Checklist items consume keys individually; every other
            // block consumes one.
            if !matches!(block, Block::Checklist { .. }) {
                self.next_key += 1;
            }
            blocks.push(block);
        }
        blocks
    }

    fn next_block(&mut self) -> Block<'a> {
        if let Some(block) = self.try_code_fence() {
            return block;
        }
        if let Some(block) = self.try_table() {
            return block;
        }
        if let Some(block) = self.try_heading() {
            return block;
        }
        if let Some(block) = self.try_thematic_break() {
            return block;
        }
        if let Some(block) = self.try_block_quote() {
            return block;
        }
        if let Some(block) = self.try_checklist() {
            return block;
        }
        if let Some(block) = self.try_unordered_list() {
            return block;
        }
        if let Some(block) = self.try_ordered_list() {
            return block;
        }

        let line = self.lines[self.pos];
        self.pos += 1;
        if line.trim().is_empty() {
            Block::Blank
        } else {
            Block::Paragraph {
                spans: tokenize(line),
            }
        }
    }

    /// Opening fence: trimmed line starts with ```` ``` ````; the word
    /// after the marker is the declared language. Body lines are
    /// captured verbatim until the next fence marker line (consumed) or
    /// end of document (unterminated fences close implicitly).
    fn try_code_fence(&mut self) -> Option<Block<'a>> {
        let rest = self.lines[self.pos].trim_start().strip_prefix("```")?;
        let lang_len = rest
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();
        let language = &rest[..lang_len];
        self.pos += 1;

        let mut lines = Vec::new();
        while self.pos < self.lines.len()
            && !self.lines[self.pos].trim_start().starts_with("```")
        {
            lines.push(self.lines[self.pos]);
            self.pos += 1;
        }
        if self.pos < self.lines.len() {
            self.pos += 1; // consume the closing marker line
        }

        Some(Block::CodeBlock { language, lines })
    }

    /// A pipe-delimited line is a table header only when the next line
    /// is a valid separator row (one-line lookahead). Body rows run
    /// until a line that does not both start and end with `|`.
    fn try_table(&mut self) -> Option<Block<'a>> {
        let line = self.lines[self.pos];
        if !line.contains('|') || !line.trim().starts_with('|') {
            return None;
        }
        let separator = *self.lines.get(self.pos + 1)?;
        if !is_separator_row(separator) {
            return None;
        }

        let headers = row_cells(line).into_iter().map(tokenize).collect();
        let alignments = row_cells(separator)
            .into_iter()
            .map(cell_alignment)
            .collect();
        self.pos += 2;

        let mut rows = Vec::new();
        while self.pos < self.lines.len() {
            let trimmed = self.lines[self.pos].trim();
            if !trimmed.starts_with('|') || !trimmed.ends_with('|') {
                break;
            }
            rows.push(
                row_cells(self.lines[self.pos])
                    .into_iter()
                    .map(tokenize)
                    .collect(),
            );
            self.pos += 1;
        }

        Some(Block::Table {
            headers,
            alignments,
            rows,
        })
    }

    /// 1-4 `#` characters followed by a space. Five or more hashes are
    /// not a heading and fall through to the paragraph rule.
    fn try_heading(&mut self) -> Option<Block<'a>> {
        let line = self.lines[self.pos];
        let hashes = line.bytes().take_while(|&b| b == b'#').count();
        if !(1..=4).contains(&hashes) || !line[hashes..].starts_with(' ') {
            return None;
        }
        self.pos += 1;
        Some(Block::Heading {
            level: hashes as u8,
            spans: tokenize(&line[hashes + 1..]),
        })
    }

    /// Trimmed line of 3+ repeated `-`, `*`, or `_`.
    fn try_thematic_break(&mut self) -> Option<Block<'a>> {
        let trimmed = self.lines[self.pos].trim();
        let marker = trimmed.chars().next()?;
        if !matches!(marker, '-' | '*' | '_')
            || trimmed.len() < 3
            || !trimmed.chars().all(|c| c == marker)
        {
            return None;
        }
        self.pos += 1;
        Some(Block::ThematicBreak)
    }

    /// Run of `> ` lines; the prefix is stripped and each remaining line
    /// becomes one entry of the quote.
    fn try_block_quote(&mut self) -> Option<Block<'a>> {
        if !self.lines[self.pos].starts_with("> ") {
            return None;
        }
        let mut lines = Vec::new();
        while self.pos < self.lines.len() && self.lines[self.pos].starts_with("> ") {
            lines.push(tokenize(&self.lines[self.pos][2..]));
            self.pos += 1;
        }
        Some(Block::BlockQuote { lines })
    }

    /// Run of checklist lines. Each item takes its checked default from
    /// the bracket and its key from the shared counter.
    fn try_checklist(&mut self) -> Option<Block<'a>> {
        checklist_item(self.lines[self.pos])?;
        let mut items = Vec::new();
        while self.pos < self.lines.len() {
            let Some((checked, text)) = checklist_item(self.lines[self.pos]) else {
                break;
            };
            let key = self.next_key;
            self.next_key += 1;
            items.push(ChecklistItem {
                checked,
                spans: tokenize(text),
                key,
            });
            self.pos += 1;
        }
        Some(Block::Checklist { items })
    }

    /// Run of `- `/`* ` lines. The checklist detector has already
    /// declined the first line, so the run is a plain bullet list; later
    /// lines in the run are absorbed by the bullet test alone.
    fn try_unordered_list(&mut self) -> Option<Block<'a>> {
        if !is_bullet(self.lines[self.pos]) {
            return None;
        }
        let mut items = Vec::new();
        while self.pos < self.lines.len() && is_bullet(self.lines[self.pos]) {
            items.push(tokenize(&self.lines[self.pos][2..]));
            self.pos += 1;
        }
        Some(Block::UnorderedList { items })
    }

    /// Run of `<digits>. ` lines; the numeric prefix is discarded.
    fn try_ordered_list(&mut self) -> Option<Block<'a>> {
        ordered_item(self.lines[self.pos])?;
        let mut items = Vec::new();
        while self.pos < self.lines.len() {
            let Some(text) = ordered_item(self.lines[self.pos]) else {
                break;
            };
            items.push(tokenize(text));
            self.pos += 1;
        }
        Some(Block::OrderedList { items })
    }
}

fn is_bullet(line: &str) -> bool {
    line.starts_with("- ") || line.starts_with("* ")
}

/// Match `-`/`*`, one whitespace char, `[ ]`/`[x]`/`[X]`, one whitespace
/// char, then the item text (which may be empty).
fn checklist_item(line: &str) -> Option<(bool, &str)> {
    let rest = line.strip_prefix(['-', '*'])?;
    let mut chars = rest.chars();
    if !chars.next().is_some_and(char::is_whitespace) {
        return None;
    }
    let rest = chars.as_str().strip_prefix('[')?;
    let mut chars = rest.chars();
    let checked = match chars.next()? {
        ' ' => false,
        'x' | 'X' => true,
        _ => return None,
    };
    let rest = chars.as_str().strip_prefix(']')?;
    let mut chars = rest.chars();
    if !chars.next().is_some_and(char::is_whitespace) {
        return None;
    }
    Some((checked, chars.as_str()))
}

/// Match `<digits>.` plus one whitespace char; returns the item text.
fn ordered_item(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix('.')?;
    let mut chars = rest.chars();
    if !chars.next().is_some_and(char::is_whitespace) {
        return None;
    }
    Some(chars.as_str())
}

/// A valid separator row starts with `|`, contains only pipes, colons,
/// hyphens, and whitespace, and has a second `|` after at least one
/// cell character.
fn is_separator_row(line: &str) -> bool {
    line.starts_with('|')
        && line
            .chars()
            .all(|c| matches!(c, '|' | ':' | '-') || c.is_whitespace())
        && line[1..].find('|').is_some_and(|idx| idx > 0)
}

/// Split a pipe row into trimmed cells, dropping the fragments before
/// the first and after the last pipe.
fn row_cells(line: &str) -> Vec<&str> {
    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() < 2 {
        return Vec::new();
    }
    parts[1..parts.len() - 1]
        .iter()
        .map(|cell| cell.trim())
        .collect()
}

fn cell_alignment(cell: &str) -> Alignment {
    if cell.starts_with(':') && cell.ends_with(':') {
        Alignment::Center
    } else if cell.ends_with(':') {
        Alignment::Right
    } else {
        Alignment::Left
    }
}
