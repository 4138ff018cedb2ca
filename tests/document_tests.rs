//! Whole-document parsing tests: block precedence, fail-open behavior,
//! and line accounting across mixed content.

use lessonmark::{parse, Block, Span};

#[test]
fn lesson_shaped_document() {
    let doc = "\
# Variables

A variable binds a name to a value.

```js
const x = 1;
```

- [ ] read this section
- [x] run the example
";
    let blocks = parse(doc);

    assert!(matches!(blocks[0], Block::Heading { level: 1, .. }));
    assert!(matches!(
        &blocks[4],
        Block::CodeBlock { language: "js", lines } if lines == &vec!["const x = 1;"]
    ));
    assert!(matches!(&blocks[6], Block::Checklist { items } if items.len() == 2));
    // Trailing newline yields a final blank spacer.
    assert_eq!(blocks.last(), Some(&Block::Blank));
}

#[test]
fn unterminated_fence_swallows_rest_without_leakage() {
    let doc = "before\n```python\nprint(1)\n---\n# not a heading";
    let blocks = parse(doc);

    assert_eq!(blocks.len(), 2);
    assert!(matches!(blocks[0], Block::Paragraph { .. }));
    match &blocks[1] {
        Block::CodeBlock { language, lines } => {
            assert_eq!(*language, "python");
            assert_eq!(lines, &vec!["print(1)", "---", "# not a heading"]);
        }
        other => panic!("expected code block, got {other:?}"),
    }
}

#[test]
fn fence_marker_with_language_also_closes() {
    // Any line whose trimmed start is the marker ends the open fence.
    let doc = "```js\na\n```ts\nb";
    let blocks = parse(doc);
    assert!(
        matches!(&blocks[0], Block::CodeBlock { lines, .. } if lines == &vec!["a"]),
        "{blocks:?}"
    );
    assert!(matches!(blocks[1], Block::Paragraph { .. }));
}

#[test]
fn blank_runs_are_preserved_one_to_one() {
    let blocks = parse("a\n\n\n\nb");
    assert_eq!(
        blocks.iter().filter(|b| **b == Block::Blank).count(),
        3
    );
    assert_eq!(blocks.len(), 5);
}

#[test]
fn consecutive_text_lines_stay_separate_paragraphs() {
    let blocks = parse("first line\nsecond line\nthird line");
    assert_eq!(blocks.len(), 3);
    for block in &blocks {
        assert!(matches!(block, Block::Paragraph { .. }));
    }
}

#[test]
fn quote_lines_each_become_one_entry() {
    let blocks = parse("> a **b**\n> c");
    assert_eq!(
        blocks,
        vec![Block::BlockQuote {
            lines: vec![
                vec![Span::Text("a "), Span::Bold("b")],
                vec![Span::Text("c")],
            ],
        }]
    );
}

#[test]
fn heading_five_hashes_falls_through() {
    let blocks = parse("##### A");
    assert_eq!(
        blocks,
        vec![Block::Paragraph {
            spans: vec![Span::Text("##### A")],
        }]
    );
}

#[test]
fn ordered_and_unordered_runs_split_correctly() {
    let blocks = parse("1. one\n2. two\n- a\n- b");
    assert_eq!(blocks.len(), 2);
    assert!(matches!(&blocks[0], Block::OrderedList { items } if items.len() == 2));
    assert!(matches!(&blocks[1], Block::UnorderedList { items } if items.len() == 2));
}

#[test]
fn inline_markup_flows_through_every_prose_block() {
    let doc = "# H **b**\npara `c`\n> q *i*\n- li ~~s~~\n1. ol [l](u)";
    let blocks = parse(doc);

    let has_styled = |spans: &Vec<Span>| spans.iter().any(|s| !matches!(s, Span::Text(_)));
    match &blocks[0] {
        Block::Heading { spans, .. } => assert!(has_styled(spans)),
        other => panic!("expected heading, got {other:?}"),
    }
    match &blocks[1] {
        Block::Paragraph { spans } => assert!(has_styled(spans)),
        other => panic!("expected paragraph, got {other:?}"),
    }
    match &blocks[2] {
        Block::BlockQuote { lines } => assert!(has_styled(&lines[0])),
        other => panic!("expected quote, got {other:?}"),
    }
    match &blocks[3] {
        Block::UnorderedList { items } => assert!(has_styled(&items[0])),
        other => panic!("expected ul, got {other:?}"),
    }
    match &blocks[4] {
        Block::OrderedList { items } => assert!(has_styled(&items[0])),
        other => panic!("expected ol, got {other:?}"),
    }
}

#[test]
fn crlf_is_not_special() {
    // Only `\n` delimits lines; a stray `\r` stays in the content.
    let blocks = parse("a\r\nb");
    assert_eq!(blocks.len(), 2);
    assert_eq!(
        blocks[0],
        Block::Paragraph {
            spans: vec![Span::Text("a\r")],
        }
    );
}
