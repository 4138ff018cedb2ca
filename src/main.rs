//! lessonmark CLI - parse a lesson document and dump its block tree.

use std::io::{self, Read, Write};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // Simple usage: read from stdin or file
    let input = if args.len() > 1 && args[1] != "-" {
        std::fs::read_to_string(&args[1])?
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    };

    let blocks = lessonmark::parse(&input);
    let totals = lessonmark::stats(&blocks);

    let mut out = io::stdout().lock();
    for block in &blocks {
        writeln!(out, "{block:#?}")?;
    }
    writeln!(
        out,
        "{} blocks / {} words / {} code lines / {} headings / {}/{} checklist",
        blocks.len(),
        totals.words,
        totals.code_lines,
        totals.headings,
        totals.checklist_checked,
        totals.checklist_items,
    )?;

    Ok(())
}
