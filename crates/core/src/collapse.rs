//! Whitespace collapsing for the `InputLine` and `InputText` modes.
//!
//! Both passes always split on whitespace and newlines as defined by
//! [`CharSet::whitespace_and_newlines`](crate::CharSet::whitespace_and_newlines); they never
//! consult a caller-supplied set.
//!
//! Text collapsing works line by line:
//!
//! 1. Split on every newline character, so `\r\n` yields an empty line between its halves.
//! 2. Collapse each line with [`collapse_line`].
//! 3. Rejoin with `\n`.
//! 4. Cap newline runs at two with [`collapse_newline_runs`], so at most one blank line
//!    separates paragraphs.
//! 5. Strip newlines from both ends.

use crate::charset::is_newline;

/// Collapses every whitespace/newline run to a single space and drops edge whitespace.
///
/// Empty and all-whitespace input yield `""`.
pub fn collapse_line(line: &str) -> String {
    line.split(char::is_whitespace)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replaces every run of three or more `\n` with exactly `\n\n`.
///
/// Runs of one or two are copied unchanged. Other line break characters are not counted.
pub fn collapse_newline_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = 0usize;

    for c in text.chars() {
        if c == '\n' {
            run += 1;
            continue;
        }
        flush_newlines(&mut out, run);
        run = 0;
        out.push(c);
    }
    flush_newlines(&mut out, run);

    out
}

fn flush_newlines(out: &mut String, run: usize) {
    for _ in 0..run.min(2) {
        out.push('\n');
    }
}

/// Collapses multi-line text: whitespace per line, blank-line gaps capped at one.
pub fn collapse_text(text: &str) -> String {
    let joined = text
        .split(is_newline)
        .map(collapse_line)
        .collect::<Vec<_>>()
        .join("\n");

    collapse_newline_runs(&joined)
        .trim_matches(is_newline)
        .to_string()
}
