//! Indented-example-block to code-fence conversion.
//!
//! A doc-comment convention for example code is a run of lines indented by
//! four spaces, bounded by blank lines. This pass finds those runs in a
//! [`DocBlock`], merges runs separated by a single blank line, and rewrites
//! each into a fenced code block tagged with the language label, with one
//! indentation level removed.

use tracing::debug;

use octodoc_shared::DocBlock;

/// One level of example indentation.
const EXAMPLE_INDENT: &str = "    ";

/// Convert every indented example region of `block` into a fenced code block
/// tagged with `label`.
///
/// All rewriting is done by replacing lines in place. Blank-line indices are
/// processed in ascending order and line entries are never inserted or
/// removed, so indices recorded during scanning stay valid throughout.
pub fn fence_examples(block: &mut DocBlock, label: &str) {
    // The final line must be blank so a trailing example still has a
    // closing boundary.
    block.ensure_trailing_blank();

    let candidates = candidate_pairs(&block.lines, &block.blanks);
    let merged = merge_adjacent(candidates);

    for &(start, end) in &merged {
        rewrite_pair(&mut block.lines, start, end, label);
    }

    if !merged.is_empty() {
        debug!(fences = merged.len(), "indented examples fenced");
    }
}

/// Find blank-line pairs that bound indented example code.
///
/// Consecutive blank indices `(a, b)` qualify when there is at least one line
/// between them and every such line starts with [`EXAMPLE_INDENT`].
fn candidate_pairs(lines: &[String], blanks: &[usize]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();

    for window in blanks.windows(2) {
        let (start, end) = (window[0], window[1]);

        // Adjacent blank lines bound nothing.
        if end == start + 1 {
            continue;
        }

        let is_code = lines[start + 1..end]
            .iter()
            .all(|line| line.starts_with(EXAMPLE_INDENT));

        if is_code {
            pairs.push((start, end));
        }
    }

    pairs
}

/// Fuse candidate pairs that share a boundary blank line.
///
/// Two examples separated by exactly one blank line belong in the same fence.
/// The fusion is transitive: a chain of adjacent pairs collapses into a
/// single span from the first start to the last end.
fn merge_adjacent(pairs: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
    let mut merged: Vec<(usize, usize)> = Vec::new();

    for pair in pairs {
        match merged.last_mut() {
            Some(last) if last.1 == pair.0 => last.1 = pair.1,
            _ => merged.push(pair),
        }
    }

    merged
}

/// Rewrite one merged pair into a fence, in place.
///
/// The opening blank line becomes a blank line plus the fence opener, the
/// closing blank line becomes the fence closer plus a blank line, and each
/// interior line loses one indentation level. Interior lines without the
/// indent (the blank separators absorbed by a merge) are left as they are.
fn rewrite_pair(lines: &mut [String], start: usize, end: usize, label: &str) {
    lines[start] = format!("\n```{label}");
    lines[end] = "```\n".to_string();

    for line in &mut lines[start + 1..end] {
        if line.starts_with(EXAMPLE_INDENT) {
            line.replace_range(..EXAMPLE_INDENT.len(), "");
        }
    }
}
