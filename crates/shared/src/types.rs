//! Core domain types for octodoc documents.

// ---------------------------------------------------------------------------
// DocBlock
// ---------------------------------------------------------------------------

/// A document under construction: an ordered list of text lines plus the
/// indices of its blank content lines.
///
/// The blank-index list is what later passes use to find example-code
/// boundaries, so it must be kept in sync with `lines`. [`DocBlock::push_line`]
/// maintains that invariant; passes that rewrite lines do so strictly in
/// place, never inserting or removing entries, so recorded indices stay valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocBlock {
    /// Document lines, without trailing newlines.
    pub lines: Vec<String>,
    /// Indices into `lines` of blank content lines, in ascending order.
    pub blanks: Vec<usize>,
}

impl DocBlock {
    /// Start a document with a level-1 title heading and one blank line.
    ///
    /// The title's blank line is intentionally not recorded in `blanks`:
    /// it separates the heading from the body and never bounds example code.
    pub fn with_title(name: &str) -> Self {
        Self {
            lines: vec![format!("# {name}"), String::new()],
            blanks: Vec::new(),
        }
    }

    /// Append a content line, recording its index when it is blank.
    pub fn push_line(&mut self, line: String) {
        if line.is_empty() {
            self.blanks.push(self.lines.len());
        }
        self.lines.push(line);
    }

    /// Append a blank line unless the document already ends in one.
    pub fn ensure_trailing_blank(&mut self) {
        match self.lines.last() {
            Some(last) if last.is_empty() => {}
            _ => self.push_line(String::new()),
        }
    }

    /// Join the lines into final Markdown text ending in exactly one newline.
    pub fn render(&self) -> String {
        let joined = self.lines.join("\n");
        let trimmed = joined.trim_end_matches('\n');
        format!("{trimmed}\n")
    }
}
