//! Leading doc-comment scanner for source files.
//!
//! Reads the comment block at the top of a source file into a [`DocBlock`]:
//! comment markers stripped, blank content lines tracked by index, scan
//! terminated by the language's stop keyword (e.g. `function` for
//! MATLAB/Octave) or end of file.

use tracing::debug;

use octodoc_shared::{DocBlock, LanguageConfig};

/// Scan the leading doc-comment block of `source` into a [`DocBlock`]
/// titled `# <name>`.
///
/// Each line is trimmed of surrounding whitespace, then classified:
/// - blank source lines are skipped without being recorded;
/// - `<marker> ` prefixes are stripped along with the one space;
/// - bare `<marker>` prefixes (missing the space) are tolerated and stripped;
/// - a line starting with the stop keyword ends the scan;
/// - anything else is kept verbatim.
///
/// There is no transition back once the stop keyword is seen: the scanner
/// only ever consumes the leading block.
pub fn leading_doc_block(source: &str, name: &str, language: &LanguageConfig) -> DocBlock {
    let marker = language.comment_marker.as_str();
    let marker_with_space = format!("{marker} ");

    let mut block = DocBlock::with_title(name);

    for line in source.lines() {
        let trimmed = line.trim();

        let content = if trimmed.is_empty() {
            // Blank source lines are not part of the doc-comment.
            continue;
        } else if let Some(rest) = trimmed.strip_prefix(&marker_with_space) {
            rest
        } else if let Some(rest) = trimmed.strip_prefix(marker) {
            // Marker without the space: bad format, but accept it.
            rest
        } else if trimmed.starts_with(&language.stop_keyword) {
            // Code starts here, stop scanning for doc-comments.
            break;
        } else {
            trimmed
        };

        block.push_line(content.to_string());
    }

    debug!(
        name,
        lines = block.lines.len(),
        blanks = block.blanks.len(),
        "leading doc-comment scanned"
    );

    block
}
