//! Cross-reference linking between generated documents.
//!
//! Once every document is built, backticked mentions of other documented
//! names are rewritten into Markdown links. The table is fully populated
//! before this pass reads it; documents are never linked while still being
//! built.

use std::collections::BTreeMap;

use tracing::debug;

/// Replace backticked mentions of other documented names with Markdown links.
///
/// For each document and each *other* document's name, occurrences of
/// `` `name` `` and `` `name()` `` become `` [`name`](../name) `` and
/// `` [`name()`](../name) ``. A document never links to itself, and names
/// with no matching document are left untouched.
///
/// Matching is literal-substring, not word-boundary aware: a name that is a
/// substring of a longer backticked token may be matched inside it. This is
/// accepted behavior, not worth a tokenizer.
pub fn cross_link(docs: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    let mut linked = BTreeMap::new();

    for (name, text) in docs {
        let mut text = text.clone();

        for other in docs.keys().filter(|other| *other != name) {
            let plain = format!("`{other}`");
            let called = format!("`{other}()`");

            text = text.replace(&plain, &format!("[{plain}](../{other})"));
            text = text.replace(&called, &format!("[{called}](../{other})"));
        }

        linked.insert(name.clone(), text);
    }

    debug!(documents = linked.len(), "cross-linking complete");
    linked
}
