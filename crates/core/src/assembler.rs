//! Output-directory assembler.
//!
//! Takes the finished name → Markdown map and writes one page per document
//! into the output directory, creating it as needed. Existing pages are
//! overwritten silently; no metadata or index file is produced.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use octodoc_shared::{OctodocError, Result};

/// Write every document to `<output_dir>/<name>.md`.
///
/// Returns the number of pages written.
#[instrument(skip_all, fields(output_dir = %output_dir.display(), pages = docs.len()))]
pub fn write_docs(output_dir: &Path, docs: &BTreeMap<String, String>) -> Result<usize> {
    std::fs::create_dir_all(output_dir).map_err(|e| OctodocError::io(output_dir, e))?;

    for (name, markdown) in docs {
        let path = page_path(output_dir, name);
        std::fs::write(&path, markdown).map_err(|e| OctodocError::io(&path, e))?;
        debug!(name, path = %path.display(), "page written");
    }

    info!(
        page_count = docs.len(),
        path = %output_dir.display(),
        "output assembly complete"
    );

    Ok(docs.len())
}

/// Path of the page generated for `name`.
pub fn page_path(output_dir: &Path, name: &str) -> PathBuf {
    output_dir.join(format!("{name}.md"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_page_per_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("api");

        let docs: BTreeMap<String, String> = [
            ("alpha".to_string(), "# alpha\n".to_string()),
            ("beta".to_string(), "# beta\n".to_string()),
        ]
        .into();

        let written = write_docs(&out, &docs).expect("write docs");
        assert_eq!(written, 2);
        assert_eq!(
            std::fs::read_to_string(out.join("alpha.md")).unwrap(),
            "# alpha\n"
        );
        assert_eq!(
            std::fs::read_to_string(out.join("beta.md")).unwrap(),
            "# beta\n"
        );
    }

    #[test]
    fn overwrites_existing_pages_silently() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().to_path_buf();
        std::fs::write(out.join("alpha.md"), "stale content").unwrap();

        let docs: BTreeMap<String, String> =
            [("alpha".to_string(), "# alpha\n".to_string())].into();

        write_docs(&out, &docs).expect("write docs");
        assert_eq!(
            std::fs::read_to_string(out.join("alpha.md")).unwrap(),
            "# alpha\n"
        );
    }
}
