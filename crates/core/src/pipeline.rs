//! End-to-end `generate` pipeline: source directory → doc-comments →
//! fenced examples → cross-links → Markdown pages on disk.
//!
//! The pipeline is fully sequential. Every document is built before the
//! cross-linking pass reads the table, and every write completes before the
//! next begins; any failure aborts the run.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

use tracing::{info, instrument, warn};

use octodoc_doccomment::leading_doc_block;
use octodoc_markdown::{cross_link, fence_examples};
use octodoc_shared::{LanguageConfig, OctodocError, Result};

use crate::assembler;

/// Configuration for the `generate_docs` pipeline.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Directory scanned (non-recursively) for source files.
    pub source_dir: PathBuf,
    /// Directory the Markdown pages are written to.
    pub output_dir: PathBuf,
    /// Source language profile.
    pub language: LanguageConfig,
}

/// Result of the `generate_docs` pipeline.
#[derive(Debug)]
pub struct GenerateResult {
    /// Path to the output directory.
    pub output_dir: PathBuf,
    /// Number of pages generated.
    pub page_count: usize,
    /// Total elapsed time.
    pub elapsed: std::time::Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called when a source file has been converted to a document.
    fn file_converted(&self, name: &str, current: usize, total: usize);
    /// Called when the pipeline completes.
    fn done(&self, result: &GenerateResult);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn file_converted(&self, _name: &str, _current: usize, _total: usize) {}
    fn done(&self, _result: &GenerateResult) {}
}

/// Run the full `generate` pipeline.
///
/// 1. List matching source files (sorted, non-recursive)
/// 2. Build one document per file (scan doc-comment, fence examples)
/// 3. Cross-link documents against each other
/// 4. Write pages to the output directory
#[instrument(skip_all, fields(source = %config.source_dir.display()))]
pub fn generate_docs(
    config: &GenerateConfig,
    progress: &dyn ProgressReporter,
) -> Result<GenerateResult> {
    let start = Instant::now();

    // --- Phase 1: Scan source directory ---
    progress.phase("Scanning source files");
    let sources = list_source_files(config)?;
    info!(
        count = sources.len(),
        source = %config.source_dir.display(),
        "source files found"
    );

    // --- Phase 2: Build documents ---
    progress.phase("Converting doc-comments");
    let total = sources.len();
    let mut docs: BTreeMap<String, String> = BTreeMap::new();

    for (index, path) in sources.iter().enumerate() {
        let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            warn!(path = %path.display(), "skipping file with non-UTF-8 stem");
            continue;
        };

        let source =
            std::fs::read_to_string(path).map_err(|e| OctodocError::io(path, e))?;

        let mut block = leading_doc_block(&source, name, &config.language);
        fence_examples(&mut block, &config.language.fence_label);

        docs.insert(name.to_string(), block.render());
        progress.file_converted(name, index + 1, total);
    }

    // --- Phase 3: Cross-link ---
    // The table is complete at this point; linking only reads it.
    progress.phase("Cross-linking documents");
    let linked = cross_link(&docs);

    // --- Phase 4: Write output ---
    progress.phase("Writing pages");
    let page_count = assembler::write_docs(&config.output_dir, &linked)?;

    let result = GenerateResult {
        output_dir: config.output_dir.clone(),
        page_count,
        elapsed: start.elapsed(),
    };

    info!(
        page_count,
        elapsed_ms = result.elapsed.as_millis() as u64,
        "generate pipeline complete"
    );

    progress.done(&result);
    Ok(result)
}

/// List regular files in the source directory with the configured extension,
/// sorted for deterministic processing order.
fn list_source_files(config: &GenerateConfig) -> Result<Vec<PathBuf>> {
    let dir = &config.source_dir;

    if !dir.is_dir() {
        return Err(OctodocError::validation(format!(
            "source directory '{}' does not exist",
            dir.display()
        )));
    }

    let entries = std::fs::read_dir(dir).map_err(|e| OctodocError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| OctodocError::io(dir, e))?;
        let path = entry.path();

        let matches = path.is_file()
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == config.language.extension);

        if matches {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_source(dir: &std::path::Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).expect("write source file");
    }

    fn config_for(root: &std::path::Path) -> GenerateConfig {
        GenerateConfig {
            source_dir: root.join("src"),
            output_dir: root.join("docs").join("api"),
            language: LanguageConfig::default(),
        }
    }

    fn setup_sources(root: &std::path::Path) {
        let src = root.join("src");
        std::fs::create_dir_all(&src).unwrap();

        write_source(
            &src,
            "norm_rows.m",
            "% Normalizes the rows of a matrix.\n\
             %\n\
             % Example:\n\
             %\n\
             %     m = norm_rows(rand(3));\n\
             %\n\
             % See also `scale_cols()`.\n\
             function m = norm_rows(m)\n",
        );
        write_source(
            &src,
            "scale_cols.m",
            "% Scales the columns of a matrix.\n\
             function m = scale_cols(m, f)\n",
        );
        // Wrong extension, must be ignored.
        write_source(&src, "notes.txt", "% not a source file\n");
    }

    #[test]
    fn generates_one_page_per_source_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        setup_sources(dir.path());
        let config = config_for(dir.path());

        let result = generate_docs(&config, &SilentProgress).expect("generate");
        assert_eq!(result.page_count, 2);

        let norm = std::fs::read_to_string(config.output_dir.join("norm_rows.md")).unwrap();
        let scale = std::fs::read_to_string(config.output_dir.join("scale_cols.md")).unwrap();

        assert!(norm.starts_with("# norm_rows\n"));
        assert!(scale.starts_with("# scale_cols\n"));
        assert!(!config.output_dir.join("notes.md").exists());
    }

    #[test]
    fn example_blocks_are_fenced_and_names_linked() {
        let dir = tempfile::tempdir().expect("tempdir");
        setup_sources(dir.path());
        let config = config_for(dir.path());

        generate_docs(&config, &SilentProgress).expect("generate");

        let norm = std::fs::read_to_string(config.output_dir.join("norm_rows.md")).unwrap();
        assert!(norm.contains("```matlab\nm = norm_rows(rand(3));\n```"));
        assert!(norm.contains("[`scale_cols()`](../scale_cols)"));
    }

    #[test]
    fn rerun_on_unchanged_inputs_is_byte_identical() {
        let dir = tempfile::tempdir().expect("tempdir");
        setup_sources(dir.path());
        let config = config_for(dir.path());

        generate_docs(&config, &SilentProgress).expect("first run");
        let first = std::fs::read_to_string(config.output_dir.join("norm_rows.md")).unwrap();

        generate_docs(&config, &SilentProgress).expect("second run");
        let second = std::fs::read_to_string(config.output_dir.join("norm_rows.md")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn missing_source_dir_is_a_validation_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = config_for(dir.path());

        let err = generate_docs(&config, &SilentProgress).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn empty_source_dir_generates_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        let config = config_for(dir.path());

        let result = generate_docs(&config, &SilentProgress).expect("generate");
        assert_eq!(result.page_count, 0);
        assert!(config.output_dir.exists());
    }

    #[test]
    fn file_without_doc_comment_gets_title_only_page() {
        let dir = tempfile::tempdir().expect("tempdir");
        let src = dir.path().join("src");
        std::fs::create_dir_all(&src).unwrap();
        write_source(&src, "bare.m", "function bare()\nend\n");
        let config = config_for(dir.path());

        generate_docs(&config, &SilentProgress).expect("generate");
        let page = std::fs::read_to_string(config.output_dir.join("bare.md")).unwrap();
        assert_eq!(page, "# bare\n");
    }
}
