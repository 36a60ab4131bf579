//! Application configuration for octodoc.
//!
//! User config lives at `~/.octodoc/octodoc.toml`.
//! CLI flags override config file values, which override defaults.
//! The defaults reproduce the classic MATLAB/Octave layout: doc-comments
//! marked with `%`, sources under `../src/*.m`, pages under `docs/api`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{OctodocError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "octodoc.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".octodoc";

// ---------------------------------------------------------------------------
// Config structs (matching octodoc.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Input/output directory layout.
    #[serde(default)]
    pub paths: PathsConfig,

    /// Source language profile.
    #[serde(default)]
    pub language: LanguageConfig,
}

/// `[paths]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory scanned (non-recursively) for source files.
    #[serde(default = "default_source_dir")]
    pub source_dir: String,

    /// Directory the generated Markdown pages are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_source_dir() -> String {
    "../src".into()
}
fn default_output_dir() -> String {
    "docs/api".into()
}

/// `[language]` section — how doc-comments are recognized in source files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Comment marker that introduces a doc-comment line.
    #[serde(default = "default_comment_marker")]
    pub comment_marker: String,

    /// Keyword whose appearance at the start of a line ends the leading
    /// doc-comment block.
    #[serde(default = "default_stop_keyword")]
    pub stop_keyword: String,

    /// File extension (without dot) of the source files to document.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Language label applied to generated code fences, and matched when
    /// extracting fenced code back out of Markdown.
    #[serde(default = "default_fence_label")]
    pub fence_label: String,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            comment_marker: default_comment_marker(),
            stop_keyword: default_stop_keyword(),
            extension: default_extension(),
            fence_label: default_fence_label(),
        }
    }
}

fn default_comment_marker() -> String {
    "%".into()
}
fn default_stop_keyword() -> String {
    "function".into()
}
fn default_extension() -> String {
    "m".into()
}
fn default_fence_label() -> String {
    "matlab".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.octodoc/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| OctodocError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.octodoc/octodoc.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| OctodocError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        OctodocError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| OctodocError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| OctodocError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| OctodocError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
