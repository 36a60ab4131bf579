//! Shared types, error model, and configuration for octodoc.
//!
//! This crate is the foundation depended on by all other octodoc crates.
//! It provides:
//! - [`OctodocError`] — the unified error type
//! - [`DocBlock`] — a document as lines plus blank-line indices
//! - Configuration ([`AppConfig`], [`LanguageConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, LanguageConfig, PathsConfig, config_dir, config_file_path, init_config,
    load_config, load_config_from,
};
pub use error::{OctodocError, Result};
pub use types::DocBlock;
