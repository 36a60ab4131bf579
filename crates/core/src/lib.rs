//! Pipeline orchestration for octodoc.
//!
//! Ties together doc-comment scanning, example fencing, cross-linking, and
//! output assembly into the end-to-end `generate_docs` workflow.

pub mod assembler;
pub mod pipeline;
