//! Error types for decoding and compiling guide documents.

use thiserror::Error;

/// Errors produced while loading or compiling a guide.
///
/// Missing optional fields and unknown block types are never errors; they
/// are defaulted or skipped. Everything here names where it went wrong.
#[derive(Debug, Error)]
pub enum GuideError {
    /// The JSON input did not match the block schema.
    #[error("invalid guide JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The YAML input did not match the block schema.
    #[error("invalid guide YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Grid nesting went deeper than `CompileOptions::max_depth`.
    #[error("grid nesting at section {section} exceeds the depth limit of {limit}")]
    DepthExceeded { section: String, limit: usize },

    /// A table row has a different number of cells than the header.
    #[error("table at section {section}: row {row} has {found} cells, header has {expected}")]
    TableShape {
        section: String,
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GuideError>;
