//! Error types for the fixup tool.
//!
//! A single `thiserror`-derived enum covers the three ways a run can fail:
//! reading a target, writing it back, and compiling a substitution pattern.
//! Every failure is fatal to the run; there is no retry path.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from applying a fixup to a target file.
#[derive(Debug, Error)]
pub enum PatchError {
    /// The target file could not be read (missing, unreadable, not UTF-8).
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The rewritten content could not be written back to the target.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A substitution pattern failed to compile.
    #[error("invalid substitution pattern: {0}")]
    Pattern(#[from] regex_lite::Error),
}
