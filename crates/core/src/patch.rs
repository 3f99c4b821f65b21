//! In-place regex substitution over a single file.
//!
//! [`Substitution`] pairs a compiled pattern with a literal replacement.
//! [`patch_file`] loads a target file in full, replaces every
//! non-overlapping match, and writes the result back over the original.
//! The write happens whether or not anything matched, so a run against an
//! already-fixed file rewrites it with identical bytes.

use std::fs;
use std::path::Path;

use regex_lite::{NoExpand, Regex};
use tracing::{debug, info, warn};

use crate::errors::PatchError;

// ---------------------------------------------------------------------------
// Substitution
// ---------------------------------------------------------------------------

/// A compiled pattern and the literal text that replaces each match.
#[derive(Debug)]
pub struct Substitution {
    pattern: Regex,
    replacement: &'static str,
}

impl Substitution {
    /// Compile `pattern` and pair it with `replacement`.
    ///
    /// The replacement is taken literally; `$` has no special meaning in it.
    pub fn new(pattern: &str, replacement: &'static str) -> Result<Self, PatchError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement,
        })
    }

    /// Replace every non-overlapping match in `text`.
    ///
    /// Returns the rewritten text and the number of matches replaced. A
    /// count of zero means `text` came back unchanged.
    pub fn apply_to(&self, text: &str) -> (String, usize) {
        let count = self.pattern.find_iter(text).count();
        if count == 0 {
            return (text.to_string(), 0);
        }
        let rewritten = self
            .pattern
            .replace_all(text, NoExpand(self.replacement))
            .into_owned();
        (rewritten, count)
    }
}

// ---------------------------------------------------------------------------
// File patching
// ---------------------------------------------------------------------------

/// The result of patching one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchOutcome {
    /// How many matches were replaced. Zero means the file was rewritten
    /// with identical content.
    pub replacements: usize,
}

/// Read `path` in full, apply `substitution`, and write the result back.
///
/// The whole file is held in memory for the duration; the file is closed
/// after reading and reopened for the write. There is no locking and no
/// write-then-rename, so a crash mid-write can leave the target truncated.
pub fn patch_file(path: &Path, substitution: &Substitution) -> Result<PatchOutcome, PatchError> {
    let content = fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "target loaded");

    let (rewritten, replacements) = substitution.apply_to(&content);

    fs::write(path, &rewritten).map_err(|source| PatchError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    if replacements == 0 {
        warn!(path = %path.display(), "pattern not found, file rewritten unchanged");
    } else {
        info!(path = %path.display(), replacements, "substitution applied");
    }

    Ok(PatchOutcome { replacements })
}
