//! Fixup core library.
//!
//! This crate provides the pieces behind the `fixup` binary: typed errors,
//! the regex substitution engine, and the hardcoded manifest of fixups the
//! tool exists to apply.

pub mod errors;
pub mod fixups;
pub mod patch;

// Re-exports for convenience.
pub use errors::PatchError;
pub use fixups::{manifest, Fixup};
pub use patch::{patch_file, PatchOutcome, Substitution};
