//! The fixed set of fixups this tool applies.
//!
//! Each fixup names one file in the working tree and the substitution to
//! perform on it. The set is hardcoded: the tool exists to repair two
//! specific leftovers from a bad merge, then be deleted. It is not a
//! general text patcher and does not take patch definitions from anywhere
//! else.

use std::path::Path;

use crate::errors::PatchError;
use crate::patch::{self, PatchOutcome, Substitution};

/// One named target-file-plus-substitution pair.
#[derive(Debug, Clone, Copy)]
pub struct Fixup {
    /// Short name used in logs and the run summary.
    pub name: &'static str,
    /// Target file path, relative to the tree root.
    pub target: &'static str,
    pattern: &'static str,
    replacement: &'static str,
}

impl Fixup {
    /// Apply this fixup to the tree rooted at `root`.
    pub fn apply(&self, root: &Path) -> Result<PatchOutcome, PatchError> {
        let substitution = Substitution::new(self.pattern, self.replacement)?;
        patch::patch_file(&root.join(self.target), &substitution)
    }
}

/// All fixups, in the order they are applied.
pub fn manifest() -> Vec<Fixup> {
    vec![sync_ops_conflict(), slack_bolt_cast()]
}

/// The merge left a conflict block in the sync-ops module. Both sides
/// compute `existingHash`; the `origin/main` side (the in-memory map
/// lookup) is the resolution. The pattern tolerates any leading whitespace
/// on the lines inside the block but otherwise recognizes only this exact
/// shape, blank line before the closing marker included.
fn sync_ops_conflict() -> Fixup {
    Fixup {
        name: "sync-ops-conflict",
        target: "src/memory/manager-sync-ops.ts",
        pattern: r"<<<<<<< HEAD\n\s*const existingHash = dbHashes\.get\(entry\.path\);\n=======\n\s*// Use the in-memory map instead of a DB query\n\s*const existingHash = existingFileMap\.get\(entry\.path\);\n\n>>>>>>> origin/main",
        replacement: "      const existingHash = existingFileMap.get(entry.path);",
    }
}

/// The slack provider casts its dynamically imported bolt module to `any`.
/// Narrow the cast to the shape the surrounding code actually touches.
fn slack_bolt_cast() -> Fixup {
    Fixup {
        name: "slack-bolt-cast",
        target: "src/slack/monitor/provider.ts",
        pattern: r"\(slackBoltModule as any\)",
        replacement: "(slackBoltModule as { default?: { App?: unknown } })",
    }
}
