use similar::TextDiff;
use std::fmt;
use std::path::PathBuf;

use super::attempt::RuleResult;
use crate::utils::fs::content_digest;

/// What a patch attempt computed for one file
#[derive(Debug, Clone)]
pub struct PatchOutcome {
    pub path: PathBuf,
    pub original: String,
    pub patched: String,
    pub marker_found: bool,
    pub probe_fired: bool,
    pub original_digest: String,
    pub patched_digest: String,
}

impl PatchOutcome {
    pub fn new(path: PathBuf, original: String, result: RuleResult) -> Self {
        let original_digest = content_digest(&original);
        let patched_digest = content_digest(&result.content);

        Self {
            path,
            original,
            patched: result.content,
            marker_found: result.marker_found,
            probe_fired: result.probe_fired,
            original_digest,
            patched_digest,
        }
    }

    /// Whether the computed content differs from what was read
    pub fn changed(&self) -> bool {
        self.original_digest != self.patched_digest
    }

    /// Unified diff of the original against the computed content.
    ///
    /// Relative paths get git-style `a/` and `b/` prefixes; absolute paths
    /// are shown as they are.
    pub fn unified_diff(&self) -> String {
        let name = self.path.display().to_string();
        let (old_label, new_label) = if self.path.is_absolute() {
            (name.clone(), name)
        } else {
            (format!("a/{}", name), format!("b/{}", name))
        };

        TextDiff::from_lines(&self.original, &self.patched)
            .unified_diff()
            .context_radius(3)
            .header(&old_label, &new_label)
            .to_string()
    }
}

impl fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.marker_found {
            writeln!(f, "marker not found in {}; nothing to patch", self.path.display())
        } else if self.changed() {
            write!(f, "{}", self.unified_diff())
        } else {
            writeln!(f, "marker found in {}; content already matches", self.path.display())
        }
    }
}
