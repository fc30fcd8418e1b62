use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::outcome::PatchOutcome;
use super::rule::PatchRule;
use crate::error::{PatchError, PatchResult};
use crate::utils::fs::read_text;

/// Result of applying a rule to in-memory text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleResult {
    /// Content after the substitution (equal to the input when nothing matched)
    pub content: String,
    pub marker_found: bool,
    pub probe_fired: bool,
}

/// Apply `rule` to `content` without touching the filesystem.
///
/// Every occurrence of the marker is rewritten. The probe is evaluated
/// against the original content and never changes it.
pub fn apply_rule(content: &str, rule: &PatchRule) -> RuleResult {
    let marker_found = !rule.marker.is_empty() && content.contains(&rule.marker);

    let patched = if marker_found {
        content.replace(&rule.marker, &rule.replacement())
    } else {
        content.to_string()
    };

    let probe_fired = !marker_found && rule.probe.fires(content);
    if probe_fired {
        debug!(
            "'{}' absent but '{}' present; mocks may be declared differently",
            rule.probe.absent, rule.probe.present
        );
    }

    RuleResult {
        content: patched,
        marker_found,
        probe_fired,
    }
}

/// Check a rule before it is used against a file
pub fn validate_rule(rule: &PatchRule) -> PatchResult<()> {
    if rule.marker.is_empty() {
        return Err(PatchError::invalid_argument("marker must not be empty"));
    }
    if rule.insertion.is_empty() {
        return Err(PatchError::invalid_argument("insertion must not be empty"));
    }
    if rule.file.trim().is_empty() {
        return Err(PatchError::invalid_argument("target file must not be empty"));
    }
    Ok(())
}

/// Path of the rule's target under `test_dir`
pub fn target_path(test_dir: impl AsRef<Path>, rule: &PatchRule) -> PathBuf {
    test_dir.as_ref().join(&rule.file)
}

/// Read `path` and compute the patched text in memory.
///
/// The file is only ever read; the computed content lives in the returned
/// outcome and nowhere else.
pub fn attempt_patch(path: impl AsRef<Path>, rule: &PatchRule) -> PatchResult<PatchOutcome> {
    let path = path.as_ref();
    validate_rule(rule)?;
    debug!("Applying rule:\n{}", rule);

    let original = read_text(path)?;
    let result = apply_rule(&original, rule);

    if result.marker_found {
        info!("Marker found in {}", path.display());
    } else {
        info!("Marker not found in {}; content unchanged", path.display());
    }

    Ok(PatchOutcome::new(path.to_path_buf(), original, result))
}
