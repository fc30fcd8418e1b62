pub mod attempt;
pub mod outcome;
pub mod rule;

pub use attempt::{apply_rule, attempt_patch, target_path, validate_rule, RuleResult};
pub use outcome::PatchOutcome;
pub use rule::{PatchRule, Probe, TEST_DIR};
