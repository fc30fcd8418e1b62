use serde::{Deserialize, Serialize};
use std::fmt;

/// Test source tree the rule's `file` is relative to
pub const TEST_DIR: &str = "app/src/test/java/com/devsusana/hometutorpro";

const DEFAULT_FILE: &str = "data/repository/StudentRepositoryImplTest.kt";
const DEFAULT_MARKER: &str = "private val resourceDao: ResourceDao = mockk()";
const DEFAULT_INSERTION: &str = "\n    private val preferencesHelper: com.devsusana.hometutorpro.data.local.PreferencesHelper = mockk()";

/// Inspection that looks at the content without acting on it.
///
/// Fires when `absent` does not occur in the content and `present` does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Probe {
    pub absent: String,
    pub present: String,
}

impl Default for Probe {
    fn default() -> Self {
        Self {
            absent: "ResourceDao".to_string(),
            present: "mockk()".to_string(),
        }
    }
}

impl Probe {
    pub fn fires(&self, content: &str) -> bool {
        !content.contains(&self.absent) && content.contains(&self.present)
    }
}

/// Literal substitution: append `insertion` right after every `marker`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchRule {
    /// Target file, relative to the test directory
    pub file: String,
    /// Literal text that must be present for the patch to apply
    pub marker: String,
    /// Mock dependency declaration placed immediately after the marker
    pub insertion: String,
    pub probe: Probe,
}

impl Default for PatchRule {
    fn default() -> Self {
        Self {
            file: DEFAULT_FILE.to_string(),
            marker: DEFAULT_MARKER.to_string(),
            insertion: DEFAULT_INSERTION.to_string(),
            probe: Probe::default(),
        }
    }
}

impl PatchRule {
    /// Text the marker is rewritten to
    pub fn replacement(&self) -> String {
        format!("{}{}", self.marker, self.insertion)
    }
}

impl fmt::Display for PatchRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "file:      {}", self.file)?;
        writeln!(f, "marker:    {}", self.marker)?;
        write!(f, "insertion: {}", self.insertion.escape_debug())
    }
}
