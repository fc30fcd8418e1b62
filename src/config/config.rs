use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{PatchError, PatchResult};
use crate::patch::{target_path, PatchRule, TEST_DIR};
use crate::utils::paths::resolve_under;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchConfig {
    /// Test source tree, relative to the project root unless absolute
    pub test_dir: String,
    pub rule: PatchRule,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            test_dir: TEST_DIR.to_string(),
            rule: PatchRule::default(),
        }
    }
}

impl PatchConfig {
    pub fn load(path: &Path) -> PatchResult<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        debug!("Loading config from {}", path.display());

        let content = std::fs::read_to_string(path)
            .map_err(|e| PatchError::io_error(e, Some(path)))?;

        match ext {
            "json" => Ok(serde_json::from_str(&content)?),
            "yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
            "toml" => Ok(toml::from_str(&content)?),
            _ => Err(PatchError::invalid_argument(format!(
                "Unsupported config format: {}",
                ext
            ))),
        }
    }

    /// Load from `path` when given, otherwise use the built-in rule
    pub fn load_or_default(path: Option<&Path>) -> PatchResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Effective configuration rendered as TOML
    pub fn to_toml(&self) -> PatchResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Absolute or root-relative location of the file the rule targets
    pub fn target(&self, root: impl AsRef<Path>) -> PathBuf {
        let test_dir = resolve_under(root, &self.test_dir);
        target_path(test_dir, &self.rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_target() {
        let config = PatchConfig::default();
        assert_eq!(
            config.target("/project"),
            PathBuf::from(
                "/project/app/src/test/java/com/devsusana/hometutorpro/data/repository/StudentRepositoryImplTest.kt"
            )
        );
    }

    #[test]
    fn test_load_toml_partial() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mockpatch.toml");
        fs::write(
            &path,
            "test_dir = \"src/test\"\n\n[rule]\nfile = \"FooTest.kt\"\n",
        )
        .unwrap();

        let config = PatchConfig::load(&path).unwrap();
        assert_eq!(config.test_dir, "src/test");
        assert_eq!(config.rule.file, "FooTest.kt");
        assert_eq!(config.rule.marker, PatchRule::default().marker);
        assert_eq!(config.target("/p"), PathBuf::from("/p/src/test/FooTest.kt"));
    }

    #[test]
    fn test_load_empty_toml_is_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        fs::write(&path, "").unwrap();

        assert_eq!(PatchConfig::load(&path).unwrap(), PatchConfig::default());
    }

    #[test]
    fn test_load_json_and_yaml() {
        let dir = tempdir().unwrap();

        let json = dir.path().join("c.json");
        fs::write(&json, r#"{"rule": {"marker": "val a = mockk()"}}"#).unwrap();
        assert_eq!(
            PatchConfig::load(&json).unwrap().rule.marker,
            "val a = mockk()"
        );

        let yaml = dir.path().join("c.yml");
        fs::write(&yaml, "rule:\n  probe:\n    absent: Dao\n").unwrap();
        let config = PatchConfig::load(&yaml).unwrap();
        assert_eq!(config.rule.probe.absent, "Dao");
        assert_eq!(config.rule.probe.present, "mockk()");
    }

    #[test]
    fn test_to_toml_reloads_to_same_config() {
        let dir = tempdir().unwrap();
        let config = PatchConfig {
            test_dir: "src/test".to_string(),
            ..PatchConfig::default()
        };

        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("test_dir = \"src/test\""));
        assert!(rendered.contains("[rule]"));

        let path = dir.path().join("dump.toml");
        fs::write(&path, &rendered).unwrap();
        assert_eq!(PatchConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("c.ini");
        fs::write(&path, "x=1").unwrap();

        assert!(matches!(
            PatchConfig::load(&path),
            Err(PatchError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_malformed_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            PatchConfig::load(&path),
            Err(PatchError::ParseError { .. })
        ));
    }
}
