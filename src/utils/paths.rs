use std::path::{Path, PathBuf};

/// Expand the tilde in a path to the home directory
pub fn expand_tilde(path: impl AsRef<Path>) -> PathBuf {
    let path_str = path.as_ref().to_string_lossy();

    match path_str.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(rest),
        None => path.as_ref().to_path_buf(),
    }
}

/// Resolve `path` against `root` unless it is already absolute
pub fn resolve_under(root: impl AsRef<Path>, path: impl AsRef<Path>) -> PathBuf {
    let path = expand_tilde(path);
    if path.is_absolute() {
        path
    } else {
        root.as_ref().join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde() {
        let home = dirs::home_dir().unwrap();
        let path = expand_tilde("~/test.txt");
        assert_eq!(path, home.join("test.txt"));

        let path = expand_tilde("/tmp/test.txt");
        assert_eq!(path, PathBuf::from("/tmp/test.txt"));
    }

    #[test]
    fn test_resolve_under() {
        assert_eq!(
            resolve_under("/project", "app/src/test"),
            PathBuf::from("/project/app/src/test")
        );
        assert_eq!(
            resolve_under("/project", "/elsewhere/tests"),
            PathBuf::from("/elsewhere/tests")
        );
    }
}
