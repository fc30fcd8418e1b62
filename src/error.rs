use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for mockpatch
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("IO error: {source}")]
    Io {
        source: std::io::Error,
        path: Option<PathBuf>,
    },

    #[error("File is not valid UTF-8 text: {}", .path.display())]
    Decode { path: PathBuf },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },
}

impl PatchError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: Option<impl Into<PathBuf>>) -> Self {
        Self::Io {
            source: err,
            path: path.map(|p| p.into()),
        }
    }

    /// Create a new decode error for a file that is not UTF-8
    pub fn decode_error(path: impl Into<PathBuf>) -> Self {
        Self::Decode { path: path.into() }
    }

    /// Create a new invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }

    /// Path the error refers to, when there is one
    pub fn path(&self) -> Option<&Path> {
        match self {
            PatchError::Io { path, .. } => path.as_deref(),
            PatchError::Decode { path } => Some(path.as_path()),
            _ => None,
        }
    }

    /// True when the underlying cause is a missing file
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PatchError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

impl From<std::io::Error> for PatchError {
    fn from(error: std::io::Error) -> Self {
        PatchError::io_error(error, None::<PathBuf>)
    }
}

impl From<serde_json::Error> for PatchError {
    fn from(error: serde_json::Error) -> Self {
        PatchError::parse_error(error.to_string())
    }
}

impl From<serde_yaml::Error> for PatchError {
    fn from(error: serde_yaml::Error) -> Self {
        PatchError::parse_error(error.to_string())
    }
}

impl From<toml::de::Error> for PatchError {
    fn from(error: toml::de::Error) -> Self {
        PatchError::parse_error(error.to_string())
    }
}

impl From<toml::ser::Error> for PatchError {
    fn from(error: toml::ser::Error) -> Self {
        PatchError::parse_error(error.to_string())
    }
}

/// Result type alias using PatchError
pub type PatchResult<T> = Result<T, PatchError>;

/// Contextual error mapping function
pub fn map_io_err<P: Into<PathBuf>>(path: P) -> impl FnOnce(std::io::Error) -> PatchError {
    let path = path.into();
    move |err| {
        if err.kind() == std::io::ErrorKind::InvalidData {
            PatchError::decode_error(path)
        } else {
            PatchError::io_error(err, Some(path))
        }
    }
}
