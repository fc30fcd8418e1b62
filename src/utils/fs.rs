use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{map_io_err, PatchResult};

/// Read a file's full contents as UTF-8 text.
///
/// Missing files and permission problems come back as `PatchError::Io`,
/// undecodable bytes as `PatchError::Decode`.
pub fn read_text(path: impl AsRef<Path>) -> PatchResult<String> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    let content = fs::read_to_string(path).map_err(map_io_err(path))?;

    debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Hex-encoded SHA-256 of a string
pub fn content_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Hex-encoded SHA-256 of a file's raw bytes
pub fn file_digest(path: impl AsRef<Path>) -> PatchResult<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(map_io_err(path))?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}
