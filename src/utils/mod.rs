pub mod fs;
pub mod paths;

pub use fs::{content_digest, file_digest, read_text};
pub use paths::{expand_tilde, resolve_under};
