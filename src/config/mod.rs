// Configuration for mockpatch
// Every field falls back to the built-in rule, so a config file only lists overrides

#[allow(clippy::module_inception)]
pub mod config;

pub use config::PatchConfig;
