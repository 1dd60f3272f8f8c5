//! Configuration loading and validation.
//!
//! Settings live in a TOML file; every section falls back to its defaults
//! so a missing or partial file is valid.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, StoreConfig, UiConfig};
