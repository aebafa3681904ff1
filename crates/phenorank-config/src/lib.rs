//! phenorank-config - Connection settings and UI preferences.
//! Reads phenorank.toml from the current directory or the path in PHENORANK_CONFIG.

pub mod error;
pub mod settings;

pub use error::ConfigError;
pub use settings::{AppSettings, Config, ServerConfig, UiConfig};
