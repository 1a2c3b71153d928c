//! Configuration module for actgen
//!
//! Configuration hierarchy:
//! 1. CLI flags and the `-resx` token (highest priority)
//! 2. Environment variables (ACTGEN_*)
//! 3. Explicit `--config` file, else `./actgen.toml`
//! 4. User config (`<config dir>/actgen/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    user_config_path, with_overrides_from, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{Config, OutputConfig, ResourcesConfig, TemplateConfig, Verbosity};
