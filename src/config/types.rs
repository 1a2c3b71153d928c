//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::{RenderStyle, DEFAULT_VALUE};
use crate::error::ActgenResult;

use super::loader::{self, ConfigWarning, LoadedConfig};

/// Resource store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesConfig {
    /// Store used when no `-resx` token is given
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Value written for keys that are missing
    #[serde(default = "default_value")]
    pub default_value: String,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            path: None,
            default_value: default_value(),
        }
    }
}

fn default_value() -> String {
    DEFAULT_VALUE.to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory of the generated file (defaults to the executable's directory)
    #[serde(default)]
    pub dir: Option<PathBuf>,

    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default)]
    pub verbosity: Verbosity,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: None,
            extension: default_extension(),
            verbosity: Verbosity::default(),
        }
    }
}

fn default_extension() -> String {
    "cs".to_string()
}

/// Verbosity level
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Raise the level by `-v` count (never lowers it)
    pub fn raised_by(self, count: u8) -> Self {
        let from_flag = match count {
            0 => Verbosity::Quiet,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        };
        self.max(from_flag)
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        }
    }
}

/// Generated source layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    #[serde(default = "default_root_namespace")]
    pub root_namespace: String,

    #[serde(default = "default_namespace_suffix")]
    pub namespace_suffix: String,

    #[serde(default = "default_scalar_type")]
    pub scalar_type: String,

    #[serde(default = "default_indent")]
    pub indent: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        let style = RenderStyle::default();
        Self {
            root_namespace: style.root_namespace,
            namespace_suffix: style.namespace_suffix,
            scalar_type: style.scalar_type,
            indent: style.indent,
        }
    }
}

fn default_root_namespace() -> String {
    RenderStyle::default().root_namespace
}

fn default_namespace_suffix() -> String {
    RenderStyle::default().namespace_suffix
}

fn default_scalar_type() -> String {
    RenderStyle::default().scalar_type
}

fn default_indent() -> String {
    RenderStyle::default().indent
}

impl TemplateConfig {
    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            root_namespace: self.root_namespace.clone(),
            namespace_suffix: self.namespace_suffix.clone(),
            scalar_type: self.scalar_type.clone(),
            indent: self.indent.clone(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub resources: ResourcesConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub template: TemplateConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ActgenResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ActgenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the effective configuration (explicit file, project, user, defaults)
    pub fn resolve(explicit: Option<&Path>) -> ActgenResult<LoadedConfig> {
        loader::resolve(explicit)
    }

    /// Apply environment variable overrides (ACTGEN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
