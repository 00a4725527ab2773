//! Shared configuration loader for the regolens toolchain.
//!
//! `defaults/regolens.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`RegolensConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use regolens_analysis::LintOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/regolens.default.toml");

/// Top-level configuration consumed by regolens applications.
#[derive(Debug, Clone, Deserialize)]
pub struct RegolensConfig {
    pub lint: LintConfig,
    pub convert: ConvertConfig,
    pub viz: VizConfig,
}

/// Mirrors the thresholds exposed by the lint checks.
#[derive(Debug, Clone, Deserialize)]
pub struct LintConfig {
    pub max_line_length: usize,
    pub min_message_length: usize,
    pub require_comments: bool,
}

impl LintConfig {
    /// Resolve into the options struct the diagnostics engine takes.
    pub fn lint_options(&self) -> LintOptions {
        LintOptions {
            max_line_length: self.max_line_length,
            min_message_length: self.min_message_length,
            require_comments: self.require_comments,
        }
    }
}

/// Conversion output knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub default_format: String,
}

/// Tree visualization knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct VizConfig {
    pub color_groups: bool,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<RegolensConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
