//! Shared configuration loader for mdclip.
//!
//! `defaults/mdclip.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`MdclipConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdclip_convert::document::{HtmlOptions, HtmlTheme};
use mdclip_convert::ConvertError;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdclip.default.toml");

/// Top-level configuration consumed by mdclip applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdclipConfig {
    pub html: HtmlConfig,
    pub clipboard: ClipboardConfig,
    pub editor: EditorConfig,
}

/// Document assembly knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub theme: String,
    /// Path to a CSS file appended after the theme CSS.
    #[serde(default)]
    pub custom_css: Option<String>,
}

impl HtmlConfig {
    /// Resolves the configured theme name.
    pub fn theme(&self) -> Result<HtmlTheme, ConvertError> {
        HtmlTheme::from_name(&self.theme)
    }

    /// Builds assembly options from this config, with `custom_css` already
    /// read from disk by the caller.
    pub fn options(&self, custom_css: Option<String>) -> Result<HtmlOptions, ConvertError> {
        let mut options = HtmlOptions::new(self.theme()?);
        if let Some(css) = custom_css {
            options = options.with_custom_css(css);
        }
        Ok(options)
    }
}

/// Clipboard behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct ClipboardConfig {
    pub plain_text_fallback: bool,
}

/// Editor integration for `--edit`.
#[derive(Debug, Clone, Deserialize)]
pub struct EditorConfig {
    pub command: String,
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
    pub fn build(self) -> Result<MdclipConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdclipConfig, ConfigError> {
    Loader::new().build()
}
