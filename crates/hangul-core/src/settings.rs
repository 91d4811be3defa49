//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

/// Read and validate a settings file without installing it.
pub fn load_file(path: &Path) -> Result<Settings, SettingsError> {
    let content = fs::read_to_string(path)?;
    parse_settings_toml(&content)
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

/// A missing section takes its defaults; a present section must be complete.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub sort: SortSettings,
}

/// Post-processing applied to romanized text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputSettings {
    pub trim: bool,
    pub capitalize: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            trim: true,
            capitalize: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SortSettings {
    /// Tags that get a romanized sort counterpart.
    pub tags: Vec<String>,
    /// Appended to a tag name to form its sort tag ("title" -> "titlesort").
    pub suffix: String,
    #[serde(default)]
    pub lowercase_keys: bool,
}

impl SortSettings {
    pub fn sort_tag_name(&self, tag: &str) -> String {
        format!("{tag}{}", self.suffix)
    }
}

impl Default for SortSettings {
    fn default() -> Self {
        Self {
            tags: vec!["album".to_string(), "title".to_string()],
            suffix: "sort".to_string(),
            lowercase_keys: false,
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    let invalid = |field: &str, reason: &str| SettingsError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    };

    if s.sort.tags.is_empty() {
        return Err(invalid("sort.tags", "must not be empty"));
    }
    if s.sort.suffix.is_empty() {
        return Err(invalid("sort.suffix", "must not be empty"));
    }
    for tag in &s.sort.tags {
        if tag.trim().is_empty() {
            return Err(invalid("sort.tags", "tag names must not be blank"));
        }
        // "titlesort" would otherwise be rewritten to "titlesortsort".
        if tag.ends_with(&s.sort.suffix) {
            return Err(SettingsError::InvalidValue {
                field: format!("sort.tags.{tag}"),
                reason: format!("tag already ends with suffix \"{}\"", s.sort.suffix),
            });
        }
    }

    Ok(())
}
