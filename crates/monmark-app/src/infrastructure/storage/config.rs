//! TOML-based configuration for the monmark application.
//!
//! Reads and writes [`AppConfig`] at the platform-appropriate location:
//! - Linux:    `$XDG_CONFIG_HOME/monmark/config.toml` (or `~/.config/...`)
//! - Windows:  `%APPDATA%\monmark\config.toml`
//! - macOS:    `~/Library/Application Support/monmark/config.toml`
//!
//! The schema is deliberately static: every style knob is a named field with
//! a serde default, so a missing file or a file from an older version always
//! deserializes to something usable.  Colors are kept as hex strings; turning
//! them into channels is the renderer's job, not this crate's.

use std::path::PathBuf;

use monmark_core::Padding;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub canvas: CanvasStyle,
    #[serde(default)]
    pub display: DisplayStyle,
}

/// Headless preview settings: the canvas size the CLI renders the scene at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreviewConfig {
    #[serde(default = "default_preview_width")]
    pub width: f64,
    #[serde(default = "default_preview_height")]
    pub height: f64,
}

/// Style of the canvas the layout is drawn onto.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CanvasStyle {
    /// Padding between the canvas border and the mapped layout.
    #[serde(default = "default_canvas_padding")]
    pub padding: Padding,
    /// Canvas background color, `#rrggbb`.
    #[serde(default = "default_canvas_background")]
    pub background: String,
}

/// Style of each display rectangle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayStyle {
    /// Inset of each display rectangle, creating a gutter between
    /// neighbouring displays.  Also used by hit-testing so the gutter is
    /// not hoverable.
    #[serde(default = "default_display_padding")]
    pub padding: Padding,
    #[serde(default)]
    pub background: HighlightColors,
    #[serde(default)]
    pub border: BorderStyle,
    #[serde(default = "FontStyle::name_default")]
    pub name_label: FontStyle,
    #[serde(default = "FontStyle::resolution_default")]
    pub resolution_label: FontStyle,
    #[serde(default)]
    pub primary: PrimaryBarStyle,
}

/// Background fill per highlight category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HighlightColors {
    #[serde(default = "default_unselected_color")]
    pub unselected: String,
    #[serde(default = "default_selected_color")]
    pub selected: String,
    #[serde(default = "default_assigned_color")]
    pub assigned: String,
    #[serde(default = "default_both_color")]
    pub both: String,
}

/// Display rectangle border.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BorderStyle {
    #[serde(default = "default_border_width")]
    pub line_width: f64,
    #[serde(default = "default_border_color")]
    pub color: String,
}

/// A label font request the renderer resolves against the system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FontStyle {
    #[serde(default = "default_font_family")]
    pub family: String,
    pub size: f64,
    #[serde(default = "default_label_color")]
    pub color: String,
}

impl FontStyle {
    fn name_default() -> Self {
        Self {
            family: default_font_family(),
            size: 13.0,
            color: "#ffffff".to_string(),
        }
    }

    fn resolution_default() -> Self {
        Self {
            family: default_font_family(),
            size: 11.0,
            color: "#cccccc".to_string(),
        }
    }
}

/// The bar drawn across the top of the primary display's rectangle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrimaryBarStyle {
    #[serde(default = "default_primary_color")]
    pub color: String,
    /// Inset of the bar within the display rectangle.
    #[serde(default = "default_primary_padding")]
    pub padding: Padding,
    /// Bar height as a fraction of the display rectangle height.
    #[serde(default = "default_primary_proportion")]
    pub proportion: f64,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_preview_width() -> f64 {
    800.0
}
fn default_preview_height() -> f64 {
    450.0
}
fn default_canvas_padding() -> Padding {
    Padding::uniform(20.0)
}
fn default_canvas_background() -> String {
    "#2d2d2d".to_string()
}
fn default_display_padding() -> Padding {
    Padding::uniform(3.0)
}
fn default_unselected_color() -> String {
    "#353535".to_string()
}
fn default_selected_color() -> String {
    "#15539e".to_string()
}
fn default_assigned_color() -> String {
    "#ff7d01".to_string()
}
fn default_both_color() -> String {
    "#ffa600".to_string()
}
fn default_border_width() -> f64 {
    1.0
}
fn default_border_color() -> String {
    "#1b1b1b".to_string()
}
fn default_font_family() -> String {
    "Sans".to_string()
}
fn default_label_color() -> String {
    "#ffffff".to_string()
}
fn default_primary_color() -> String {
    "#111111".to_string()
}
fn default_primary_padding() -> Padding {
    Padding {
        top: 5.0,
        right: 5.0,
        bottom: 0.0,
        left: 5.0,
    }
}
fn default_primary_proportion() -> f64 {
    0.10
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            width: default_preview_width(),
            height: default_preview_height(),
        }
    }
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self {
            padding: default_canvas_padding(),
            background: default_canvas_background(),
        }
    }
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self {
            padding: default_display_padding(),
            background: HighlightColors::default(),
            border: BorderStyle::default(),
            name_label: FontStyle::name_default(),
            resolution_label: FontStyle::resolution_default(),
            primary: PrimaryBarStyle::default(),
        }
    }
}

impl Default for HighlightColors {
    fn default() -> Self {
        Self {
            unselected: default_unselected_color(),
            selected: default_selected_color(),
            assigned: default_assigned_color(),
            both: default_both_color(),
        }
    }
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self {
            line_width: default_border_width(),
            color: default_border_color(),
        }
    }
}

impl Default for PrimaryBarStyle {
    fn default() -> Self {
        Self {
            color: default_primary_color(),
            padding: default_primary_padding(),
            proportion: default_primary_proportion(),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot
/// be determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads [`AppConfig`] from disk, returning `AppConfig::default()` if the
/// file does not yet exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not
/// found", and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = config_file_path()?;

    match std::fs::read_to_string(&path) {
        Ok(content) => {
            let cfg: AppConfig = toml::from_str(&content)?;
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(ConfigError::Io { path, source: e }),
    }
}

/// Persists `config` to disk, creating the config directory if needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    let path = config_file_path()?;

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(&path, content).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(())
}

/// Resolves the platform config base directory plus the `monmark` subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("monmark"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("monmark"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME")
            .map(|h| PathBuf::from(h).join("Library/Application Support/monmark"))
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
