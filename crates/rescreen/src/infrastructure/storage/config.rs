//! Layout configuration file loading.
//!
//! The configuration lives in the platform-appropriate config directory unless
//! a path is given on the command line:
//! - Linux:    `~/.config/rescreen/config.toml`
//! - macOS:    `~/Library/Application Support/rescreen/config.toml`
//! - Windows:  `%APPDATA%\rescreen\config.toml`
//!
//! Example:
//!
//! ```toml
//! layout = [
//!     "DP-1",  "HDMI-1", "", "",
//!     "eDP-1", "",       "", "",
//! ]
//!
//! [monitors.HDMI-1]
//! primary = true
//!
//! [monitors.eDP-1]
//! scale = 1.5
//! ```
//!
//! Files ending in `.json` are read as JSON with the same shape.  A loaded
//! configuration is always validated, so callers never see a layout with a
//! duplicate or missing monitor list.

use std::path::{Path, PathBuf};

use rescreen_core::{GridError, LayoutConfig};
use thiserror::Error;
use tracing::debug;

use super::document::{parse_document, read_document, DocumentError, FileFormat};

/// Directory created under the platform config base.
const APP_DIR_NAME: &str = "rescreen";

/// Name of the configuration file inside the config directory.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// The file could not be read or parsed.
    #[error(transparent)]
    Read(#[from] DocumentError),

    /// The file parsed but describes an invalid layout.
    #[error("invalid layout config: {0}")]
    Invalid(#[from] GridError),
}

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the default config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads and validates the layout configuration at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] for I/O and parse failures, and
/// [`ConfigError::Invalid`] when the layout breaks a grid invariant.
pub fn load_config(path: &Path) -> Result<LayoutConfig, ConfigError> {
    let config: LayoutConfig = read_document(path)?;
    validate(&config)?;
    debug!(path = %path.display(), cells = config.layout.len(), "configuration loaded");
    Ok(config)
}

/// Parses and validates configuration text.
///
/// # Errors
///
/// Same as [`load_config`], minus I/O.
pub fn parse_config(content: &str, format: FileFormat) -> Result<LayoutConfig, ConfigError> {
    let config: LayoutConfig = parse_document(content, format, Path::new("<inline>"))?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &LayoutConfig) -> Result<(), GridError> {
    config.grid()?.validate()
}

/// Per-user configuration base: `%APPDATA%` on Windows,
/// `~/Library/Application Support` on macOS, `$XDG_CONFIG_HOME` or `~/.config`
/// elsewhere.
fn platform_config_dir() -> Option<PathBuf> {
    let var = |name: &str| std::env::var_os(name).map(PathBuf::from);

    let base = if cfg!(target_os = "windows") {
        var("APPDATA")
    } else if cfg!(target_os = "macos") {
        var("HOME").map(|home| home.join("Library").join("Application Support"))
    } else {
        var("XDG_CONFIG_HOME").or_else(|| var("HOME").map(|home| home.join(".config")))
    };

    base.map(|dir| dir.join(APP_DIR_NAME))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rescreen_core::GridSize;

    #[test]
    fn test_parse_config_toml_with_monitor_settings() {
        // Arrange
        let toml_str = r#"
layout = ["DP-1", "HDMI-1", "", "", "eDP-1"]

[monitors.HDMI-1]
primary = true

[monitors.eDP-1]
scale = 1.5
"#;

        // Act
        let cfg = parse_config(toml_str, FileFormat::Toml).expect("parse");

        // Assert
        assert_eq!(cfg.grid, GridSize::default());
        assert_eq!(cfg.layout.len(), 5);
        assert!(cfg.settings("HDMI-1").primary);
        assert_eq!(cfg.settings("eDP-1").scaling(), 1.5);
        assert_eq!(cfg.settings("DP-1").scaling(), 1.0);
    }

    #[test]
    fn test_parse_config_with_custom_grid() {
        let toml_str = r#"
layout = ["A", "B", "C", "D", "E", "F"]

[grid]
rows = 1
cols = 6
"#;
        let cfg = parse_config(toml_str, FileFormat::Toml).expect("parse");
        assert_eq!(cfg.grid, GridSize::new(1, 6));
    }

    #[test]
    fn test_parse_config_json_matches_toml() {
        let json = r#"{
            "layout": ["DP-1", "HDMI-1"],
            "monitors": { "HDMI-1": { "primary": true } }
        }"#;
        let toml_str = r#"
layout = ["DP-1", "HDMI-1"]
[monitors.HDMI-1]
primary = true
"#;

        let from_json = parse_config(json, FileFormat::Json).unwrap();
        let from_toml = parse_config(toml_str, FileFormat::Toml).unwrap();

        assert_eq!(from_json, from_toml);
    }

    #[test]
    fn test_parse_config_rejects_duplicate_monitor() {
        let err = parse_config(r#"layout = ["DP-1", "DP-1"]"#, FileFormat::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(GridError::Duplicate(ref id)) if id == "DP-1"));
        assert_eq!(err.to_string(), "invalid layout config: \"DP-1\" appears twice");
    }

    #[test]
    fn test_parse_config_rejects_empty_layout() {
        let err = parse_config("layout = []", FileFormat::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(GridError::Empty)));

        let err = parse_config("", FileFormat::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(GridError::Empty)));
    }

    #[test]
    fn test_parse_config_rejects_overflowing_layout() {
        let toml_str = r#"
layout = ["A", "B", "C"]
[grid]
rows = 1
cols = 2
"#;
        let err = parse_config(toml_str, FileFormat::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(GridError::TooManyCells { .. })));
    }

    #[test]
    fn test_parse_config_rejects_oversized_grid() {
        let toml_str = r#"
layout = ["A"]
[grid]
rows = 100000
cols = 100000
"#;
        let err = parse_config(toml_str, FileFormat::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(GridError::TooLarge { .. })));
    }

    #[test]
    fn test_parse_config_invalid_toml_is_read_error() {
        let err = parse_config("[[[ not valid toml", FileFormat::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::Read(DocumentError::Toml { .. })));
    }

    #[test]
    fn test_platform_config_dir_is_named_after_the_tool() {
        // Absent in environments without HOME/APPDATA; nothing to check then.
        if let Some(dir) = platform_config_dir() {
            assert_eq!(dir.file_name(), Some(std::ffi::OsStr::new(APP_DIR_NAME)));
        }
    }

    #[test]
    fn test_config_file_path_ends_with_config_toml() {
        match config_file_path() {
            Ok(path) => assert!(path.ends_with(Path::new(APP_DIR_NAME).join(CONFIG_FILE_NAME))),
            Err(err) => assert!(matches!(err, ConfigError::NoPlatformConfigDir)),
        }
    }
}
