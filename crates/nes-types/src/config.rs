//! Console configuration loaded from TOML.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::color::{Color, parse_hex_color};
use crate::error::{ConsoleError, Result};
use crate::input::Key;

/// Console settings. Every field has a default, so an empty TOML document
/// is a valid configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Whether the console can be opened at all.
    pub enabled: bool,
    /// Whether an open console should pause the host's game step.
    pub stops_execution: bool,
    /// Whether a compact view of the console stays visible while closed.
    pub ui_visible: bool,
    /// Name of the key that toggles the console (`"none"` disables it).
    pub open_key: String,
    /// Number of scrollback lines visible at once.
    pub max_lines_on_screen: usize,
    /// Directory searched by the `exec` command.
    pub exec_dir: PathBuf,
    /// Lines scrolled per unit of mouse wheel movement.
    pub wheel_step: f32,
    /// Extra wheel multiplier while control is held.
    pub wheel_fast_multiplier: f32,
    /// Cursor blink period in seconds; visible during the first half.
    pub blink_period: f32,
    /// Background color as `#RRGGBB` or `#RRGGBBAA`.
    pub background: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stops_execution: true,
            ui_visible: true,
            open_key: "grave".to_string(),
            max_lines_on_screen: 23,
            exec_dir: PathBuf::from("./game/exec"),
            wheel_step: 2.0,
            wheel_fast_multiplier: 4.0,
            blink_period: 1.0,
            background: "#141414".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Parse a configuration from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ConsoleConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::info!("Loaded console config from {}", path.display());
        Ok(config)
    }

    /// The toggle key, or `None` when toggling is disabled.
    pub fn open_key(&self) -> Option<Key> {
        if self.open_key.eq_ignore_ascii_case("none") || self.open_key.is_empty() {
            return None;
        }
        Key::from_name(&self.open_key)
    }

    pub fn background_color(&self) -> Color {
        parse_hex_color(&self.background).unwrap_or(Color::rgb(20, 20, 20))
    }

    fn validate(&self) -> Result<()> {
        if self.max_lines_on_screen == 0 {
            return Err(ConsoleError::Config(
                "max_lines_on_screen must be at least 1".to_string(),
            ));
        }
        if !self.open_key.eq_ignore_ascii_case("none")
            && !self.open_key.is_empty()
            && Key::from_name(&self.open_key).is_none()
        {
            return Err(ConsoleError::Config(format!(
                "unknown open_key: {}",
                self.open_key
            )));
        }
        if self.blink_period <= 0.0 {
            return Err(ConsoleError::Config(
                "blink_period must be positive".to_string(),
            ));
        }
        if parse_hex_color(&self.background).is_none() {
            return Err(ConsoleError::Config(format!(
                "invalid background color: {}",
                self.background
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = ConsoleConfig::from_toml_str("").unwrap();
        assert!(cfg.enabled);
        assert!(cfg.stops_execution);
        assert_eq!(cfg.max_lines_on_screen, 23);
        assert_eq!(cfg.open_key(), Some(Key::GRAVE));
        assert_eq!(cfg.exec_dir, PathBuf::from("./game/exec"));
        assert_eq!(cfg.background_color(), Color::rgb(20, 20, 20));
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = ConsoleConfig::from_toml_str(
            r##"
            open_key = "f1"
            max_lines_on_screen = 10
            exec_dir = "/tmp/exec"
            stops_execution = false
            background = "#000000"
            "##,
        )
        .unwrap();
        assert_eq!(cfg.open_key(), Some(Key::F(1)));
        assert_eq!(cfg.max_lines_on_screen, 10);
        assert_eq!(cfg.exec_dir, PathBuf::from("/tmp/exec"));
        assert!(!cfg.stops_execution);
        assert_eq!(cfg.background_color(), Color::BLACK);
    }

    #[test]
    fn open_key_none_disables_toggle() {
        let cfg = ConsoleConfig::from_toml_str("open_key = \"none\"").unwrap();
        assert_eq!(cfg.open_key(), None);
    }

    #[test]
    fn unknown_open_key_rejected() {
        let err = ConsoleConfig::from_toml_str("open_key = \"hyperspace\"").unwrap_err();
        assert!(matches!(err, ConsoleError::Config(_)));
    }

    #[test]
    fn zero_visible_lines_rejected() {
        let err = ConsoleConfig::from_toml_str("max_lines_on_screen = 0").unwrap_err();
        assert!(format!("{err}").contains("max_lines_on_screen"));
    }

    #[test]
    fn bad_background_rejected() {
        assert!(ConsoleConfig::from_toml_str("background = \"red\"").is_err());
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = ConsoleConfig::from_toml_str("enabled = [[").unwrap_err();
        assert!(matches!(err, ConsoleError::TomlParse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "wheel_step = 3.5").unwrap();
        let cfg = ConsoleConfig::load(file.path()).unwrap();
        assert_eq!(cfg.wheel_step, 3.5);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = ConsoleConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConsoleError::Io(_)));
    }
}
