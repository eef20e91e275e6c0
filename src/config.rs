use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::PaintResult;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV_VAR: &str = "RASTER_PAINT_CONFIG";

const DEFAULT_HELP_TEXT: &str = "\
Pick a tool on the left and drag on the canvas to draw.

Brush, pencil and eraser draw freehand. Line, ellipse, rectangle and the \
polygon tools draw from where you press to where you release. Fill paints \
the whole canvas with the active colour.

Two colour slots are available. Palette clicks and the colour picker change \
the active slot. When fill is enabled, shapes are filled with the other slot's \
colour.

File > New canvas starts over, File > Open loads a PNG, JPEG or BMP image and \
File > Save writes the canvas to one of those formats.";

const DEFAULT_ABOUT_TEXT: &str = concat!(
    "Raster Paint ",
    env!("CARGO_PKG_VERSION"),
    "\nA small raster drawing program."
);

/// Startup configuration, passed explicitly into the app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub help_text: String,
    pub about_text: String,
    /// Reads the help text from this file instead of `help_text`
    pub help_text_path: Option<PathBuf>,
    /// Reads the about text from this file instead of `about_text`
    pub about_text_path: Option<PathBuf>,
    pub icon_path: Option<PathBuf>,
    /// Starting directory of the open/save dialogs
    pub dialog_dir: Option<PathBuf>,
    pub window_size: [f32; 2],
    pub start_maximized: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            help_text: DEFAULT_HELP_TEXT.to_owned(),
            about_text: DEFAULT_ABOUT_TEXT.to_owned(),
            help_text_path: None,
            about_text_path: None,
            icon_path: None,
            dialog_dir: None,
            window_size: [1000.0, 720.0],
            start_maximized: false,
        }
    }
}

impl AppConfig {
    /// Loads the file named by [`CONFIG_ENV_VAR`], or defaults when unset
    pub fn load_from_env() -> PaintResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_json_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Parses a JSON config file and resolves the text file overrides.
    /// An empty file yields the defaults.
    pub fn from_json_file(path: &Path) -> PaintResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_json::from_str::<Self>(&content)?
        };
        log::info!("Loaded config from {}", path.display());

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        if let Some(help) = &config.help_text_path {
            config.help_text = std::fs::read_to_string(base.join(help))?;
        }
        if let Some(about) = &config.about_text_path {
            config.about_text = std::fs::read_to_string(base.join(about))?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_have_texts() {
        let config = AppConfig::default();
        assert!(!config.help_text.is_empty());
        assert!(config.about_text.starts_with("Raster Paint"));
        assert!(config.dialog_dir.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paint.json");
        fs::write(&path, r#"{ "start_maximized": true, "window_size": [640.0, 480.0] }"#).unwrap();

        let config = AppConfig::from_json_file(&path).unwrap();
        assert!(config.start_maximized);
        assert_eq!(config.window_size, [640.0, 480.0]);
        assert_eq!(config.help_text, AppConfig::default().help_text);
    }

    #[test]
    fn test_text_paths_are_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("help.txt"), "Press and drag.").unwrap();
        let path = dir.path().join("paint.json");
        fs::write(&path, r#"{ "help_text_path": "help.txt" }"#).unwrap();

        let config = AppConfig::from_json_file(&path).unwrap();
        assert_eq!(config.help_text, "Press and drag.");
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paint.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            AppConfig::from_json_file(&path),
            Err(crate::error::PaintError::Config(_))
        ));
    }
}
