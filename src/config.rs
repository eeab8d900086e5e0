// Configuration file: window, render and editor settings from TOML.
// Default path: ~/.config/sdf-sketch/config.toml
// Every key is optional; a missing or broken file means built-in defaults.

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::Error;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub render: RenderConfig,
    pub editor: EditorConfig,
}

/// Window settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial canvas width in pixels
    pub width: u32,
    /// Initial canvas height in pixels
    pub height: u32,
    /// Allow resizing; the canvas is re-rendered at the new size
    pub resizable: bool,
}

/// Render settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Color behind the shape (RRGGBB, '#' optional)
    pub background: String,
    /// Scan rows on all cores
    pub parallel: bool,
    /// Blend the soft edge over the background in linear light
    pub linear_blend: bool,
}

/// Editor settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Left/Right step
    pub step: f64,
    /// Step while Shift is held
    pub coarse_step: f64,
    /// Colors cycled with Space (RRGGBB)
    pub palette: Vec<String>,
    /// Draw the parameter list over the canvas
    pub show_hud: bool,
    /// Starting blur radius for every shape
    pub blur_radius: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "SDF Renderer".to_string(),
            width: 800,
            height: 600,
            resizable: true,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: "#000000".to_string(),
            parallel: true,
            linear_blend: false,
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            step: 1.0,
            coarse_step: 10.0,
            palette: ["#ffffff", "#ff5555", "#50fa7b", "#8be9fd", "#f1fa8c", "#bd93f9"]
                .map(String::from)
                .to_vec(),
            show_hud: true,
            blur_radius: 5.0,
        }
    }
}

impl Config {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("sdf-sketch").join("config.toml"))
    }

    /// Load `path` (or the default location). Missing or broken files fall
    /// back to built-in defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(p) => p,
            None => {
                info!("No config directory, using built-in defaults");
                return Self::default();
            }
        };

        if !path.exists() {
            info!("No config at {}, using built-in defaults", path.display());
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(config) => {
                info!("Loaded config: {}", path.display());
                config
            }
            Err(e) => {
                warn!("{e}; using built-in defaults");
                Self::default()
            }
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, Error> {
        toml::from_str(content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Background color; an invalid entry falls back to black.
    /// Visual: what shows through the soft edge and everywhere the shape is not.
    pub fn background(&self) -> Color {
        Color::from_hex(&self.render.background, 255.0).unwrap_or_else(|e| {
            warn!("render.background: {e}");
            Color::BLACK
        })
    }

    /// Palette colors; invalid entries are skipped.
    pub fn palette(&self) -> Vec<Color> {
        self.editor
            .palette
            .iter()
            .filter_map(|hex| match Color::from_hex(hex, 255.0) {
                Ok(c) => Some(c),
                Err(e) => {
                    warn!("editor.palette: {e}");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let c = Config::parse("", Path::new("test.toml")).unwrap();
        assert_eq!(c.window.width, 800);
        assert!(c.render.parallel);
        assert_eq!(c.editor.blur_radius, 5.0);
        assert_eq!(c.palette().len(), 6);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let c = Config::parse(
            r##"
            [window]
            width = 320

            [render]
            background = "#102030"

            [editor]
            palette = ["#ff0000", "nope", "00ff00"]
            "##,
            Path::new("test.toml"),
        )
        .unwrap();
        assert_eq!(c.window.width, 320);
        assert_eq!(c.window.height, 600);
        assert_eq!(c.background(), Color::rgb(16.0, 32.0, 48.0));
        assert_eq!(
            c.palette(),
            vec![Color::rgb(255.0, 0.0, 0.0), Color::rgb(0.0, 255.0, 0.0)]
        );
    }

    #[test]
    fn bad_background_falls_back_to_black() {
        let mut c = Config::default();
        c.render.background = "#12".to_string();
        assert_eq!(c.background(), Color::BLACK);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Config::parse("[window\nwidth = ", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = Config::load_from_file(Path::new("/nonexistent/sdf-sketch.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }
}
