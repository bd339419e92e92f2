//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`ISOART_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

use isoart_render::{RenderContext, SurfaceError};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration
    #[serde(default)]
    pub canvas: CanvasConfig,
    /// Artwork selection
    #[serde(default)]
    pub art: ArtConfig,
    /// Animation configuration
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Export configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`ISOART_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // ISOART_CANVAS__DRAW_WIDTH=600 -> canvas.draw_width = 600
        figment = figment.merge(Env::prefixed("ISOART_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Canvas configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Drawing area width in pixels
    pub draw_width: f64,
    /// Drawing area height in pixels
    pub draw_height: f64,
    /// Total margin around the drawing area
    pub margin: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            draw_width: RenderContext::DEFAULT_DRAW_WIDTH,
            draw_height: RenderContext::DEFAULT_DRAW_HEIGHT,
            margin: RenderContext::DEFAULT_MARGIN,
        }
    }
}

impl CanvasConfig {
    /// Build the render context; fails for an empty drawing area
    pub fn to_render_context(&self) -> Result<RenderContext, SurfaceError> {
        RenderContext::new(self.draw_width, self.draw_height, self.margin)
    }
}

/// Artwork selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtConfig {
    /// Art piece name
    pub piece: String,
    /// Seed for the random pool
    pub seed: String,
    /// Parameter a, 0 to 10
    pub parameter_a: f64,
    /// Parameter b, 0 to 10
    pub parameter_b: f64,
}

impl Default for ArtConfig {
    fn default() -> Self {
        Self {
            piece: "iso-cube".to_string(),
            seed: String::new(),
            parameter_a: 5.0,
            parameter_b: 5.0,
        }
    }
}

/// Animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Frames the host loop drives for animated pieces
    pub frames: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { frames: 120 }
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory SVG files are written to
    pub directory: PathBuf,
    /// Gallery preset to export instead of the single configured artwork
    pub preset: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("out"),
            preset: None,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
