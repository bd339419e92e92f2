//! Gallery presets
//!
//! Provides GalleryPreset for loading/saving lists of artworks from RON files.
//! An artwork names an art piece together with the seed and parameters that
//! reproduce it exactly.

use serde::{Serialize, Deserialize};
use std::path::Path;
use std::fs;
use std::io;

use crate::params::Parameters;

/// One reproducible artwork: piece name, seed, and parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    /// Art piece name (e.g. "iso-cube-color")
    pub piece: String,
    /// Seed string for the random pool
    #[serde(default)]
    pub seed: String,
    /// User parameters
    #[serde(default)]
    pub parameters: Parameters,
}

impl Artwork {
    /// Create an artwork with neutral parameters and an empty seed
    pub fn new(piece: impl Into<String>) -> Self {
        Self {
            piece: piece.into(),
            seed: String::new(),
            parameters: Parameters::default(),
        }
    }

    /// Set the seed
    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = seed.into();
        self
    }

    /// Set the parameters (clamped into range)
    pub fn with_parameters(mut self, a: f64, b: f64) -> Self {
        self.parameters = Parameters::new(a, b);
        self
    }
}

/// A serializable list of artworks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryPreset {
    /// Preset name (for display/debugging)
    pub name: String,
    /// Artworks in this preset
    pub artworks: Vec<Artwork>,
}

impl GalleryPreset {
    /// Create a new empty preset
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            artworks: Vec::new(),
        }
    }

    /// Load a preset from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PresetLoadError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let preset: Self = ron::from_str(&contents)?;
        log::debug!(
            "Loaded preset '{}' with {} artworks from {}",
            preset.name,
            preset.artworks.len(),
            path.display()
        );
        Ok(preset)
    }

    /// Save a preset to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PresetSaveError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Add an artwork to this preset
    pub fn add_artwork(&mut self, artwork: Artwork) {
        self.artworks.push(artwork);
    }

    /// Builder-style variant of [`GalleryPreset::add_artwork`]
    pub fn with_artwork(mut self, artwork: Artwork) -> Self {
        self.artworks.push(artwork);
        self
    }
}

/// Error loading a preset
#[derive(Debug)]
pub enum PresetLoadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
}

impl From<io::Error> for PresetLoadError {
    fn from(e: io::Error) -> Self {
        PresetLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for PresetLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        PresetLoadError::Parse(e)
    }
}

impl std::fmt::Display for PresetLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresetLoadError::Io(e) => write!(f, "IO error: {}", e),
            PresetLoadError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for PresetLoadError {}

/// Error saving a preset
#[derive(Debug)]
pub enum PresetSaveError {
    /// IO error (permission denied, disk full, etc.)
    Io(io::Error),
    /// Serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for PresetSaveError {
    fn from(e: io::Error) -> Self {
        PresetSaveError::Io(e)
    }
}

impl From<ron::Error> for PresetSaveError {
    fn from(e: ron::Error) -> Self {
        PresetSaveError::Serialize(e)
    }
}

impl std::fmt::Display for PresetSaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresetSaveError::Io(e) => write!(f, "IO error: {}", e),
            PresetSaveError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for PresetSaveError {}
