//! SVG export system
//!
//! Renders artworks through a [`Gallery`] into [`SvgSurface`]s and writes them
//! to disk:
//! - `<dir>/<piece>-<seed>.svg` for the initial render pass
//! - `<dir>/<piece>-<seed>-frame-NNNN.svg` per frame for animated pieces

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use isoart_core::{Artwork, GalleryPreset, PresetLoadError};
use isoart_render::{Gallery, GalleryError, RenderContext, SurfaceError, SvgSurface};

use super::frame_loop::FrameQueue;

/// Writes rendered artworks to a directory
pub struct ExportSystem {
    ctx: RenderContext,
    queue: FrameQueue,
    directory: PathBuf,
    frames: u32,
}

impl ExportSystem {
    /// Create an export system writing into `directory`
    ///
    /// Animated pieces get `frames` extra files each.
    pub fn new(ctx: RenderContext, directory: impl Into<PathBuf>, frames: u32) -> Self {
        Self {
            ctx,
            queue: FrameQueue::new(),
            directory: directory.into(),
            frames,
        }
    }

    /// Output directory
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Render one artwork and write its files; returns the written paths
    ///
    /// Each artwork gets its own gallery, torn down once its files are
    /// written.
    pub fn export(&mut self, artwork: &Artwork) -> Result<Vec<PathBuf>, ExportError> {
        fs::create_dir_all(&self.directory)?;

        let mut gallery = Gallery::new(self.ctx);
        gallery.select_by_name(&artwork.piece, &mut self.queue)?;
        gallery.set_seed(&artwork.seed);
        gallery.set_parameters(artwork.parameters.a, artwork.parameters.b);

        let mut surface = SvgSurface::new(self.ctx.width(), self.ctx.height())?;
        gallery.render(&mut surface, &mut self.queue);

        let stem = file_stem(artwork);
        let mut written = Vec::new();
        let path = self.directory.join(format!("{}.svg", stem));
        surface.write_to(&path)?;
        log::info!("Wrote {}", path.display());
        written.push(path);

        if gallery.selected().is_animated() {
            let mut frame_result = Ok(());
            let directory = self.directory.clone();
            self.queue.run(&mut gallery, &mut surface, self.frames, |n, surface| {
                if frame_result.is_err() {
                    return;
                }
                let path = directory.join(format!("{}-frame-{:04}.svg", stem, n));
                match surface.write_to(&path) {
                    Ok(()) => written.push(path),
                    Err(e) => frame_result = Err(e),
                }
            });
            frame_result?;
            log::info!("Wrote {} frames of '{}'", written.len() - 1, artwork.piece);
        }

        gallery.teardown(&mut self.queue);
        Ok(written)
    }

    /// Export every artwork of a preset, stopping at the first failure
    pub fn export_preset(&mut self, preset: &GalleryPreset) -> Result<Vec<PathBuf>, ExportError> {
        log::info!(
            "Exporting preset '{}' ({} artworks)",
            preset.name,
            preset.artworks.len()
        );
        let mut written = Vec::new();
        for artwork in &preset.artworks {
            written.extend(self.export(artwork)?);
        }
        Ok(written)
    }

    /// Load a preset file and export it
    pub fn export_preset_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Vec<PathBuf>, ExportError> {
        let preset = GalleryPreset::load(path)?;
        self.export_preset(&preset)
    }
}

/// File name stem for an artwork
///
/// Characters outside `[A-Za-z0-9_-]` in the seed are replaced so any seed
/// yields a valid file name.
pub fn file_stem(artwork: &Artwork) -> String {
    let seed: String = artwork
        .seed
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("{}-{}", artwork.piece, seed)
}

/// Error exporting an artwork
#[derive(Debug)]
pub enum ExportError {
    /// Surface creation or write failed
    Surface(SurfaceError),
    /// Output directory could not be created
    Io(io::Error),
    /// Preset could not be loaded
    Preset(PresetLoadError),
    /// Artwork names an unknown piece
    Gallery(GalleryError),
}

impl From<SurfaceError> for ExportError {
    fn from(e: SurfaceError) -> Self {
        ExportError::Surface(e)
    }
}

impl From<io::Error> for ExportError {
    fn from(e: io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl From<PresetLoadError> for ExportError {
    fn from(e: PresetLoadError) -> Self {
        ExportError::Preset(e)
    }
}

impl From<GalleryError> for ExportError {
    fn from(e: GalleryError) -> Self {
        ExportError::Gallery(e)
    }
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Surface(e) => write!(f, "Surface error: {}", e),
            ExportError::Io(e) => write!(f, "IO error: {}", e),
            ExportError::Preset(e) => write!(f, "Preset error: {}", e),
            ExportError::Gallery(e) => write!(f, "Gallery error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("isoart_export_{}_{}", name, std::process::id()))
    }

    #[test]
    fn test_file_stem_sanitizes_seed() {
        let artwork = Artwork::new("iso-cube").with_seed("a b/c");
        assert_eq!(file_stem(&artwork), "iso-cube-a_b_c");
        assert_eq!(file_stem(&Artwork::new("diamond")), "diamond-");
    }

    #[test]
    fn test_export_static_piece() {
        let dir = temp_dir("static");
        let mut export = ExportSystem::new(RenderContext::default(), &dir, 3);
        let written = export
            .export(&Artwork::new("iso-cube-color").with_seed("tile"))
            .unwrap();

        assert_eq!(written, vec![dir.join("iso-cube-color-tile.svg")]);
        let svg = fs::read_to_string(&written[0]).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("<path"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_export_animated_piece_writes_frames() {
        let dir = temp_dir("animated");
        let mut export = ExportSystem::new(RenderContext::default(), &dir, 3);
        let written = export.export(&Artwork::new("iso-cube-rotate").with_seed("spin")).unwrap();

        assert_eq!(written.len(), 4);
        assert_eq!(written[3], dir.join("iso-cube-rotate-spin-frame-0002.svg"));
        assert!(written.iter().all(|p| p.exists()));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_animated_piece_exports_twice() {
        let dir = temp_dir("twice");
        let mut export = ExportSystem::new(RenderContext::default(), &dir, 2);
        let artwork = Artwork::new("iso-cube-rotate").with_seed("spin");
        let first = export.export(&artwork).unwrap();
        let last_frame = fs::read_to_string(&first[2]).unwrap();
        let second = export.export(&artwork).unwrap();

        // Teardown after the first export does not stop the second
        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
        assert_eq!(fs::read_to_string(&second[2]).unwrap(), last_frame);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unknown_piece_fails() {
        let dir = temp_dir("unknown");
        let mut export = ExportSystem::new(RenderContext::default(), &dir, 0);
        let err = export.export(&Artwork::new("mondrian")).unwrap_err();
        assert!(matches!(err, ExportError::Gallery(GalleryError::UnknownPiece(_))));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_export_preset() {
        let dir = temp_dir("preset");
        let preset = GalleryPreset::new("pair")
            .with_artwork(Artwork::new("diamond").with_parameters(2.0, 5.0))
            .with_artwork(Artwork::new("linien").with_seed("x"));
        let mut export = ExportSystem::new(RenderContext::default(), &dir, 0);
        let written = export.export_preset(&preset).unwrap();
        assert_eq!(written, vec![dir.join("diamond-.svg"), dir.join("linien-x.svg")]);
        let _ = fs::remove_dir_all(&dir);
    }
}
