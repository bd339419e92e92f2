//! Integration tests for exporting the bundled gallery preset

use isoart::systems::{file_stem, ExportSystem};
use isoart_core::GalleryPreset;
use isoart_render::RenderContext;

#[test]
fn test_bundled_preset_parses() {
    let preset = GalleryPreset::load("presets/studies.ron").unwrap();
    assert_eq!(preset.name, "studies");
    assert!(!preset.artworks.is_empty());
}

#[test]
fn test_bundled_preset_exports_every_artwork() {
    let dir = std::env::temp_dir().join(format!("isoart_preset_export_{}", std::process::id()));
    let preset = GalleryPreset::load("presets/studies.ron").unwrap();

    let mut export = ExportSystem::new(RenderContext::default(), &dir, 0);
    let written = export.export_preset_file("presets/studies.ron").unwrap();

    assert_eq!(written.len(), preset.artworks.len());
    for (path, artwork) in written.iter().zip(&preset.artworks) {
        assert_eq!(path, &dir.join(format!("{}.svg", file_stem(artwork))));
        let svg = std::fs::read_to_string(path).unwrap();
        assert!(svg.contains("<path"), "{} is empty", path.display());
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_exports_are_reproducible() {
    let first = std::env::temp_dir().join(format!("isoart_repro_a_{}", std::process::id()));
    let second = std::env::temp_dir().join(format!("isoart_repro_b_{}", std::process::id()));
    let preset = GalleryPreset::load("presets/studies.ron").unwrap();

    let a = ExportSystem::new(RenderContext::default(), &first, 0)
        .export_preset(&preset)
        .unwrap();
    let b = ExportSystem::new(RenderContext::default(), &second, 0)
        .export_preset(&preset)
        .unwrap();

    for (pa, pb) in a.iter().zip(&b) {
        assert_eq!(
            std::fs::read_to_string(pa).unwrap(),
            std::fs::read_to_string(pb).unwrap()
        );
    }

    let _ = std::fs::remove_dir_all(&first);
    let _ = std::fs::remove_dir_all(&second);
}
