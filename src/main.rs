//! isoart - generative art gallery
//!
//! Renders the configured artwork (or every artwork of a preset) to SVG.

use isoart::config::AppConfig;
use isoart::systems::ExportSystem;
use isoart_core::{Artwork, Parameters};

fn main() {
    let loaded = AppConfig::load();
    let level = match &loaded {
        Ok(config) => config.debug.log_level.clone(),
        Err(_) => AppConfig::default().debug.log_level,
    };

    // RUST_LOG takes precedence over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    log::info!("Starting isoart");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let ctx = match config.canvas.to_render_context() {
        Ok(ctx) => ctx,
        Err(e) => {
            log::error!("Cannot create drawing surface: {}", e);
            std::process::exit(1);
        }
    };

    let mut export = ExportSystem::new(ctx, &config.output.directory, config.animation.frames);
    let result = match &config.output.preset {
        Some(preset) => export.export_preset_file(preset),
        None => {
            let artwork = Artwork {
                piece: config.art.piece.clone(),
                seed: config.art.seed.clone(),
                parameters: Parameters::new(config.art.parameter_a, config.art.parameter_b),
            };
            export.export(&artwork)
        }
    };

    match result {
        Ok(written) => log::info!(
            "Exported {} files to {}",
            written.len(),
            export.directory().display()
        ),
        Err(e) => {
            log::error!("Export failed: {}", e);
            std::process::exit(1);
        }
    }
}
