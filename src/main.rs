use std::{error::Error, path::PathBuf};

use paint_engine::{config::PaintConfig, invalidation::DirtyRegion, logging, stroke::Stroke};
use raster::{
    point,
    vector::{degrees_to_radians, polar_to_cartesian, to_int},
    Arena,
};

const DEFAULT_CONFIG_PATH: &str = "paint.ini";

/// Config file named by `--config <path>`, and whether `--config` was given
/// without a path.
fn config_path(args: &[String]) -> (PathBuf, bool) {
    match args {
        [_, flag, path, ..] if flag == "--config" => (PathBuf::from(path), false),
        [_, flag] if flag == "--config" => (PathBuf::from(DEFAULT_CONFIG_PATH), true),
        _ => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
    }
}

/// Quarter arc around the canvas center, one sample every 10 degrees.
fn sample_stroke(config: &PaintConfig) -> Stroke {
    let center = point(config.screen.width / 2, config.screen.height / 2);
    let radius = (config.screen.width.min(config.screen.height) / 4) as f32;

    let mut stroke = Stroke::new(config.brush_radius);
    for degrees in (0..=90).step_by(10) {
        let offset = polar_to_cartesian(degrees_to_radians(degrees), radius);
        stroke.push(center + to_int(offset));
    }
    stroke
}

fn main() -> Result<(), Box<dyn Error>> {
    /* Initialize */
    let args: Vec<String> = std::env::args().collect();
    let (path, missing_path) = config_path(&args);
    let mut config = PaintConfig::from_file(&path)?;
    logging::init_logging(config.log_level)?;
    if missing_path {
        log::warn!("--config given without a path, using {}", path.display());
    }
    log::info!(
        "Canvas {}x{}, {}px blocks, arena of {} rects",
        config.screen.width,
        config.screen.height,
        config.block_size,
        config.arena_capacity
    );

    let mut arena = Arena::with_capacity(config.arena_capacity);
    let stroke = sample_stroke(&config);

    /* Invalidate */
    let mut dirty = DirtyRegion::new();
    for (a, b) in stroke.segments() {
        dirty.add_segment(a, b, stroke.radius());
    }
    log::info!(
        "Stroke of {} samples dirtied {:?}",
        stroke.points().len(),
        dirty.bounds()
    );

    /* Schedule */
    {
        let mut frame = arena.scope();
        let tiles = dirty.plan(&mut *frame, config.screen, config.block_size)?;
        log::info!("Scheduled {} raster blocks", tiles.len());
        for (i, tile) in tiles.iter().enumerate() {
            let hit = [tile.top_left(), tile.bot_right() - point(1, 1)]
                .into_iter()
                .any(|corner| stroke.is_hit(corner));
            log::debug!("Block {}: {:?}, corner touched by stroke: {}", i, tile, hit);
        }
    }
    log::debug!("Scratch arena released, {} rects in use", arena.used());

    config.write_to_disk()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn config_flag_selects_path() {
        let (path, missing_path) = config_path(&args(&["paint", "--config", "canvas.ini"]));
        assert_eq!(path, PathBuf::from("canvas.ini"));
        assert!(!missing_path);
    }

    #[test]
    fn no_arguments_use_default_path() {
        let (path, missing_path) = config_path(&args(&["paint"]));
        assert_eq!(path, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert!(!missing_path);
    }

    #[test]
    fn config_flag_without_path_falls_back_to_default() {
        let (path, missing_path) = config_path(&args(&["paint", "--config"]));
        assert_eq!(path, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert!(missing_path);
    }
}
