use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use configparser::ini::Ini;
use log::LevelFilter;
use raster::{dimension, Dimension};

const DEFAULT_SCREEN: Dimension = dimension(1280, 720);
const DEFAULT_BLOCK_SIZE: i32 = 32;
const DEFAULT_BRUSH_RADIUS: i32 = 8;
const DEFAULT_ARENA_CAPACITY: usize = 4096;

#[derive(Debug)]
pub enum ConfigError {
    LoadError(String),
    ParseError { key: String, message: String },
    WriteError(std::io::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LoadError(message) => write!(f, "could not load config: {}", message),
            ConfigError::ParseError { key, message } => {
                write!(f, "invalid value for {}: {}", key, message)
            }
            ConfigError::WriteError(e) => write!(f, "could not write config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings of the raster planner, backed by an ini file.
pub struct PaintConfig {
    pub screen: Dimension,
    /// Edge of a raster block, used both as tile size and minimum dirty rect size.
    pub block_size: i32,
    pub brush_radius: i32,
    /// Scratch arena size, in rects.
    pub arena_capacity: usize,
    pub log_level: LevelFilter,
    config: Ini,
    path: PathBuf,
}

impl PaintConfig {
    /// Reads `path`, falling back to defaults for a missing file or key.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Ini::new();
        if path.exists() {
            config.load(path).map_err(ConfigError::LoadError)?;
        }

        let screen = dimension(
            get_positive(&config, "Canvas", "Width", DEFAULT_SCREEN.width as i64)? as i32,
            get_positive(&config, "Canvas", "Height", DEFAULT_SCREEN.height as i64)? as i32,
        );
        let block_size = get_positive(&config, "Raster", "BlockSize", DEFAULT_BLOCK_SIZE as i64)?;
        let brush_radius = config
            .getint("Raster", "BrushRadius")
            .map_err(|message| parse_error("Raster", "BrushRadius", message))?
            .unwrap_or(DEFAULT_BRUSH_RADIUS as i64);
        if brush_radius < 0 {
            return Err(parse_error(
                "Raster",
                "BrushRadius",
                format!("{} is negative", brush_radius),
            ));
        }
        let arena_capacity = config
            .getuint("Arena", "Capacity")
            .map_err(|message| parse_error("Arena", "Capacity", message))?
            .unwrap_or(DEFAULT_ARENA_CAPACITY as u64);
        let log_level = match config.get("Log", "Level") {
            Some(level) => LevelFilter::from_str(&level)
                .map_err(|e| parse_error("Log", "Level", e.to_string()))?,
            None => LevelFilter::Info,
        };

        Ok(PaintConfig {
            screen,
            block_size: block_size as i32,
            brush_radius: i32::try_from(brush_radius)
                .map_err(|e| parse_error("Raster", "BrushRadius", e.to_string()))?,
            arena_capacity: arena_capacity as usize,
            log_level,
            config,
            path: PathBuf::from(path),
        })
    }

    pub fn write_to_disk(&mut self) -> Result<(), ConfigError> {
        self.config
            .set("Canvas", "Width", Some(self.screen.width.to_string()));
        self.config
            .set("Canvas", "Height", Some(self.screen.height.to_string()));
        self.config
            .set("Raster", "BlockSize", Some(self.block_size.to_string()));
        self.config
            .set("Raster", "BrushRadius", Some(self.brush_radius.to_string()));
        self.config
            .set("Arena", "Capacity", Some(self.arena_capacity.to_string()));
        self.config
            .set("Log", "Level", Some(self.log_level.to_string()));
        self.config
            .write(&self.path)
            .map_err(ConfigError::WriteError)
    }
}

fn get_positive(config: &Ini, section: &str, key: &str, default: i64) -> Result<i64, ConfigError> {
    let value = config
        .getint(section, key)
        .map_err(|message| parse_error(section, key, message))?
        .unwrap_or(default);
    if value <= 0 || value > i32::MAX as i64 {
        return Err(parse_error(
            section,
            key,
            format!("{} is not a positive 32 bit integer", value),
        ));
    }
    Ok(value)
}

fn parse_error(section: &str, key: &str, message: String) -> ConfigError {
    ConfigError::ParseError {
        key: format!("[{}] {}", section, key),
        message,
    }
}
