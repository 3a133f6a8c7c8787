// Runtime configuration loaded from TOML

use crate::engine::input::{default_movement_bindings, Direction, MovementBindings};
use crate::game::characters::{CharAnimationSettings, SpriteMargins, SpriteSheetConfig};
use glam::Vec2;
use image::Rgba;
use log::info;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use winit::keyboard::KeyCode;

/// Env var naming a config file to load instead of the default
pub const CONFIG_ENV_VAR: &str = "MASCOT_CONFIG";

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "mascot.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid background colour '{0}', expected #rrggbb")]
    Colour(String),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
    /// Background colour as `#rrggbb`
    pub background: String,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 150,
            height: 500,
            background: "#249e8c".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    /// Asset root; the sheet lives under `<asset_root>/textures/`
    pub asset_root: PathBuf,
    pub file: String,
    pub frame_width: u32,
    pub frame_height: u32,
    pub columns: u32,
    pub draw_width: f32,
    pub draw_height: f32,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("assets"),
            file: "character_sprite.png".to_string(),
            frame_width: 32,
            frame_height: 32,
            columns: 4,
            draw_width: 96.0,
            draw_height: 96.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub start_x: f32,
    pub start_y: f32,
    /// Distance per frame
    pub speed: f32,
    /// Display frames per walk-cycle frame
    pub frames_per_column: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            start_x: 30.0,
            start_y: 30.0,
            speed: 10.0,
            frames_per_column: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarginConfig {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
    pub horizontal_inset: f32,
}

impl Default for MarginConfig {
    fn default() -> Self {
        let margins = SpriteMargins::default();
        Self {
            top: margins.top,
            right: margins.right,
            bottom: margins.bottom,
            left: margins.left,
            horizontal_inset: 40.0,
        }
    }
}

/// Movement keys, by physical key position (`KeyW`, `ArrowUp`, ...)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    pub up: Vec<KeyCode>,
    pub down: Vec<KeyCode>,
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
}

impl KeyConfig {
    pub fn keys(&self, direction: Direction) -> &[KeyCode] {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }
}

impl Default for KeyConfig {
    fn default() -> Self {
        let defaults = default_movement_bindings();
        let keys = |direction: Direction| -> Vec<KeyCode> {
            defaults
                .iter()
                .filter(|(_, d)| *d == direction)
                .map(|(key, _)| *key)
                .collect()
        };
        Self {
            up: keys(Direction::Up),
            down: keys(Direction::Down),
            left: keys(Direction::Left),
            right: keys(Direction::Right),
        }
    }
}

/// Top-level configuration. Missing sections and fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub surface: SurfaceConfig,
    pub sprite: SpriteConfig,
    pub motion: MotionConfig,
    pub margins: MarginConfig,
    pub keys: KeyConfig,
}

impl AnimationConfig {
    /// Parse and validate TOML text
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// `$MASCOT_CONFIG` if set, else `./mascot.toml` if present, else defaults
    pub fn load_default() -> Result<Self, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Self::load(path);
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            Self::load(local)
        } else {
            info!("No {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.surface.width == 0 || self.surface.height == 0 {
            return Err(ConfigError::Invalid("surface size must be positive".into()));
        }
        if self.sprite.frame_width == 0 || self.sprite.frame_height == 0 {
            return Err(ConfigError::Invalid("sprite frame size must be non-zero".into()));
        }
        if self.sprite.columns == 0 {
            return Err(ConfigError::Invalid("sprite columns must be non-zero".into()));
        }
        if self.sprite.draw_width <= 0.0 || self.sprite.draw_height <= 0.0 {
            return Err(ConfigError::Invalid("sprite draw size must be positive".into()));
        }
        if self.motion.speed <= 0.0 {
            return Err(ConfigError::Invalid("motion speed must be positive".into()));
        }
        if self.motion.frames_per_column == 0 {
            return Err(ConfigError::Invalid(
                "motion frames_per_column must be non-zero".into(),
            ));
        }
        self.background()?;

        let mut seen = HashSet::new();
        for direction in Direction::ALL {
            for key in self.keys.keys(direction) {
                if !seen.insert(*key) {
                    return Err(ConfigError::Invalid(format!(
                        "key {:?} is bound to more than one direction",
                        key
                    )));
                }
            }
        }
        Ok(())
    }

    /// Parsed background colour
    pub fn background(&self) -> Result<Rgba<u8>, ConfigError> {
        parse_hex_colour(&self.surface.background)
    }

    pub fn surface_size(&self) -> Vec2 {
        Vec2::new(self.surface.width as f32, self.surface.height as f32)
    }

    /// Key bindings from the `[keys]` section
    pub fn movement_bindings(&self) -> MovementBindings {
        MovementBindings::from_bindings(
            Direction::ALL
                .into_iter()
                .flat_map(|direction| {
                    self.keys
                        .keys(direction)
                        .iter()
                        .map(move |key| (*key, direction))
                })
                .collect(),
        )
    }

    /// Settings for building the mascot
    pub fn animation_settings(&self) -> Result<CharAnimationSettings, ConfigError> {
        Ok(CharAnimationSettings {
            surface_size: self.surface_size(),
            background: self.background()?,
            sheet: SpriteSheetConfig::new(
                self.sprite.frame_width,
                self.sprite.frame_height,
                self.sprite.columns,
                Vec2::new(self.sprite.draw_width, self.sprite.draw_height),
            ),
            start_position: Vec2::new(self.motion.start_x, self.motion.start_y),
            speed: self.motion.speed,
            frames_per_column: self.motion.frames_per_column,
            margins: SpriteMargins {
                top: self.margins.top,
                right: self.margins.right,
                bottom: self.margins.bottom,
                left: self.margins.left,
            },
            horizontal_inset: self.margins.horizontal_inset,
        })
    }
}

fn parse_hex_colour(text: &str) -> Result<Rgba<u8>, ConfigError> {
    let invalid = || ConfigError::Colour(text.to_string());
    let hex = text.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, 255]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_mascot() {
        let config = AnimationConfig::default();
        assert!(config.validate().is_ok());

        let settings = config.animation_settings().unwrap();
        let expected = CharAnimationSettings::default();
        assert_eq!(settings.surface_size, expected.surface_size);
        assert_eq!(settings.background, expected.background);
        assert_eq!(settings.sheet, expected.sheet);
        assert_eq!(settings.start_position, expected.start_position);
        assert_eq!(settings.speed, expected.speed);
        assert_eq!(settings.frames_per_column, expected.frames_per_column);
        assert_eq!(settings.margins, expected.margins);
        assert_eq!(settings.horizontal_inset, expected.horizontal_inset);
    }

    #[test]
    fn test_default_keys_match_default_bindings() {
        let bindings = AnimationConfig::default().movement_bindings();
        for (key, direction) in default_movement_bindings() {
            assert_eq!(bindings.direction_for(key), Some(direction));
        }
    }

    #[test]
    fn test_rebind_keys_replaces_defaults() {
        let config = AnimationConfig::from_toml(
            "[keys]\nup = [\"KeyZ\", \"ArrowUp\"]\nleft = [\"KeyQ\", \"ArrowLeft\"]\n",
        )
        .unwrap();
        let bindings = config.movement_bindings();

        assert_eq!(bindings.direction_for(KeyCode::KeyZ), Some(Direction::Up));
        assert_eq!(bindings.direction_for(KeyCode::KeyQ), Some(Direction::Left));
        assert_eq!(bindings.direction_for(KeyCode::KeyW), None);
        assert_eq!(bindings.direction_for(KeyCode::KeyD), Some(Direction::Right));
    }

    #[test]
    fn test_rejects_key_bound_twice() {
        let result = AnimationConfig::from_toml("[keys]\ndown = [\"KeyW\"]\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(AnimationConfig::from_toml("").unwrap(), AnimationConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = AnimationConfig::from_toml(
            r##"
            [motion]
            speed = 5.0

            [surface]
            background = "#000000"
            "##,
        )
        .unwrap();

        assert_eq!(config.motion.speed, 5.0);
        assert_eq!(config.motion.frames_per_column, 3);
        assert_eq!(config.surface.width, 150);
        assert_eq!(config.background().unwrap(), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_parse_hex_colour() {
        assert_eq!(
            parse_hex_colour("#249e8c").unwrap(),
            Rgba([0x24, 0x9e, 0x8c, 0xff])
        );
        assert!(parse_hex_colour("249e8c").is_err());
        assert!(parse_hex_colour("#249e8").is_err());
        assert!(parse_hex_colour("#zz9e8c").is_err());
    }

    #[test]
    fn test_rejects_zero_columns() {
        let result = AnimationConfig::from_toml("[sprite]\ncolumns = 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_bad_colour() {
        let result = AnimationConfig::from_toml("[surface]\nbackground = \"teal\"\n");
        assert!(matches!(result, Err(ConfigError::Colour(_))));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let result = AnimationConfig::from_toml("[motion\nspeed = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = AnimationConfig::load("definitely/not/here.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("mascot_config_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("mascot.toml");
        std::fs::write(&path, "[motion]\nstart_x = 60.0\n").unwrap();

        let config = AnimationConfig::load(&path).unwrap();
        assert_eq!(config.motion.start_x, 60.0);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
