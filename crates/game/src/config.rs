//! Game configuration. Loaded from config.ron at startup.

use engine_core::Viewport;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Persistent game settings. Loaded from `config.ron` in the current
/// directory; every field has a default so a partial file is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Canvas width in pixels.
    #[serde(default = "default_canvas_width")]
    pub canvas_width: f32,
    /// Canvas height in pixels.
    #[serde(default = "default_canvas_height")]
    pub canvas_height: f32,
    /// Camera capture width in pixels (the space hand landmarks arrive in).
    #[serde(default = "default_camera_width")]
    pub camera_width: f32,
    /// Camera capture height in pixels.
    #[serde(default = "default_camera_height")]
    pub camera_height: f32,
    /// Number of background stars.
    #[serde(default = "default_star_count")]
    pub star_count: usize,
    /// Asteroid count on level 1.
    #[serde(default = "default_base_asteroids")]
    pub base_asteroids: usize,
    /// Asteroids added per level-up.
    #[serde(default = "default_asteroids_per_level")]
    pub asteroids_per_level: usize,
    /// Reaching the top on this level wins the game.
    #[serde(default = "default_final_level")]
    pub final_level: u32,
    /// Spacecraft forward speed in pixels per frame once moving.
    #[serde(default = "default_max_speed")]
    pub max_speed: f32,
    /// Fixed RNG seed for reproducible fields; omit for a random run.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_canvas_width() -> f32 {
    1280.0
}
fn default_canvas_height() -> f32 {
    800.0
}
fn default_camera_width() -> f32 {
    640.0
}
fn default_camera_height() -> f32 {
    480.0
}
fn default_star_count() -> usize {
    800
}
fn default_base_asteroids() -> usize {
    6
}
fn default_asteroids_per_level() -> usize {
    2
}
fn default_final_level() -> u32 {
    3
}
fn default_max_speed() -> f32 {
    10.0
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            camera_width: default_camera_width(),
            camera_height: default_camera_height(),
            star_count: default_star_count(),
            base_asteroids: default_base_asteroids(),
            asteroids_per_level: default_asteroids_per_level(),
            final_level: default_final_level(),
            max_speed: default_max_speed(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load config from `config.ron`. If the file is missing or invalid,
    /// returns defaults (invalid files are logged, never fatal).
    pub fn load() -> Self {
        let path = config_path();
        if let Ok(data) = std::fs::read_to_string(&path) {
            match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    /// Save current config to `config.ron`. Logs on error.
    pub fn save(&self) {
        let path = config_path();
        if let Ok(s) = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            if let Err(e) = std::fs::write(&path, s) {
                log::warn!("Could not write config to {:?}: {}", path, e);
            }
        }
    }

    /// Whether a config file already exists on disk.
    pub fn exists() -> bool {
        Path::new(&config_path()).exists()
    }

    /// Canvas bounds as a viewport.
    pub fn canvas(&self) -> Viewport {
        Viewport::new(self.canvas_width, self.canvas_height)
    }

    /// Camera capture bounds as a viewport.
    pub fn camera(&self) -> Viewport {
        Viewport::new(self.camera_width, self.camera_height)
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("config.ron")
}
