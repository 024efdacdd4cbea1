//! Host settings
//!
//! Viewport, camera feel, HUD and run seed. Physics and generation constants
//! live in [`crate::consts`]. Stored as JSON.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use glam::Vec2;

use crate::consts::{CAMERA_LAG, FRAMES_PER_SECOND, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::renderer::FrameOptions;
use crate::sim::{Camera, GameState};

/// Why settings could not be loaded
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "failed to read settings: {e}"),
            SettingsError::Parse(e) => write!(f, "invalid settings JSON: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Viewport ===
    /// Visible width in world units (canvas width)
    pub viewport_width: f32,
    /// Visible height in world units (canvas height)
    pub viewport_height: f32,

    // === Camera ===
    /// Fraction of the distance to the target covered per frame
    pub camera_lag: f32,

    // === HUD ===
    /// Draw health, score and timer
    pub show_hud: bool,
    /// Frames per second used to turn ticks into HUD seconds
    pub fps: u32,

    // === Run ===
    /// Fixed run seed; `None` picks one at startup
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            camera_lag: CAMERA_LAG,
            show_hud: true,
            fps: FRAMES_PER_SECOND,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Read settings, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Clamp out-of-range values into something playable
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.viewport_width > 0.0) {
            self.viewport_width = defaults.viewport_width;
        }
        if !(self.viewport_height > 0.0) {
            self.viewport_height = defaults.viewport_height;
        }
        self.camera_lag = if self.camera_lag.is_finite() {
            self.camera_lag.clamp(0.0, 1.0)
        } else {
            defaults.camera_lag
        };
        self.fps = self.fps.max(1);
        self
    }

    pub fn camera(&self) -> Camera {
        Camera::new(self.viewport_width, self.camera_lag)
    }

    /// Drawing options for the render adapter
    pub fn frame_options(&self) -> FrameOptions {
        FrameOptions {
            viewport: Vec2::new(self.viewport_width, self.viewport_height),
            show_hud: self.show_hud,
            fps: self.fps,
        }
    }

    /// Start a session with these settings
    pub fn new_game(&self, seed: u64) -> GameState {
        GameState::with_camera(seed, self.camera())
    }
}
