//! Persisted viewport preferences.
//!
//! Stored as TOML under the platform config directory. Missing file
//! means defaults; a corrupt file is reported and replaced by defaults
//! rather than aborting the editor.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::camera::Camera3DController;
use crate::gizmos::SnapSettings;

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("preferences io: {0}")]
    Io(#[from] std::io::Error),
    #[error("preferences parse: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("preferences encode: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// User-tunable viewport settings that survive restarts.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportPreferences {
    pub look_sensitivity: f64,
    pub pan_sensitivity: f64,
    pub move_speed: f64,
    pub smooth_time_rot: f64,
    pub smooth_time_pos: f64,
    pub invert_y: bool,
    pub snap: SnapSettings,
}

impl Default for ViewportPreferences {
    fn default() -> Self {
        let ctl = Camera3DController::new();
        Self {
            look_sensitivity: ctl.look_sensitivity,
            pan_sensitivity: ctl.pan_sensitivity,
            move_speed: ctl.state.move_speed,
            smooth_time_rot: ctl.state.smooth_time_rot,
            smooth_time_pos: ctl.state.smooth_time_pos,
            invert_y: ctl.invert_y,
            snap: SnapSettings::default(),
        }
    }
}

impl ViewportPreferences {
    /// Platform config location, e.g. `~/.config/vantage/viewport.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vantage").join("viewport.toml"))
    }

    pub fn load(path: &Path) -> Result<Self, PreferencesError> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Load from the default location, falling back to defaults when the
    /// file is absent or unreadable.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(prefs) => {
                log::info!("loaded viewport preferences from {}", path.display());
                prefs
            }
            Err(err) => {
                log::warn!("ignoring viewport preferences at {}: {err}", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), PreferencesError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        log::info!("saved viewport preferences to {}", path.display());
        Ok(())
    }

    /// Push stored tunables onto a live fly-camera controller.
    pub fn apply_to(&self, controller: &mut Camera3DController) {
        controller.look_sensitivity = self.look_sensitivity;
        controller.pan_sensitivity = self.pan_sensitivity;
        controller.invert_y = self.invert_y;
        controller.state.move_speed = self.move_speed;
        controller.state.smooth_time_rot = self.smooth_time_rot;
        controller.state.smooth_time_pos = self.smooth_time_pos;
    }

    /// Capture the current controller tunables for saving.
    pub fn capture(controller: &Camera3DController, snap: SnapSettings) -> Self {
        Self {
            look_sensitivity: controller.look_sensitivity,
            pan_sensitivity: controller.pan_sensitivity,
            move_speed: controller.state.move_speed,
            smooth_time_rot: controller.state.smooth_time_rot,
            smooth_time_pos: controller.state.smooth_time_pos,
            invert_y: controller.invert_y,
            snap,
        }
    }
}
