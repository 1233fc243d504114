//! Game settings and preferences
//!
//! Serialized as JSON; the embedding shell decides where the JSON lives
//! (LocalStorage in a browser build). The core holds no storage backend.

use serde::{Deserialize, Serialize};

/// Player preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Background track volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute when the window loses focus
    pub mute_on_blur: bool,
    /// Show the FPS counter in the HUD
    pub show_fps: bool,
    /// Minimize popup motion and field scrolling
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music_volume: 0.5,
            sfx_volume: 1.0,
            mute_on_blur: true,
            show_fps: false,
            reduced_motion: false,
        }
    }
}

impl Settings {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Music volume with the mute state applied
    pub fn effective_music_volume(&self, focused: bool) -> f32 {
        if self.mute_on_blur && !focused {
            0.0
        } else {
            self.music_volume.clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.music_volume = 0.25;
        settings.show_fps = true;

        let json = settings.to_json().unwrap();
        let restored = Settings::from_json(&json).unwrap();
        assert_eq!(restored, settings);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let settings = Settings::from_json(r#"{"music_volume":0.9}"#).unwrap();
        assert_eq!(settings.music_volume, 0.9);
        assert_eq!(settings.sfx_volume, 1.0);
        assert!(settings.mute_on_blur);
    }

    #[test]
    fn test_effective_volume_respects_blur() {
        let settings = Settings::default();
        assert_eq!(settings.effective_music_volume(true), 0.5);
        assert_eq!(settings.effective_music_volume(false), 0.0);
    }
}
