//! Player preferences
//!
//! Persisted separately from the high score, in its own storage slot.

use serde::{Deserialize, Serialize};

use crate::consts::VEHICLE_COUNT;
use crate::persistence::{self, Slot};

/// Lane marker spacing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LaneStyle {
    /// Markers packed one marker-height apart (solid-looking line)
    #[default]
    Single,
    /// Markers spaced two marker-heights apart (dashed line)
    WideGap,
}

impl LaneStyle {
    /// Distance between consecutive markers, in marker heights
    pub fn step_factor(&self) -> f32 {
        match self {
            LaneStyle::Single => 1.0,
            LaneStyle::WideGap => 2.0,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Selected vehicle (0-based, wraps at [`VEHICLE_COUNT`])
    pub vehicle: u8,
    /// Lane marker spacing
    pub lane_style: LaneStyle,
    /// Scroll spectator markers along the grass
    pub crowd: bool,
    /// Start races in autopilot (demo) mode
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vehicle: 0,
            lane_style: LaneStyle::Single,
            crowd: true,
            autopilot: false,
        }
    }
}

impl Settings {
    /// Slot name used by file and LocalStorage backends
    pub const STORAGE_KEY: &'static str = "road_blaster_settings";

    /// Vehicle index guaranteed to be in range
    pub fn vehicle_index(&self) -> u8 {
        self.vehicle % VEHICLE_COUNT
    }

    /// Load settings from a slot, falling back to defaults
    pub fn load(slot: &impl Slot) -> Self {
        match persistence::load_json::<Settings>(slot) {
            Ok(Some(settings)) => {
                log::info!("Loaded settings");
                settings
            }
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Settings unreadable ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Save settings to a slot (best effort)
    pub fn save(&self, slot: &mut impl Slot) {
        match persistence::save_json(slot, self) {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Failed to save settings: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemorySlot;

    #[test]
    fn test_lane_style_step() {
        assert_eq!(LaneStyle::default(), LaneStyle::Single);
        assert_eq!(LaneStyle::Single.step_factor(), 1.0);
        assert_eq!(LaneStyle::WideGap.step_factor(), 2.0);
    }

    #[test]
    fn test_settings_roundtrip_through_slot() {
        let mut slot = MemorySlot::default();
        let settings = Settings {
            vehicle: 3,
            lane_style: LaneStyle::WideGap,
            crowd: false,
            autopilot: true,
        };
        settings.save(&mut slot);
        assert_eq!(Settings::load(&slot), settings);
    }

    #[test]
    fn test_corrupt_settings_use_defaults() {
        let slot = MemorySlot::with_contents("{ vehicle: ");
        assert_eq!(Settings::load(&slot), Settings::default());
    }

    #[test]
    fn test_vehicle_index_wraps() {
        let settings = Settings {
            vehicle: VEHICLE_COUNT + 1,
            ..Default::default()
        };
        assert_eq!(settings.vehicle_index(), 1);
    }
}
