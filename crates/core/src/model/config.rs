use serde::{Deserialize, Serialize};

use super::vehicle::DirectionId;

/// Which schedule direction travels up the ladder.
///
/// Flipping the orientation is a dispatcher-facing toggle: it reverses the
/// timepoint order and swaps which direction is drawn on which side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LadderOrientation {
    #[default]
    ZeroToOneUp,
    OneToZeroUp,
}

impl LadderOrientation {
    pub fn flip(self) -> Self {
        match self {
            Self::ZeroToOneUp => Self::OneToZeroUp,
            Self::OneToZeroUp => Self::ZeroToOneUp,
        }
    }

    /// The schedule direction that travels downward in this orientation.
    pub fn down_direction(self) -> DirectionId {
        match self {
            Self::ZeroToOneUp => DirectionId::One,
            Self::OneToZeroUp => DirectionId::Zero,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleLabelSetting {
    #[default]
    RunNumber,
    VehicleNumber,
}

/// Geometry and display settings for one ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LadderConfig {
    pub orientation: LadderOrientation,
    /// Vertical distance between consecutive timepoints.
    pub timepoint_spacing: f64,
    /// Icon height. Two icons closer than this in the same direction overlap.
    pub icon_height: f64,
    pub icon_width: f64,
    /// Distance from the centerline to lane 0.
    pub lane_base_offset: f64,
    /// Distance from the centerline to each road line.
    pub road_offset: f64,
    pub margin: f64,
    pub label_setting: VehicleLabelSetting,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            orientation: LadderOrientation::ZeroToOneUp,
            timepoint_spacing: 60.0,
            icon_height: 34.0,
            icon_width: 24.0,
            lane_base_offset: 63.0,
            road_offset: 40.0,
            margin: 20.0,
            label_setting: VehicleLabelSetting::RunNumber,
        }
    }
}
