use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Schedule-relative direction of a trip. Only 0 and 1 exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DirectionId {
    Zero,
    One,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("direction id must be 0 or 1, got {0}")]
pub struct DirectionIdError(pub u8);

impl TryFrom<u8> for DirectionId {
    type Error = DirectionIdError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            other => Err(DirectionIdError(other)),
        }
    }
}

impl From<DirectionId> for u8 {
    fn from(id: DirectionId) -> Self {
        match id {
            DirectionId::Zero => 0,
            DirectionId::One => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    OnRoute,
    LayingOver,
    PullingOut,
}

/// Progress toward the next timepoint. `fraction_until_timepoint` counts
/// down from 1 to 0 as the timepoint is approached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimepointStatus {
    pub timepoint_id: String,
    pub fraction_until_timepoint: f64,
}

/// Where a vehicle should be according to its schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledLocation {
    pub route_id: String,
    pub direction_id: DirectionId,
    #[serde(default)]
    pub run_id: Option<String>,
    #[serde(default)]
    pub trip_id: Option<String>,
    pub timepoint_status: TimepointStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
    #[default]
    Vehicle,
    Ghost,
}

/// One live vehicle or ghost record as delivered by the data feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LadderVehicle {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub kind: VehicleKind,
    #[serde(default)]
    pub run_id: Option<String>,
    pub route_id: String,
    pub direction_id: DirectionId,
    pub route_status: RouteStatus,
    /// Seconds behind schedule. Negative means early.
    #[serde(default)]
    pub schedule_adherence_secs: f64,
    #[serde(default)]
    pub is_off_course: bool,
    /// Unix seconds at which a laying-over vehicle is due to depart.
    #[serde(default)]
    pub layover_departure_time: Option<i64>,
    #[serde(default)]
    pub timepoint_status: Option<TimepointStatus>,
    #[serde(default)]
    pub scheduled_location: Option<ScheduledLocation>,
}

impl LadderVehicle {
    pub fn is_ghost(&self) -> bool {
        self.kind == VehicleKind::Ghost
    }
}
