use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::{LadderConfig, LadderOrientation};
use super::vehicle::LadderVehicle;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("route {0} has no timepoints")]
    NoTimepoints(String),
    #[error("vehicle id {0} appears more than once")]
    DuplicateVehicle(String),
}

/// Everything one ladder render pass needs: the displayed route, its
/// timepoints, the live vehicles and ghosts, and display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadderSnapshot {
    pub route_id: String,
    /// Timepoint ids ordered top-to-bottom for `ZeroToOneUp`.
    pub timepoints: Vec<String>,
    #[serde(default)]
    pub vehicles: Vec<LadderVehicle>,
    #[serde(default)]
    pub config: LadderConfig,
}

impl LadderSnapshot {
    /// Decode and validate a snapshot from JSON bytes.
    pub fn from_json(data: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_slice(data)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.timepoints.is_empty() {
            return Err(SnapshotError::NoTimepoints(self.route_id.clone()));
        }
        let mut seen = HashSet::with_capacity(self.vehicles.len());
        for vehicle in &self.vehicles {
            if !seen.insert(vehicle.id.as_str()) {
                return Err(SnapshotError::DuplicateVehicle(vehicle.id.clone()));
            }
        }
        Ok(())
    }

    /// Timepoints top-to-bottom in the configured orientation.
    pub fn ordered_timepoints(&self) -> Vec<String> {
        match self.config.orientation {
            LadderOrientation::ZeroToOneUp => self.timepoints.clone(),
            LadderOrientation::OneToZeroUp => self.timepoints.iter().rev().cloned().collect(),
        }
    }
}
