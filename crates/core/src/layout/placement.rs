use serde::{Deserialize, Serialize};

use super::direction::VehicleDirection;
use super::lanes::{LanedEntity, PositionedEntity};

/// Occupied lane count from which lane spacing stops shrinking.
const MAX_COMPRESSION_LANES: usize = 5;
const LANE_WIDTH_EIGHTHS: f64 = 8.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedEntity {
    #[serde(flatten)]
    pub entity: PositionedEntity,
    pub lane: usize,
    pub x: f64,
}

/// Horizontal spacing shared by every lane of one ladder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneGeometry {
    /// One past the highest lane in use (at least 1).
    pub max_occupied_lane: usize,
    pub lane_offset_unit: f64,
    /// Horizontal extent of all lanes on one side of the centerline.
    pub width_of_lanes: f64,
}

impl LaneGeometry {
    pub fn new(max_occupied_lane: usize, icon_width: f64) -> Self {
        let max_occupied_lane = max_occupied_lane.max(1);
        let compressed = max_occupied_lane.min(MAX_COMPRESSION_LANES) as f64;
        let lane_offset_unit = (LANE_WIDTH_EIGHTHS - compressed) / LANE_WIDTH_EIGHTHS * icon_width;
        Self {
            max_occupied_lane,
            lane_offset_unit,
            width_of_lanes: icon_width + (max_occupied_lane - 1) as f64 * lane_offset_unit,
        }
    }

    pub fn for_lanes(laned: &[LanedEntity], icon_width: f64) -> Self {
        let max_lane = laned.iter().map(|l| l.lane).max().unwrap_or(0);
        Self::new(max_lane + 1, icon_width)
    }

    /// Lanes fan outward from the centerline on each direction's own side.
    pub fn x(&self, direction: VehicleDirection, lane: usize, base_offset: f64) -> f64 {
        let sign = direction.sign();
        sign * base_offset + sign * lane as f64 * self.lane_offset_unit
    }
}

pub fn place_entities(
    laned: Vec<LanedEntity>,
    icon_width: f64,
    base_offset: f64,
) -> (Vec<PlacedEntity>, LaneGeometry) {
    let geometry = LaneGeometry::for_lanes(&laned, icon_width);
    let placed = laned
        .into_iter()
        .map(|LanedEntity { entity, lane }| PlacedEntity {
            x: geometry.x(entity.travel_direction, lane, base_offset),
            entity,
            lane,
        })
        .collect();
    (placed, geometry)
}
