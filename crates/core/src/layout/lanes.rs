use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::direction::VehicleDirection;
use crate::model::DrawnStatus;

/// One icon positioned vertically on the ladder, before lane assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedEntity {
    pub id: String,
    pub label: String,
    pub status: DrawnStatus,
    pub travel_direction: VehicleDirection,
    pub y: f64,
    /// Where the entity should be, when it differs from where it is.
    pub scheduled_y: Option<f64>,
    pub scheduled_travel_direction: Option<VehicleDirection>,
}

impl PositionedEntity {
    pub fn new(id: impl Into<String>, travel_direction: VehicleDirection, y: f64) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            status: DrawnStatus::OnTime,
            travel_direction,
            y,
            scheduled_y: None,
            scheduled_travel_direction: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanedEntity {
    #[serde(flatten)]
    pub entity: PositionedEntity,
    pub lane: usize,
}

/// Placement order: all Down before all Up, and within each direction the
/// entity furthest along its direction of travel first (Down by descending
/// `y`, Up by ascending `y`).
pub fn by_direction_and_y(a: &PositionedEntity, b: &PositionedEntity) -> Ordering {
    match (a.travel_direction, b.travel_direction) {
        (VehicleDirection::Down, VehicleDirection::Up) => Ordering::Less,
        (VehicleDirection::Up, VehicleDirection::Down) => Ordering::Greater,
        (VehicleDirection::Down, VehicleDirection::Down) => b.y.total_cmp(&a.y),
        (VehicleDirection::Up, VehicleDirection::Up) => a.y.total_cmp(&b.y),
    }
}

fn overlaps(a: &PositionedEntity, b: &PositionedEntity, threshold: f64) -> bool {
    a.travel_direction == b.travel_direction && (a.y - b.y).abs() < threshold
}

/// Smallest lane not in `occupied`.
pub fn first_open_lane(occupied: &BTreeSet<usize>) -> usize {
    let mut lane = 0;
    for &used in occupied {
        if used != lane {
            break;
        }
        lane += 1;
    }
    lane
}

/// Greedy lane assignment.
///
/// Entities are placed one at a time in `by_direction_and_y` order. Each
/// takes the lowest lane not used by an already placed entity it overlaps.
/// The result is not a globally minimal packing, only collision free.
///
/// The returned list is most recently placed first.
pub fn put_into_lanes(entities: &[PositionedEntity], overlap_threshold: f64) -> Vec<LanedEntity> {
    let mut sorted: Vec<&PositionedEntity> = entities.iter().collect();
    sorted.sort_by(|a, b| by_direction_and_y(a, b));

    let mut placed: Vec<LanedEntity> = Vec::with_capacity(sorted.len());
    for entity in sorted {
        let occupied: BTreeSet<usize> = placed
            .iter()
            .filter(|other| overlaps(&other.entity, entity, overlap_threshold))
            .map(|other| other.lane)
            .collect();
        placed.push(LanedEntity {
            entity: entity.clone(),
            lane: first_open_lane(&occupied),
        });
    }
    placed.reverse();
    placed
}
