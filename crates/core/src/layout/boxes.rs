use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::direction::{VehicleDirection, direction_on_ladder};
use crate::model::{
    DrawnStatus, LadderOrientation, LadderVehicle, VehicleLabelSetting, drawn_status, ladder_label,
};

/// A vehicle listed in a layover or incoming box rather than on the ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxedVehicle {
    pub id: String,
    pub label: String,
    pub status: DrawnStatus,
    pub travel_direction: VehicleDirection,
}

impl BoxedVehicle {
    pub fn new(
        vehicle: &LadderVehicle,
        orientation: LadderOrientation,
        setting: VehicleLabelSetting,
    ) -> Self {
        Self {
            id: vehicle.id.clone(),
            label: ladder_label(vehicle, setting),
            status: drawn_status(vehicle),
            travel_direction: direction_on_ladder(vehicle.direction_id, orientation),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoverBox {
    Top,
    Bottom,
}

/// Unknown departure times sort after every known one.
fn by_departure(a: Option<i64>, b: Option<i64>, reverse: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if reverse => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Order a layover box by scheduled departure. The bottom box lists the
/// next departure first; the top box lists it last so it sits nearest
/// the ladder.
pub fn order_layover_box(vehicles: &[LadderVehicle], layover_box: LayoverBox) -> Vec<LadderVehicle> {
    let mut ordered = vehicles.to_vec();
    let reverse = layover_box == LayoverBox::Top;
    ordered.sort_by(|a, b| by_departure(a.layover_departure_time, b.layover_departure_time, reverse));
    ordered
}
