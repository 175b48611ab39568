use serde::{Deserialize, Serialize};
use skate_ladder_protocol::IconDirection;

use crate::model::{DirectionId, LadderOrientation, LadderVehicle, RouteStatus};

/// Direction of travel along the ladder's vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleDirection {
    Up,
    Down,
}

impl VehicleDirection {
    /// `+1` for Up, `-1` for Down.
    pub fn sign(self) -> f64 {
        match self {
            Self::Up => 1.0,
            Self::Down => -1.0,
        }
    }
}

impl From<VehicleDirection> for IconDirection {
    fn from(direction: VehicleDirection) -> Self {
        match direction {
            VehicleDirection::Up => IconDirection::Up,
            VehicleDirection::Down => IconDirection::Down,
        }
    }
}

/// Map a schedule direction onto the ladder. Down exactly when
/// `(direction_id == 1) == (orientation == ZeroToOneUp)`.
pub fn direction_on_ladder(
    direction_id: DirectionId,
    orientation: LadderOrientation,
) -> VehicleDirection {
    if (direction_id == DirectionId::One) == (orientation == LadderOrientation::ZeroToOneUp) {
        VehicleDirection::Down
    } else {
        VehicleDirection::Up
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LadderRegion {
    OnRoute,
    LayingOverTop,
    LayingOverBottom,
    Incoming,
}

pub fn ladder_region(
    vehicle: &LadderVehicle,
    route_id: &str,
    orientation: LadderOrientation,
) -> LadderRegion {
    if vehicle.route_id != route_id {
        return LadderRegion::Incoming;
    }
    match vehicle.route_status {
        RouteStatus::PullingOut => LadderRegion::Incoming,
        RouteStatus::OnRoute => LadderRegion::OnRoute,
        RouteStatus::LayingOver => match direction_on_ladder(vehicle.direction_id, orientation) {
            // About to head down, so waiting at the top.
            VehicleDirection::Down => LadderRegion::LayingOverTop,
            VehicleDirection::Up => LadderRegion::LayingOverBottom,
        },
    }
}

/// Vehicles of one snapshot split by ladder region, input order preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ByPosition {
    pub on_route: Vec<LadderVehicle>,
    pub laying_over_top: Vec<LadderVehicle>,
    pub laying_over_bottom: Vec<LadderVehicle>,
    pub incoming: Vec<LadderVehicle>,
}

pub fn group_by_position(
    vehicles: &[LadderVehicle],
    route_id: &str,
    orientation: LadderOrientation,
) -> ByPosition {
    let mut groups = ByPosition::default();
    for vehicle in vehicles {
        let bucket = match ladder_region(vehicle, route_id, orientation) {
            LadderRegion::OnRoute => &mut groups.on_route,
            LadderRegion::LayingOverTop => &mut groups.laying_over_top,
            LadderRegion::LayingOverBottom => &mut groups.laying_over_bottom,
            LadderRegion::Incoming => &mut groups.incoming,
        };
        bucket.push(vehicle.clone());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VehicleKind;

    fn vehicle(route_id: &str, direction_id: DirectionId, status: RouteStatus) -> LadderVehicle {
        LadderVehicle {
            id: format!("{route_id}-{direction_id:?}-{status:?}"),
            label: String::new(),
            kind: VehicleKind::Vehicle,
            run_id: None,
            route_id: route_id.into(),
            direction_id,
            route_status: status,
            schedule_adherence_secs: 0.0,
            is_off_course: false,
            layover_departure_time: None,
            timepoint_status: None,
            scheduled_location: None,
        }
    }

    #[test]
    fn direction_mapping_truth_table() {
        use DirectionId::{One, Zero};
        use LadderOrientation::{OneToZeroUp, ZeroToOneUp};
        use VehicleDirection::{Down, Up};

        let cases = [
            (Zero, ZeroToOneUp, Up),
            (One, ZeroToOneUp, Down),
            (Zero, OneToZeroUp, Down),
            (One, OneToZeroUp, Up),
        ];
        for (id, orientation, expected) in cases {
            assert_eq!(
                direction_on_ladder(id, orientation),
                expected,
                "{id:?} on {orientation:?}"
            );
        }
    }

    #[test]
    fn down_direction_agrees_with_mapping() {
        for orientation in [LadderOrientation::ZeroToOneUp, LadderOrientation::OneToZeroUp] {
            assert_eq!(
                direction_on_ladder(orientation.down_direction(), orientation),
                VehicleDirection::Down
            );
        }
    }

    #[test]
    fn layovers_split_by_direction() {
        let o = LadderOrientation::ZeroToOneUp;
        let top = vehicle("39", DirectionId::One, RouteStatus::LayingOver);
        let bottom = vehicle("39", DirectionId::Zero, RouteStatus::LayingOver);
        assert_eq!(ladder_region(&top, "39", o), LadderRegion::LayingOverTop);
        assert_eq!(ladder_region(&bottom, "39", o), LadderRegion::LayingOverBottom);
        assert_eq!(ladder_region(&top, "39", o.flip()), LadderRegion::LayingOverBottom);
    }

    #[test]
    fn other_routes_and_pull_outs_are_incoming() {
        let o = LadderOrientation::ZeroToOneUp;
        let interlining = vehicle("28", DirectionId::Zero, RouteStatus::OnRoute);
        let interlining_layover = vehicle("28", DirectionId::One, RouteStatus::LayingOver);
        let pulling_out = vehicle("39", DirectionId::One, RouteStatus::PullingOut);
        for v in [&interlining, &interlining_layover, &pulling_out] {
            assert_eq!(ladder_region(v, "39", o), LadderRegion::Incoming);
        }
    }

    #[test]
    fn grouping_preserves_input_order() {
        let vehicles = vec![
            vehicle("39", DirectionId::Zero, RouteStatus::OnRoute),
            vehicle("28", DirectionId::Zero, RouteStatus::OnRoute),
            vehicle("39", DirectionId::One, RouteStatus::OnRoute),
            vehicle("39", DirectionId::One, RouteStatus::LayingOver),
        ];
        let groups = group_by_position(&vehicles, "39", LadderOrientation::ZeroToOneUp);
        assert_eq!(groups.on_route, vec![vehicles[0].clone(), vehicles[2].clone()]);
        assert_eq!(groups.incoming, vec![vehicles[1].clone()]);
        assert_eq!(groups.laying_over_top, vec![vehicles[3].clone()]);
        assert!(groups.laying_over_bottom.is_empty());
    }
}
