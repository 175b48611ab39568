pub mod boxes;
pub mod direction;
pub mod lanes;
pub mod placement;
pub mod timepoint_y;
pub mod virtual_ghost;

pub use boxes::{BoxedVehicle, LayoverBox, order_layover_box};
pub use direction::{
    ByPosition, LadderRegion, VehicleDirection, direction_on_ladder, group_by_position,
    ladder_region,
};
pub use lanes::{LanedEntity, PositionedEntity, by_direction_and_y, first_open_lane, put_into_lanes};
pub use placement::{LaneGeometry, PlacedEntity, place_entities};
pub use timepoint_y::timepoint_status_y;
pub use virtual_ghost::virtual_ghost;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::model::{LadderConfig, LadderSnapshot, LadderVehicle, drawn_status, ladder_label};

/// The result of one layout pass over a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LadderLayout {
    pub route_id: String,
    /// Timepoints top-to-bottom, as drawn.
    pub timepoints: Vec<String>,
    /// Distance from the first to the last timepoint.
    pub height: f64,
    pub width_of_lanes: f64,
    pub lane_offset_unit: f64,
    /// On-route vehicles and ghosts, most recently laned first.
    pub vehicles: Vec<PlacedEntity>,
    pub laying_over_top: Vec<BoxedVehicle>,
    pub laying_over_bottom: Vec<BoxedVehicle>,
    pub incoming: Vec<BoxedVehicle>,
}

/// Position one on-route vehicle vertically, along with its scheduled
/// position if it has one.
pub fn position_vehicle(
    vehicle: &LadderVehicle,
    timepoints: &[String],
    config: &LadderConfig,
) -> PositionedEntity {
    let travel_direction = direction_on_ladder(vehicle.direction_id, config.orientation);
    let y = timepoint_status_y(
        timepoints,
        config.timepoint_spacing,
        vehicle.timepoint_status.as_ref(),
        travel_direction,
    );

    let (scheduled_y, scheduled_travel_direction) = match &vehicle.scheduled_location {
        Some(scheduled) if !vehicle.is_ghost() => {
            let direction = direction_on_ladder(scheduled.direction_id, config.orientation);
            let scheduled_y = timepoint_status_y(
                timepoints,
                config.timepoint_spacing,
                Some(&scheduled.timepoint_status),
                direction,
            );
            (Some(scheduled_y), Some(direction))
        }
        _ => (None, None),
    };

    PositionedEntity {
        id: vehicle.id.clone(),
        label: ladder_label(vehicle, config.label_setting),
        status: drawn_status(vehicle),
        travel_direction,
        y,
        scheduled_y,
        scheduled_travel_direction,
    }
}

/// Run the full layout pipeline for one ladder.
pub fn layout_ladder(snapshot: &LadderSnapshot) -> LadderLayout {
    let config = &snapshot.config;
    let timepoints = snapshot.ordered_timepoints();

    let ByPosition {
        mut on_route,
        laying_over_top,
        laying_over_bottom,
        incoming,
    } = group_by_position(&snapshot.vehicles, &snapshot.route_id, config.orientation);

    let ghosts: Vec<LadderVehicle> = incoming
        .iter()
        .filter_map(|vehicle| virtual_ghost(vehicle, &snapshot.vehicles))
        .collect();
    debug!(
        "route {}: {} on route, {}/{} laying over, {} incoming, {} virtual ghosts",
        snapshot.route_id,
        on_route.len(),
        laying_over_top.len(),
        laying_over_bottom.len(),
        incoming.len(),
        ghosts.len()
    );
    on_route.extend(ghosts);

    let positioned: Vec<PositionedEntity> = on_route
        .iter()
        .map(|vehicle| position_vehicle(vehicle, &timepoints, config))
        .collect();
    let laned = put_into_lanes(&positioned, config.icon_height);
    let (vehicles, geometry) = place_entities(laned, config.icon_width, config.lane_base_offset);
    debug!(
        "route {}: {} lanes, width {}",
        snapshot.route_id, geometry.max_occupied_lane, geometry.width_of_lanes
    );

    let boxed = |vehicles: &[LadderVehicle]| -> Vec<BoxedVehicle> {
        vehicles
            .iter()
            .map(|v| BoxedVehicle::new(v, config.orientation, config.label_setting))
            .collect()
    };

    LadderLayout {
        route_id: snapshot.route_id.clone(),
        height: config.timepoint_spacing * timepoints.len().saturating_sub(1) as f64,
        timepoints,
        width_of_lanes: geometry.width_of_lanes,
        lane_offset_unit: geometry.lane_offset_unit,
        vehicles,
        laying_over_top: boxed(&order_layover_box(&laying_over_top, LayoverBox::Top)),
        laying_over_bottom: boxed(&order_layover_box(&laying_over_bottom, LayoverBox::Bottom)),
        incoming: boxed(&incoming),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        DirectionId, DrawnStatus, LadderOrientation, RouteStatus, ScheduledLocation,
        TimepointStatus, VehicleKind,
    };

    fn status(id: &str, fraction: f64) -> TimepointStatus {
        TimepointStatus {
            timepoint_id: id.into(),
            fraction_until_timepoint: fraction,
        }
    }

    fn vehicle(id: &str, direction_id: DirectionId, at: Option<TimepointStatus>) -> LadderVehicle {
        LadderVehicle {
            id: id.into(),
            label: id.into(),
            kind: VehicleKind::Vehicle,
            run_id: Some(format!("122-{id}")),
            route_id: "39".into(),
            direction_id,
            route_status: RouteStatus::OnRoute,
            schedule_adherence_secs: 0.0,
            is_off_course: false,
            layover_departure_time: None,
            timepoint_status: at,
            scheduled_location: None,
        }
    }

    fn snapshot(vehicles: Vec<LadderVehicle>) -> LadderSnapshot {
        LadderSnapshot {
            route_id: "39".into(),
            timepoints: ["FORHL", "HEATH", "BACKB"].map(String::from).to_vec(),
            vehicles,
            config: LadderConfig::default(),
        }
    }

    #[test]
    fn scheduled_position_uses_scheduled_direction() {
        let mut v = vehicle("a", DirectionId::Zero, Some(status("HEATH", 0.0)));
        v.scheduled_location = Some(ScheduledLocation {
            route_id: "39".into(),
            direction_id: DirectionId::One,
            run_id: None,
            trip_id: None,
            timepoint_status: status("BACKB", 0.5),
        });
        let timepoints = ["FORHL", "HEATH", "BACKB"].map(String::from).to_vec();
        let entity = position_vehicle(&v, &timepoints, &LadderConfig::default());
        assert_eq!(entity.travel_direction, VehicleDirection::Up);
        assert!((entity.y - 60.0).abs() < f64::EPSILON);
        assert_eq!(entity.scheduled_travel_direction, Some(VehicleDirection::Down));
        assert_eq!(entity.scheduled_y, Some(90.0));
        assert_eq!(entity.label, "a");
    }

    #[test]
    fn empty_snapshot_lays_out_empty_ladder() {
        let layout = layout_ladder(&snapshot(Vec::new()));
        assert!(layout.vehicles.is_empty());
        assert!((layout.height - 120.0).abs() < f64::EPSILON);
        assert!((layout.width_of_lanes - 24.0).abs() < f64::EPSILON);
    }

    #[test]
    fn flipping_orientation_mirrors_vehicles() {
        let mut snap = snapshot(vec![
            vehicle("a", DirectionId::Zero, Some(status("HEATH", 0.5))),
            vehicle("b", DirectionId::One, Some(status("BACKB", 0.0))),
        ]);
        let before = layout_ladder(&snap);
        snap.config.orientation = LadderOrientation::OneToZeroUp;
        let after = layout_ladder(&snap);

        for id in ["a", "b"] {
            let find = |layout: &LadderLayout| {
                layout
                    .vehicles
                    .iter()
                    .find(|p| p.entity.id == id)
                    .map(|p| (p.x, p.entity.y))
            };
            let (x0, y0) = find(&before).unwrap();
            let (x1, y1) = find(&after).unwrap();
            assert!((x0 + x1).abs() < f64::EPSILON, "{id} x");
            assert!((y0 + y1 - before.height).abs() < 1e-9, "{id} y");
        }
    }

    #[test]
    fn incoming_late_vehicle_adds_ghost_on_route() {
        let mut late = vehicle("late", DirectionId::One, None);
        late.route_id = "28".into();
        late.schedule_adherence_secs = 361.0;
        late.scheduled_location = Some(ScheduledLocation {
            route_id: "39".into(),
            direction_id: DirectionId::One,
            run_id: Some("122-9999".into()),
            trip_id: None,
            timepoint_status: status("HEATH", 0.0),
        });
        let layout = layout_ladder(&snapshot(vec![late]));

        assert_eq!(layout.incoming.len(), 1);
        assert_eq!(layout.vehicles.len(), 1);
        let ghost = &layout.vehicles[0];
        assert_eq!(ghost.entity.id, "ghost-incoming-late");
        assert_eq!(ghost.entity.status, DrawnStatus::Ghost);
        assert_eq!(ghost.entity.label, "9999");
        assert!((ghost.entity.y - 60.0).abs() < f64::EPSILON);
        assert_eq!(ghost.entity.scheduled_y, None);
    }

    #[test]
    fn layovers_land_in_boxes() {
        let mut top = vehicle("top", DirectionId::One, None);
        top.route_status = RouteStatus::LayingOver;
        let mut bottom = vehicle("bottom", DirectionId::Zero, None);
        bottom.route_status = RouteStatus::LayingOver;
        let layout = layout_ladder(&snapshot(vec![top, bottom]));
        assert!(layout.vehicles.is_empty());
        assert_eq!(layout.laying_over_top[0].id, "top");
        assert_eq!(layout.laying_over_bottom[0].id, "bottom");
    }
}
