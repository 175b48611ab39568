use crate::model::{LadderVehicle, RouteStatus, VehicleKind};

/// Incoming vehicles later than this are assumed to have had their trip
/// covered some other way, so no placeholder is drawn.
pub const MAX_LATENESS_SECS: f64 = 3600.0;

/// A placeholder for a trip that should already have started.
///
/// Produced for an incoming vehicle that is late by less than an hour and
/// whose run is not already shown by any other vehicle in `displayed`.
/// The placeholder sits at the vehicle's scheduled position and counts as
/// on-route.
pub fn virtual_ghost(incoming: &LadderVehicle, displayed: &[LadderVehicle]) -> Option<LadderVehicle> {
    let scheduled = incoming.scheduled_location.as_ref()?;
    let lateness = incoming.schedule_adherence_secs;
    if lateness <= 0.0 || lateness >= MAX_LATENESS_SECS {
        return None;
    }
    let run_id = scheduled.run_id.clone().or_else(|| incoming.run_id.clone());
    if let Some(run) = &run_id
        && displayed
            .iter()
            .any(|other| other.id != incoming.id && other.run_id.as_ref() == Some(run))
    {
        return None;
    }

    Some(LadderVehicle {
        id: format!("ghost-incoming-{}", incoming.id),
        label: incoming.label.clone(),
        kind: VehicleKind::Ghost,
        run_id,
        route_id: scheduled.route_id.clone(),
        direction_id: scheduled.direction_id,
        route_status: RouteStatus::OnRoute,
        schedule_adherence_secs: lateness,
        is_off_course: false,
        layover_departure_time: None,
        timepoint_status: Some(scheduled.timepoint_status.clone()),
        scheduled_location: None,
    })
}
