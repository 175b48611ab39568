use log::trace;

use super::direction::VehicleDirection;
use crate::model::TimepointStatus;

/// Vertical coordinate of a vehicle between two evenly spaced timepoints.
///
/// `timepoints` is ordered top-to-bottom in the current orientation. An
/// Up vehicle approaching timepoint `i` is still below it, so the fraction
/// is added; a Down vehicle is above it, so the fraction is subtracted.
/// Unknown timepoints and missing statuses map to `0.0`.
pub fn timepoint_status_y(
    timepoints: &[String],
    spacing: f64,
    status: Option<&TimepointStatus>,
    direction: VehicleDirection,
) -> f64 {
    let Some(status) = status else {
        return 0.0;
    };
    let Some(index) = timepoints.iter().position(|t| *t == status.timepoint_id) else {
        trace!("timepoint {} is not on this ladder", status.timepoint_id);
        return 0.0;
    };
    spacing * (index as f64 + status.fraction_until_timepoint * direction.sign())
}
