use serde::{Deserialize, Serialize};

use super::config::VehicleLabelSetting;
use super::vehicle::LadderVehicle;

const EARLY_THRESHOLD_SECS: f64 = -60.0;
const LATE_THRESHOLD_SECS: f64 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnTimeStatus {
    Early,
    OnTime,
    Late,
}

pub fn on_time_status(schedule_adherence_secs: f64) -> OnTimeStatus {
    if schedule_adherence_secs < EARLY_THRESHOLD_SECS {
        OnTimeStatus::Early
    } else if schedule_adherence_secs > LATE_THRESHOLD_SECS {
        OnTimeStatus::Late
    } else {
        OnTimeStatus::OnTime
    }
}

/// What an icon is drawn as. Ghost and off-course take precedence over
/// schedule adherence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawnStatus {
    Ghost,
    OffCourse,
    Early,
    OnTime,
    Late,
}

pub fn drawn_status(vehicle: &LadderVehicle) -> DrawnStatus {
    if vehicle.is_ghost() {
        return DrawnStatus::Ghost;
    }
    if vehicle.is_off_course {
        return DrawnStatus::OffCourse;
    }
    match on_time_status(vehicle.schedule_adherence_secs) {
        OnTimeStatus::Early => DrawnStatus::Early,
        OnTimeStatus::OnTime => DrawnStatus::OnTime,
        OnTimeStatus::Late => DrawnStatus::Late,
    }
}

/// Strip the garage prefix from a run id: `"122-1065"` → `"1065"`.
pub fn run_id_to_label(run_id: &str) -> &str {
    run_id.split_once('-').map_or(run_id, |(_, run)| run)
}

pub fn ladder_label(vehicle: &LadderVehicle, setting: VehicleLabelSetting) -> String {
    if vehicle.is_ghost() {
        return vehicle
            .run_id
            .as_deref()
            .map_or_else(|| "N/A".to_string(), |run| run_id_to_label(run).to_string());
    }
    match setting {
        VehicleLabelSetting::RunNumber => vehicle
            .run_id
            .as_deref()
            .map_or_else(|| vehicle.label.clone(), |run| run_id_to_label(run).to_string()),
        VehicleLabelSetting::VehicleNumber => vehicle.label.clone(),
    }
}
