pub mod config;
pub mod snapshot;
pub mod status;
pub mod vehicle;

pub use config::{LadderConfig, LadderOrientation, VehicleLabelSetting};
pub use snapshot::{LadderSnapshot, SnapshotError};
pub use status::{DrawnStatus, OnTimeStatus, drawn_status, ladder_label, on_time_status, run_id_to_label};
pub use vehicle::{
    DirectionId, DirectionIdError, LadderVehicle, RouteStatus, ScheduledLocation, TimepointStatus,
    VehicleKind,
};
