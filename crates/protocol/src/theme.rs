use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,
    Road,
    TimepointTick,
    TimepointLabel,

    VehicleOnTime,
    VehicleEarly,
    VehicleLate,
    VehicleOffCourse,
    Ghost,
    VehicleLabel,
    ScheduledLine,

    // Layover and incoming boxes
    BoxBackground,
    BoxBorder,
    BoxText,
}
