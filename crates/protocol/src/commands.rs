use serde::{Deserialize, Serialize};

use crate::theme::ThemeToken;
use crate::types::{Point, Rect};

/// A single, stateless render instruction.
///
/// The core emits a `Vec<RenderCommand>` per ladder. Renderers consume the
/// list sequentially; each command carries all the data it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw a filled rectangle, optionally with a text label.
    DrawRect {
        rect: Rect,
        color: ThemeToken,
        border_color: Option<ThemeToken>,
        label: Option<String>,
    },

    /// Draw a text string at a position.
    DrawText {
        position: Point,
        text: String,
        color: ThemeToken,
        font_size: f64,
        align: TextAlign,
    },

    /// Draw a line segment. Dashed lines mark scheduled positions.
    DrawLine {
        from: Point,
        to: Point,
        color: ThemeToken,
        width: f64,
        dashed: bool,
    },

    /// Draw a vehicle or ghost icon centered on `center`, pointing in its
    /// direction of travel. `vehicle_id` is the stable key for hit-testing.
    DrawVehicle {
        center: Point,
        direction: IconDirection,
        width: f64,
        height: f64,
        color: ThemeToken,
        label: String,
        vehicle_id: String,
    },

    /// Push a translation applied to all subsequent commands until the
    /// matching `PopTransform`.
    PushTransform { translate: Point },

    /// Pop the most recent transform.
    PopTransform,

    /// Begin a logical group (the ladder, a layover box).
    BeginGroup { id: String, label: Option<String> },

    /// End the current group.
    EndGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Which way an icon points on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconDirection {
    Up,
    Down,
}
