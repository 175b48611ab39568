//! Layout and rendering for route ladder diagrams.
//!
//! ```text
//!   LadderSnapshot ──▶ layout_ladder ──▶ LadderLayout ──▶ render_ladder ──▶ RenderCommand[] ──▶ SVG
//!    (vehicles,          (classify,        (placed            (roads,
//!     timepoints,         ghosts,           entities,          timepoints,
//!     config)             lanes, x/y)       boxes)             icons…)
//! ```

pub mod layout;
pub mod model;
pub mod svg;
pub mod views;

pub use layout::{LadderLayout, layout_ladder};
pub use model::{LadderConfig, LadderSnapshot, SnapshotError};
