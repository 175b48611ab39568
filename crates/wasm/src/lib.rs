use skate_ladder_core::svg::render_svg;
use skate_ladder_core::views::{ladder_viewport, render_ladder};
use skate_ladder_core::{LadderLayout, LadderSnapshot, layout_ladder};
use wasm_bindgen::prelude::*;

fn parse(snapshot_json: &str) -> Result<LadderSnapshot, JsError> {
    LadderSnapshot::from_json(snapshot_json.as_bytes()).map_err(|e| JsError::new(&e.to_string()))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Lay out a snapshot, returning the `LadderLayout` as JSON.
#[wasm_bindgen]
pub fn layout_ladder_json(snapshot_json: &str) -> Result<String, JsError> {
    let snapshot = parse(snapshot_json)?;
    to_json(&layout_ladder(&snapshot))
}

/// Lay out and render a snapshot, returning render commands as JSON.
#[wasm_bindgen]
pub fn render_ladder_json(snapshot_json: &str) -> Result<String, JsError> {
    let snapshot = parse(snapshot_json)?;
    let layout = layout_ladder(&snapshot);
    to_json(&render_ladder(&layout, &snapshot.config))
}

/// Lay out and render a snapshot straight to an SVG string.
#[wasm_bindgen]
pub fn render_ladder_svg(snapshot_json: &str, dark: bool) -> Result<String, JsError> {
    let snapshot = parse(snapshot_json)?;
    let layout: LadderLayout = layout_ladder(&snapshot);
    let viewport = ladder_viewport(&layout, &snapshot.config);
    let commands = render_ladder(&layout, &snapshot.config);
    Ok(render_svg(&commands, viewport.width, viewport.height, dark))
}

/// Width of the lanes on one side of the ladder, for sizing the container.
#[wasm_bindgen]
pub fn width_of_lanes(snapshot_json: &str) -> Result<f64, JsError> {
    let snapshot = parse(snapshot_json)?;
    Ok(layout_ladder(&snapshot).width_of_lanes)
}
