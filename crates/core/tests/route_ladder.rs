//! Integration test: load a route snapshot, lay out its ladder, and render
//! it to SVG.

use skate_ladder_core::layout::{BoxedVehicle, LadderLayout, PlacedEntity, VehicleDirection};
use skate_ladder_core::layout_ladder;
use skate_ladder_core::model::{DrawnStatus, LadderOrientation, LadderSnapshot};
use skate_ladder_core::svg::render_svg;
use skate_ladder_core::views::{ladder_viewport, render_ladder};

fn load() -> LadderSnapshot {
    LadderSnapshot::from_json(include_bytes!("fixtures/route-39-snapshot.json"))
        .expect("failed to parse route 39 snapshot")
}

fn find<'a>(layout: &'a LadderLayout, id: &str) -> &'a PlacedEntity {
    layout
        .vehicles
        .iter()
        .find(|p| p.entity.id == id)
        .unwrap_or_else(|| panic!("{id} not on ladder"))
}

fn ids(boxed: &[BoxedVehicle]) -> Vec<&str> {
    boxed.iter().map(|b| b.id.as_str()).collect()
}

#[test]
fn lays_out_route_39() {
    let layout = layout_ladder(&load());

    let mut on_ladder: Vec<&str> = layout.vehicles.iter().map(|p| p.entity.id.as_str()).collect();
    on_ladder.sort_unstable();
    assert_eq!(
        on_ladder,
        vec!["ghost-39-102", "ghost-incoming-y0700", "y0507", "y1261", "y1818"]
    );

    let y1261 = find(&layout, "y1261");
    assert_eq!(y1261.entity.travel_direction, VehicleDirection::Up);
    assert!((y1261.entity.y - 72.0).abs() < 1e-9);
    assert_eq!(y1261.lane, 0);
    assert_eq!(y1261.entity.label, "1065");
    assert_eq!(y1261.entity.scheduled_y, Some(120.0));

    let y0507 = find(&layout, "y0507");
    assert_eq!(y0507.lane, 1);
    assert_eq!(y0507.entity.status, DrawnStatus::Early);

    let y1818 = find(&layout, "y1818");
    assert_eq!(y1818.entity.travel_direction, VehicleDirection::Down);
    assert!((y1818.entity.y - 150.0).abs() < 1e-9);
    assert_eq!(y1818.lane, 0);
    assert_eq!(y1818.entity.status, DrawnStatus::Late);

    let virtual_ghost = find(&layout, "ghost-incoming-y0700");
    assert_eq!(virtual_ghost.entity.status, DrawnStatus::Ghost);
    assert!((virtual_ghost.entity.y - 120.0).abs() < 1e-9);
    assert_eq!(virtual_ghost.lane, 1);

    // Two lanes in use: lane spacing is 6/8 of the icon width.
    assert!((layout.lane_offset_unit - 18.0).abs() < 1e-9);
    assert!((layout.width_of_lanes - 42.0).abs() < 1e-9);
    assert!((y0507.x - 81.0).abs() < 1e-9);
    assert!((virtual_ghost.x + 81.0).abs() < 1e-9);
    assert!((layout.height - 240.0).abs() < 1e-9);

    assert_eq!(ids(&layout.laying_over_top), vec!["y0600"]);
    assert_eq!(ids(&layout.laying_over_bottom), vec!["y0601"]);
    assert_eq!(ids(&layout.incoming), vec!["y0700", "y0800"]);
}

#[test]
fn same_direction_neighbours_never_share_a_lane() {
    let snapshot = load();
    let layout = layout_ladder(&snapshot);
    for (i, a) in layout.vehicles.iter().enumerate() {
        for b in &layout.vehicles[i + 1..] {
            if a.entity.travel_direction == b.entity.travel_direction
                && (a.entity.y - b.entity.y).abs() < snapshot.config.icon_height
            {
                assert_ne!(a.lane, b.lane, "{} / {}", a.entity.id, b.entity.id);
            }
        }
    }
}

#[test]
fn flipped_ladder_swaps_layover_boxes() {
    let mut snapshot = load();
    snapshot.config.orientation = LadderOrientation::OneToZeroUp;
    let layout = layout_ladder(&snapshot);
    assert_eq!(layout.timepoints.first().map(String::as_str), Some("FORHL"));
    assert_eq!(ids(&layout.laying_over_top), vec!["y0601"]);
    assert_eq!(ids(&layout.laying_over_bottom), vec!["y0600"]);
    assert_eq!(
        find(&layout, "y1261").entity.travel_direction,
        VehicleDirection::Down
    );
}

#[test]
fn layout_is_deterministic() {
    let snapshot = load();
    let first = serde_json::to_string(&layout_ladder(&snapshot)).unwrap();
    let second = serde_json::to_string(&layout_ladder(&snapshot)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn renders_route_39_svg() {
    let snapshot = load();
    let layout = layout_ladder(&snapshot);
    let viewport = ladder_viewport(&layout, &snapshot.config);
    let commands = render_ladder(&layout, &snapshot.config);
    let svg = render_svg(&commands, viewport.width, viewport.height, false);

    assert!(svg.starts_with("<svg"));
    for placed in &layout.vehicles {
        assert!(
            svg.contains(&format!(r#"data-vehicle-id="{}""#, placed.entity.id)),
            "{} missing from svg",
            placed.entity.id
        );
    }
    for timepoint in &snapshot.timepoints {
        assert!(svg.contains(timepoint.as_str()));
    }
    assert!(svg.contains("stroke-dasharray"));
    assert!(svg.contains("Incoming"));
}
