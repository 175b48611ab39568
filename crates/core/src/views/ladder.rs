use skate_ladder_protocol::{Point, Rect, RenderCommand, TextAlign, ThemeToken, Viewport};

use crate::layout::{BoxedVehicle, LadderLayout, PlacedEntity};
use crate::model::{DrawnStatus, LadderConfig};

const BOX_ROW_HEIGHT: f64 = 24.0;
const CHIP_WIDTH: f64 = 44.0;
const CHIP_GAP: f64 = 4.0;
const FONT_SIZE: f64 = 10.0;
const ROAD_WIDTH: f64 = 2.0;
const TICK_WIDTH: f64 = 1.0;
/// Scheduled lines are skipped when the vehicle is this close to schedule.
const MIN_SCHEDULED_GAP: f64 = 0.5;

pub fn status_token(status: DrawnStatus) -> ThemeToken {
    match status {
        DrawnStatus::Ghost => ThemeToken::Ghost,
        DrawnStatus::OffCourse => ThemeToken::VehicleOffCourse,
        DrawnStatus::Early => ThemeToken::VehicleEarly,
        DrawnStatus::OnTime => ThemeToken::VehicleOnTime,
        DrawnStatus::Late => ThemeToken::VehicleLate,
    }
}

/// Size of the surface `render_ladder` draws into: the ladder with its
/// lanes on both sides, plus a row each for the top layover box, the
/// bottom layover box and the incoming box.
pub fn ladder_viewport(layout: &LadderLayout, config: &LadderConfig) -> Viewport {
    let half_width = config.lane_base_offset + layout.width_of_lanes + config.margin;
    Viewport {
        width: 2.0 * half_width,
        height: 2.0 * config.margin + 3.0 * BOX_ROW_HEIGHT + layout.height + config.icon_height,
    }
}

/// Render a laid-out ladder: layover boxes, road lines, timepoints,
/// scheduled-position lines and vehicle icons.
pub fn render_ladder(layout: &LadderLayout, config: &LadderConfig) -> Vec<RenderCommand> {
    let viewport = ladder_viewport(layout, config);
    let mut commands = Vec::with_capacity(layout.timepoints.len() * 2 + layout.vehicles.len() * 2 + 16);

    commands.push(RenderCommand::BeginGroup {
        id: format!("ladder-{}", layout.route_id),
        label: Some(format!("Route {}", layout.route_id)),
    });

    let top_box_y = config.margin;
    render_box(&mut commands, "layover-top", None, &layout.laying_over_top, top_box_y, &viewport, config);

    let ladder_top = top_box_y + BOX_ROW_HEIGHT + config.icon_height / 2.0;
    commands.push(RenderCommand::PushTransform {
        translate: Point::new(viewport.width / 2.0, ladder_top),
    });
    render_roads(&mut commands, layout, config);
    render_timepoints(&mut commands, layout, config);
    for placed in &layout.vehicles {
        render_vehicle(&mut commands, placed, config);
    }
    commands.push(RenderCommand::PopTransform);

    let bottom_box_y = ladder_top + layout.height + config.icon_height / 2.0;
    render_box(
        &mut commands,
        "layover-bottom",
        None,
        &layout.laying_over_bottom,
        bottom_box_y,
        &viewport,
        config,
    );
    render_box(
        &mut commands,
        "incoming",
        Some("Incoming"),
        &layout.incoming,
        bottom_box_y + BOX_ROW_HEIGHT,
        &viewport,
        config,
    );

    commands.push(RenderCommand::EndGroup);
    commands
}

fn render_roads(commands: &mut Vec<RenderCommand>, layout: &LadderLayout, config: &LadderConfig) {
    for x in [-config.road_offset, config.road_offset] {
        commands.push(RenderCommand::DrawLine {
            from: Point::new(x, 0.0),
            to: Point::new(x, layout.height),
            color: ThemeToken::Road,
            width: ROAD_WIDTH,
            dashed: false,
        });
    }
}

fn render_timepoints(commands: &mut Vec<RenderCommand>, layout: &LadderLayout, config: &LadderConfig) {
    for (index, timepoint) in layout.timepoints.iter().enumerate() {
        let y = config.timepoint_spacing * index as f64;
        commands.push(RenderCommand::DrawLine {
            from: Point::new(-config.road_offset, y),
            to: Point::new(config.road_offset, y),
            color: ThemeToken::TimepointTick,
            width: TICK_WIDTH,
            dashed: false,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(0.0, y - 3.0),
            text: timepoint.clone(),
            color: ThemeToken::TimepointLabel,
            font_size: FONT_SIZE,
            align: TextAlign::Center,
        });
    }
}

fn render_vehicle(commands: &mut Vec<RenderCommand>, placed: &PlacedEntity, config: &LadderConfig) {
    let entity = &placed.entity;
    if let (Some(scheduled_y), Some(direction)) = (entity.scheduled_y, entity.scheduled_travel_direction)
        && (scheduled_y - entity.y).abs() > MIN_SCHEDULED_GAP
    {
        // The scheduled end sits on the road line of the scheduled direction.
        commands.push(RenderCommand::DrawLine {
            from: Point::new(placed.x, entity.y),
            to: Point::new(direction.sign() * config.road_offset, scheduled_y),
            color: ThemeToken::ScheduledLine,
            width: TICK_WIDTH,
            dashed: true,
        });
    }

    commands.push(RenderCommand::DrawVehicle {
        center: Point::new(placed.x, entity.y),
        direction: entity.travel_direction.into(),
        width: config.icon_width,
        height: config.icon_height,
        color: status_token(entity.status),
        label: entity.label.clone(),
        vehicle_id: entity.id.clone(),
    });
}

fn render_box(
    commands: &mut Vec<RenderCommand>,
    id: &str,
    title: Option<&str>,
    vehicles: &[BoxedVehicle],
    y: f64,
    viewport: &Viewport,
    config: &LadderConfig,
) {
    if vehicles.is_empty() {
        return;
    }

    commands.push(RenderCommand::BeginGroup {
        id: id.to_string(),
        label: title.map(String::from),
    });
    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(0.0, y, viewport.width, BOX_ROW_HEIGHT),
        color: ThemeToken::BoxBackground,
        border_color: Some(ThemeToken::BoxBorder),
        label: None,
    });

    let mut x = config.margin;
    if let Some(title) = title {
        commands.push(RenderCommand::DrawText {
            position: Point::new(x, y + BOX_ROW_HEIGHT / 2.0 + 4.0),
            text: title.to_string(),
            color: ThemeToken::BoxText,
            font_size: FONT_SIZE,
            align: TextAlign::Left,
        });
        x += CHIP_WIDTH + CHIP_GAP;
    }

    for vehicle in vehicles {
        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(x, y + 3.0, CHIP_WIDTH, BOX_ROW_HEIGHT - 6.0),
            color: status_token(vehicle.status),
            border_color: None,
            label: Some(vehicle.label.clone()),
        });
        x += CHIP_WIDTH + CHIP_GAP;
    }

    commands.push(RenderCommand::EndGroup);
}
