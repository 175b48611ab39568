//! SVG renderer: converts `RenderCommand` lists into standalone SVG strings.

use std::fmt::Write;

use skate_ladder_protocol::{IconDirection, Point, RenderCommand, TextAlign, ThemeToken};

/// Render a list of commands as an SVG document string.
///
/// `width` and `height` define the SVG viewBox dimensions.
/// `dark` selects the color palette.
pub fn render_svg(commands: &[RenderCommand], width: f64, height: f64, dark: bool) -> String {
    let mut svg = String::with_capacity(commands.len() * 160);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="font-family:system-ui,-apple-system,sans-serif;font-size:10px">"#,
    );
    let bg = resolve_color(ThemeToken::Background, dark);
    let _ = write!(svg, r#"<rect width="{width}" height="{height}" fill="{bg}"/>"#);

    for cmd in commands {
        match cmd {
            RenderCommand::DrawRect {
                rect,
                color,
                border_color,
                label,
            } => {
                let fill = resolve_color(*color, dark);
                let _ = write!(
                    svg,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fill}" rx="2""#,
                    rect.x, rect.y, rect.w, rect.h,
                );
                if let Some(border) = border_color {
                    let _ = write!(svg, r#" stroke="{}""#, resolve_color(*border, dark));
                }
                svg.push_str("/>");
                if let Some(label) = label {
                    let text_color = resolve_color(ThemeToken::BoxText, dark);
                    let _ = write!(
                        svg,
                        r#"<text x="{}" y="{}" fill="{text_color}" text-anchor="middle">{}</text>"#,
                        rect.x + rect.w / 2.0,
                        rect.y + rect.h * 0.7,
                        escape_xml(label),
                    );
                }
            }
            RenderCommand::DrawLine {
                from,
                to,
                color,
                width: line_width,
                dashed,
            } => {
                let stroke = resolve_color(*color, dark);
                let dash = if *dashed { r#" stroke-dasharray="4 3""# } else { "" };
                let _ = write!(
                    svg,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="{line_width}"{dash}/>"#,
                    from.x, from.y, to.x, to.y,
                );
            }
            RenderCommand::DrawText {
                position,
                text,
                color,
                font_size,
                align,
            } => {
                let fill = resolve_color(*color, dark);
                let anchor = match align {
                    TextAlign::Left => "start",
                    TextAlign::Center => "middle",
                    TextAlign::Right => "end",
                };
                let _ = write!(
                    svg,
                    r#"<text x="{}" y="{}" fill="{fill}" font-size="{font_size}" text-anchor="{anchor}">{}</text>"#,
                    position.x,
                    position.y,
                    escape_xml(text),
                );
            }
            RenderCommand::DrawVehicle {
                center,
                direction,
                width: icon_width,
                height: icon_height,
                color,
                label,
                vehicle_id,
            } => {
                let fill = resolve_color(*color, dark);
                let points = triangle(*center, *direction, *icon_width, *icon_height);
                let _ = write!(
                    svg,
                    r#"<g data-vehicle-id="{}"><polygon points="{points}" fill="{fill}"/>"#,
                    escape_xml(vehicle_id),
                );
                let label_y = match direction {
                    IconDirection::Up => center.y + icon_height / 2.0 + 10.0,
                    IconDirection::Down => center.y - icon_height / 2.0 - 3.0,
                };
                let text_color = resolve_color(ThemeToken::VehicleLabel, dark);
                let _ = write!(
                    svg,
                    r#"<text x="{}" y="{label_y}" fill="{text_color}" text-anchor="middle">{}</text></g>"#,
                    center.x,
                    escape_xml(label),
                );
            }
            RenderCommand::PushTransform { translate } => {
                let _ = write!(svg, r#"<g transform="translate({} {})">"#, translate.x, translate.y);
            }
            RenderCommand::PopTransform => svg.push_str("</g>"),
            // Groups are logical only and don't affect static SVG output
            RenderCommand::BeginGroup { .. } | RenderCommand::EndGroup => {}
        }
    }

    svg.push_str("</svg>");
    svg
}

fn triangle(center: Point, direction: IconDirection, width: f64, height: f64) -> String {
    let half_w = width / 2.0;
    let half_h = height / 2.0;
    let (tip, base) = match direction {
        IconDirection::Up => (center.y - half_h, center.y + half_h),
        IconDirection::Down => (center.y + half_h, center.y - half_h),
    };
    format!(
        "{},{} {},{} {},{}",
        center.x,
        tip,
        center.x - half_w,
        base,
        center.x + half_w,
        base
    )
}

fn resolve_color(token: ThemeToken, dark: bool) -> &'static str {
    if dark {
        match token {
            ThemeToken::Background => "#181818",
            ThemeToken::Road => "#9e9e9e",
            ThemeToken::TimepointTick | ThemeToken::BoxBorder => "#424242",
            ThemeToken::TimepointLabel | ThemeToken::VehicleLabel | ThemeToken::BoxText => {
                "#ececec"
            }
            ThemeToken::VehicleOnTime => "#4caf50",
            ThemeToken::VehicleEarly => "#e53935",
            ThemeToken::VehicleLate => "#448aff",
            ThemeToken::VehicleOffCourse => "#bdbdbd",
            ThemeToken::Ghost => "#ffd600",
            ThemeToken::ScheduledLine => "#757575",
            ThemeToken::BoxBackground => "#212121",
        }
    } else {
        match token {
            ThemeToken::Background => "#ffffff",
            ThemeToken::Road => "#5f5f5f",
            ThemeToken::TimepointTick | ThemeToken::BoxBorder => "#dee2e6",
            ThemeToken::TimepointLabel | ThemeToken::VehicleLabel | ThemeToken::BoxText => {
                "#1a1a2e"
            }
            ThemeToken::VehicleOnTime => "#27ae60",
            ThemeToken::VehicleEarly => "#e63946",
            ThemeToken::VehicleLate => "#1d63d1",
            ThemeToken::VehicleOffCourse => "#adb5bd",
            ThemeToken::Ghost => "#f2b705",
            ThemeToken::ScheduledLine => "#999999",
            ThemeToken::BoxBackground => "#f8f9fa",
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
