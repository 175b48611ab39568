use anyhow::Result;
use skate_ladder_core::svg::render_svg;
use skate_ladder_core::views::{ladder_viewport, render_ladder};
use skate_ladder_core::{LadderSnapshot, layout_ladder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Svg,
    LayoutJson,
}

#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub flip: bool,
    pub dark: bool,
    pub format: Format,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            flip: false,
            dark: true,
            format: Format::Svg,
        }
    }
}

/// Lay out a snapshot and render it in the requested format.
pub fn render(data: &[u8], options: &Options) -> Result<String> {
    let mut snapshot = LadderSnapshot::from_json(data)?;
    if options.flip {
        snapshot.config.orientation = snapshot.config.orientation.flip();
    }

    let layout = layout_ladder(&snapshot);
    match options.format {
        Format::LayoutJson => Ok(serde_json::to_string_pretty(&layout)?),
        Format::Svg => {
            let viewport = ladder_viewport(&layout, &snapshot.config);
            let commands = render_ladder(&layout, &snapshot.config);
            Ok(render_svg(&commands, viewport.width, viewport.height, options.dark))
        }
    }
}
