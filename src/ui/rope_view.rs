// Rope rendering module
//
// Two interchangeable renderers for the rope:
// - Canvas: Braille canvas lines, smooth at sub-cell resolution
// - Cells:  one box-drawing glyph per terminal cell
//
// Both draw the same RopePath; the backend switch is purely visual.

use crate::app::{AppState, RopeBackend};
use crate::rope::RopePath;
use crate::theme::{interpolate_color, RopeTheme};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Color,
    symbols::Marker,
    widgets::canvas::{Canvas, Line as CanvasLine},
    Frame,
};

/// Glyph of the loose or plugged rope end
const PLUG_SYMBOL: &str = "■";

/// The rope end to be drawn on top of the sockets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlugMark {
    pub pos: Position,
    pub color: Color,
}

/// Draw the rope for the current connection into `area`
///
/// Callers must only invoke this once the registry is ready. Entries that
/// are still unmeasured simply produce no rope. Returns the plug end so it
/// can be drawn above the sockets with `render_plug`.
pub fn render_rope(f: &mut Frame, area: Rect, app: &AppState, theme: &RopeTheme) -> Option<PlugMark> {
    let path = RopePath::resolve(&app.registry, app.active, app.gesture.plug_position())?;

    let (from, to) = match app.catalog.inputs.get(app.active.input) {
        Some(unit) => (unit.color.stroke, unit.color.fill),
        None => (theme.black_white, theme.black_white),
    };

    let points = path.sample(path.segments_for_cells());
    match app.backend {
        RopeBackend::Canvas => render_canvas(f, area, &points, from, to, theme),
        RopeBackend::Cells => render_cells(f.buffer_mut(), area, &points, from, to),
    }

    Some(PlugMark {
        pos: Position::new(path.end.0.floor() as u16, path.end.1.floor() as u16),
        color: from,
    })
}

/// Draw the plug glyph, clipped to `area`
pub fn render_plug(buf: &mut Buffer, area: Rect, plug: PlugMark) {
    if !within(area, plug.pos.x as i64, plug.pos.y as i64) {
        return;
    }
    if let Some(cell) = buf.cell_mut(plug.pos) {
        cell.set_symbol(PLUG_SYMBOL).set_fg(plug.color);
    }
}

fn render_canvas(
    f: &mut Frame,
    area: Rect,
    points: &[(f64, f64)],
    from: Color,
    to: Color,
    theme: &RopeTheme,
) {
    // Canvas y grows upward; flip screen rows within the area
    let top = area.y as f64;
    let bottom = area.bottom() as f64;
    let flip = move |y: f64| top + bottom - y;

    let segments: Vec<CanvasLine> = points
        .windows(2)
        .enumerate()
        .map(|(i, w)| {
            let ratio = i as f32 / points.len().saturating_sub(1).max(1) as f32;
            CanvasLine::new(
                w[0].0,
                flip(w[0].1),
                w[1].0,
                flip(w[1].1),
                interpolate_color(from, to, ratio),
            )
        })
        .collect();

    let canvas = Canvas::default()
        .background_color(theme.bg)
        .marker(Marker::Braille)
        .x_bounds([area.x as f64, area.right() as f64])
        .y_bounds([top, bottom])
        .paint(move |ctx| {
            for segment in &segments {
                ctx.draw(segment);
            }
        });

    f.render_widget(canvas, area);
}

fn render_cells(buf: &mut Buffer, area: Rect, points: &[(f64, f64)], from: Color, to: Color) {
    let last = points.len().saturating_sub(1).max(1);
    let mut previous: Option<(i64, i64)> = None;

    for (i, window) in points.windows(2).enumerate() {
        let (x, y) = (window[0].0.floor() as i64, window[0].1.floor() as i64);
        if previous == Some((x, y)) {
            continue;
        }
        previous = Some((x, y));

        if !within(area, x, y) {
            continue;
        }

        let glyph = segment_glyph(window[1].0 - window[0].0, window[1].1 - window[0].1);
        let color = interpolate_color(from, to, i as f32 / last as f32);
        if let Some(cell) = buf.cell_mut(Position::new(x as u16, y as u16)) {
            cell.set_symbol(glyph).set_fg(color);
        }
    }
}

fn within(area: Rect, x: i64, y: i64) -> bool {
    x >= area.left() as i64 && x < area.right() as i64 && y >= area.top() as i64 && y < area.bottom() as i64
}

/// Box-drawing glyph for a rope segment heading (dx, dy), y down
pub fn segment_glyph(dx: f64, dy: f64) -> &'static str {
    let (ax, ay) = (dx.abs(), dy.abs());
    if ax >= ay * 2.0 {
        "─"
    } else if ay >= ax * 2.0 {
        "│"
    } else if (dx > 0.0) == (dy > 0.0) {
        "╲"
    } else {
        "╱"
    }
}
