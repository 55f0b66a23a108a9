// UI rendering module
//
// This module contains all UI rendering components for the demo.
// The main draw() function orchestrates rendering of all panels, and is
// where socket views report their layout (LayoutSettled). Positions are
// resolved by the caller after the frame.

mod header;
mod rope_view;
mod socket_view;
mod status_bar;

pub use header::{back_button_hit, backend_switch_hit};

use crate::app::config::{ROW_GAP, SOCKET_GAP, SOCKET_SIZE};
use crate::app::AppState;
use crate::sockets::SocketKey;
use crate::theme::rope_theme;
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame,
};
use std::rc::Rc;

use header::{render_header, HEADER_HEIGHT};
use rope_view::{render_plug, render_rope};
use socket_view::{render_socket, SocketView};
use status_bar::render_status_bar;

/// Main UI drawing function
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let size = f.area();
    app.frame_width = size.width;
    let theme = rope_theme(app.theme_mode);

    f.render_widget(Block::default().style(Style::default().bg(theme.bg)), size);

    // Main layout: header, body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Back + backend switch
            Constraint::Min(0),                // Sockets and rope
            Constraint::Length(3),             // Status bar
        ])
        .split(size);
    let body = chunks[1];

    // Body: inputs row, gap, outputs row
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(SOCKET_SIZE), // Inputs
            Constraint::Length(ROW_GAP),
            Constraint::Length(SOCKET_SIZE), // Outputs
            Constraint::Min(0),
        ])
        .split(body);
    let input_areas = socket_row(rows[1], app.catalog.inputs.len());
    let output_areas = socket_row(rows[3], app.catalog.outputs.len());

    // The rope is only mounted once the first input and output are measured
    app.rope_mounted = app.registry.is_ready();
    let plug = if app.rope_mounted {
        render_rope(f, body, app, &theme)
    } else {
        None
    };

    for (index, unit) in app.catalog.inputs.iter().enumerate() {
        let view = SocketView {
            unit,
            key: SocketKey::input(index),
            active: None,
            inputs: &app.catalog.inputs,
        };
        render_socket(f, input_areas[index], &view, &mut app.handles);
    }
    for (index, unit) in app.catalog.outputs.iter().enumerate() {
        let view = SocketView {
            unit,
            key: SocketKey::output(index),
            active: Some(&app.active),
            inputs: &app.catalog.inputs,
        };
        render_socket(f, output_areas[index], &view, &mut app.handles);
    }

    if let Some(plug) = plug {
        render_plug(f.buffer_mut(), body, plug);
    }

    render_header(f, chunks[0], app, &theme);
    render_status_bar(f, chunks[2], app, &theme);
}

/// Centre `count` sockets horizontally within `area`
fn socket_row(area: Rect, count: usize) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Length(SOCKET_SIZE); count])
        .flex(Flex::Center)
        .spacing(SOCKET_GAP)
        .split(area)
}
