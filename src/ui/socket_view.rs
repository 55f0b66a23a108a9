// Socket view rendering module
//
// Draws one socket box and reports where it was laid out (LayoutSettled)
// through the injected view handle registry.

use crate::app::{is_active_output, ActiveConnection, UnitDefinition};
use crate::sockets::{SocketKey, ViewHandles};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Marker shown under an output that has the rope plugged in
const PLUGGED_MARKER: &str = "⏚";

/// Everything a socket view needs to draw itself
pub struct SocketView<'a> {
    pub unit: &'a UnitDefinition,
    pub key: SocketKey,
    /// Only passed to output views
    pub active: Option<&'a ActiveConnection>,
    /// Input catalogue, to borrow the linked input's colours
    pub inputs: &'a [UnitDefinition],
}

impl<'a> SocketView<'a> {
    pub fn is_active(&self) -> bool {
        is_active_output(self.key.index, self.active)
    }

    /// The definition whose colours this view is drawn with
    ///
    /// An active output takes the linked input's colours. An out-of-range
    /// input index falls back to the socket's own definition.
    pub fn display_unit(&self) -> &'a UnitDefinition {
        if !self.is_active() {
            return self.unit;
        }
        self.active
            .and_then(|active| self.inputs.get(active.input))
            .unwrap_or(self.unit)
    }
}

/// Render one socket and record its area in `handles`
pub fn render_socket(f: &mut Frame, area: Rect, view: &SocketView, handles: &mut ViewHandles) {
    if area.is_empty() {
        // Clipped away by a too-small terminal: nothing to measure
        handles.release(view.key);
        return;
    }
    handles.layout(view.key, area);

    let shown = view.display_unit();
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(shown.color.stroke))
        .style(Style::default().bg(shown.color.fill));

    if view.is_active() {
        block = block.title_bottom(Line::from(PLUGGED_MARKER).centered());
    }

    let icon = Paragraph::new(Line::from(view.unit.icon))
        .style(
            Style::default()
                .fg(shown.color.stroke)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(block);

    f.render_widget(icon, area);
}
