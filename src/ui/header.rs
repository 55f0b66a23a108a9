// Header rendering module
//
// Back control on the left, rope backend switch in the middle.

use crate::app::{AppState, RopeBackend};
use crate::theme::{RopeTheme, SWITCH_BLUE, SWITCH_TRACK};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub const HEADER_HEIGHT: u16 = 3;

const BACK_WIDTH: u16 = 10;
const SWITCH_WIDTH: u16 = 22;

fn area_contains(area: Rect, pos: Position) -> bool {
    pos.x >= area.left() && pos.x < area.right() && pos.y >= area.top() && pos.y < area.bottom()
}

pub fn back_button_area() -> Rect {
    Rect::new(0, 0, BACK_WIDTH, HEADER_HEIGHT)
}

/// Switch area for a frame of the given width (centred)
pub fn backend_switch_area(frame_width: u16) -> Rect {
    let width = SWITCH_WIDTH.min(frame_width);
    Rect::new((frame_width - width) / 2, 0, width, HEADER_HEIGHT)
}

pub fn back_button_hit(pos: Position) -> bool {
    area_contains(back_button_area(), pos)
}

pub fn backend_switch_hit(pos: Position, frame_width: u16) -> bool {
    area_contains(backend_switch_area(frame_width), pos)
}

pub fn render_header(f: &mut Frame, area: Rect, app: &AppState, theme: &RopeTheme) {
    let back = Paragraph::new(Line::from("‹ Back"))
        .style(Style::default().fg(theme.black_white))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.muted)),
        );
    f.render_widget(back, back_button_area().intersection(area));

    let switch = Paragraph::new(switch_line(app.backend, theme))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(SWITCH_TRACK)),
        );
    f.render_widget(switch, backend_switch_area(area.width).intersection(area));
}

/// "Canvas ●━━ Cells" with the unselected side greyed out
pub fn switch_line(backend: RopeBackend, theme: &RopeTheme) -> Line<'static> {
    let label_style = |selected: bool| {
        if selected {
            Style::default()
                .fg(theme.black_white)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        }
    };

    let knob = Style::default().fg(SWITCH_BLUE);
    let track = Style::default().fg(SWITCH_TRACK);
    let toggle = match backend {
        RopeBackend::Canvas => vec![Span::styled("●", knob), Span::styled("━━", track)],
        RopeBackend::Cells => vec![Span::styled("━━", track), Span::styled("●", knob)],
    };

    let mut spans = vec![
        Span::styled(
            RopeBackend::Canvas.label(),
            label_style(backend == RopeBackend::Canvas),
        ),
        Span::raw(" "),
    ];
    spans.extend(toggle);
    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        RopeBackend::Cells.label(),
        label_style(backend == RopeBackend::Cells),
    ));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ThemeMode;
    use crate::theme::rope_theme;

    #[test]
    fn test_back_button_hit() {
        assert!(back_button_hit(Position::new(0, 0)));
        assert!(back_button_hit(Position::new(9, 2)));
        assert!(!back_button_hit(Position::new(10, 1)));
        assert!(!back_button_hit(Position::new(2, 3)));
    }

    #[test]
    fn test_switch_is_centred() {
        let area = backend_switch_area(80);
        assert_eq!(area, Rect::new(29, 0, SWITCH_WIDTH, HEADER_HEIGHT));
        assert!(backend_switch_hit(Position::new(40, 1), 80));
        assert!(!backend_switch_hit(Position::new(5, 1), 80));
    }

    #[test]
    fn test_switch_fits_narrow_frames() {
        assert_eq!(backend_switch_area(10).width, 10);
        assert_eq!(backend_switch_area(0).width, 0);
    }

    #[test]
    fn test_switch_greys_out_unselected_label() {
        let theme = rope_theme(ThemeMode::Dark);

        let line = switch_line(RopeBackend::Canvas, &theme);
        assert_eq!(line.spans.first().map(|s| s.style.fg), Some(Some(theme.black_white)));
        assert_eq!(line.spans.last().map(|s| s.style.fg), Some(Some(theme.muted)));

        let line = switch_line(RopeBackend::Cells, &theme);
        assert_eq!(line.spans.first().map(|s| s.style.fg), Some(Some(theme.muted)));
        assert_eq!(line.spans.last().map(|s| s.style.fg), Some(Some(theme.black_white)));
    }
}
