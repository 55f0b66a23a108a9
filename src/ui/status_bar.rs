// Status Bar rendering module
//
// Renders the bottom status bar with keyboard shortcuts, toggle indicators
// and the current connection.

use crate::app::{AppState, ThemeMode};
use crate::theme::{RopeTheme, SWITCH_BLUE};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState, theme: &RopeTheme) {
    // Calculate available width for hints (subtract borders and icon)
    let available_width = area.width.saturating_sub(4);

    struct Hint {
        priority: u8,
        key: &'static str,
        desc: &'static str,
        color: Color,
    }

    let hints = [
        Hint {
            priority: 1,
            key: "Q:",
            desc: "Back ",
            color: Color::Red,
        },
        Hint {
            priority: 1,
            key: "Drag:",
            desc: "Plug | ",
            color: SWITCH_BLUE,
        },
        Hint {
            priority: 2,
            key: "S:",
            desc: "Backend | ",
            color: SWITCH_BLUE,
        },
        Hint {
            priority: 2,
            key: "D:",
            desc: "Theme | ",
            color: SWITCH_BLUE,
        },
    ];

    let mut spans = vec![Span::styled(" ⏚ ", Style::default().fg(SWITCH_BLUE))];
    let mut current_length = 4;

    // Process hints by priority
    for priority in 1..=2 {
        for hint in hints.iter().filter(|h| h.priority == priority) {
            let hint_length = hint.key.len() + hint.desc.len();
            if current_length + hint_length <= available_width as usize {
                spans.push(Span::styled(
                    hint.key,
                    Style::default().fg(hint.color).add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(hint.desc, Style::default().fg(theme.black_white)));
                current_length += hint_length;
            }
        }
    }

    spans.push(Span::raw(" "));
    spans.extend(build_toggle_indicators(app, theme));

    let status_bar = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(theme.muted)),
        )
        .alignment(Alignment::Left);

    f.render_widget(status_bar, area);
}

/// Build indicator spans: [S:backend] [D:theme] [input → output]
pub fn build_toggle_indicators(app: &AppState, theme: &RopeTheme) -> Vec<Span<'static>> {
    let bracket = Style::default().fg(theme.muted);
    let value = Style::default()
        .fg(theme.black_white)
        .add_modifier(Modifier::BOLD);

    let theme_label = match app.theme_mode {
        ThemeMode::Dark => "Dark",
        ThemeMode::Light => "Light",
    };

    let input = app
        .catalog
        .inputs
        .get(app.active.input)
        .map(|u| u.label.to_string())
        .unwrap_or_else(|| format!("in {}", app.active.input + 1));
    let link = if app.active.is_gesture_active {
        format!("{input} → …")
    } else {
        let output = app
            .catalog
            .outputs
            .get(app.active.output)
            .map(|u| u.label.to_string())
            .unwrap_or_else(|| format!("out {}", app.active.output + 1));
        format!("{input} → {output}")
    };

    vec![
        Span::styled("[S:", bracket),
        Span::styled(app.backend.label(), value),
        Span::styled("] ", bracket),
        Span::styled("[D:", bracket),
        Span::styled(theme_label, value),
        Span::styled("] ", bracket),
        Span::styled("[", bracket),
        Span::styled(link, Style::default().fg(SWITCH_BLUE).add_modifier(Modifier::BOLD)),
        Span::styled("]", bracket),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ActiveConnection;
    use crate::theme::rope_theme;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_indicators_show_backend_theme_and_link() {
        let mut app = AppState::default().with_theme(ThemeMode::Light);
        let theme = rope_theme(app.theme_mode);
        app.on_plugged(ActiveConnection {
            input: 1,
            output: 2,
            is_gesture_active: false,
        });

        let shown = text(&build_toggle_indicators(&app, &theme));
        assert_eq!(shown, "[S:Canvas] [D:Light] [video → out 3]");

        app.toggle_backend();
        app.on_plugged(ActiveConnection {
            input: 0,
            output: 2,
            is_gesture_active: true,
        });
        let shown = text(&build_toggle_indicators(&app, &theme));
        assert_eq!(shown, "[S:Cells] [D:Light] [audio → …]");
    }
}
