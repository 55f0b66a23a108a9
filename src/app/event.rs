// Input event handling
//
// Keyboard and mouse handlers that translate terminal input into
// application state changes.

use super::AppState;
use crate::rope::PointerEvent;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

/// Handle keyboard events and update application state
///
/// Returns `true` if the application should continue running,
/// `false` if it should exit.
///
/// # Key Bindings
/// - `q`, `Q`, `Esc`, `Backspace` - Back (quit the demo)
/// - `s`, `S` - Switch rope backend (Canvas/Cells)
/// - `d`, `D` - Toggle dark/light theme
pub fn handle_key_event(app: &mut AppState, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc | KeyCode::Backspace => {
            app.running = false;
            false
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.toggle_backend();
            true
        }
        KeyCode::Char('d') | KeyCode::Char('D') => {
            app.toggle_theme();
            true
        }
        _ => true,
    }
}

/// Map a left-button mouse event onto the rope gesture
///
/// Presses on the header controls (back, backend switch) are handled here
/// and never reach the gesture. Other buttons are ignored.
pub fn handle_mouse_event(app: &mut AppState, mouse: MouseEvent) {
    let pos = Position::new(mouse.column, mouse.row);
    let pointer = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if crate::ui::back_button_hit(pos) {
                app.running = false;
                return;
            }
            if crate::ui::backend_switch_hit(pos, app.frame_width) {
                app.toggle_backend();
                return;
            }
            PointerEvent::Down(pos)
        }
        MouseEventKind::Drag(MouseButton::Left) => PointerEvent::Drag(pos),
        MouseEventKind::Up(MouseButton::Left) => PointerEvent::Up(pos),
        _ => return,
    };
    app.handle_pointer(pointer);
}
