// Theme module - Color constants and theme re-exports
//
// This module provides the colour palette and the dark/light screen theme
// used by the plug sockets demo. Theming is cosmetic only; nothing here
// touches the connection model.

pub mod rope;

use ratatui::style::Color;

/// Near-black screen background for dark mode
/// RGB: (22, 22, 30)
pub const INK: Color = Color::Rgb(22, 22, 30);

/// Off-white screen background for light mode
/// RGB: (242, 242, 247)
pub const PAPER: Color = Color::Rgb(242, 242, 247);

/// Accent used for the selected side of the backend switch
/// RGB: (39, 103, 253)
pub const SWITCH_BLUE: Color = Color::Rgb(39, 103, 253);

/// Track colour of the backend switch
/// RGB: (110, 167, 249)
pub const SWITCH_TRACK: Color = Color::Rgb(110, 167, 249);

/// Greyed-out text (unselected switch label, hints)
pub const MUTED_GREY: Color = Color::Rgb(128, 128, 128);

pub use rope::*;
