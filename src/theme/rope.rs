// Screen theme for the rope demo
//
// Dark/light palettes plus the colour interpolation used for the rope
// gradient.

use ratatui::style::Color;

use super::{INK, MUTED_GREY, PAPER};
use crate::app::ThemeMode;

/// Colours of the screen chrome for one mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RopeTheme {
    pub bg: Color,
    /// Foreground that contrasts with `bg`
    pub black_white: Color,
    pub muted: Color,
}

/// Palette for the given mode
pub fn rope_theme(mode: ThemeMode) -> RopeTheme {
    match mode {
        ThemeMode::Dark => RopeTheme {
            bg: INK,
            black_white: Color::White,
            muted: MUTED_GREY,
        },
        ThemeMode::Light => RopeTheme {
            bg: PAPER,
            black_white: Color::Black,
            muted: MUTED_GREY,
        },
    }
}

/// Interpolate between two RGB colors based on a ratio (0.0 ~ 1.0)
///
/// Non-RGB colours cannot be blended: the nearer endpoint is returned.
pub fn interpolate_color(color1: Color, color2: Color, ratio: f32) -> Color {
    let ratio = ratio.clamp(0.0, 1.0);
    match (color1, color2) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * ratio).round() as u8;
            Color::Rgb(lerp(r1, r2), lerp(g1, g2), lerp(b1, b2))
        }
        _ if ratio < 0.5 => color1,
        _ => color2,
    }
}
