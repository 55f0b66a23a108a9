// Application configuration types
//
// This module contains configuration constants and types for:
// - Socket geometry
// - Unit definitions (the socket catalogue)
// - Rope rendering backend selection
// - Theme mode

use ratatui::style::Color;
use std::time::Duration;

// ============================================================================
// Constants
// ============================================================================

/// Side length of a socket rectangle, in terminal cells, on both axes
pub const SOCKET_SIZE: u16 = 6;

/// Horizontal spacing between sockets in the same row
pub const SOCKET_GAP: u16 = 3;

/// Vertical gap between the input row and the output row
pub const ROW_GAP: u16 = 8;

/// How long the event loop waits for input before redrawing
pub const UI_POLL_INTERVAL: Duration = Duration::from_millis(50);

// ============================================================================
// Enums
// ============================================================================

/// Which renderer draws the rope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RopeBackend {
    /// Braille canvas, smooth curve (default)
    #[default]
    Canvas,
    /// One glyph per terminal cell
    Cells,
}

impl RopeBackend {
    pub fn toggled(self) -> Self {
        match self {
            RopeBackend::Canvas => RopeBackend::Cells,
            RopeBackend::Cells => RopeBackend::Canvas,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RopeBackend::Canvas => "Canvas",
            RopeBackend::Cells => "Cells",
        }
    }
}

/// Dark or light colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Detect the scheme from the environment
    ///
    /// `PLUGROPE_THEME=light|dark` wins. Otherwise `COLORFGBG` ("fg;bg") is
    /// consulted: ANSI backgrounds 7 and 15 are light. Anything else is dark.
    pub fn from_env() -> Self {
        let forced = std::env::var("PLUGROPE_THEME").ok();
        let colorfgbg = std::env::var("COLORFGBG").ok();
        Self::detect(forced.as_deref(), colorfgbg.as_deref())
    }

    fn detect(forced: Option<&str>, colorfgbg: Option<&str>) -> Self {
        match forced.map(str::to_ascii_lowercase).as_deref() {
            Some("light") => return ThemeMode::Light,
            Some("dark") => return ThemeMode::Dark,
            _ => {}
        }

        let bg = colorfgbg
            .and_then(|v| v.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok());
        match bg {
            Some(7) | Some(15) => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

// ============================================================================
// Unit definitions
// ============================================================================

/// Fill/stroke colour pair of a socket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitColor {
    pub fill: Color,
    pub stroke: Color,
}

/// One socket's static description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitDefinition {
    /// Glyph drawn in the middle of the socket
    pub icon: &'static str,
    pub label: &'static str,
    pub color: UnitColor,
}

impl UnitDefinition {
    pub const fn new(icon: &'static str, label: &'static str, fill: Color, stroke: Color) -> Self {
        Self {
            icon,
            label,
            color: UnitColor { fill, stroke },
        }
    }
}

/// The ordered input and output units shown on screen
///
/// Fixes the cardinality of both socket collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitCatalog {
    pub inputs: Vec<UnitDefinition>,
    pub outputs: Vec<UnitDefinition>,
}

impl UnitCatalog {
    pub fn new(inputs: Vec<UnitDefinition>, outputs: Vec<UnitDefinition>) -> Self {
        Self { inputs, outputs }
    }
}

impl Default for UnitCatalog {
    fn default() -> Self {
        let inputs = vec![
            UnitDefinition::new("♪", "audio", Color::Rgb(255, 176, 59), Color::Rgb(204, 120, 20)),
            UnitDefinition::new("▶", "video", Color::Rgb(110, 167, 249), Color::Rgb(39, 103, 253)),
            UnitDefinition::new("⚡", "power", Color::Rgb(158, 206, 106), Color::Rgb(86, 140, 40)),
            UnitDefinition::new("≋", "data", Color::Rgb(247, 118, 142), Color::Rgb(190, 50, 80)),
        ];
        let outputs = vec![
            UnitDefinition::new("◉", "out 1", Color::Rgb(86, 95, 137), Color::Rgb(59, 66, 97)),
            UnitDefinition::new("◉", "out 2", Color::Rgb(86, 95, 137), Color::Rgb(59, 66, 97)),
            UnitDefinition::new("◉", "out 3", Color::Rgb(86, 95, 137), Color::Rgb(59, 66, 97)),
            UnitDefinition::new("◉", "out 4", Color::Rgb(86, 95, 137), Color::Rgb(59, 66, 97)),
        ];
        Self::new(inputs, outputs)
    }
}
