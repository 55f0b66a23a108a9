// Rope collaborator
//
// Gesture handling and curve geometry for the rope that links an input
// socket to an output socket. Drawing lives in ui::rope_view; this module
// is backend-agnostic.

pub mod gesture;

pub use gesture::{PointerEvent, RopeGesture};

use crate::app::ActiveConnection;
use crate::sockets::SocketRegistry;
use ratatui::layout::Position;

/// Sag of the rope's midpoint as a fraction of the span between its ends
const SAG_RATIO: f64 = 0.35;

/// Minimum sag in cells so short ropes still hang
const MIN_SAG: f64 = 1.5;

/// Endpoints of the rope in cell coordinates (x right, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RopePath {
    pub start: (f64, f64),
    pub end: (f64, f64),
}

impl RopePath {
    /// Resolve the rope's endpoints from the registry
    ///
    /// The rope leaves the bottom centre of the linked input. It ends at the
    /// loose plug while dragging, or at the top centre of the linked output.
    /// Returns `None` when the geometry it needs has not been measured yet.
    pub fn resolve(
        registry: &SocketRegistry,
        active: ActiveConnection,
        plug: Option<Position>,
    ) -> Option<Self> {
        let input = registry.input(active.input)?;
        let start = (input.center_x(), input.end_y as f64);

        let end = match plug {
            Some(pos) => (pos.x as f64, pos.y as f64),
            None => {
                let output = registry.output(active.output)?;
                (output.center_x(), output.start_y as f64)
            }
        };

        Some(Self { start, end })
    }

    fn span(&self) -> f64 {
        let dx = self.end.0 - self.start.0;
        let dy = self.end.1 - self.start.1;
        (dx * dx + dy * dy).sqrt()
    }

    /// Control point of the quadratic Bézier: the midpoint, pulled down
    fn control(&self) -> (f64, f64) {
        let sag = (self.span() * SAG_RATIO).max(MIN_SAG);
        (
            (self.start.0 + self.end.0) / 2.0,
            (self.start.1 + self.end.1) / 2.0 + sag,
        )
    }

    /// Point on the curve at `t` in 0.0..=1.0
    pub fn point_at(&self, t: f64) -> (f64, f64) {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        let c = self.control();
        (
            u * u * self.start.0 + 2.0 * u * t * c.0 + t * t * self.end.0,
            u * u * self.start.1 + 2.0 * u * t * c.1 + t * t * self.end.1,
        )
    }

    /// Sample `segments + 1` evenly spaced points, both ends included
    pub fn sample(&self, segments: usize) -> Vec<(f64, f64)> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point_at(i as f64 / segments as f64))
            .collect()
    }

    /// Enough segments that consecutive samples are at most about a cell apart
    pub fn segments_for_cells(&self) -> usize {
        // Curve length is bounded by the control polygon
        let c = self.control();
        let leg = |a: (f64, f64), b: (f64, f64)| ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt();
        let bound = leg(self.start, c) + leg(c, self.end);
        (bound.ceil() as usize).saturating_mul(2).max(1)
    }
}
