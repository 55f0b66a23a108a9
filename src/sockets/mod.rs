// Socket registry module
//
// Tracks the absolute terminal rectangle of every input and output socket.
// Measurement is two-phase: a socket view reports LayoutSettled while it is
// drawn (see `handles`), and the key is turned into PositionResolved once
// the frame is complete.

pub mod handles;

pub use handles::ViewHandles;

use ratatui::layout::Position;
use std::fmt;
use thiserror::Error;

/// Whether a socket is a data input or output endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocketKind {
    Input,
    Output,
}

impl fmt::Display for SocketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SocketKind::Input => write!(f, "input"),
            SocketKind::Output => write!(f, "output"),
        }
    }
}

/// Identifies one socket by kind and list position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SocketKey {
    pub kind: SocketKind,
    pub index: usize,
}

impl SocketKey {
    pub fn input(index: usize) -> Self {
        Self {
            kind: SocketKind::Input,
            index,
        }
    }

    pub fn output(index: usize) -> Self {
        Self {
            kind: SocketKind::Output,
            index,
        }
    }
}

impl fmt::Display for SocketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.kind, self.index)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SocketError {
    #[error("{kind} socket index {index} out of range (have {len})")]
    IndexOutOfRange {
        kind: SocketKind,
        index: usize,
        len: usize,
    },

    #[error("no view handle registered for {0}")]
    MissingHandle(SocketKey),
}

/// Absolute bounding box of a socket, in terminal cells
///
/// `end_x`/`end_y` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SocketRect {
    pub start_x: u16,
    pub end_x: u16,
    pub start_y: u16,
    pub end_y: u16,
}

impl SocketRect {
    /// Build a rectangle from a resolved origin plus a fixed size on both axes
    pub fn from_origin(origin: Position, size: u16) -> Self {
        Self {
            start_x: origin.x,
            end_x: origin.x.saturating_add(size),
            start_y: origin.y,
            end_y: origin.y.saturating_add(size),
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.start_x && pos.x < self.end_x && pos.y >= self.start_y && pos.y < self.end_y
    }

    /// Horizontal centre, in cells
    pub fn center_x(&self) -> f64 {
        (self.start_x as f64 + self.end_x as f64) / 2.0
    }
}

/// Second phase of a measurement: an origin read back from a view handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionResolved {
    pub key: SocketKey,
    pub origin: Position,
}

/// Measured rectangles for all sockets, indexed by list position
///
/// Both collections have a fixed length. Entries stay `None` until the
/// socket's position has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocketRegistry {
    pub inputs: Vec<Option<SocketRect>>,
    pub outputs: Vec<Option<SocketRect>>,
}

impl SocketRegistry {
    pub fn new(input_count: usize, output_count: usize) -> Self {
        Self {
            inputs: vec![None; input_count],
            outputs: vec![None; output_count],
        }
    }

    /// Replace the rectangle of a single socket, leaving every other entry as is
    pub fn update(&mut self, key: SocketKey, rect: SocketRect) -> Result<(), SocketError> {
        let slots = match key.kind {
            SocketKind::Input => &mut self.inputs,
            SocketKind::Output => &mut self.outputs,
        };
        let len = slots.len();
        let slot = slots.get_mut(key.index).ok_or(SocketError::IndexOutOfRange {
            kind: key.kind,
            index: key.index,
            len,
        })?;
        *slot = Some(rect);
        Ok(())
    }

    /// Forget the rectangle of a socket that is no longer laid out
    pub fn clear(&mut self, key: SocketKey) -> Result<(), SocketError> {
        let slots = match key.kind {
            SocketKind::Input => &mut self.inputs,
            SocketKind::Output => &mut self.outputs,
        };
        let len = slots.len();
        let slot = slots.get_mut(key.index).ok_or(SocketError::IndexOutOfRange {
            kind: key.kind,
            index: key.index,
            len,
        })?;
        *slot = None;
        Ok(())
    }

    /// Apply the second measurement phase
    pub fn apply(&mut self, resolved: PositionResolved, size: u16) -> Result<SocketRect, SocketError> {
        let rect = SocketRect::from_origin(resolved.origin, size);
        self.update(resolved.key, rect)?;
        Ok(rect)
    }

    pub fn get(&self, key: SocketKey) -> Option<SocketRect> {
        let slots = match key.kind {
            SocketKind::Input => &self.inputs,
            SocketKind::Output => &self.outputs,
        };
        slots.get(key.index).copied().flatten()
    }

    pub fn input(&self, index: usize) -> Option<SocketRect> {
        self.get(SocketKey::input(index))
    }

    pub fn output(&self, index: usize) -> Option<SocketRect> {
        self.get(SocketKey::output(index))
    }

    /// True once the first input and the first output are both measured
    ///
    /// The rope must not be drawn before this holds.
    pub fn is_ready(&self) -> bool {
        self.input(0).is_some() && self.output(0).is_some()
    }

    /// Index of the first measured socket of `kind` containing `pos`
    pub fn hit_test(&self, kind: SocketKind, pos: Position) -> Option<usize> {
        let slots = match kind {
            SocketKind::Input => &self.inputs,
            SocketKind::Output => &self.outputs,
        };
        slots
            .iter()
            .position(|slot| slot.is_some_and(|rect| rect.contains(pos)))
    }
}
