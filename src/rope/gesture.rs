// Rope drag gesture
//
// Turns pointer events into Active Connection updates. The orchestrator
// stores whatever is emitted; this module decides what to emit.

use crate::app::ActiveConnection;
use crate::sockets::{SocketKind, SocketRegistry};
use ratatui::layout::Position;

/// Pointer input, already translated to terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down(Position),
    Drag(Position),
    Up(Position),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Drag {
    input: usize,
    /// Output the plug was in when the drag started (snap-back target)
    from_output: usize,
    plug: Position,
}

/// State of an in-progress drag, if any
#[derive(Debug, Default)]
pub struct RopeGesture {
    drag: Option<Drag>,
}

impl RopeGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the loose plug end is while dragging
    pub fn plug_position(&self) -> Option<Position> {
        self.drag.map(|d| d.plug)
    }

    /// Feed one pointer event
    ///
    /// Returns the new Active Connection when the gesture starts or
    /// completes. Drags in between only move the plug.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        registry: &SocketRegistry,
        active: ActiveConnection,
    ) -> Option<ActiveConnection> {
        match event {
            // A press while already dragging (missed Up) restarts the gesture
            PointerEvent::Down(pos) => {
                let input = if let Some(input) = registry.hit_test(SocketKind::Input, pos) {
                    input
                } else if !active.is_gesture_active
                    && registry
                        .output(active.output)
                        .is_some_and(|rect| rect.contains(pos))
                {
                    // Picking up the plug from where it is plugged in
                    active.input
                } else {
                    return None;
                };

                self.drag = Some(Drag {
                    input,
                    from_output: active.output,
                    plug: pos,
                });
                tracing::debug!(input, x = pos.x, y = pos.y, "rope gesture started");
                Some(ActiveConnection {
                    input,
                    output: active.output,
                    is_gesture_active: true,
                })
            }
            PointerEvent::Drag(pos) => {
                if let Some(drag) = self.drag.as_mut() {
                    drag.plug = pos;
                }
                None
            }
            PointerEvent::Up(pos) => {
                let drag = self.drag.take()?;
                let output = match registry.hit_test(SocketKind::Output, pos) {
                    Some(output) => output,
                    None => {
                        tracing::debug!(
                            input = drag.input,
                            output = drag.from_output,
                            "rope dropped outside any output, snapping back"
                        );
                        drag.from_output
                    }
                };
                Some(ActiveConnection {
                    input: drag.input,
                    output,
                    is_gesture_active: false,
                })
            }
        }
    }
}
