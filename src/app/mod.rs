// Application state management
//
// This module contains the main AppState struct (the connection
// orchestrator) and re-exports configuration types from the config
// submodule.

pub mod config;
pub mod event;

// Re-export config types for convenience
pub use config::{RopeBackend, ThemeMode, UnitCatalog, UnitDefinition};

use crate::rope::{PointerEvent, RopeGesture};
use crate::sockets::{SocketRegistry, ViewHandles};
use config::SOCKET_SIZE;

/// The input/output pair currently linked by the rope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveConnection {
    pub input: usize,
    pub output: usize,
    /// True while the user is dragging the plug
    pub is_gesture_active: bool,
}

/// Main application state
///
/// Owns the socket registry and the active connection. All mutations go
/// through methods here; the rope gesture only proposes new connections.
pub struct AppState {
    /// Whether the application is running
    pub running: bool,

    /// Static unit definitions (fixes the socket counts)
    pub catalog: UnitCatalog,

    /// Measured socket rectangles
    pub registry: SocketRegistry,

    /// Last laid-out area of each socket view, injected into the views
    pub handles: ViewHandles,

    /// Currently linked input/output pair
    pub active: ActiveConnection,

    /// Drag state of the rope
    pub gesture: RopeGesture,

    /// Which renderer draws the rope
    pub backend: RopeBackend,

    /// Dark/light colour scheme
    pub theme_mode: ThemeMode,

    /// Whether the last frame drew the rope
    pub rope_mounted: bool,

    /// Width of the last frame, for hit-testing the header controls
    pub frame_width: u16,
}

impl AppState {
    /// Create a new AppState for the given units
    pub fn new(catalog: UnitCatalog) -> Self {
        let registry = SocketRegistry::new(catalog.inputs.len(), catalog.outputs.len());
        Self {
            running: true,
            catalog,
            registry,
            handles: ViewHandles::new(),
            active: ActiveConnection::default(),
            gesture: RopeGesture::new(),
            backend: RopeBackend::default(),
            theme_mode: ThemeMode::default(),
            rope_mounted: false,
            frame_width: 0,
        }
    }

    pub fn with_theme(mut self, theme_mode: ThemeMode) -> Self {
        self.theme_mode = theme_mode;
        self
    }

    /// Resolve every socket whose layout settled since the last call
    ///
    /// Call after each frame. Sockets whose views were released lose their
    /// rectangle first. Each resolution writes a single index; failures are
    /// logged and skipped. Returns how many were stored.
    pub fn resolve_positions(&mut self) -> usize {
        if !self.handles.has_pending() {
            return 0;
        }

        for key in self.handles.take_released() {
            match self.registry.clear(key) {
                Ok(()) => tracing::debug!(socket = %key, "socket rectangle cleared"),
                Err(e) => tracing::warn!(error = %e, "Failed to clear socket rectangle"),
            }
        }

        let mut stored = 0;
        for result in self.handles.resolve() {
            let resolved = match result {
                Ok(resolved) => resolved,
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping socket position resolution");
                    continue;
                }
            };

            if resolved.origin.x == 0 && resolved.origin.y == 0 {
                // Stored anyway, no retry
                tracing::debug!(socket = %resolved.key, "resolved degenerate origin");
            }

            match self.registry.apply(resolved, SOCKET_SIZE) {
                Ok(rect) => {
                    tracing::debug!(
                        socket = %resolved.key,
                        start_x = rect.start_x,
                        start_y = rect.start_y,
                        "position resolved"
                    );
                    stored += 1;
                }
                Err(e) => tracing::warn!(error = %e, "Failed to store socket rectangle"),
            }
        }
        stored
    }

    /// Replace the active connection with whatever the rope reported
    pub fn on_plugged(&mut self, update: ActiveConnection) {
        if !update.is_gesture_active && update != self.active {
            tracing::info!(
                input = update.input,
                output = update.output,
                "rope plugged"
            );
        }
        self.active = update;
    }

    /// Forward a pointer event to the rope gesture
    ///
    /// Ignored until the rope can be drawn, i.e. while the first input or
    /// the first output is unmeasured.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if !self.registry.is_ready() {
            return;
        }
        if let Some(update) = self.gesture.handle(event, &self.registry, self.active) {
            self.on_plugged(update);
        }
    }

    /// Switch the rope renderer; connection data is left alone
    pub fn toggle_backend(&mut self) {
        self.backend = self.backend.toggled();
        tracing::info!(backend = self.backend.label(), "rope backend switched");
    }

    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(UnitCatalog::default())
    }
}

/// True iff a connection exists, no gesture is in progress and it targets `index`
pub fn is_active_output(index: usize, active: Option<&ActiveConnection>) -> bool {
    active.is_some_and(|a| !a.is_gesture_active && a.output == index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sockets::{SocketKey, SocketRect};
    use proptest::prelude::*;
    use ratatui::layout::{Position, Rect};

    const S: u16 = SOCKET_SIZE;

    #[test]
    fn test_new_state_defaults() {
        let app = AppState::default();
        assert!(app.running);
        assert_eq!(
            app.active,
            ActiveConnection {
                input: 0,
                output: 0,
                is_gesture_active: false,
            }
        );
        assert_eq!(app.registry.inputs.len(), app.catalog.inputs.len());
        assert_eq!(app.registry.outputs.len(), app.catalog.outputs.len());
        assert!(!app.registry.is_ready());
        assert_eq!(app.backend, RopeBackend::Canvas);
    }

    #[test]
    fn test_alternate_catalog_sizes() {
        let defaults = UnitCatalog::default();
        let catalog = UnitCatalog::new(
            defaults.inputs[..1].to_vec(),
            defaults.outputs.iter().cycle().take(7).cloned().collect(),
        );
        let app = AppState::new(catalog);
        assert_eq!(app.registry.inputs.len(), 1);
        assert_eq!(app.registry.outputs.len(), 7);
    }

    #[test]
    fn test_on_plugged_replaces_without_validation() {
        let mut app = AppState::default();
        let update = ActiveConnection {
            input: 99,
            output: 42,
            is_gesture_active: false,
        };
        app.on_plugged(update);
        assert_eq!(app.active, update);
    }

    #[test]
    fn test_active_output_matches_index() {
        let active = ActiveConnection {
            input: 2,
            output: 2,
            is_gesture_active: false,
        };
        assert!(is_active_output(2, Some(&active)));
        assert!(!is_active_output(1, Some(&active)));
        assert!(!is_active_output(2, None));
    }

    #[test]
    fn test_resolve_positions_end_to_end() {
        // Layout settles for input[0] at (10,20) and output[0] at (100,20)
        let mut app = AppState::default();
        app.handles.layout(SocketKey::input(0), Rect::new(10, 20, S, S));
        app.handles.layout(SocketKey::output(0), Rect::new(100, 20, S, S));

        // Nothing stored before the second phase
        assert!(!app.registry.is_ready());

        assert_eq!(app.resolve_positions(), 2);
        assert_eq!(
            app.registry.input(0),
            Some(SocketRect {
                start_x: 10,
                end_x: 10 + S,
                start_y: 20,
                end_y: 20 + S,
            })
        );
        assert_eq!(
            app.registry.output(0),
            Some(SocketRect {
                start_x: 100,
                end_x: 100 + S,
                start_y: 20,
                end_y: 20 + S,
            })
        );
        assert!(app.registry.is_ready());

        // Queue is drained
        assert_eq!(app.resolve_positions(), 0);
    }

    #[test]
    fn test_resolve_skips_out_of_catalog_keys() {
        let mut app = AppState::default();
        app.handles.layout(SocketKey::output(50), Rect::new(1, 1, S, S));
        app.handles.layout(SocketKey::input(1), Rect::new(5, 5, S, S));

        assert_eq!(app.resolve_positions(), 1);
        assert!(app.registry.input(1).is_some());
    }

    #[test]
    fn test_pointer_drag_updates_active_connection() {
        let mut app = AppState::default();
        app.handles.layout(SocketKey::input(0), Rect::new(0, 0, S, S));
        app.handles.layout(SocketKey::input(1), Rect::new(10, 0, S, S));
        app.handles.layout(SocketKey::output(0), Rect::new(0, 20, S, S));
        app.handles.layout(SocketKey::output(3), Rect::new(30, 20, S, S));
        app.resolve_positions();

        app.handle_pointer(PointerEvent::Down(Position::new(11, 1)));
        assert!(app.active.is_gesture_active);
        assert_eq!(app.active.input, 1);
        // No output is highlighted mid-gesture
        assert!((0..4).all(|i| !is_active_output(i, Some(&app.active))));

        app.handle_pointer(PointerEvent::Drag(Position::new(20, 10)));
        app.handle_pointer(PointerEvent::Up(Position::new(31, 21)));
        assert_eq!(
            app.active,
            ActiveConnection {
                input: 1,
                output: 3,
                is_gesture_active: false,
            }
        );
        assert!(is_active_output(3, Some(&app.active)));
    }

    #[test]
    fn test_pointer_ignored_until_rope_can_mount() {
        let mut app = AppState::default();
        app.handles.layout(SocketKey::output(0), Rect::new(10, 20, S, S));
        app.handles.layout(SocketKey::input(1), Rect::new(20, 0, S, S));
        app.resolve_positions();
        assert!(!app.registry.is_ready());

        app.handle_pointer(PointerEvent::Down(Position::new(11, 21)));
        app.handle_pointer(PointerEvent::Down(Position::new(21, 1)));
        assert_eq!(app.active, ActiveConnection::default());
        assert_eq!(app.gesture.plug_position(), None);
    }

    #[test]
    fn test_released_socket_loses_its_rectangle() {
        let mut app = AppState::default();
        app.handles.layout(SocketKey::input(0), Rect::new(0, 0, S, S));
        app.handles.layout(SocketKey::output(0), Rect::new(0, 20, S, S));
        app.resolve_positions();
        assert!(app.registry.is_ready());

        app.handles.release(SocketKey::output(0));
        assert_eq!(app.resolve_positions(), 0);
        assert_eq!(app.registry.output(0), None);
        assert!(app.registry.input(0).is_some());
        assert!(!app.registry.is_ready());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// A gesture in progress suppresses every highlight
        #[test]
        fn prop_gesture_suppresses_highlight(
            input in 0usize..8,
            output in 0usize..8,
            index in 0usize..8,
        ) {
            let active = ActiveConnection { input, output, is_gesture_active: true };
            prop_assert!(!is_active_output(index, Some(&active)));
        }

        /// Switching backends never changes the registry or the connection
        #[test]
        fn prop_backend_toggle_leaves_model_alone(
            toggles in 1usize..6,
            input in 0usize..4,
            output in 0usize..4,
            gesture in any::<bool>(),
            x in 0u16..200,
            y in 0u16..60,
        ) {
            let mut app = AppState::default();
            app.handles.layout(SocketKey::input(0), Rect::new(x, y, S, S));
            app.handles.layout(SocketKey::output(output), Rect::new(y, x, S, S));
            app.resolve_positions();
            app.on_plugged(ActiveConnection { input, output, is_gesture_active: gesture });

            let registry_before = app.registry.clone();
            let active_before = app.active;

            for _ in 0..toggles {
                app.toggle_backend();
            }

            prop_assert_eq!(&app.registry, &registry_before);
            prop_assert_eq!(app.active, active_before);
        }
    }
}
