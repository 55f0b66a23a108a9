// View handle registry
//
// Each socket view reports the area it was laid out in while it is drawn
// (LayoutSettled). The key is queued, and its origin is read back after the
// frame (PositionResolved). A handle that moves again before resolution
// resolves to the newest area. A handle whose view stops being drawn is
// queued as released so its measured rectangle can be dropped.

use super::{PositionResolved, SocketError, SocketKey};
use ratatui::layout::{Position, Rect};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct ViewHandles {
    areas: HashMap<SocketKey, Rect>,
    pending: Vec<SocketKey>,
    released: Vec<SocketKey>,
}

impl ViewHandles {
    pub fn new() -> Self {
        Self::default()
    }

    /// LayoutSettled: record the area a socket view was drawn into
    ///
    /// Queues the key for resolution only when the area changed. Returns
    /// whether it was queued.
    pub fn layout(&mut self, key: SocketKey, area: Rect) -> bool {
        if self.areas.get(&key) == Some(&area) {
            return false;
        }
        self.areas.insert(key, area);
        if !self.pending.contains(&key) {
            self.pending.push(key);
        }
        tracing::debug!(socket = %key, x = area.x, y = area.y, "layout settled");
        true
    }

    /// Current absolute origin of a socket view
    pub fn origin(&self, key: SocketKey) -> Result<Position, SocketError> {
        self.areas
            .get(&key)
            .map(|area| Position::new(area.x, area.y))
            .ok_or(SocketError::MissingHandle(key))
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty() || !self.released.is_empty()
    }

    /// Drain the queue, reading each origin back from its handle
    ///
    /// Keys whose handle has vanished come back as errors and are dropped.
    pub fn resolve(&mut self) -> Vec<Result<PositionResolved, SocketError>> {
        let pending = std::mem::take(&mut self.pending);
        pending
            .into_iter()
            .map(|key| self.origin(key).map(|origin| PositionResolved { key, origin }))
            .collect()
    }

    /// Forget a handle, e.g. when its view is no longer drawn
    ///
    /// Only a handle that was laid out is queued as released, so calling
    /// this every frame for a hidden view is cheap.
    pub fn release(&mut self, key: SocketKey) {
        if self.areas.remove(&key).is_some() {
            self.pending.retain(|k| *k != key);
            self.released.push(key);
            tracing::debug!(socket = %key, "view handle released");
        }
    }

    /// Drain the keys released since the last call
    pub fn take_released(&mut self) -> Vec<SocketKey> {
        std::mem::take(&mut self.released)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_queues_only_on_change() {
        let mut handles = ViewHandles::new();
        let key = SocketKey::input(0);

        assert!(handles.layout(key, Rect::new(10, 20, 6, 6)));
        assert!(!handles.layout(key, Rect::new(10, 20, 6, 6)));
        assert_eq!(handles.resolve().len(), 1);

        // Same area again after resolution: nothing new to do
        assert!(!handles.layout(key, Rect::new(10, 20, 6, 6)));
        assert!(!handles.has_pending());

        // Moved
        assert!(handles.layout(key, Rect::new(12, 20, 6, 6)));
        assert!(handles.has_pending());
    }

    #[test]
    fn test_resolve_reads_latest_area() {
        let mut handles = ViewHandles::new();
        let key = SocketKey::output(1);

        handles.layout(key, Rect::new(1, 1, 6, 6));
        handles.layout(key, Rect::new(40, 9, 6, 6));

        let resolved = handles.resolve();
        assert_eq!(
            resolved,
            vec![Ok(PositionResolved {
                key,
                origin: Position::new(40, 9),
            })]
        );
        assert!(!handles.has_pending());
    }

    #[test]
    fn test_release_drops_pending_and_queues_key() {
        let mut handles = ViewHandles::new();
        let key = SocketKey::input(2);

        handles.layout(key, Rect::new(3, 3, 6, 6));
        handles.release(key);
        assert!(handles.has_pending());
        assert!(handles.resolve().is_empty());
        assert_eq!(handles.take_released(), vec![key]);
        assert!(!handles.has_pending());

        // Releasing again while still hidden queues nothing
        handles.release(key);
        assert!(handles.take_released().is_empty());

        // Shown again: measured from scratch
        assert!(handles.layout(key, Rect::new(3, 3, 6, 6)));
    }

    #[test]
    fn test_missing_origin() {
        let handles = ViewHandles::new();
        assert_eq!(
            handles.origin(SocketKey::output(0)),
            Err(SocketError::MissingHandle(SocketKey::output(0)))
        );
    }
}
