use glam::Vec2;

/// Raw input events forwarded by the page.
/// Coordinates are CSS pixels relative to the render surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse button pressed at (x, y).
    PointerDown { x: f32, y: f32 },
    /// Mouse button released at (x, y).
    PointerUp { x: f32, y: f32 },
    /// Mouse moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// Touch began. `count` is the number of active touches; `first` is the
    /// position of the first one.
    TouchStart { count: u32, first: Vec2 },
    /// Touches moved. `second` is only meaningful when `count >= 2`.
    TouchMove { count: u32, first: Vec2, second: Vec2 },
    /// All touches ended.
    TouchEnd,
    /// A custom event from the UI layer (sliders, buttons).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events.
/// JS writes events into the queue; Rust drains them at the start of each tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::TouchEnd);
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn drain_preserves_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        q.push(InputEvent::PointerMove { x: 5.0, y: 0.0 });
        q.push(InputEvent::PointerUp { x: 5.0, y: 0.0 });
        let events = q.drain();
        assert!(matches!(events[0], InputEvent::PointerDown { .. }));
        assert!(matches!(events[2], InputEvent::PointerUp { .. }));
    }

    #[test]
    fn custom_event() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Custom { kind: 7, a: 1.5, b: 2.5, c: 3.5 });
        let events = q.drain();
        match events[0] {
            InputEvent::Custom { kind, a, b, c } => {
                assert_eq!(kind, 7);
                assert_eq!(a, 1.5);
                assert_eq!(b, 2.5);
                assert_eq!(c, 3.5);
            }
            _ => panic!("Expected Custom event"),
        }
    }
}
