use bytemuck::{Pod, Zeroable};

/// Unique identifier for a body in the scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// A state-change notification from the engine to the page.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct FrameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl FrameEvent {
    pub const FLOATS: usize = 4;

    /// Run state changed. `a` = 1.0 when paused, 0.0 when running.
    pub const RUN_STATE: f32 = 1.0;
    /// Theme changed. `a` = 1.0 for light, 0.0 for dark.
    pub const THEME: f32 = 2.0;
    /// Click-zoom toggled. `a` = 1.0 when zoomed in, `b` = new target radius.
    pub const ZOOM: f32 = 3.0;

    pub fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}
