//! Render surface contract.
//!
//! The engine never draws. Each tick it hands a `FrameView` to a
//! `RenderSurface`, which turns it into something a GPU backend can consume.
//! In the browser that is `SharedBufferSurface` (a flat f32 buffer read by the
//! page's GPU renderer); tests use an in-memory recorder.

use crate::api::types::FrameEvent;
use crate::core::scene::SceneGraph;
use crate::driver::RunState;
use crate::renderer::camera::Camera3D;
use crate::ui::layout::SurfaceSize;
use crate::ui::widgets::Theme;

/// Everything a surface needs to draw one frame. Borrowed from the driver
/// for the duration of `RenderSurface::render`.
pub struct FrameView<'a> {
    pub frame: u64,
    pub scene: &'a SceneGraph,
    pub camera: &'a Camera3D,
    /// Smoothed orbit radius the camera was placed at.
    pub camera_radius: f32,
    pub size: SurfaceSize,
    pub theme: Theme,
    pub run_state: RunState,
    /// Events raised during this tick.
    pub events: &'a [FrameEvent],
}

/// A drawing target owned by the frame driver.
pub trait RenderSurface {
    /// Backend identifier (e.g. "shared-buffer").
    fn backend(&self) -> &'static str;

    /// Called synchronously whenever the surface size changes.
    fn resize(&mut self, size: SurfaceSize);

    /// Draw one frame.
    fn render(&mut self, frame: &FrameView<'_>);
}
