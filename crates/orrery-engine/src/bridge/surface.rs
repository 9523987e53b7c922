//! `RenderSurface` that serializes each frame into the shared f32 buffer.

use log::warn;

use super::protocol::*;
use crate::api::types::FrameEvent;
use crate::renderer::traits::{FrameView, RenderSurface};
use crate::ui::layout::SurfaceSize;

pub struct SharedBufferSurface {
    layout: ProtocolLayout,
    buffer: Vec<f32>,
    size: SurfaceSize,
    stars_written: bool,
}

impl SharedBufferSurface {
    pub fn new(layout: ProtocolLayout) -> Self {
        let mut buffer = vec![0.0; layout.buffer_total_floats];
        buffer[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        buffer[HEADER_MAX_SPHERES] = layout.max_spheres as f32;
        buffer[HEADER_MAX_LIGHTS] = layout.max_lights as f32;
        buffer[HEADER_MAX_EVENTS] = layout.max_events as f32;
        buffer[HEADER_MAX_STARS] = layout.max_stars as f32;
        Self {
            layout,
            buffer,
            size: SurfaceSize::default(),
            stars_written: false,
        }
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    pub fn buffer(&self) -> &[f32] {
        &self.buffer
    }

    pub fn ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Copy `items` into the section at `offset`, truncated to `max` items.
    /// Returns how many were written.
    fn write_section<T: bytemuck::Pod>(&mut self, offset: usize, max: usize, items: &[T]) -> usize {
        let n = items.len().min(max);
        let floats: &[f32] = bytemuck::cast_slice(&items[..n]);
        self.buffer[offset..offset + floats.len()].copy_from_slice(floats);
        n
    }

    fn write_events(&mut self, events: &[FrameEvent]) -> usize {
        if events.len() > self.layout.max_events {
            warn!("Dropping {} frame events over capacity", events.len() - self.layout.max_events);
        }
        self.write_section(self.layout.event_data_offset, self.layout.max_events, events)
    }
}

impl RenderSurface for SharedBufferSurface {
    fn backend(&self) -> &'static str {
        "shared-buffer"
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.buffer[HEADER_SURFACE_WIDTH] = size.width;
        self.buffer[HEADER_SURFACE_HEIGHT] = size.height;
    }

    fn render(&mut self, frame: &FrameView<'_>) {
        let camera = [frame.camera.uniform()];
        self.write_section(self.layout.camera_offset, 1, &camera);

        let spheres: Vec<_> = frame.scene.sphere_instances().collect();
        let sphere_count = self.write_section(self.layout.sphere_data_offset, self.layout.max_spheres, &spheres);

        let lights = frame.scene.lights();
        let light_count = self.write_section(self.layout.light_data_offset, self.layout.max_lights, lights.lights());
        let ambient = lights.ambient();
        let at = self.layout.ambient_offset;
        self.buffer[at..at + AMBIENT_FLOATS].copy_from_slice(&[ambient.r, ambient.g, ambient.b, 0.0]);

        let event_count = self.write_events(frame.events);

        if !self.stars_written {
            let stars = frame.scene.stars();
            let star_count = self.write_section(self.layout.star_data_offset, self.layout.max_stars, stars.stars());
            self.buffer[HEADER_STAR_COUNT] = star_count as f32;
            self.buffer[HEADER_STAR_SIZE] = stars.size;
            self.stars_written = true;
        }

        self.buffer[HEADER_FRAME_COUNTER] = frame.frame as f32;
        self.buffer[HEADER_SURFACE_WIDTH] = frame.size.width;
        self.buffer[HEADER_SURFACE_HEIGHT] = frame.size.height;
        self.buffer[HEADER_SPHERE_COUNT] = sphere_count as f32;
        self.buffer[HEADER_LIGHT_COUNT] = light_count as f32;
        self.buffer[HEADER_EVENT_COUNT] = event_count as f32;
        self.buffer[HEADER_THEME] = frame.theme.as_f32();
        self.buffer[HEADER_RUN_STATE] = frame.run_state.as_f32();
        self.buffer[HEADER_CAMERA_RADIUS] = frame.camera_radius;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::OrreryConfig;
    use crate::core::scene::SceneGraph;
    use crate::driver::RunState;
    use crate::renderer::camera::Camera3D;
    use crate::ui::widgets::Theme;

    fn config() -> OrreryConfig {
        let mut config = OrreryConfig::default();
        config.scene.star_count = 4;
        config
    }

    fn render_once(surface: &mut SharedBufferSurface, scene: &SceneGraph, events: &[FrameEvent], frame: u64) {
        let camera = Camera3D::default();
        surface.render(&FrameView {
            frame,
            scene,
            camera: &camera,
            camera_radius: 30.0,
            size: SurfaceSize::new(800.0, 600.0),
            theme: Theme::Light,
            run_state: RunState::Paused,
            events,
        });
    }

    #[test]
    fn header_carries_capacities() {
        let surface = SharedBufferSurface::new(ProtocolLayout::from_config(&config()));
        let buf = surface.buffer();
        assert_eq!(buf[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(buf[HEADER_MAX_SPHERES], 9.0);
        assert_eq!(buf[HEADER_MAX_STARS], 4.0);
        assert_eq!(surface.len(), surface.layout().buffer_total_floats);
    }

    #[test]
    fn render_writes_scene() {
        let config = config();
        let scene = SceneGraph::from_config(&config);
        let mut surface = SharedBufferSurface::new(ProtocolLayout::from_config(&config));
        let events = [FrameEvent::new(FrameEvent::RUN_STATE, 1.0, 0.0, 0.0)];
        render_once(&mut surface, &scene, &events, 7);

        let layout = surface.layout().clone();
        let buf = surface.buffer();
        assert_eq!(buf[HEADER_FRAME_COUNTER], 7.0);
        assert_eq!(buf[HEADER_SPHERE_COUNT], 9.0);
        assert_eq!(buf[HEADER_LIGHT_COUNT], 1.0);
        assert_eq!(buf[HEADER_EVENT_COUNT], 1.0);
        assert_eq!(buf[HEADER_STAR_COUNT], 4.0);
        assert_eq!(buf[HEADER_THEME], 1.0);
        assert_eq!(buf[HEADER_RUN_STATE], 1.0);
        assert_eq!(buf[HEADER_CAMERA_RADIUS], 30.0);

        // Sun first: radius 2 at the origin.
        let sun = layout.sphere_data_offset;
        assert_eq!(&buf[sun..sun + 4], &[0.0, 0.0, 0.0, 2.0]);
        // Mercury next at (4, 0, 0).
        let mercury = sun + SPHERE_FLOATS;
        assert_eq!(&buf[mercury..mercury + 3], &[4.0, 0.0, 0.0]);

        let ev = layout.event_data_offset;
        assert_eq!(&buf[ev..ev + 2], &[FrameEvent::RUN_STATE, 1.0]);
        // Light intensity.
        assert_eq!(buf[layout.light_data_offset + 6], 1.5);
    }

    #[test]
    fn star_size_comes_from_config() {
        let mut config = config();
        config.scene.star_size = 0.75;
        let scene = SceneGraph::from_config(&config);
        let mut surface = SharedBufferSurface::new(ProtocolLayout::from_config(&config));
        render_once(&mut surface, &scene, &[], 1);
        assert_eq!(surface.buffer()[HEADER_STAR_SIZE], 0.75);
    }

    #[test]
    fn stars_written_once() {
        let config = config();
        let scene = SceneGraph::from_config(&config);
        let mut surface = SharedBufferSurface::new(ProtocolLayout::from_config(&config));
        render_once(&mut surface, &scene, &[], 1);
        let offset = surface.layout().star_data_offset;
        let first = surface.buffer()[offset];
        assert_eq!(first, scene.stars().stars()[0].x);

        surface.buffer[offset] = 12345.0;
        render_once(&mut surface, &scene, &[], 2);
        assert_eq!(surface.buffer()[offset], 12345.0);
    }

    #[test]
    fn excess_events_are_truncated() {
        let config = config();
        let scene = SceneGraph::from_config(&config);
        let mut surface = SharedBufferSurface::new(ProtocolLayout::new(9, 1, 2, 4));
        let events = [FrameEvent::default(); 5];
        render_once(&mut surface, &scene, &events, 1);
        assert_eq!(surface.buffer()[HEADER_EVENT_COUNT], 2.0);
    }

    #[test]
    fn resize_updates_header() {
        let mut surface = SharedBufferSurface::new(ProtocolLayout::new(1, 1, 1, 1));
        surface.resize(SurfaceSize::new(1024.0, 614.4));
        assert_eq!(surface.size().width, 1024.0);
        assert_eq!(surface.buffer()[HEADER_SURFACE_WIDTH], 1024.0);
    }
}
