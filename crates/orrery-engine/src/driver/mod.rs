//! Frame driver: owns all application state and runs one frame per tick.
//!
//! Input and commands are queued by the host and consumed at the start of the
//! next tick, so the driver is the only writer of scene and camera state.
//! Hover picking is the exception: it only reads, and runs immediately
//! against the camera of the last rendered frame. The hovered position is
//! picked again every frame so the tooltip follows moving planets.

use glam::Vec2;
use log::{debug, info};

use crate::api::config::OrreryConfig;
use crate::api::types::FrameEvent;
use crate::core::scene::SceneGraph;
use crate::core::time::FrameClock;
use crate::input::command::{Command, CommandQueue};
use crate::input::controller::InputController;
use crate::input::queue::{InputEvent, InputQueue};
use crate::picking::{hit_test, pointer_ray, PickHit};
use crate::renderer::camera::{Camera3D, CameraState};
use crate::renderer::traits::{FrameView, RenderSurface};
use crate::ui::layout::SurfaceSize;
use crate::ui::tooltip::Tooltip;
use crate::ui::widgets::{pause_button_label, SliderSpec, Theme};

/// Whether the simulation advances on each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        }
    }

    pub fn is_paused(self) -> bool {
        self == RunState::Paused
    }

    pub fn as_f32(self) -> f32 {
        match self {
            RunState::Running => 0.0,
            RunState::Paused => 1.0,
        }
    }
}

pub struct FrameDriver<S: RenderSurface> {
    config: OrreryConfig,
    scene: SceneGraph,
    camera_state: CameraState,
    camera: Camera3D,
    controller: InputController,
    input: InputQueue,
    commands: CommandQueue,
    clock: FrameClock,
    theme: Theme,
    run_state: RunState,
    tooltip: Tooltip,
    /// Last hovered surface pixel, re-picked each frame.
    hover_pointer: Option<Vec2>,
    events: Vec<FrameEvent>,
    size: SurfaceSize,
    surface: S,
    frame: u64,
    active: bool,
}

impl<S: RenderSurface> FrameDriver<S> {
    /// Build the scene and camera. The driver starts active; the host calls
    /// `resize` with the real viewport before the first tick.
    pub fn new(config: OrreryConfig, mut surface: S) -> Self {
        let scene = SceneGraph::from_config(&config);
        let camera_state = CameraState::new(&config.camera);
        let size = SurfaceSize::default();
        let mut camera = Camera3D::new(&config.camera, size.aspect());
        camera.update_from(&camera_state);
        surface.resize(size);
        info!("Frame driver ready on '{}' surface", surface.backend());
        Self {
            controller: InputController::new(&config.camera),
            config,
            scene,
            camera_state,
            camera,
            input: InputQueue::new(),
            commands: CommandQueue::new(),
            clock: FrameClock::new(),
            theme: Theme::default(),
            run_state: RunState::default(),
            tooltip: Tooltip::new(),
            hover_pointer: None,
            events: Vec::new(),
            size,
            surface,
            frame: 0,
            active: true,
        }
    }

    // -- Scheduling --

    pub fn start(&mut self) {
        if !self.active {
            self.active = true;
            self.clock.reset();
            debug!("Frame driver started");
        }
    }

    pub fn stop(&mut self) {
        if self.active {
            self.active = false;
            debug!("Frame driver stopped");
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Run one frame for a display-refresh timestamp in milliseconds.
    /// Returns false (and does nothing) while stopped.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if !self.active {
            return false;
        }
        let delta = self.clock.sample(now_ms);
        self.step_frame(delta);
        true
    }

    /// Run `n` frames of exactly `dt` seconds each, bypassing the clock.
    /// Returns the number of frames run (0 while stopped).
    pub fn run_ticks(&mut self, n: u32, dt: f32) -> u32 {
        if !self.active {
            return 0;
        }
        for _ in 0..n {
            self.step_frame(dt);
        }
        n
    }

    /// One frame with an explicit delta: apply queued commands, then queued
    /// input (custom-event commands included, in input order), advance the
    /// simulation unless paused, smooth the camera, refresh the hover pick,
    /// render.
    pub fn step_frame(&mut self, delta: f32) {
        self.events.clear();

        for command in self.commands.drain() {
            self.apply_command(command);
        }
        for event in self.input.drain() {
            self.apply_input(event);
        }

        if self.run_state == RunState::Running {
            self.scene.step(delta);
        }

        self.camera_state.smooth_radius();
        self.camera.update_from(&self.camera_state);

        if let Some(pixel) = self.hover_pointer {
            self.pick_at(pixel);
        }

        self.frame += 1;
        let view = FrameView {
            frame: self.frame,
            scene: &self.scene,
            camera: &self.camera,
            camera_radius: self.camera_state.current_radius(),
            size: self.size,
            theme: self.theme,
            run_state: self.run_state,
            events: &self.events,
        };
        self.surface.render(&view);
    }

    // -- Host-facing input --

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Queue a command for the next tick. Commands apply before any input
    /// queued for that tick, including `InputEvent::Custom` commands.
    pub fn push_command(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Apply a new viewport size immediately.
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        self.size = SurfaceSize::for_viewport(viewport_width, viewport_height, &self.config.layout);
        self.camera.set_aspect(self.size.aspect());
        self.surface.resize(self.size);
        debug!("Surface resized to {}×{}", self.size.width, self.size.height);
    }

    /// Pick the planet under a pointer position (surface pixels) and update
    /// the tooltip. The tooltip position is in the same surface pixels.
    /// The position is remembered and picked again after every frame.
    pub fn hover(&mut self, x: f32, y: f32) -> Option<PickHit> {
        let pixel = Vec2::new(x, y);
        if !pixel.is_finite() {
            self.hover_leave();
            return None;
        }
        self.hover_pointer = Some(pixel);
        self.pick_at(pixel)
    }

    /// Pointer left the surface.
    pub fn hover_leave(&mut self) {
        self.hover_pointer = None;
        self.tooltip.hide();
    }

    // -- Internal --

    fn pick_at(&mut self, pixel: Vec2) -> Option<PickHit> {
        let ray = pointer_ray(&self.camera, pixel, self.size);
        let hit = hit_test(&ray, self.scene.pick_targets());
        match hit.and_then(|h| self.scene.get(h.id)) {
            Some(planet) => {
                let offset = Vec2::from(self.config.layout.tooltip_offset);
                self.tooltip.show(pixel, offset, planet.id, planet.body.name());
            }
            None => self.tooltip.hide(),
        }
        hit
    }

    fn apply_command(&mut self, command: Command) {
        match command {
            Command::SetSpeed { body, speed } => {
                if let Some(stored) = self.scene.set_speed(body, speed) {
                    debug!("Body {body} speed → {stored}");
                }
            }
            Command::TogglePause => {
                self.run_state = self.run_state.toggled();
                debug!("Run state → {:?}", self.run_state);
                self.events
                    .push(FrameEvent::new(FrameEvent::RUN_STATE, self.run_state.as_f32(), 0.0, 0.0));
            }
            Command::ToggleTheme => {
                self.theme = self.theme.toggled();
                debug!("Theme → {:?}", self.theme);
                self.events
                    .push(FrameEvent::new(FrameEvent::THEME, self.theme.as_f32(), 0.0, 0.0));
            }
        }
    }

    fn apply_input(&mut self, event: InputEvent) {
        if let InputEvent::Custom { kind, a, b, c } = event {
            if let Some(command) = Command::from_custom(kind, a, b, c) {
                self.apply_command(command);
            }
            return;
        }
        if self.controller.apply(&event, &mut self.camera_state) {
            let zoomed = if self.camera_state.is_zoomed() { 1.0 } else { 0.0 };
            self.events.push(FrameEvent::new(
                FrameEvent::ZOOM,
                zoomed,
                self.camera_state.target_radius(),
                0.0,
            ));
        }
    }

    // -- Accessors --

    pub fn config(&self) -> &OrreryConfig {
        &self.config
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn camera_state(&self) -> &CameraState {
        &self.camera_state
    }

    pub fn camera(&self) -> &Camera3D {
        &self.camera
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn pause_label(&self) -> &'static str {
        pause_button_label(self.run_state)
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Events raised during the most recent frame.
    pub fn events(&self) -> &[FrameEvent] {
        &self.events
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// One slider per planet, in creation order.
    pub fn slider_specs(&self) -> Vec<SliderSpec> {
        let step = self.config.simulation.speed_step;
        self.scene
            .planets()
            .iter()
            .enumerate()
            .map(|(i, p)| SliderSpec::for_body(i, &p.body, step))
            .collect()
    }
}
