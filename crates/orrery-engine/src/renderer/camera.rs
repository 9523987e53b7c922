//! Orbit camera: interaction state plus the derived perspective camera.
//!
//! `CameraState` is what input mutates (angles, zoom target). `Camera3D` is a
//! pure function of that state and the surface aspect, recomputed per frame.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;

use crate::api::config::CameraConfig;
use crate::picking::Ray;

/// Orbit angles and zoom around the sun.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    /// Azimuth around +Y (radians, unbounded).
    yaw: f32,
    /// Elevation (radians), always within [-π/2, π/2].
    pitch: f32,
    /// Radius actually used this frame; chases `target_radius`.
    current_radius: f32,
    /// Radius requested by input, always within [min_radius, max_radius].
    target_radius: f32,
    /// Click-zoom toggle.
    zoomed: bool,
    base_radius: f32,
    min_radius: f32,
    max_radius: f32,
    smoothing: f32,
    click_zoom_factor: f32,
}

impl CameraState {
    pub fn new(config: &CameraConfig) -> Self {
        let base = config.base_radius.clamp(config.min_radius, config.max_radius);
        Self {
            yaw: 0.0,
            pitch: 0.0,
            current_radius: base,
            target_radius: base,
            zoomed: false,
            base_radius: base,
            min_radius: config.min_radius,
            max_radius: config.max_radius,
            smoothing: config.smoothing,
            click_zoom_factor: config.click_zoom_factor,
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn current_radius(&self) -> f32 {
        self.current_radius
    }

    pub fn target_radius(&self) -> f32 {
        self.target_radius
    }

    pub fn base_radius(&self) -> f32 {
        self.base_radius
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    /// Rotate by angle deltas (radians). Pitch is clamped to the poles.
    /// Non-finite deltas are ignored.
    pub fn orbit(&mut self, d_yaw: f32, d_pitch: f32) {
        if d_yaw.is_finite() {
            self.yaw += d_yaw;
        }
        if d_pitch.is_finite() {
            self.pitch = (self.pitch + d_pitch).clamp(-FRAC_PI_2, FRAC_PI_2);
        }
    }

    /// Move the zoom target by `delta` world units, clamped to the radius bounds.
    pub fn adjust_target_radius(&mut self, delta: f32) {
        self.set_target_radius(self.target_radius + delta);
    }

    /// Set the zoom target, clamped to the radius bounds. NaN is ignored.
    pub fn set_target_radius(&mut self, radius: f32) {
        if !radius.is_nan() {
            self.target_radius = radius.clamp(self.min_radius, self.max_radius);
        }
    }

    /// Flip the click-zoom flag and jump the target to the matching preset.
    /// Overwrites any pinch-derived target. Returns the new flag.
    pub fn toggle_click_zoom(&mut self) -> bool {
        self.zoomed = !self.zoomed;
        let radius = if self.zoomed {
            self.base_radius * self.click_zoom_factor
        } else {
            self.base_radius
        };
        self.set_target_radius(radius);
        self.zoomed
    }

    /// One step of exponential smoothing of the radius toward the target.
    pub fn smooth_radius(&mut self) {
        self.current_radius += (self.target_radius - self.current_radius) * self.smoothing;
    }

    /// Eye position on the orbit sphere (spherical → Cartesian).
    pub fn eye(&self) -> Vec3 {
        let r = self.current_radius;
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(r * sin_yaw * cos_pitch, r * sin_pitch, r * cos_yaw * cos_pitch)
    }

    /// Camera up vector: the orbit tangent toward increasing pitch.
    /// Agrees with world +Y away from the poles and never degenerates at them.
    pub fn up(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(-sin_yaw * sin_pitch, cos_pitch, -cos_yaw * sin_pitch)
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// Eye position (w = 1).
    pub eye: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 20;
}

/// Perspective camera looking at the sun from the orbit state.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera3D {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Surface width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Camera3D {
    pub fn new(config: &CameraConfig, aspect: f32) -> Self {
        let mut camera = Self {
            fov_y: config.fov_y_degrees.to_radians(),
            aspect: 1.0,
            near: config.near,
            far: config.far,
            eye: Vec3::new(0.0, 0.0, config.base_radius),
            target: Vec3::ZERO,
            up: Vec3::Y,
        };
        camera.set_aspect(aspect);
        camera
    }

    /// Update the aspect ratio (e.g. on surface resize).
    /// Degenerate values fall back to square.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 };
    }

    /// Recompute eye and orientation from the orbit state. Always looks at the origin.
    pub fn update_from(&mut self, state: &CameraState) {
        self.eye = state.eye();
        self.up = state.up();
        self.target = Vec3::ZERO;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Right-handed perspective, depth in [0, 1] (WebGPU convention).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection().to_cols_array_2d(),
            eye: self.eye.extend(1.0).to_array(),
        }
    }

    /// Project a world point to normalized device coordinates.
    /// Returns `None` for points behind the camera.
    pub fn project(&self, world: Vec3) -> Option<Vec3> {
        let clip = self.view_projection() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(clip.truncate() / clip.w)
    }

    /// Ray from the eye through a point in normalized device coordinates
    /// (x right, y up, both in [-1, 1]).
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let on_near_plane = inv.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let mut direction = (on_near_plane - self.eye).normalize_or_zero();
        if direction == Vec3::ZERO {
            direction = (self.target - self.eye).normalize_or_zero();
        }
        Ray::new(self.eye, direction)
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new(&CameraConfig::default(), 1.0)
    }
}
