//! Scene lights for the page's shading pass.
//!
//! Lights persist until explicitly removed.
//! Each frame, the surface serializes them next to the sphere instances.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::api::config::SceneConfig;
use crate::components::mesh::MeshColor;

/// A 3D point light with position, color, intensity and range.
///
/// Wire format (8 floats / 32 bytes):
/// `[x, y, z, r, g, b, intensity, range]`
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct PointLight {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
    /// Distance at which the light's contribution reaches zero (0 = infinite).
    pub range: f32,
}

impl PointLight {
    pub const FLOATS: usize = 8;

    /// Create a new point light at the given position.
    pub fn new(pos: Vec3, color: MeshColor, intensity: f32, range: f32) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            r: color.r,
            g: color.g,
            b: color.b,
            intensity,
            range,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Manages active lights and ambient color for the scene.
///
/// The ambient color defaults to white, which produces unlit output when no
/// lights are present.
#[derive(Debug, Clone)]
pub struct LightState {
    lights: Vec<PointLight>,
    ambient: MeshColor,
}

impl LightState {
    pub fn new() -> Self {
        Self {
            lights: Vec::new(),
            ambient: MeshColor::WHITE,
        }
    }

    /// The sun's light: one point light at the origin plus a dim ambient.
    pub fn from_config(config: &SceneConfig) -> Self {
        let mut state = Self::new();
        state.add(PointLight::new(
            Vec3::ZERO,
            MeshColor::from_hex(config.light_color),
            config.light_intensity,
            config.light_range,
        ));
        state.set_ambient(MeshColor::from_hex(config.ambient_color));
        state
    }

    /// Add a point light to the scene.
    pub fn add(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    /// Remove all lights.
    pub fn clear(&mut self) {
        self.lights.clear();
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    /// Number of active lights.
    pub fn count(&self) -> usize {
        self.lights.len()
    }

    pub fn set_ambient(&mut self, color: MeshColor) {
        self.ambient = color;
    }

    pub fn ambient(&self) -> MeshColor {
        self.ambient
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}
