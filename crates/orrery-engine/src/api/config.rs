//! Engine configuration.
//!
//! Every tunable constant lives here with its default. The page may override
//! any subset by passing JSON before init; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::api::error::OrreryError;

/// Top-level configuration for the orrery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    pub camera: CameraConfig,
    pub simulation: SimulationConfig,
    pub layout: LayoutConfig,
    pub scene: SceneConfig,
    /// Planet table, in creation order.
    pub bodies: Vec<BodyDesc>,
}

/// Orbit camera and pointer gesture tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Resting orbit distance, and the click-zoom "out" radius.
    pub base_radius: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Radians of yaw/pitch per pixel of drag.
    pub rotate_sensitivity: f32,
    /// Radius units per pixel of pinch distance change.
    pub pinch_sensitivity: f32,
    /// Fraction of the remaining radius error removed each frame.
    pub smoothing: f32,
    /// Multiplier applied to `base_radius` when click-zoomed in.
    pub click_zoom_factor: f32,
    /// Pointer travel (pixels) beyond which a press is a drag, not a click.
    pub drag_threshold: f32,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            base_radius: 30.0,
            min_radius: 5.0,
            max_radius: 100.0,
            rotate_sensitivity: 0.005,
            pinch_sensitivity: 0.05,
            smoothing: 0.1,
            click_zoom_factor: 0.5,
            drag_threshold: 5.0,
            fov_y_degrees: 70.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Simulation stepper tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Self-rotation added per stepper invocation (not scaled by delta).
    pub spin_step: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Slider granularity.
    pub speed_step: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            spin_step: 0.01,
            min_speed: 0.01,
            max_speed: 2.0,
            speed_step: 0.01,
        }
    }
}

/// Page layout rules for the render surface and overlays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewports narrower than this (CSS px) use the narrow height factor.
    pub narrow_breakpoint: f32,
    pub wide_height_factor: f32,
    pub narrow_height_factor: f32,
    /// Tooltip offset from the pointer, in pixels (right, down).
    pub tooltip_offset: [f32; 2],
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint: 768.0,
            wide_height_factor: 0.8,
            narrow_height_factor: 0.6,
            tooltip_offset: [10.0, 10.0],
        }
    }
}

/// Static scene dressing: sun, stars, lights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub star_count: usize,
    /// Edge length of the cube the stars are scattered in, centered on the sun.
    pub star_spread: f32,
    pub star_size: f32,
    pub star_seed: u64,
    pub sun_radius: f32,
    pub sun_color: u32,
    pub light_color: u32,
    pub light_intensity: f32,
    pub light_range: f32,
    pub ambient_color: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            star_count: 5000,
            star_spread: 300.0,
            star_size: 0.4,
            star_seed: 42,
            sun_radius: 2.0,
            sun_color: 0xfdb813,
            light_color: 0xffffff,
            light_intensity: 1.5,
            light_range: 1000.0,
            ambient_color: 0x222222,
        }
    }
}

/// One row of the planet table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyDesc {
    pub name: String,
    /// 0xRRGGBB.
    pub color: u32,
    /// Sphere radius in world units.
    pub size: f32,
    /// Orbit radius in world units.
    pub distance: f32,
    /// Default angular speed in radians per second.
    pub speed: f32,
}

impl BodyDesc {
    pub fn new(name: &str, color: u32, size: f32, distance: f32, speed: f32) -> Self {
        Self {
            name: name.to_string(),
            color,
            size,
            distance,
            speed,
        }
    }
}

/// The eight planets, innermost first.
pub fn default_bodies() -> Vec<BodyDesc> {
    vec![
        BodyDesc::new("Mercury", 0xaaaaaa, 0.3, 4.0, 1.2),
        BodyDesc::new("Venus", 0xffcc99, 0.6, 6.0, 1.0),
        BodyDesc::new("Earth", 0x3399ff, 0.65, 8.0, 0.8),
        BodyDesc::new("Mars", 0xff6633, 0.5, 10.0, 0.6),
        BodyDesc::new("Jupiter", 0xffcc66, 1.2, 13.0, 0.3),
        BodyDesc::new("Saturn", 0xffff99, 1.0, 16.0, 0.25),
        BodyDesc::new("Uranus", 0x66ffff, 0.8, 19.0, 0.2),
        BodyDesc::new("Neptune", 0x6666ff, 0.75, 22.0, 0.15),
    ]
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            simulation: SimulationConfig::default(),
            layout: LayoutConfig::default(),
            scene: SceneConfig::default(),
            bodies: default_bodies(),
        }
    }
}

impl OrreryConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, OrreryError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), OrreryError> {
        let cam = &self.camera;
        if !(cam.min_radius > 0.0 && cam.min_radius <= cam.max_radius) {
            return Err(invalid(format!(
                "radius bounds must satisfy 0 < min <= max (got {}..{})",
                cam.min_radius, cam.max_radius
            )));
        }
        if cam.base_radius < cam.min_radius || cam.base_radius > cam.max_radius {
            return Err(invalid(format!(
                "base_radius {} outside [{}, {}]",
                cam.base_radius, cam.min_radius, cam.max_radius
            )));
        }
        if !(cam.smoothing > 0.0 && cam.smoothing <= 1.0) {
            return Err(invalid(format!("smoothing {} outside (0, 1]", cam.smoothing)));
        }
        if !(cam.near > 0.0 && cam.near < cam.far) {
            return Err(invalid("clip planes must satisfy 0 < near < far".to_string()));
        }
        if !(cam.drag_threshold >= 0.0) {
            return Err(invalid(format!("drag_threshold {} must be >= 0", cam.drag_threshold)));
        }
        if !(cam.fov_y_degrees > 0.0 && cam.fov_y_degrees < 180.0) {
            return Err(invalid(format!("fov_y_degrees {} outside (0, 180)", cam.fov_y_degrees)));
        }

        let sim = &self.simulation;
        if !(sim.min_speed >= 0.0 && sim.min_speed <= sim.max_speed) {
            return Err(invalid(format!(
                "speed bounds must satisfy 0 <= min <= max (got {}..{})",
                sim.min_speed, sim.max_speed
            )));
        }

        if self.bodies.is_empty() {
            return Err(invalid("at least one body is required".to_string()));
        }
        for (i, body) in self.bodies.iter().enumerate() {
            if body.size <= 0.0 {
                return Err(invalid(format!("body '{}' has non-positive size", body.name)));
            }
            if self.bodies[..i].iter().any(|b| b.name == body.name) {
                return Err(invalid(format!("duplicate body name '{}'", body.name)));
            }
        }
        Ok(())
    }
}

fn invalid(msg: String) -> OrreryError {
    OrreryError::InvalidConfig(msg)
}
