//! Orbital bodies: identity, orbit geometry, and the user-settable speed.
//!
//! Speeds are arbitrary radians per second, not Keplerian.

use crate::api::config::{BodyDesc, SimulationConfig};

/// Inclusive bounds for a body's angular speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedRange {
    pub min: f32,
    pub max: f32,
}

impl SpeedRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.min_speed, config.max_speed)
    }

    /// Clamp into range. Returns `None` for NaN.
    pub fn clamp(&self, value: f32) -> Option<f32> {
        if value.is_nan() {
            None
        } else {
            Some(value.clamp(self.min, self.max))
        }
    }
}

impl Default for SpeedRange {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}

/// A planet's static orbit description plus its mutable speed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalBody {
    name: String,
    angular_speed: f32,
    default_speed: f32,
    orbit_radius: f32,
    self_rotation_rate: f32,
    range: SpeedRange,
}

impl OrbitalBody {
    pub fn new(
        name: impl Into<String>,
        angular_speed: f32,
        orbit_radius: f32,
        self_rotation_rate: f32,
        range: SpeedRange,
    ) -> Self {
        let speed = range.clamp(angular_speed).unwrap_or(range.min);
        Self {
            name: name.into(),
            angular_speed: speed,
            default_speed: speed,
            orbit_radius,
            self_rotation_rate,
            range,
        }
    }

    /// Build a body from a planet table row.
    pub fn from_desc(desc: &BodyDesc, sim: &SimulationConfig) -> Self {
        Self::new(
            desc.name.as_str(),
            desc.speed,
            desc.distance,
            sim.spin_step,
            SpeedRange::from_config(sim),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current angular speed in radians per second.
    pub fn angular_speed(&self) -> f32 {
        self.angular_speed
    }

    /// Speed the body was created with (slider initial value).
    pub fn default_speed(&self) -> f32 {
        self.default_speed
    }

    pub fn orbit_radius(&self) -> f32 {
        self.orbit_radius
    }

    /// Spin added per simulation step, in radians.
    pub fn self_rotation_rate(&self) -> f32 {
        self.self_rotation_rate
    }

    pub fn speed_range(&self) -> SpeedRange {
        self.range
    }

    /// Set the angular speed, clamped into the body's range.
    /// NaN leaves the speed unchanged. Returns the stored value.
    pub fn set_angular_speed(&mut self, speed: f32) -> f32 {
        if let Some(clamped) = self.range.clamp(speed) {
            self.angular_speed = clamped;
        }
        self.angular_speed
    }
}
