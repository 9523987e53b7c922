//! Shared render buffer layout.
//! Must stay in sync with the page's `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Camera: 20 floats (view-projection 4×4 column-major, eye xyzw)]
//! [Spheres: max_spheres × 12 floats]
//! [Lights: max_lights × 8 floats]
//! [Ambient: 4 floats (rgb, pad)]
//! [Events: max_events × 4 floats]
//! [Stars: max_stars × 3 floats]
//! ```
//!
//! Capacities are written once into the header at init.
//! The page reads them from the header to compute offsets dynamically.

use crate::api::config::OrreryConfig;
use crate::api::types::FrameEvent;
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::{SphereInstance, StarVertex};
use crate::systems::lighting::PointLight;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_SURFACE_WIDTH: usize = 2;
pub const HEADER_SURFACE_HEIGHT: usize = 3;
pub const HEADER_SPHERE_COUNT: usize = 4;
pub const HEADER_MAX_SPHERES: usize = 5;
pub const HEADER_STAR_COUNT: usize = 6;
pub const HEADER_LIGHT_COUNT: usize = 7;
pub const HEADER_THEME: usize = 8;
pub const HEADER_RUN_STATE: usize = 9;
pub const HEADER_CAMERA_RADIUS: usize = 10;
pub const HEADER_MAX_LIGHTS: usize = 11;
pub const HEADER_EVENT_COUNT: usize = 12;
pub const HEADER_MAX_EVENTS: usize = 13;
pub const HEADER_MAX_STARS: usize = 14;
/// Star size in world units. Stars are written once, so the page reads this once.
pub const HEADER_STAR_SIZE: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per sphere instance (wire format, never changes).
pub const SPHERE_FLOATS: usize = SphereInstance::FLOATS;

/// Floats in the camera block.
pub const CAMERA_FLOATS: usize = CameraUniform::FLOATS;

/// Floats per point light: x, y, z, r, g, b, intensity, range.
pub const LIGHT_FLOATS: usize = PointLight::FLOATS;

/// Floats in the ambient block: r, g, b, pad.
pub const AMBIENT_FLOATS: usize = 4;

/// Floats per frame event: kind, a, b, c.
pub const EVENT_FLOATS: usize = FrameEvent::FLOATS;

/// Floats per star: x, y, z.
pub const STAR_FLOATS: usize = StarVertex::FLOATS;

pub const DEFAULT_MAX_LIGHTS: usize = 4;
pub const DEFAULT_MAX_EVENTS: usize = 16;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_spheres: usize,
    pub max_lights: usize,
    pub max_events: usize,
    pub max_stars: usize,

    /// Size of sphere data section in floats.
    pub sphere_data_floats: usize,
    /// Size of light data section in floats (lights + ambient).
    pub light_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,
    /// Size of star data section in floats.
    pub star_data_floats: usize,

    /// Offset (in floats) where the camera block begins.
    pub camera_offset: usize,
    /// Offset (in floats) where sphere data begins.
    pub sphere_data_offset: usize,
    /// Offset (in floats) where light data begins.
    pub light_data_offset: usize,
    /// Offset (in floats) of the ambient color, right after the lights.
    pub ambient_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,
    /// Offset (in floats) where star data begins.
    pub star_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_spheres: usize, max_lights: usize, max_events: usize, max_stars: usize) -> Self {
        let sphere_data_floats = max_spheres * SPHERE_FLOATS;
        let light_data_floats = max_lights * LIGHT_FLOATS + AMBIENT_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;
        let star_data_floats = max_stars * STAR_FLOATS;

        let camera_offset = HEADER_FLOATS;
        let sphere_data_offset = camera_offset + CAMERA_FLOATS;
        let light_data_offset = sphere_data_offset + sphere_data_floats;
        let ambient_offset = light_data_offset + max_lights * LIGHT_FLOATS;
        let event_data_offset = light_data_offset + light_data_floats;
        let star_data_offset = event_data_offset + event_data_floats;

        let buffer_total_floats = star_data_offset + star_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_spheres,
            max_lights,
            max_events,
            max_stars,
            sphere_data_floats,
            light_data_floats,
            event_data_floats,
            star_data_floats,
            camera_offset,
            sphere_data_offset,
            light_data_offset,
            ambient_offset,
            event_data_offset,
            star_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Room for the sun plus every configured planet and every star.
    pub fn from_config(config: &OrreryConfig) -> Self {
        Self::new(
            config.bodies.len() + 1,
            DEFAULT_MAX_LIGHTS,
            DEFAULT_MAX_EVENTS,
            config.scene.star_count,
        )
    }
}
