//! Ray-based hit testing for hover tooltips.
//!
//! Converts a pointer position on the render surface to a ray from the eye
//! and finds the nearest sphere it passes through.

use glam::{Vec2, Vec3};

use crate::api::types::EntityId;
use crate::renderer::camera::Camera3D;
use crate::ui::layout::SurfaceSize;

/// A half-line with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Smallest non-negative ray parameter at which the ray meets the sphere.
    ///
    /// When the origin is inside the sphere the exit point is returned.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();
        let t0 = -b - sqrt_d;
        let t1 = -b + sqrt_d;
        if t0 >= 0.0 {
            Some(t0)
        } else if t1 >= 0.0 {
            Some(t1)
        } else {
            None
        }
    }
}

/// A pickable sphere.
#[derive(Debug, Clone, Copy)]
pub struct PickTarget {
    pub id: EntityId,
    pub center: Vec3,
    pub radius: f32,
}

/// The nearest sphere under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub id: EntityId,
    /// Position of the target in the iteration order it was offered in.
    pub index: usize,
    /// Ray parameter (distance from the eye) of the entry point.
    pub distance: f32,
}

/// Convert a pointer position in surface pixels (origin top-left, y down)
/// to normalized device coordinates (x right, y up, [-1, 1]).
pub fn pixel_to_ndc(pixel: Vec2, surface: SurfaceSize) -> Vec2 {
    let w = surface.width.max(1.0);
    let h = surface.height.max(1.0);
    Vec2::new(pixel.x / w * 2.0 - 1.0, -(pixel.y / h) * 2.0 + 1.0)
}

/// Cast `ray` against every target and return the one with the smallest ray
/// parameter. Equal distances keep the earlier target.
pub fn hit_test<I>(ray: &Ray, targets: I) -> Option<PickHit>
where
    I: IntoIterator<Item = PickTarget>,
{
    let mut best: Option<PickHit> = None;
    for (index, target) in targets.into_iter().enumerate() {
        if let Some(distance) = ray.intersect_sphere(target.center, target.radius) {
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(PickHit { id: target.id, index, distance });
            }
        }
    }
    best
}

/// Build the ray under a pointer for the given camera and surface.
pub fn pointer_ray(camera: &Camera3D, pixel: Vec2, surface: SurfaceSize) -> Ray {
    camera.ray_from_ndc(pixel_to_ndc(pixel, surface))
}
