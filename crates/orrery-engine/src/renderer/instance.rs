use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::components::mesh::MeshComponent;

/// Per-sphere render data written to the shared buffer for the page renderer.
/// Must match the page protocol: 12 floats = 48 bytes stride, laid out as
/// `x y z radius spin r g b emissive shininess pad pad`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SphereInstance {
    /// World-space center.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// World-space radius.
    pub radius: f32,
    /// Spin around the local Y axis, in radians.
    pub spin: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// 1.0 = unlit, full color.
    pub emissive: f32,
    pub shininess: f32,
    pub _pad0: f32,
    pub _pad1: f32,
}

impl SphereInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn new(center: Vec3, spin: f32, mesh: &MeshComponent) -> Self {
        Self {
            x: center.x,
            y: center.y,
            z: center.z,
            radius: mesh.radius(),
            spin,
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            emissive: mesh.emissive,
            shininess: mesh.shininess,
            _pad0: 0.0,
            _pad1: 0.0,
        }
    }

    pub fn center(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// One star of the backdrop: a bare position, 3 floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct StarVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl StarVertex {
    pub const FLOATS: usize = 3;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::mesh::MeshColor;

    #[test]
    fn sphere_instance_is_12_floats() {
        assert_eq!(std::mem::size_of::<SphereInstance>(), SphereInstance::STRIDE_BYTES);
    }

    #[test]
    fn star_vertex_is_3_floats() {
        assert_eq!(std::mem::size_of::<StarVertex>(), StarVertex::FLOATS * 4);
    }

    #[test]
    fn sphere_instance_copies_mesh() {
        let mesh = MeshComponent::sphere(0.65, MeshColor::from_hex(0x3399ff));
        let inst = SphereInstance::new(Vec3::new(8.0, 0.0, 0.0), 0.3, &mesh);
        assert_eq!(inst.center(), Vec3::new(8.0, 0.0, 0.0));
        assert_eq!(inst.radius, 0.65);
        assert_eq!(inst.spin, 0.3);
        assert_eq!(inst.b, 1.0);
    }

    #[test]
    fn material_sits_after_color_on_the_wire() {
        let mesh = MeshComponent::sphere(2.0, MeshColor::WHITE)
            .with_emissive(1.0)
            .with_shininess(8.0);
        let inst = [SphereInstance::new(Vec3::ZERO, 0.0, &mesh)];
        let floats: &[f32] = bytemuck::cast_slice(&inst);
        assert_eq!(floats.len(), SphereInstance::FLOATS);
        assert_eq!(floats[3], 2.0);
        assert_eq!(&floats[5..8], &[1.0, 1.0, 1.0]);
        assert_eq!(floats[8], 1.0);
        assert_eq!(floats[9], 8.0);
        assert_eq!(&floats[10..12], &[0.0, 0.0]);
    }
}
