use glam::Vec3;
use log::{info, warn};

use crate::api::config::OrreryConfig;
use crate::api::types::EntityId;
use crate::components::mesh::{MeshColor, MeshComponent};
use crate::core::bodies::OrbitalBody;
use crate::core::simulation::{orbit_position, step_simulation, OrbitState};
use crate::picking::PickTarget;
use crate::renderer::instance::SphereInstance;
use crate::systems::lighting::LightState;
use crate::systems::starfield::Starfield;

/// The central, unlit sphere.
#[derive(Debug, Clone)]
pub struct Sun {
    pub id: EntityId,
    pub mesh: MeshComponent,
}

/// A body together with its orbit state and mesh. The pairing never changes.
#[derive(Debug, Clone)]
pub struct Planet {
    pub id: EntityId,
    pub body: OrbitalBody,
    pub state: OrbitState,
    pub mesh: MeshComponent,
}

impl Planet {
    pub fn position(&self) -> Vec3 {
        orbit_position(self.body.orbit_radius(), self.state.orbital_angle)
    }
}

/// Everything that is drawn: sun, planets, starfield, lights.
/// Built once at startup; only orbit state and speeds change afterwards.
#[derive(Debug, Clone)]
pub struct SceneGraph {
    sun: Sun,
    planets: Vec<Planet>,
    stars: Starfield,
    lights: LightState,
}

impl SceneGraph {
    pub fn from_config(config: &OrreryConfig) -> Self {
        let sun = Sun {
            id: EntityId(0),
            mesh: MeshComponent::sphere(config.scene.sun_radius, MeshColor::from_hex(config.scene.sun_color))
                .with_emissive(1.0),
        };
        let planets: Vec<Planet> = config
            .bodies
            .iter()
            .enumerate()
            .map(|(i, desc)| Planet {
                id: EntityId(i as u32 + 1),
                body: OrbitalBody::from_desc(desc, &config.simulation),
                state: OrbitState::new(),
                mesh: MeshComponent::sphere(desc.size, MeshColor::from_hex(desc.color)),
            })
            .collect();
        let stars = Starfield::from_config(&config.scene);
        let lights = LightState::from_config(&config.scene);
        info!(
            "Scene built: {} planets, {} stars, {} lights",
            planets.len(),
            stars.len(),
            lights.count()
        );
        Self { sun, planets, stars, lights }
    }

    pub fn sun(&self) -> &Sun {
        &self.sun
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn planet(&self, index: usize) -> Option<&Planet> {
        self.planets.get(index)
    }

    pub fn get(&self, id: EntityId) -> Option<&Planet> {
        self.planets.iter().find(|p| p.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Planet> {
        self.planets.iter().find(|p| p.body.name() == name)
    }

    pub fn stars(&self) -> &Starfield {
        &self.stars
    }

    pub fn lights(&self) -> &LightState {
        &self.lights
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// Advance every planet by `delta` seconds, in creation order.
    pub fn step(&mut self, delta: f32) {
        step_simulation(self.planets.iter_mut().map(|p| (&p.body, &mut p.state)), delta);
    }

    /// Set the angular speed of planet `index`. Returns the stored (clamped)
    /// value, or `None` when the index is out of range.
    pub fn set_speed(&mut self, index: usize, speed: f32) -> Option<f32> {
        match self.planets.get_mut(index) {
            Some(planet) => Some(planet.body.set_angular_speed(speed)),
            None => {
                warn!("set_speed: no planet at index {index}");
                None
            }
        }
    }

    pub fn planet_position(&self, index: usize) -> Option<Vec3> {
        self.planets.get(index).map(Planet::position)
    }

    /// Pickable spheres (planets only), in creation order.
    pub fn pick_targets(&self) -> impl Iterator<Item = PickTarget> + '_ {
        self.planets.iter().map(|p| PickTarget {
            id: p.id,
            center: p.position(),
            radius: p.mesh.radius(),
        })
    }

    /// Render instances: the sun first, then planets in creation order.
    pub fn sphere_instances(&self) -> impl Iterator<Item = SphereInstance> + '_ {
        std::iter::once(SphereInstance::new(Vec3::ZERO, 0.0, &self.sun.mesh)).chain(
            self.planets
                .iter()
                .map(|p| SphereInstance::new(p.position(), p.state.spin_angle, &p.mesh)),
        )
    }

    /// Sun plus planets.
    pub fn sphere_count(&self) -> usize {
        self.planets.len() + 1
    }
}
