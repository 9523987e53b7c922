//! Static starfield backdrop.
//!
//! Stars are scattered uniformly in a cube centered on the sun. Generation is
//! seeded so every session (and every test) sees the same sky.

use crate::api::config::SceneConfig;
use crate::renderer::instance::StarVertex;
use crate::systems::rng::Rng;

#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<StarVertex>,
    /// Point size in world units.
    pub size: f32,
}

impl Starfield {
    /// Generate `count` stars uniformly inside a cube of edge `spread`.
    pub fn generate(count: usize, spread: f32, seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let half = spread / 2.0;
        let stars = (0..count)
            .map(|_| StarVertex {
                x: rng.range_f32(-half, half),
                y: rng.range_f32(-half, half),
                z: rng.range_f32(-half, half),
            })
            .collect();
        Self {
            stars,
            size: 0.4,
        }
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        let mut field = Self::generate(config.star_count, config.star_spread, config.star_seed);
        field.size = config.star_size;
        field
    }

    pub fn stars(&self) -> &[StarVertex] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_count() {
        let field = Starfield::generate(5000, 300.0, 42);
        assert_eq!(field.len(), 5000);
    }

    #[test]
    fn stars_stay_inside_cube() {
        let field = Starfield::generate(2000, 300.0, 1);
        for s in field.stars() {
            for c in [s.x, s.y, s.z] {
                assert!((-150.0..150.0).contains(&c), "coordinate {c} outside cube");
            }
        }
    }

    #[test]
    fn same_seed_same_sky() {
        let a = Starfield::generate(100, 300.0, 9);
        let b = Starfield::generate(100, 300.0, 9);
        assert_eq!(a.stars(), b.stars());
    }

    #[test]
    fn from_config_applies_size() {
        let config = SceneConfig {
            star_count: 10,
            star_size: 0.8,
            ..SceneConfig::default()
        };
        let field = Starfield::from_config(&config);
        assert_eq!(field.len(), 10);
        assert_eq!(field.size, 0.8);
    }
}
