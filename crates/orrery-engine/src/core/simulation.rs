//! Simulation stepper: pure math over bodies and their orbit states.
//!
//! Angles accumulate without wrapping; wrapping is cosmetic.

use glam::Vec3;

use crate::core::bodies::OrbitalBody;

/// Cumulative orbit and spin angles of one body, in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrbitState {
    /// Rotation of the orbit container around the sun (+Y axis).
    pub orbital_angle: f32,
    /// Spin of the planet around its own axis.
    pub spin_angle: f32,
}

impl OrbitState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one step: orbit scales with `delta`, spin does not.
    pub fn advance(&mut self, body: &OrbitalBody, delta: f32) {
        self.orbital_angle += body.angular_speed() * delta;
        self.spin_angle += body.self_rotation_rate();
    }
}

/// World-space position of a body on a circular orbit in the XZ plane.
///
/// Matches rotating the point (r, 0, 0) about +Y by `angle`.
pub fn orbit_position(orbit_radius: f32, angle: f32) -> Vec3 {
    Vec3::new(orbit_radius * angle.cos(), 0.0, -orbit_radius * angle.sin())
}

/// Advance every (body, state) pair by `delta` seconds, in the given order.
///
/// Negative or NaN deltas are treated as zero elapsed time; spin still
/// advances because it is counted per invocation.
pub fn step_simulation<'a, I>(pairs: I, delta: f32)
where
    I: IntoIterator<Item = (&'a OrbitalBody, &'a mut OrbitState)>,
{
    let delta = if delta > 0.0 { delta } else { 0.0 };
    for (body, state) in pairs {
        state.advance(body, delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bodies::SpeedRange;

    fn body(speed: f32) -> OrbitalBody {
        OrbitalBody::new("Test", speed, 8.0, 0.01, SpeedRange::default())
    }

    #[test]
    fn earth_advances_point_eight_in_one_second() {
        let earth = body(0.8);
        let mut state = OrbitState::new();
        step_simulation([(&earth, &mut state)], 1.0);
        assert!((state.orbital_angle - 0.8).abs() < 1e-6);
    }

    #[test]
    fn many_small_steps_sum_to_elapsed_time() {
        let earth = body(0.8);
        let mut state = OrbitState::new();
        for _ in 0..60 {
            step_simulation([(&earth, &mut state)], 1.0 / 60.0);
        }
        assert!((state.orbital_angle - 0.8).abs() < 1e-4, "angle = {}", state.orbital_angle);
    }

    #[test]
    fn spin_is_per_step_not_per_second() {
        let earth = body(0.8);
        let mut a = OrbitState::new();
        let mut b = OrbitState::new();
        step_simulation([(&earth, &mut a)], 0.001);
        step_simulation([(&earth, &mut b)], 10.0);
        assert_eq!(a.spin_angle, 0.01);
        assert_eq!(b.spin_angle, 0.01);
    }

    #[test]
    fn negative_delta_does_not_rewind() {
        let earth = body(0.8);
        let mut state = OrbitState::new();
        step_simulation([(&earth, &mut state)], -5.0);
        assert_eq!(state.orbital_angle, 0.0);
    }

    #[test]
    fn bodies_advance_independently() {
        let fast = body(2.0);
        let slow = body(0.15);
        let mut s1 = OrbitState::new();
        let mut s2 = OrbitState::new();
        step_simulation([(&fast, &mut s1), (&slow, &mut s2)], 0.5);
        assert!((s1.orbital_angle - 1.0).abs() < 1e-6);
        assert!((s2.orbital_angle - 0.075).abs() < 1e-6);
    }

    #[test]
    fn orbit_position_at_zero_is_on_x_axis() {
        let p = orbit_position(8.0, 0.0);
        assert!((p - Vec3::new(8.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn orbit_position_quarter_turn_is_negative_z() {
        let p = orbit_position(8.0, std::f32::consts::FRAC_PI_2);
        assert!(p.x.abs() < 1e-5);
        assert!((p.z + 8.0).abs() < 1e-5);
        assert!((p.length() - 8.0).abs() < 1e-5);
    }
}
