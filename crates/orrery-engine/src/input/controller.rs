//! Turns raw pointer and touch events into camera changes.
//!
//! Mouse drag and single-finger drag orbit the camera. Two-finger pinch moves
//! the zoom target. A press released without travelling past the drag
//! threshold counts as a click and toggles the click-zoom preset.

use glam::Vec2;
use log::debug;

use super::queue::InputEvent;
use crate::api::config::CameraConfig;
use crate::renderer::camera::CameraState;

/// Transient gesture state between events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerDragState {
    pub active: bool,
    /// Reference point for the next drag delta.
    pub last: Vec2,
    /// Where the current press began.
    pub press_origin: Vec2,
    /// Set once the press travels past the drag threshold.
    pub moved: bool,
    /// Finger distance at the previous two-touch move.
    pub last_pinch_distance: Option<f32>,
}

#[derive(Debug, Clone)]
pub struct InputController {
    drag: PointerDragState,
    rotate_sensitivity: f32,
    pinch_sensitivity: f32,
    drag_threshold: f32,
}

impl InputController {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            drag: PointerDragState::default(),
            rotate_sensitivity: config.rotate_sensitivity,
            pinch_sensitivity: config.pinch_sensitivity,
            drag_threshold: config.drag_threshold,
        }
    }

    pub fn drag_state(&self) -> &PointerDragState {
        &self.drag
    }

    /// Apply one event to the camera. Returns true when the event was a click
    /// that toggled click-zoom. Custom events are ignored here.
    pub fn apply(&mut self, event: &InputEvent, camera: &mut CameraState) -> bool {
        match *event {
            InputEvent::PointerDown { x, y } => {
                self.begin_drag(Vec2::new(x, y));
                false
            }
            InputEvent::PointerMove { x, y } => {
                self.drag_to(Vec2::new(x, y), camera);
                false
            }
            InputEvent::PointerUp { x, y } => {
                let was_active = self.drag.active;
                self.track_travel(Vec2::new(x, y));
                self.end_gesture(was_active, camera)
            }
            InputEvent::TouchStart { count, first } => {
                if count == 1 {
                    self.begin_drag(first);
                } else {
                    // A second finger turns the gesture into a pinch.
                    self.drag.active = false;
                    self.drag.moved = true;
                }
                false
            }
            InputEvent::TouchMove { count, first, second } => {
                if count >= 2 {
                    self.pinch(first.distance(second), camera);
                } else {
                    self.drag_to(first, camera);
                }
                false
            }
            InputEvent::TouchEnd => {
                let was_active = self.drag.active;
                self.end_gesture(was_active, camera)
            }
            InputEvent::Custom { .. } => false,
        }
    }

    fn begin_drag(&mut self, at: Vec2) {
        self.drag.active = true;
        self.drag.last = at;
        self.drag.press_origin = at;
        self.drag.moved = false;
    }

    fn drag_to(&mut self, at: Vec2, camera: &mut CameraState) {
        if !self.drag.active || !at.is_finite() {
            return;
        }
        let delta = at - self.drag.last;
        camera.orbit(delta.x * self.rotate_sensitivity, delta.y * self.rotate_sensitivity);
        self.drag.last = at;
        self.track_travel(at);
    }

    fn track_travel(&mut self, at: Vec2) {
        if at.is_finite() && at.distance(self.drag.press_origin) > self.drag_threshold {
            self.drag.moved = true;
        }
    }

    fn pinch(&mut self, distance: f32, camera: &mut CameraState) {
        if !distance.is_finite() {
            return;
        }
        if let Some(previous) = self.drag.last_pinch_distance {
            camera.adjust_target_radius(-(distance - previous) * self.pinch_sensitivity);
        }
        self.drag.last_pinch_distance = Some(distance);
    }

    fn end_gesture(&mut self, was_active: bool, camera: &mut CameraState) -> bool {
        let is_click = was_active && !self.drag.moved;
        self.drag.active = false;
        self.drag.last_pinch_distance = None;
        if is_click {
            let zoomed = camera.toggle_click_zoom();
            debug!("Click zoom → {zoomed}, target radius {}", camera.target_radius());
        }
        is_click
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::rng::Rng;
    use std::f32::consts::FRAC_PI_2;

    fn setup() -> (InputController, CameraState) {
        (InputController::default(), CameraState::default())
    }

    #[test]
    fn drag_rotates_camera() {
        let (mut input, mut cam) = setup();
        input.apply(&InputEvent::PointerDown { x: 100.0, y: 100.0 }, &mut cam);
        input.apply(&InputEvent::PointerMove { x: 200.0, y: 80.0 }, &mut cam);
        assert!((cam.yaw() - 0.5).abs() < 1e-6);
        assert!((cam.pitch() + 0.1).abs() < 1e-6);
        assert_eq!(input.drag_state().last, Vec2::new(200.0, 80.0));
    }

    #[test]
    fn move_without_press_does_nothing() {
        let (mut input, mut cam) = setup();
        input.apply(&InputEvent::PointerMove { x: 500.0, y: 500.0 }, &mut cam);
        assert_eq!(cam.yaw(), 0.0);
        assert_eq!(cam.pitch(), 0.0);
    }

    #[test]
    fn pitch_clamps_at_pole() {
        let (mut input, mut cam) = setup();
        input.apply(&InputEvent::PointerDown { x: 0.0, y: 0.0 }, &mut cam);
        input.apply(&InputEvent::PointerMove { x: 0.0, y: 10_000.0 }, &mut cam);
        assert_eq!(cam.pitch(), FRAC_PI_2);
    }

    #[test]
    fn pinch_apart_zooms_in() {
        let (mut input, mut cam) = setup();
        input.apply(&InputEvent::TouchStart { count: 2, first: Vec2::ZERO }, &mut cam);
        input.apply(
            &InputEvent::TouchMove { count: 2, first: Vec2::ZERO, second: Vec2::new(100.0, 0.0) },
            &mut cam,
        );
        // First pinch sample only records the distance.
        assert_eq!(cam.target_radius(), 30.0);
        input.apply(
            &InputEvent::TouchMove { count: 2, first: Vec2::ZERO, second: Vec2::new(150.0, 0.0) },
            &mut cam,
        );
        assert!((cam.target_radius() - 27.5).abs() < 1e-5);
    }

    #[test]
    fn touch_end_clears_pinch_memory() {
        let (mut input, mut cam) = setup();
        input.apply(
            &InputEvent::TouchMove { count: 2, first: Vec2::ZERO, second: Vec2::new(100.0, 0.0) },
            &mut cam,
        );
        input.apply(&InputEvent::TouchEnd, &mut cam);
        assert_eq!(input.drag_state().last_pinch_distance, None);
        input.apply(
            &InputEvent::TouchMove { count: 2, first: Vec2::ZERO, second: Vec2::new(300.0, 0.0) },
            &mut cam,
        );
        assert_eq!(cam.target_radius(), 30.0);
    }

    #[test]
    fn second_finger_cancels_drag() {
        let (mut input, mut cam) = setup();
        input.apply(&InputEvent::TouchStart { count: 1, first: Vec2::new(10.0, 10.0) }, &mut cam);
        input.apply(&InputEvent::TouchStart { count: 2, first: Vec2::new(10.0, 10.0) }, &mut cam);
        assert!(!input.drag_state().active);
        input.apply(
            &InputEvent::TouchMove { count: 1, first: Vec2::new(300.0, 10.0), second: Vec2::ZERO },
            &mut cam,
        );
        assert_eq!(cam.yaw(), 0.0);
    }

    #[test]
    fn single_touch_drag_rotates_camera() {
        let (mut input, mut cam) = setup();
        input.apply(&InputEvent::TouchStart { count: 1, first: Vec2::ZERO }, &mut cam);
        input.apply(
            &InputEvent::TouchMove { count: 1, first: Vec2::new(100.0, 40.0), second: Vec2::ZERO },
            &mut cam,
        );
        assert!((cam.yaw() - 0.5).abs() < 1e-5);
        assert!((cam.pitch() - 0.2).abs() < 1e-5);
        assert!(!input.apply(&InputEvent::TouchEnd, &mut cam));
        assert!(!cam.is_zoomed());
    }

    #[test]
    fn tap_toggles_zoom() {
        let (mut input, mut cam) = setup();
        input.apply(&InputEvent::TouchStart { count: 1, first: Vec2::new(20.0, 20.0) }, &mut cam);
        assert!(input.apply(&InputEvent::TouchEnd, &mut cam));
        assert_eq!(cam.target_radius(), 15.0);
        assert!(cam.is_zoomed());
    }

    #[test]
    fn click_toggles_zoom_presets() {
        let (mut input, mut cam) = setup();
        input.apply(&InputEvent::PointerDown { x: 50.0, y: 50.0 }, &mut cam);
        assert!(input.apply(&InputEvent::PointerUp { x: 52.0, y: 51.0 }, &mut cam));
        assert_eq!(cam.target_radius(), 15.0);
        input.apply(&InputEvent::PointerDown { x: 50.0, y: 50.0 }, &mut cam);
        assert!(input.apply(&InputEvent::PointerUp { x: 50.0, y: 50.0 }, &mut cam));
        assert_eq!(cam.target_radius(), 30.0);
    }

    #[test]
    fn drag_is_not_a_click() {
        let (mut input, mut cam) = setup();
        input.apply(&InputEvent::PointerDown { x: 0.0, y: 0.0 }, &mut cam);
        input.apply(&InputEvent::PointerMove { x: 40.0, y: 0.0 }, &mut cam);
        assert!(!input.apply(&InputEvent::PointerUp { x: 40.0, y: 0.0 }, &mut cam));
        assert!(!cam.is_zoomed());
    }

    #[test]
    fn pinch_release_is_not_a_click() {
        let (mut input, mut cam) = setup();
        input.apply(&InputEvent::TouchStart { count: 1, first: Vec2::ZERO }, &mut cam);
        input.apply(&InputEvent::TouchStart { count: 2, first: Vec2::ZERO }, &mut cam);
        assert!(!input.apply(&InputEvent::TouchEnd, &mut cam));
    }

    #[test]
    fn random_gestures_keep_bounds() {
        let (mut input, mut cam) = setup();
        let mut rng = Rng::new(7);
        for _ in 0..2000 {
            let p = Vec2::new(rng.range_f32(-2000.0, 2000.0), rng.range_f32(-2000.0, 2000.0));
            let q = Vec2::new(rng.range_f32(-2000.0, 2000.0), rng.range_f32(-2000.0, 2000.0));
            let event = match rng.next_int(6) {
                0 => InputEvent::PointerDown { x: p.x, y: p.y },
                1 => InputEvent::PointerMove { x: p.x, y: p.y },
                2 => InputEvent::PointerUp { x: p.x, y: p.y },
                3 => InputEvent::TouchStart { count: 1 + rng.next_int(2), first: p },
                4 => InputEvent::TouchMove { count: 1 + rng.next_int(2), first: p, second: q },
                _ => InputEvent::TouchEnd,
            };
            input.apply(&event, &mut cam);
            assert!(cam.pitch() >= -FRAC_PI_2 && cam.pitch() <= FRAC_PI_2);
            assert!(cam.target_radius() >= 5.0 && cam.target_radius() <= 100.0);
        }
    }
}
