//! Browser bridge for the orrery engine.
//!
//! The page calls these exports: event handlers forward pointer, touch and
//! control input; `orrery_tick` is called from `requestAnimationFrame`; the
//! renderer reads the shared f32 buffer through `orrery_buffer_ptr`.

pub mod runner;

pub use runner::OrreryRunner;

use std::cell::RefCell;

use js_sys::Array;
use orrery_engine::{Command, InputEvent, OrreryConfig, Theme};
use orrery_engine::glam::Vec2;
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<OrreryRunner>> = RefCell::new(None);
    static PENDING_CONFIG: RefCell<Option<OrreryConfig>> = RefCell::new(None);
}

/// Run `f` against the runner. Returns `None` (and logs) before `orrery_init`.
fn with_runner<R>(f: impl FnOnce(&mut OrreryRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
        Some(runner) => Some(f(runner)),
        None => {
            log::warn!("Orrery not initialized. Call orrery_init() first.");
            None
        }
    })
}

/// Viewport size from `window.innerWidth/innerHeight`, if available.
fn viewport() -> Option<(f32, f32)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width as f32, height as f32))
}

/// Provide a JSON configuration. Must be called before `orrery_init`;
/// missing fields keep their defaults.
#[wasm_bindgen]
pub fn orrery_load_config(json: &str) -> Result<(), JsValue> {
    let config = OrreryConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    PENDING_CONFIG.with(|cell| *cell.borrow_mut() = Some(config));
    Ok(())
}

#[wasm_bindgen]
pub fn orrery_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = PENDING_CONFIG.with(|cell| cell.borrow_mut().take()).unwrap_or_default();
    let mut runner = OrreryRunner::new(config);
    match viewport() {
        Some((w, h)) => runner.resize(w, h),
        None => log::warn!("No window; keeping default surface size"),
    }

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("orrery: initialized");
}

#[wasm_bindgen]
pub fn orrery_tick(timestamp_ms: f64) {
    with_runner(|r| r.tick(timestamp_ms));
}

#[wasm_bindgen]
pub fn orrery_start() {
    with_runner(|r| r.start());
}

#[wasm_bindgen]
pub fn orrery_stop() {
    with_runner(|r| r.stop());
}

#[wasm_bindgen]
pub fn orrery_resize(viewport_width: f32, viewport_height: f32) {
    with_runner(|r| r.resize(viewport_width, viewport_height));
}

// ---- Pointer / touch input ----

#[wasm_bindgen]
pub fn orrery_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn orrery_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

#[wasm_bindgen]
pub fn orrery_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn orrery_touch_start(count: u32, x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::TouchStart { count, first: Vec2::new(x, y) }));
}

#[wasm_bindgen]
pub fn orrery_touch_move(count: u32, x0: f32, y0: f32, x1: f32, y1: f32) {
    with_runner(|r| {
        r.push_input(InputEvent::TouchMove {
            count,
            first: Vec2::new(x0, y0),
            second: Vec2::new(x1, y1),
        })
    });
}

#[wasm_bindgen]
pub fn orrery_touch_end() {
    with_runner(|r| r.push_input(InputEvent::TouchEnd));
}

/// Hover at surface pixel (x, y). Returns the planet name under the pointer,
/// or `undefined`. The tooltip accessors reflect the result.
#[wasm_bindgen]
pub fn orrery_hover(x: f32, y: f32) -> Option<String> {
    with_runner(|r| {
        r.hover(x, y)?;
        Some(r.tooltip_label())
    })
    .flatten()
}

#[wasm_bindgen]
pub fn orrery_hover_leave() {
    with_runner(|r| r.hover_leave());
}

// ---- Controls ----

#[wasm_bindgen]
pub fn orrery_set_speed(body_index: u32, speed: f32) {
    with_runner(|r| r.push_command(Command::SetSpeed { body: body_index as usize, speed }));
}

#[wasm_bindgen]
pub fn orrery_toggle_pause() {
    with_runner(|r| r.push_command(Command::TogglePause));
}

#[wasm_bindgen]
pub fn orrery_toggle_theme() {
    with_runner(|r| r.push_command(Command::ToggleTheme));
}

#[wasm_bindgen]
pub fn orrery_custom_event(kind: u32, a: f32, b: f32, c: f32) {
    with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn orrery_buffer_ptr() -> *const f32 {
    with_runner(|r| r.buffer_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn orrery_buffer_len() -> u32 {
    with_runner(|r| r.buffer_len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn orrery_surface_width() -> f32 {
    with_runner(|r| r.surface_width()).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn orrery_surface_height() -> f32 {
    with_runner(|r| r.surface_height()).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn orrery_tooltip_visible() -> bool {
    with_runner(|r| r.tooltip_visible()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn orrery_tooltip_x() -> f32 {
    with_runner(|r| r.tooltip_x()).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn orrery_tooltip_y() -> f32 {
    with_runner(|r| r.tooltip_y()).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn orrery_pause_label() -> String {
    with_runner(|r| r.pause_label().to_string()).unwrap_or_default()
}

/// `"light-mode"` while the light theme is on, empty otherwise.
#[wasm_bindgen]
pub fn orrery_theme_class() -> String {
    with_runner(|r| r.theme().body_class().unwrap_or_default().to_string()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn orrery_is_light_theme() -> bool {
    with_runner(|r| r.theme() == Theme::Light).unwrap_or(false)
}

/// Slider descriptions as `[label, elementId, min, max, step, initial]` rows.
#[wasm_bindgen]
pub fn orrery_sliders() -> Array {
    let rows = Array::new();
    with_runner(|r| {
        for spec in r.sliders() {
            let row = Array::new();
            row.push(&JsValue::from_str(&spec.label));
            row.push(&JsValue::from_str(&spec.element_id));
            row.push(&JsValue::from_f64(spec.min as f64));
            row.push(&JsValue::from_f64(spec.max as f64));
            row.push(&JsValue::from_f64(spec.step as f64));
            row.push(&JsValue::from_f64(spec.initial as f64));
            rows.push(&row);
        }
    });
    rows
}

#[wasm_bindgen]
pub fn orrery_planet_speed(body_index: u32) -> f32 {
    with_runner(|r| r.planet_speed(body_index as usize)).flatten().unwrap_or(0.0)
}
