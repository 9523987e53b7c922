use orrery_engine::{
    Command, FrameDriver, InputEvent, OrreryConfig, PickHit, ProtocolLayout, RenderSurface,
    SharedBufferSurface, SliderSpec, Theme,
};

/// Owns the frame driver for the page.
///
/// wasm-bindgen cannot export generic structs, so the bridge keeps one of
/// these in a `thread_local!` and forwards its free functions here.
pub struct OrreryRunner {
    driver: FrameDriver<SharedBufferSurface>,
    sliders: Vec<SliderSpec>,
}

impl OrreryRunner {
    pub fn new(config: OrreryConfig) -> Self {
        let layout = ProtocolLayout::from_config(&config);
        let driver = FrameDriver::new(config, SharedBufferSurface::new(layout));
        let sliders = driver.slider_specs();
        Self { driver, sliders }
    }

    pub fn tick(&mut self, timestamp_ms: f64) {
        self.driver.tick(timestamp_ms);
    }

    pub fn start(&mut self) {
        self.driver.start();
    }

    pub fn stop(&mut self) {
        self.driver.stop();
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.driver.push_input(event);
    }

    pub fn push_command(&mut self, command: Command) {
        self.driver.push_command(command);
    }

    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        self.driver.resize(viewport_width, viewport_height);
    }

    pub fn hover(&mut self, x: f32, y: f32) -> Option<PickHit> {
        self.driver.hover(x, y)
    }

    pub fn hover_leave(&mut self) {
        self.driver.hover_leave();
    }

    // ---- Shared buffer ----

    pub fn buffer_ptr(&self) -> *const f32 {
        self.driver.surface().ptr()
    }

    pub fn buffer_len(&self) -> u32 {
        self.driver.surface().len() as u32
    }

    pub fn backend(&self) -> &'static str {
        self.driver.surface().backend()
    }

    // ---- Surface size ----

    pub fn surface_width(&self) -> f32 {
        self.driver.size().width
    }

    pub fn surface_height(&self) -> f32 {
        self.driver.size().height
    }

    // ---- Tooltip ----

    pub fn tooltip_visible(&self) -> bool {
        self.driver.tooltip().is_visible()
    }

    pub fn tooltip_x(&self) -> f32 {
        self.driver.tooltip().position().x
    }

    pub fn tooltip_y(&self) -> f32 {
        self.driver.tooltip().position().y
    }

    pub fn tooltip_label(&self) -> String {
        self.driver.tooltip().label().to_string()
    }

    // ---- Widgets ----

    pub fn sliders(&self) -> &[SliderSpec] {
        &self.sliders
    }

    pub fn pause_label(&self) -> &'static str {
        self.driver.pause_label()
    }

    pub fn is_paused(&self) -> bool {
        self.driver.run_state().is_paused()
    }

    pub fn theme(&self) -> Theme {
        self.driver.theme()
    }

    /// Current stored speed of a planet (post-clamp), for syncing slider thumbs.
    pub fn planet_speed(&self, index: usize) -> Option<f32> {
        self.driver.scene().planet(index).map(|p| p.body.angular_speed())
    }

    pub fn frame(&self) -> u64 {
        self.driver.frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::bridge::protocol::{HEADER_FRAME_COUNTER, HEADER_SURFACE_HEIGHT};

    fn runner() -> OrreryRunner {
        let mut config = OrreryConfig::default();
        config.scene.star_count = 8;
        OrreryRunner::new(config)
    }

    #[test]
    fn sliders_follow_planet_table() {
        let r = runner();
        assert_eq!(r.sliders().len(), 8);
        assert_eq!(r.sliders()[0].label, "Mercury");
    }

    #[test]
    fn tick_writes_frame_counter() {
        let mut r = runner();
        r.tick(0.0);
        r.tick(16.0);
        let buffer = r.driver.surface().buffer();
        assert_eq!(buffer[HEADER_FRAME_COUNTER], 2.0);
        assert_eq!(r.frame(), 2);
    }

    #[test]
    fn resize_reaches_buffer_header() {
        let mut r = runner();
        r.resize(1000.0, 1000.0);
        assert!((r.surface_height() - 800.0).abs() < 1e-3);
        assert!((r.driver.surface().buffer()[HEADER_SURFACE_HEIGHT] - 800.0).abs() < 1e-3);
    }

    #[test]
    fn commands_apply_on_next_tick() {
        let mut r = runner();
        r.push_command(Command::TogglePause);
        r.push_command(Command::SetSpeed { body: 0, speed: 0.5 });
        assert!(!r.is_paused());
        r.tick(0.0);
        assert!(r.is_paused());
        assert_eq!(r.pause_label(), "▶ Resume");
        assert_eq!(r.planet_speed(0), Some(0.5));
    }

    #[test]
    fn stopped_runner_does_not_render() {
        let mut r = runner();
        r.stop();
        r.tick(0.0);
        assert_eq!(r.frame(), 0);
        r.start();
        r.tick(16.0);
        assert_eq!(r.frame(), 1);
    }
}
