/// Frame clock: turns display-refresh timestamps into per-frame deltas.
///
/// The clock is sampled every frame, paused or not, so that resuming never
/// sees the time spent paused as one large delta.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Previous timestamp in milliseconds, `None` before the first sample.
    last_ms: Option<f64>,
    /// Number of samples taken.
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a timestamp (milliseconds, e.g. from `requestAnimationFrame`)
    /// and return seconds elapsed since the previous sample.
    ///
    /// The first sample returns 0. Timestamps that go backwards or are not
    /// finite also return 0 and do not move the clock.
    pub fn sample(&mut self, now_ms: f64) -> f32 {
        self.frames += 1;
        if !now_ms.is_finite() {
            return 0.0;
        }
        match self.last_ms {
            Some(last) if now_ms < last => 0.0,
            Some(last) => {
                self.last_ms = Some(now_ms);
                ((now_ms - last) / 1000.0) as f32
            }
            None => {
                self.last_ms = Some(now_ms);
                0.0
            }
        }
    }

    /// Forget the previous timestamp; the next sample returns 0.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    /// Number of samples taken so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
