//! Frame-driven integration of the scroll progress.

use macroquad::logging::debug;

/// Gap between recorded frames above which a frame is treated as a discontinuity.
pub const STALE_FRAME_MS: f64 = 200.0;
/// Upper bound on the seconds integrated by a single frame.
pub const MAX_FRAME_SECONDS: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum DriverState {
    /// No slot is hovered; progress advances every frame.
    #[default]
    Running,
    /// A slot is hovered; frames are ignored.
    Paused,
    /// Torn down. Terminal.
    Stopped,
}

/// What a call to [`AnimationDriver::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// Progress moved by `delta` (before wrapping).
    Advanced { delta: f32 },
    /// Nothing to animate, or paused by hover.
    Idle,
    /// The page is hidden; the frame time was recorded.
    Hidden,
    /// Too long since the last recorded frame; the frame time was recorded.
    Stalled,
    Stopped,
}

#[derive(Debug, Clone, Default)]
pub struct AnimationDriver {
    state: DriverState,
    progress: f32,
    last_frame_ms: Option<f64>,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Scroll offset along the rail, in `[0, loop_span)`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn last_frame_ms(&self) -> Option<f64> {
        self.last_frame_ms
    }

    /// Hover enter.
    pub fn pause(&mut self) {
        if self.state == DriverState::Running {
            self.state = DriverState::Paused;
        }
    }

    /// Hover leave.
    pub fn resume(&mut self) {
        if self.state == DriverState::Paused {
            self.state = DriverState::Running;
        }
    }

    /// Stops the driver for good. Later ticks return [`FrameOutcome::Stopped`].
    pub fn stop(&mut self) {
        if self.state != DriverState::Stopped {
            debug!("Marquee driver stopped at progress {}", self.progress);
        }
        self.state = DriverState::Stopped;
    }

    /// Re-wraps progress after the loop span changed (resize, new items).
    /// Progress is frozen once stopped.
    pub fn rewrap(&mut self, loop_span: f32) {
        if self.state == DriverState::Stopped {
            return;
        }
        self.progress = wrap(self.progress, loop_span);
    }

    /// Per-frame callback.
    ///
    /// `now_ms` is the absolute frame time, `dt_ms` the time since the previous
    /// frame as reported by the scheduler. `speed` is in pixels per second and
    /// `direction_sign` is `1.0` or `-1.0`.
    #[allow(clippy::too_many_arguments)]
    pub fn tick(
        &mut self,
        now_ms: f64,
        dt_ms: f64,
        page_visible: bool,
        total: usize,
        speed: f32,
        direction_sign: f32,
        loop_span: f32,
    ) -> FrameOutcome {
        match self.state {
            DriverState::Stopped => return FrameOutcome::Stopped,
            DriverState::Paused => return FrameOutcome::Idle,
            DriverState::Running if total == 0 => return FrameOutcome::Idle,
            DriverState::Running => {}
        }

        if !page_visible {
            self.last_frame_ms = Some(now_ms);
            return FrameOutcome::Hidden;
        }

        if let Some(last) = self.last_frame_ms {
            if now_ms - last > STALE_FRAME_MS {
                debug!("Marquee frame stalled for {:.0}ms, skipping", now_ms - last);
                self.last_frame_ms = Some(now_ms);
                return FrameOutcome::Stalled;
            }
        }
        self.last_frame_ms = Some(now_ms);

        let dts = ((dt_ms / 1000.0) as f32).clamp(0.0, MAX_FRAME_SECONDS);
        let delta = direction_sign * speed * dts;
        self.progress = wrap(self.progress + delta, loop_span);
        FrameOutcome::Advanced { delta }
    }
}

/// Wraps `value` into `[0, span)`.
pub fn wrap(value: f32, span: f32) -> f32 {
    if span.is_nan() || span <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(span);
    // rem_euclid can round up to exactly `span` for tiny negative inputs
    if wrapped >= span {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(driver: &mut AnimationDriver, now_ms: f64, dt_ms: f64) -> FrameOutcome {
        driver.tick(now_ms, dt_ms, true, 5, 120.0, 1.0, 700.0)
    }

    #[test]
    fn test_dt_is_clamped() {
        let mut driver = AnimationDriver::new();
        assert_eq!(run(&mut driver, 100.0, 1000.0), FrameOutcome::Advanced { delta: 12.0 });
        assert!((driver.progress() - 12.0).abs() < 1e-4);
    }

    #[test]
    fn test_regular_frame() {
        let mut driver = AnimationDriver::new();
        run(&mut driver, 0.0, 0.0);
        run(&mut driver, 50.0, 50.0);
        assert!((driver.progress() - 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_stall_guard() {
        let mut driver = AnimationDriver::new();
        run(&mut driver, 1000.0, 16.0);
        let before = driver.progress();
        assert_eq!(run(&mut driver, 1250.0, 250.0), FrameOutcome::Stalled);
        assert_eq!(driver.progress(), before);
        assert_eq!(driver.last_frame_ms(), Some(1250.0));
        assert!(matches!(run(&mut driver, 1266.0, 16.0), FrameOutcome::Advanced { .. }));
    }

    #[test]
    fn test_hidden_page_records_time() {
        let mut driver = AnimationDriver::new();
        run(&mut driver, 0.0, 16.0);
        let before = driver.progress();
        assert_eq!(driver.tick(5000.0, 5000.0, false, 5, 120.0, 1.0, 700.0), FrameOutcome::Hidden);
        assert_eq!(driver.progress(), before);
        // Resume is not mistaken for a stall since the hidden frame was recorded.
        assert!(matches!(run(&mut driver, 5016.0, 16.0), FrameOutcome::Advanced { .. }));
    }

    #[test]
    fn test_pause_and_empty_are_idle() {
        let mut driver = AnimationDriver::new();
        driver.pause();
        assert_eq!(driver.state(), DriverState::Paused);
        assert_eq!(run(&mut driver, 16.0, 16.0), FrameOutcome::Idle);
        assert_eq!(driver.progress(), 0.0);
        driver.resume();
        assert_eq!(driver.state(), DriverState::Running);

        assert_eq!(driver.tick(32.0, 16.0, true, 0, 120.0, 1.0, 1.0), FrameOutcome::Idle);
    }

    #[test]
    fn test_reverse_wraps_below_zero() {
        let mut driver = AnimationDriver::new();
        driver.tick(16.0, 16.0, true, 5, 120.0, -1.0, 700.0);
        let p = driver.progress();
        assert!(p > 690.0 && p < 700.0);
    }

    #[test]
    fn test_progress_stays_in_range() {
        let mut driver = AnimationDriver::new();
        let span = 35.0;
        let mut now = 0.0;
        for i in 0..2000 {
            now += 16.0;
            let sign = if i % 3 == 0 { -1.0 } else { 1.0 };
            driver.tick(now, 100.0, true, 1, 977.0, sign, span);
            assert!(driver.progress() >= 0.0 && driver.progress() < span);
        }
    }

    #[test]
    fn test_stop_is_terminal() {
        let mut driver = AnimationDriver::new();
        run(&mut driver, 0.0, 16.0);
        driver.stop();
        let before = driver.progress();
        driver.resume();
        assert_eq!(run(&mut driver, 16.0, 16.0), FrameOutcome::Stopped);
        assert_eq!(driver.progress(), before);
        assert_eq!(driver.state(), DriverState::Stopped);
    }

    #[test]
    fn test_stopped_progress_survives_rewrap() {
        let mut driver = AnimationDriver::new();
        for i in 1..=20 {
            run(&mut driver, i as f64 * 16.0, 16.0);
        }
        driver.stop();
        let before = driver.progress();
        driver.rewrap(4.0);
        assert_eq!(driver.progress(), before);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(700.0, 700.0), 0.0);
        assert_eq!(wrap(-1.0, 700.0), 699.0);
        assert_eq!(wrap(-1e-9, 700.0), 0.0);
        assert_eq!(wrap(5.0, 0.0), 0.0);
    }
}
