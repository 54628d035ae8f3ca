//! Frame timing and FPS measurement.

use std::time::{Duration, Instant};

/// Tracks per-frame timing for the render loop.
///
/// FPS is averaged over half-second windows rather than per frame, which
/// keeps the periodic log line readable.
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    last_frame: Instant,
    frame_count: u64,
    fps: f32,
    fps_window_start: Instant,
    fps_window_frames: u64,
}

const FPS_WINDOW: Duration = Duration::from_millis(500);

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            frame_count: 0,
            fps: 0.0,
            fps_window_start: now,
            fps_window_frames: 0,
        }
    }

    /// Advance one frame. Returns the delta since the previous tick, and
    /// `Some(fps)` when a new half-second average has just been computed.
    pub fn tick(&mut self) -> (Duration, Option<f32>) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.frame_count += 1;

        let window = now.duration_since(self.fps_window_start);
        let fresh_fps = if window >= FPS_WINDOW {
            let frames = self.frame_count - self.fps_window_frames;
            self.fps = frames as f32 / window.as_secs_f32();
            self.fps_window_start = now;
            self.fps_window_frames = self.frame_count;
            Some(self.fps)
        } else {
            None
        };

        (delta, fresh_fps)
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
