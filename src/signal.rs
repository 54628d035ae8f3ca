//! The externally observed audio intensity and its per-frame decay.
//!
//! The capture callback (on the audio host's thread) publishes peaks; the
//! frame loop reads the current level and steps the decay once per tick.
//! The hand-off is a single bit-cast `f32` in an `AtomicU32`: one writer,
//! one reader, and neither side ever blocks, so the renderer never waits on
//! a fresh sample. A stale, partly decayed value is always acceptable.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// How much the level drops per frame tick when no louder peak arrives.
pub const DECAY_PER_FRAME: f32 = 0.015;

/// Upper bound for the stored level. Volume-normalized peaks can nudge past
/// 1.0, so the ceiling sits slightly above it.
pub const LEVEL_CEILING: f32 = 1.25;

/// Gain applied when turning a level into an opacity multiplier. A strong
/// peak around 0.8 restores full line opacity.
pub const MODULATION_GAIN: f32 = 1.25;

/// Shared, decaying audio level. Cheap to clone; clones observe the same
/// value.
#[derive(Debug, Clone, Default)]
pub struct SignalLevel {
    bits: Arc<AtomicU32>,
}

impl SignalLevel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current level, in `[0, LEVEL_CEILING]`.
    pub fn level(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Relaxed))
    }

    /// The uniform edge-opacity multiplier for this frame.
    pub fn modulation(&self) -> f32 {
        self.level() * MODULATION_GAIN
    }

    /// Publish a new peak. The level jumps up instantly but only ever comes
    /// down through [`decay`](Self::decay); quieter peaks are ignored.
    pub fn raise(&self, peak: f32) {
        if !peak.is_finite() {
            return;
        }
        let peak = peak.clamp(0.0, LEVEL_CEILING);
        let _ = self
            .bits
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |bits| {
                (peak > f32::from_bits(bits)).then(|| peak.to_bits())
            });
    }

    /// Step the decay: one fixed subtraction per frame, floored at zero.
    pub fn decay(&self) {
        let _ = self
            .bits
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |bits| {
                let current = f32::from_bits(bits);
                if current <= 0.0 {
                    None
                } else {
                    Some((current - DECAY_PER_FRAME).max(0.0).to_bits())
                }
            });
    }
}
