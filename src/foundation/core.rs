use crate::foundation::error::{CoverflowError, CoverflowResult};

/// Longest frame delta the controller is ever handed, in seconds.
///
/// Slow frames are clamped to this before integration so a hitch never turns
/// into one huge step.
pub const MAX_FRAME_DELTA_SECS: f64 = 1.0 / 30.0;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Whole frames per second of a fixed-rate (simulated) clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps(u32);

impl Fps {
    pub fn new(per_sec: u32) -> CoverflowResult<Self> {
        if per_sec == 0 {
            return Err(CoverflowError::validation("fps must be > 0"));
        }
        Ok(Self(per_sec))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn frame_delta_secs(self) -> f64 {
        1.0 / f64::from(self.0)
    }

    /// True when one frame is longer than [`MAX_FRAME_DELTA_SECS`], i.e. the
    /// clock clamp would drop time on every tick.
    pub fn is_clamped(self) -> bool {
        self.frame_delta_secs() > MAX_FRAME_DELTA_SECS
    }

    /// Simulated time after `frames` ticks.
    pub fn elapsed_secs(self, frames: u64) -> f64 {
        frames as f64 / f64::from(self.0)
    }

    /// Whole frames that fit in `secs`; saturates at `u64::MAX`, 0 for negative/NaN.
    pub fn frames_in(self, secs: f64) -> u64 {
        (secs * f64::from(self.0)).floor().max(0.0) as u64
    }
}

/// Clamp a raw wall-clock delta into `[0, MAX_FRAME_DELTA_SECS]`.
///
/// Negative and NaN deltas (clock went backwards, uninitialized timer) map to 0.
pub fn clamp_frame_delta(raw_secs: f64) -> f64 {
    if raw_secs.is_nan() || raw_secs <= 0.0 {
        return 0.0;
    }
    raw_secs.min(MAX_FRAME_DELTA_SECS)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
