//! One-dimensional motion controller that chases a discrete slide index.
//!
//! Each frame is integrated in [`SUBSTEPS`] equal sub-steps. A sub-step:
//!
//! 1. computes a proportional velocity from the error to the target,
//! 2. adds an [`impulse`]-shaped boost that only matters close to the target
//!    (plain P control crawls over the last fraction of a slide),
//! 3. clamps the result to `±max_velocity`,
//! 4. limits the change in velocity to `max_acceleration * sub_delta`, but only
//!    while speeding up; braking is never limited.

use crate::foundation::math::impulse;

/// Number of integration sub-steps per frame.
pub const SUBSTEPS: u32 = 10;

/// Continuous controller state, carried across frames by the owner of the loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ControllerState {
    pub position: f64,
    pub velocity: f64,
}

/// Tunable motion parameters. All gains and limits are expected to be `>= 0`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Slide index the controller is heading to; kept in `[0, N-1]` by the caller.
    pub target_index: usize,
    /// `kP`: velocity per unit of error.
    pub proportional_gain: f64,
    /// `vMax`.
    pub max_velocity: f64,
    /// `aMax`, applied only while accelerating.
    pub max_acceleration: f64,
    /// Peak extra speed added by the near-target impulse.
    pub approach_gain: f64,
    /// Distance from the target at which the impulse peaks.
    pub approach_width: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            target_index: 0,
            proportional_gain: 5.0,
            max_velocity: 15.0,
            max_acceleration: 40.0,
            approach_gain: 1.0,
            approach_width: 0.5,
        }
    }
}

impl ControllerConfig {
    pub fn target(&self) -> f64 {
        self.target_index as f64
    }

    /// Velocity the controller would like to have at `position`, before
    /// acceleration limiting.
    ///
    /// The impulse term takes the sign of the proportional term, with a zero
    /// proportional term counted as positive.
    pub(crate) fn desired_velocity(&self, position: f64) -> f64 {
        let error = self.target() - position;
        let proportional = error * self.proportional_gain;
        let mut approach = impulse(error.abs(), self.approach_width) * self.approach_gain;
        if proportional < 0.0 {
            approach = -approach;
        }

        let v = proportional + approach;
        if v.is_nan() {
            return 0.0;
        }
        // NaN or negative limits behave as 0 instead of panicking in `clamp`.
        let v_max = self.max_velocity.max(0.0);
        v.clamp(-v_max, v_max)
    }
}

impl ControllerState {
    pub fn new(position: f64, velocity: f64) -> Self {
        Self { position, velocity }
    }

    /// Advance one frame of `frame_delta_secs` toward `config.target_index`.
    ///
    /// The delta is used as given; capping slow frames is the caller's job
    /// (see [`crate::clamp_frame_delta`]). A negative or non-finite delta
    /// leaves the state untouched.
    pub fn advance(self, config: &ControllerConfig, frame_delta_secs: f64) -> Self {
        if !frame_delta_secs.is_finite() || frame_delta_secs < 0.0 {
            return self;
        }

        let sub_delta = frame_delta_secs / f64::from(SUBSTEPS);
        let mut state = self;
        for _ in 0..SUBSTEPS {
            state = state.substep(config, sub_delta);
        }
        state
    }

    pub(crate) fn substep(self, config: &ControllerConfig, sub_delta: f64) -> Self {
        let mut v = config.desired_velocity(self.position);

        if self.velocity.abs() < v.abs() {
            let max_dv = (config.max_acceleration * sub_delta).max(0.0);
            let dv = (v - self.velocity).clamp(-max_dv, max_dv);
            v = self.velocity + dv;
        }

        Self {
            position: self.position + v * sub_delta,
            velocity: v,
        }
    }

    /// Signed distance from the controller to slide `index`.
    pub fn offset_of(&self, index: usize) -> f64 {
        index as f64 - self.position
    }

    pub fn is_settled(&self, config: &ControllerConfig, epsilon: f64) -> bool {
        (config.target() - self.position).abs() <= epsilon && self.velocity.abs() <= epsilon
    }
}

/// Free-function form of [`ControllerState::advance`].
pub fn advance(
    state: ControllerState,
    config: &ControllerConfig,
    frame_delta_secs: f64,
) -> ControllerState {
    state.advance(config, frame_delta_secs)
}

#[cfg(test)]
#[path = "../../tests/unit/motion/controller.rs"]
mod tests;
