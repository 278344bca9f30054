use crate::{
    config::{CoverflowConfig, Tunable},
    foundation::core::{FrameIndex, MAX_FRAME_DELTA_SECS, clamp_frame_delta},
    foundation::error::CoverflowResult,
    layout::slides::{SlideTransform, slide_transforms},
    motion::controller::ControllerState,
    motion::selection::Navigate,
};

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameSnapshot {
    pub frame: FrameIndex,
    /// Delta actually integrated, after clamping.
    pub delta_secs: f64,
    pub target_index: usize,
    pub state: ControllerState,
    pub slides: Vec<SlideTransform>,
}

/// Owns the controller state and the live configuration for one cover-flow row.
///
/// Per frame: [`tick`](Self::tick) clamps the wall-clock delta, advances the
/// controller, then evaluates every slide against the new position.
#[derive(Clone, Debug)]
pub struct CoverflowSession {
    config: CoverflowConfig,
    state: ControllerState,
    frame: FrameIndex,
}

impl CoverflowSession {
    pub fn new(config: CoverflowConfig) -> CoverflowResult<Self> {
        Self::with_state(config, ControllerState::default())
    }

    pub fn with_state(config: CoverflowConfig, state: ControllerState) -> CoverflowResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state,
            frame: FrameIndex(0),
        })
    }

    pub fn config(&self) -> &CoverflowConfig {
        &self.config
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn target_index(&self) -> usize {
        self.config.motion.target_index
    }

    /// Number of frames ticked so far.
    pub fn frame(&self) -> FrameIndex {
        self.frame
    }

    pub fn navigate(&mut self, nav: Navigate) -> usize {
        let before = self.config.motion.target_index;
        let after = self.config.navigate(nav);
        if before != after {
            tracing::debug!(?nav, from = before, to = after, "selection changed");
        }
        after
    }

    pub fn select_next(&mut self) -> usize {
        self.navigate(Navigate::Next)
    }

    pub fn select_prev(&mut self) -> usize {
        self.navigate(Navigate::Prev)
    }

    pub fn select(&mut self, index: i64) -> usize {
        self.navigate(Navigate::Index(index))
    }

    pub fn set_param(&mut self, t: Tunable, value: f64) -> CoverflowResult<f64> {
        self.config.set(t, value)
    }

    pub fn set_slide_count(&mut self, slide_count: usize) -> CoverflowResult<()> {
        self.config.set_slide_count(slide_count)?;
        tracing::debug!(
            slide_count,
            target_index = self.config.motion.target_index,
            "slide count changed"
        );
        Ok(())
    }

    /// Advance the controller by a raw wall-clock delta and return the new state.
    pub fn advance(&mut self, raw_delta_secs: f64) -> ControllerState {
        let delta = clamp_frame_delta(raw_delta_secs);
        if raw_delta_secs > MAX_FRAME_DELTA_SECS {
            tracing::trace!(raw_delta_secs, delta, "long frame clamped");
        }
        self.state = self.state.advance(&self.config.motion, delta);
        self.frame = FrameIndex(self.frame.0.saturating_add(1));
        self.state
    }

    #[tracing::instrument(level = "trace", skip(self), fields(frame = self.frame.0))]
    pub fn tick(&mut self, raw_delta_secs: f64) -> FrameSnapshot {
        let frame = self.frame;
        self.advance(raw_delta_secs);
        let snapshot = FrameSnapshot {
            frame,
            delta_secs: clamp_frame_delta(raw_delta_secs),
            target_index: self.target_index(),
            state: self.state,
            slides: self.transforms().collect(),
        };
        tracing::trace!(
            position = snapshot.state.position,
            velocity = snapshot.state.velocity,
            "tick"
        );
        snapshot
    }

    /// Slide transforms for the current position, without advancing.
    pub fn transforms(&self) -> impl Iterator<Item = SlideTransform> + use<> {
        slide_transforms(self.config.slide_count, &self.state, &self.config.shape)
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
