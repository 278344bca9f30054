//! Coverflow is the numeric core of a cover-flow slide browser.
//!
//! A row of slides sits at integer indices along one axis. Every frame:
//!
//! 1. **Advance**: the motion controller moves a continuous `position` toward
//!    the selected slide under velocity and acceleration limits
//!    ([`ControllerState::advance`]).
//! 2. **Place**: each slide's signed offset `index - position` is fed through
//!    three fields (lateral position, rotation, depth zoom) to produce a
//!    [`SlideTransform`] ([`slide_transforms`]).
//!
//! Windowing, cameras, drawing and input dispatch live outside this crate; they
//! hand in a frame delta and consume the transforms. [`CoverflowSession`] wires
//! the two steps together the way an application loop would.
#![forbid(unsafe_code)]

mod config;
mod foundation;
mod layout;
mod motion;
mod session;

pub use config::{CoverflowConfig, DEFAULT_SLIDE_COUNT, Tunable};
pub use foundation::core::{Fps, FrameIndex, MAX_FRAME_DELTA_SECS, clamp_frame_delta};
pub use foundation::error::{CoverflowError, CoverflowResult};
pub use foundation::math::{MIN_WIDTH, gaussian, impulse};
pub use layout::fields::{position_field, rotation_field, zoom_field};
pub use layout::slides::{
    FieldSample, FieldShapeParams, SlideTransform, slide_transform, slide_transforms,
};
pub use motion::controller::{ControllerConfig, ControllerState, SUBSTEPS, advance};
pub use motion::selection::{Navigate, clamp_index};
pub use session::{CoverflowSession, FrameSnapshot};
