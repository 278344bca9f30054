//! Configuration document and the live tuning surface.
//!
//! Degenerate values are stopped here, at the boundary, so the per-frame path
//! can assume sane inputs:
//!
//! - [`CoverflowConfig::validate`] rejects bad documents outright.
//! - [`CoverflowConfig::set`] clamps interactive edits into the panel range and
//!   keeps widths strictly positive.

use std::{fmt, path::Path, str::FromStr};

use anyhow::Context as _;

use crate::{
    foundation::error::{CoverflowError, CoverflowResult},
    foundation::math::MIN_WIDTH,
    layout::slides::FieldShapeParams,
    motion::controller::ControllerConfig,
    motion::selection::Navigate,
};

/// Number of slides in the row unless configured otherwise.
pub const DEFAULT_SLIDE_COUNT: usize = 15;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CoverflowConfig {
    pub slide_count: usize,
    pub shape: FieldShapeParams,
    pub motion: ControllerConfig,
}

impl Default for CoverflowConfig {
    fn default() -> Self {
        Self {
            slide_count: DEFAULT_SLIDE_COUNT,
            shape: FieldShapeParams::default(),
            motion: ControllerConfig::default(),
        }
    }
}

/// One live-editable float parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tunable {
    EdgeSlope,
    PositionRoughness,
    CenterArea,
    RotationArea,
    RotationAmount,
    ZoomArea,
    ZoomAmount,
    ProportionalGain,
    MaxVelocity,
    MaxAcceleration,
    ApproachGain,
    ApproachWidth,
}

impl Tunable {
    pub const ALL: [Tunable; 12] = [
        Self::EdgeSlope,
        Self::PositionRoughness,
        Self::CenterArea,
        Self::RotationArea,
        Self::RotationAmount,
        Self::ZoomArea,
        Self::ZoomAmount,
        Self::ProportionalGain,
        Self::MaxVelocity,
        Self::MaxAcceleration,
        Self::ApproachGain,
        Self::ApproachWidth,
    ];

    /// Short name shown on the tuning panel.
    pub fn name(self) -> &'static str {
        match self {
            Self::EdgeSlope => "edgeSlope",
            Self::PositionRoughness => "positionRoughness",
            Self::CenterArea => "centerArea",
            Self::RotationArea => "rotationArea",
            Self::RotationAmount => "rotation",
            Self::ZoomArea => "zoomArea",
            Self::ZoomAmount => "zoom",
            Self::ProportionalGain => "kP",
            Self::MaxVelocity => "vMax",
            Self::MaxAcceleration => "aMax",
            Self::ApproachGain => "approach",
            Self::ApproachWidth => "approachWide",
        }
    }

    /// Field name in the JSON document.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::EdgeSlope => "edge_slope",
            Self::PositionRoughness => "position_roughness",
            Self::CenterArea => "center_area",
            Self::RotationArea => "rotation_area",
            Self::RotationAmount => "rotation_amount",
            Self::ZoomArea => "zoom_area",
            Self::ZoomAmount => "zoom_amount",
            Self::ProportionalGain => "proportional_gain",
            Self::MaxVelocity => "max_velocity",
            Self::MaxAcceleration => "max_acceleration",
            Self::ApproachGain => "approach_gain",
            Self::ApproachWidth => "approach_width",
        }
    }

    /// Accepts either the panel name or the JSON field name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == name || t.field_name() == name)
    }

    /// Inclusive `(min, max)` range offered by the tuning panel.
    pub fn range(self) -> (f64, f64) {
        match self {
            Self::EdgeSlope => (0.0, 1.0),
            Self::PositionRoughness => (0.0, 4.0),
            Self::CenterArea => (0.0, 10.0),
            Self::RotationArea => (0.0, 4.0),
            Self::RotationAmount => (0.0, 90.0),
            Self::ZoomArea => (0.0, 4.0),
            Self::ZoomAmount => (0.0, 2.0),
            Self::ProportionalGain => (0.0, 10.0),
            Self::MaxVelocity => (0.0, 30.0),
            Self::MaxAcceleration => (0.0, 200.0),
            Self::ApproachGain => (0.0, 5.0),
            Self::ApproachWidth => (0.0, 5.0),
        }
    }

    /// Parameters that end up as a divisor and must stay strictly positive.
    pub fn is_width(self) -> bool {
        matches!(
            self,
            Self::PositionRoughness | Self::RotationArea | Self::ZoomArea | Self::ApproachWidth
        )
    }
}

impl fmt::Display for Tunable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tunable {
    type Err = CoverflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| CoverflowError::validation(format!("unknown parameter '{s}'")))
    }
}

impl CoverflowConfig {
    pub fn from_json_str(json: &str) -> CoverflowResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CoverflowError::serde(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> CoverflowResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> CoverflowResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CoverflowError::serde(e.to_string()))
    }

    pub fn validate(&self) -> CoverflowResult<()> {
        if self.slide_count == 0 {
            return Err(CoverflowError::validation("slide_count must be > 0"));
        }
        if self.motion.target_index >= self.slide_count {
            return Err(CoverflowError::validation(format!(
                "target_index {} is out of range for {} slides",
                self.motion.target_index, self.slide_count
            )));
        }
        for t in Tunable::ALL {
            let v = self.get(t);
            if !v.is_finite() {
                return Err(CoverflowError::validation(format!(
                    "{} must be finite",
                    t.field_name()
                )));
            }
            if t.is_width() && v <= 0.0 {
                return Err(CoverflowError::validation(format!(
                    "{} must be > 0",
                    t.field_name()
                )));
            }
            if v < 0.0 {
                return Err(CoverflowError::validation(format!(
                    "{} must be >= 0",
                    t.field_name()
                )));
            }
        }
        Ok(())
    }

    pub fn get(&self, t: Tunable) -> f64 {
        match t {
            Tunable::EdgeSlope => self.shape.edge_slope,
            Tunable::PositionRoughness => self.shape.position_roughness,
            Tunable::CenterArea => self.shape.center_area,
            Tunable::RotationArea => self.shape.rotation_area,
            Tunable::RotationAmount => self.shape.rotation_amount,
            Tunable::ZoomArea => self.shape.zoom_area,
            Tunable::ZoomAmount => self.shape.zoom_amount,
            Tunable::ProportionalGain => self.motion.proportional_gain,
            Tunable::MaxVelocity => self.motion.max_velocity,
            Tunable::MaxAcceleration => self.motion.max_acceleration,
            Tunable::ApproachGain => self.motion.approach_gain,
            Tunable::ApproachWidth => self.motion.approach_width,
        }
    }

    /// Apply a live edit and return the value actually stored.
    ///
    /// Non-finite input is rejected; anything else is clamped into
    /// [`Tunable::range`], and widths are floored to [`MIN_WIDTH`].
    pub fn set(&mut self, t: Tunable, value: f64) -> CoverflowResult<f64> {
        if !value.is_finite() {
            return Err(CoverflowError::validation(format!(
                "{} must be finite, got {value}",
                t.name()
            )));
        }
        let (lo, hi) = t.range();
        let mut v = value.clamp(lo, hi);
        if t.is_width() {
            v = v.max(MIN_WIDTH);
        }
        *self.slot_mut(t) = v;
        tracing::debug!(param = t.name(), requested = value, stored = v, "parameter set");
        Ok(v)
    }

    fn slot_mut(&mut self, t: Tunable) -> &mut f64 {
        match t {
            Tunable::EdgeSlope => &mut self.shape.edge_slope,
            Tunable::PositionRoughness => &mut self.shape.position_roughness,
            Tunable::CenterArea => &mut self.shape.center_area,
            Tunable::RotationArea => &mut self.shape.rotation_area,
            Tunable::RotationAmount => &mut self.shape.rotation_amount,
            Tunable::ZoomArea => &mut self.shape.zoom_area,
            Tunable::ZoomAmount => &mut self.shape.zoom_amount,
            Tunable::ProportionalGain => &mut self.motion.proportional_gain,
            Tunable::MaxVelocity => &mut self.motion.max_velocity,
            Tunable::MaxAcceleration => &mut self.motion.max_acceleration,
            Tunable::ApproachGain => &mut self.motion.approach_gain,
            Tunable::ApproachWidth => &mut self.motion.approach_width,
        }
    }

    /// Resize the row, pulling the target back inside it.
    pub fn set_slide_count(&mut self, slide_count: usize) -> CoverflowResult<()> {
        if slide_count == 0 {
            return Err(CoverflowError::validation("slide_count must be > 0"));
        }
        self.slide_count = slide_count;
        self.motion.target_index = self.motion.target_index.min(slide_count - 1);
        Ok(())
    }

    /// Move the target index and return the new value.
    pub fn navigate(&mut self, nav: Navigate) -> usize {
        self.motion.target_index = nav.apply(self.motion.target_index, self.slide_count);
        self.motion.target_index
    }

    /// Set the target from an arbitrary signed index, clamped into the row.
    pub fn select(&mut self, index: i64) -> usize {
        self.navigate(Navigate::Index(index))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
