//! Continuous fields over the signed slide offset `z = slide_index - position`.
//!
//! All three are unscaled shapes; amplitudes are applied in [`crate::SlideTransform`].

use std::f64::consts::PI;

use crate::foundation::math::{erf, gaussian, guard_width, sign_non_negative};

/// Lateral placement: `∫₀ᶻ (edge_slope + center_area · exp(-x²/roughness²)) dx`.
///
/// Slides near the center are spread by the Gaussian bump, slides toward the
/// edges only by `edge_slope`. `roughness` is floored to
/// [`crate::MIN_WIDTH`] in magnitude.
pub fn position_field(z: f64, roughness: f64, edge_slope: f64, center_area: f64) -> f64 {
    let s = guard_width(roughness);
    0.5 * PI.sqrt() * s * center_area * erf(z / s) + edge_slope * z
}

/// Rotation shape in `(-1, 0]` for `z >= 0` and `[0, 1)` for `z < 0`.
///
/// Zero counts as the positive side.
pub fn rotation_field(z: f64, rotation_area: f64) -> f64 {
    sign_non_negative(z) * (gaussian(z, rotation_area) - 1.0)
}

/// Depth bump in `(0, 1]`, peaking at `z = 0`.
pub fn zoom_field(z: f64, zoom_area: f64) -> f64 {
    gaussian(z, zoom_area)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fields.rs"]
mod tests;
