/// Smallest width/roughness the field and impulse shapes will divide by.
pub const MIN_WIDTH: f64 = 1e-6;

/// Floor a shaping width to a usable divisor: `|w|`, but never below [`MIN_WIDTH`].
///
/// NaN widths become `MIN_WIDTH`.
pub(crate) fn guard_width(w: f64) -> f64 {
    w.abs().max(MIN_WIDTH)
}

/// `(x/a) * exp(1 - x/a)`: zero at `x = 0`, peak of exactly 1 at `x = a`, decays past it.
///
/// A non-positive (or NaN) width yields 0 so a degenerate setting simply
/// disables the boost.
pub fn impulse(x: f64, a: f64) -> f64 {
    if a.is_nan() || a <= 0.0 {
        return 0.0;
    }
    let over_a = 1.0 / a;
    over_a * x * (1.0 - over_a * x).exp()
}

/// `exp(-z² / s²)` with `s` floored by [`guard_width`].
pub fn gaussian(z: f64, s: f64) -> f64 {
    let s = guard_width(s);
    (-(z * z) / (s * s)).exp()
}

pub(crate) fn erf(x: f64) -> f64 {
    libm::erf(x)
}

/// Sign with zero counted as positive.
pub(crate) fn sign_non_negative(x: f64) -> f64 {
    if x >= 0.0 { 1.0 } else { -1.0 }
}
