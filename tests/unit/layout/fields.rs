use super::*;

const SAMPLES: [f64; 9] = [0.05, 0.3, 0.5, 0.7, 1.0, 1.5, 2.5, 4.0, 9.0];

#[test]
fn fields_at_center() {
    assert_eq!(position_field(0.0, 0.7, 0.3, 1.1), 0.0);
    assert_eq!(rotation_field(0.0, 0.7), 0.0);
    assert_eq!(zoom_field(0.0, 0.7), 1.0);
}

#[test]
fn zoom_is_even() {
    for z in SAMPLES {
        for s in [0.2, 0.7, 3.0] {
            assert_eq!(zoom_field(z, s), zoom_field(-z, s));
        }
    }
}

#[test]
fn rotation_is_odd_off_center() {
    for z in SAMPLES {
        assert_eq!(rotation_field(z, 0.7), -rotation_field(-z, 0.7));
    }
}

#[test]
fn rotation_ranges_by_side() {
    for z in SAMPLES {
        let right = rotation_field(z, 0.7);
        let left = rotation_field(-z, 0.7);
        assert!(right <= 0.0 && right > -1.0 - 1e-12);
        assert!(left >= 0.0 && left < 1.0 + 1e-12);
    }
    // Far slides saturate at the full amplitude.
    assert!((rotation_field(9.0, 0.7) + 1.0).abs() < 1e-12);
}

#[test]
fn position_is_odd() {
    for z in SAMPLES {
        let a = position_field(z, 0.7, 0.3, 1.1);
        let b = position_field(-z, 0.7, 0.3, 1.1);
        assert!((a + b).abs() < 1e-12, "z={z}: {a} vs {b}");
    }
}

#[test]
fn position_minus_linear_term_is_bounded_erf_part() {
    let (s, t, w) = (0.7, 0.3, 1.1);
    let plateau = 0.5 * std::f64::consts::PI.sqrt() * s * w;
    let far = position_field(20.0, s, t, w) - t * 20.0;
    assert!((far - plateau).abs() < 1e-9);
}

#[test]
fn position_slope_at_center_is_density_peak() {
    let (s, t, w) = (0.7, 0.3, 1.1);
    let h = 1e-5;
    let slope = (position_field(h, s, t, w) - position_field(-h, s, t, w)) / (2.0 * h);
    assert!((slope - (t + w)).abs() < 1e-6);
}

#[test]
fn position_is_increasing_for_non_negative_shape() {
    let mut prev = position_field(-10.0, 0.7, 0.3, 1.1);
    let mut z = -10.0;
    while z < 10.0 {
        z += 0.1;
        let next = position_field(z, 0.7, 0.3, 1.1);
        assert!(next > prev);
        prev = next;
    }
}

#[test]
fn zero_widths_stay_finite() {
    for z in [-1.0, 0.0, 1.0] {
        assert!(position_field(z, 0.0, 0.3, 1.1).is_finite());
        assert!(rotation_field(z, 0.0).is_finite());
        assert!(zoom_field(z, 0.0).is_finite());
    }
    assert_eq!(zoom_field(1.0, 0.0), 0.0);
}
