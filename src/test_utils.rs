/// Assert `result` is within `relative_error` of `expected`. NaN must match
/// NaN and infinities must match infinities. The finite case is
/// [`test_abs`] with the tolerance scaled by `|expected|`.
pub(crate) fn test_rel(result: f64, expected: f64, relative_error: f64) {
    if result.is_nan() || expected.is_nan() {
        assert!(
            result.is_nan() && expected.is_nan(),
            "observed: {:?}, expected: {:?}",
            result,
            expected
        );
        return;
    }
    if result.is_infinite() || expected.is_infinite() {
        assert_eq!(result, expected);
        return;
    }
    assert!(
        expected == 0.0 || expected.abs() >= f64::MIN_POSITIVE,
        "[Test uses subnormal value]"
    );
    test_abs(result, expected, relative_error * expected.abs().max(f64::MIN_POSITIVE));
}

pub(crate) fn test_abs(result: f64, expected: f64, absolute_error: f64) {
    assert!(
        result.is_finite() && (result - expected).abs() <= absolute_error,
        "observed: {:?}, expected: {:?}, tolerance: {:?}",
        result,
        expected,
        absolute_error
    );
}

/// x^4 + cos(x)
pub(crate) fn quartic_cos(x: f64) -> f64 {
    x.powi(4) + x.cos()
}

/// Exact integral of `quartic_cos` over [a, b]
pub(crate) fn quartic_cos_integral(a: f64, b: f64) -> f64 {
    (b.powi(5) - a.powi(5)) / 5.0 + b.sin() - a.sin()
}

/// sin(x) + x^2 - x/2 + 1
pub(crate) fn sine_poly(x: f64) -> f64 {
    x.sin() + x * x - 0.5 * x + 1.0
}

/// Exact integral of `sine_poly` over [a, b]
pub(crate) fn sine_poly_integral(a: f64, b: f64) -> f64 {
    a.cos() - b.cos() + (b.powi(3) - a.powi(3)) / 3.0 - (b * b - a * a) / 4.0 + (b - a)
}

/// x^3 - x, roots at -1, 0, 1
pub(crate) fn cubic(x: f64) -> f64 {
    x * x * x - x
}

pub(crate) fn cubic_prime(x: f64) -> f64 {
    3.0 * x * x - 1.0
}

/// cos(x) - x, single root near 0.739
pub(crate) fn cos_minus_x(x: f64) -> f64 {
    x.cos() - x
}

pub(crate) fn cos_minus_x_prime(x: f64) -> f64 {
    -x.sin() - 1.0
}

/// Dottie number, the fixed point of cos
pub(crate) const DOTTIE: f64 = 0.739_085_133_215_160_6;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rel_accepts_matching_specials() {
        test_rel(f64::NAN, f64::NAN, 1e-15);
        test_rel(f64::INFINITY, f64::INFINITY, 1e-15);
        test_rel(1.0 + 1e-16, 1.0, 1e-15);
        test_rel(0.0, 0.0, 1e-15);
    }

    #[test]
    #[should_panic]
    fn test_rel_rejects_outside_tolerance() {
        test_rel(1.001, 1.0, 1e-6);
    }

    #[test]
    #[should_panic]
    fn test_rel_rejects_nan_against_number() {
        test_rel(f64::NAN, 1.0, 1e-6);
    }
}
