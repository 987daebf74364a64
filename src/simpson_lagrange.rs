//! Simpson's rule derived from piecewise quadratic interpolation.
//!
//! The interval is cut into `n / 2` panels of width `2h`. On each panel the
//! three nodes are interpolated by a quadratic which is then integrated in
//! closed form. The result coincides with [`crate::simpson::simpson`] up to
//! rounding.
//!
//! Each panel is worked in the local coordinate `t = x - x1`, so the nodes
//! are `(x0 - x1, 0, x2 - x1)`. In global `x` the monomial terms of the
//! closed form cancel badly once the panel sits far from the origin.

use crate::error::{NumericError, Result};
use crate::lagrange::{interpolate, Polynomial};
use crate::utils::{cast, even_subdivisions, step_width};
use num::Float;

/// One panel of the piecewise quadratic interpolant.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment<T> {
    /// Left node
    pub x0: T,
    /// Middle node
    pub x1: T,
    /// Right node
    pub x2: T,
    /// Quadratic in `t = x - x1` through the three samples of the panel
    pub polynomial: Polynomial<T>,
    /// Integral of the interpolant over `[x0, x2]`
    pub integral: T,
}

impl<T: Float> Segment<T> {
    /// Evaluate the interpolant at global abscissa `x`.
    pub fn eval(&self, x: T) -> T {
        self.polynomial.eval(x - self.x1)
    }
}

/// `A/3 (t2^3 - t0^3) + B/2 (t2^2 - t0^2) + C (t2 - t0)`
fn quadratic_integral<T: Float>(p: &Polynomial<T>, t0: T, t2: T) -> Result<T> {
    let (a, b, c) = p
        .quadratic_terms()
        .ok_or(NumericError::InvalidInterpolationNodes {
            reason: "panel interpolant has degree above two",
        })?;
    let two: T = cast(2);
    let three: T = cast(3);

    Ok(a / three * (t2.powi(3) - t0.powi(3))
        + b / two * (t2.powi(2) - t0.powi(2))
        + c * (t2 - t0))
}

/// Interpolate and integrate each panel of width `2h`, returning the panels
/// in order from `a` to `b`. An odd `n` is rounded up to `n + 1`.
pub fn simpson_lagrange_segments<T, F>(f: F, a: T, b: T, n: usize) -> Result<Vec<Segment<T>>>
where
    T: Float,
    F: Fn(T) -> T,
{
    let n = even_subdivisions(n)?;
    let h = step_width(a, b, n)?;

    let mut segments = Vec::with_capacity(n / 2);
    for i in (0..n).step_by(2) {
        let x0 = a + cast::<T, _>(i) * h;
        let x1 = a + cast::<T, _>(i + 1) * h;
        // pin the last node to b so panels tile [a, b] exactly
        let x2 = if i + 2 == n {
            b
        } else {
            a + cast::<T, _>(i + 2) * h
        };

        let (t0, t2) = (x0 - x1, x2 - x1);
        let ys = [f(x0), f(x1), f(x2)];
        let polynomial = interpolate(&[t0, T::zero(), t2], &ys)?;
        let integral = quadratic_integral(&polynomial, t0, t2)?;

        segments.push(Segment {
            x0,
            x1,
            x2,
            polynomial,
            integral,
        });
    }

    Ok(segments)
}

/// Composite Simpson's rule computed by integrating the local Lagrange
/// interpolant of each panel.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound of integration
/// * `b` - Upper bound of integration, `a < b`
/// * `n` - Number of subintervals, rounded up to the next even number
pub fn simpson_lagrange<T, F>(f: F, a: T, b: T, n: usize) -> Result<T>
where
    T: Float,
    F: Fn(T) -> T,
{
    let segments = simpson_lagrange_segments(f, a, b, n)?;
    Ok(segments
        .iter()
        .fold(T::zero(), |acc, seg| acc + seg.integral))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ErrorKind;
    use crate::simpson::simpson;
    use crate::test_utils::*;

    #[test]
    fn test_agrees_with_simpson() {
        for &n in &[2, 4, 8, 16, 32, 64] {
            let lagrange = simpson_lagrange(quartic_cos, 0.0, 2.0, n).unwrap();
            let classic = simpson(quartic_cos, 0.0, 2.0, n).unwrap();
            test_abs(lagrange, classic, 1e-9);

            let lagrange = simpson_lagrange(sine_poly, -1.0, 3.0, n).unwrap();
            let classic = simpson(sine_poly, -1.0, 3.0, n).unwrap();
            test_abs(lagrange, classic, 1e-9);
        }
    }

    #[test]
    fn test_agrees_with_simpson_away_from_origin() {
        for &(a, b, n) in &[(10.0, 12.0, 1000), (100.0, 102.0, 64), (-102.0, -100.0, 64)] {
            let lagrange = simpson_lagrange(sine_poly, a, b, n).unwrap();
            let classic = simpson(sine_poly, a, b, n).unwrap();
            test_abs(lagrange, classic, 1e-9);
        }

        // integral is ~2e6 here, so compare relative to its size
        let lagrange = simpson_lagrange(sine_poly, 1000.0, 1002.0, 1000).unwrap();
        let classic = simpson(sine_poly, 1000.0, 1002.0, 1000).unwrap();
        test_rel(lagrange, classic, 1e-13);
        test_rel(lagrange, sine_poly_integral(1000.0, 1002.0), 1e-12);
    }

    #[test]
    fn test_segment_eval_far_from_origin() {
        let segments = simpson_lagrange_segments(sine_poly, 500.0, 501.0, 2).unwrap();
        let seg = &segments[0];
        assert_eq!(seg.x1, 500.5);
        for &x in &[seg.x0, seg.x1, seg.x2] {
            test_rel(seg.eval(x), sine_poly(x), 1e-12);
        }
    }

    #[test]
    fn test_odd_n_rounds_up() {
        let odd = simpson_lagrange(sine_poly, 0.0, 2.0, 5).unwrap();
        let even = simpson_lagrange(sine_poly, 0.0, 2.0, 6).unwrap();
        assert_eq!(odd, even);
    }

    #[test]
    fn test_accuracy() {
        let exact = sine_poly_integral(0.0, 2.0);
        let res = simpson_lagrange(sine_poly, 0.0, 2.0, 64).unwrap();
        test_abs(res, exact, 1e-7);
    }

    #[test]
    fn test_segments() {
        let segments = simpson_lagrange_segments(quartic_cos, 0.0, 2.0, 4).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].x0, 0.0);
        assert_eq!(segments[0].x1, 0.5);
        assert_eq!(segments[0].x2, 1.0);
        assert_eq!(segments[1].x0, 1.0);
        assert_eq!(segments[1].x2, 2.0);

        for seg in segments.iter() {
            for &x in &[seg.x0, seg.x1, seg.x2] {
                test_rel(seg.eval(x), quartic_cos(x), 1e-12);
            }
            test_rel(
                seg.integral,
                seg.polynomial.integrate(seg.x0 - seg.x1, seg.x2 - seg.x1),
                1e-12,
            );
        }

        let total: f64 = segments.iter().map(|s| s.integral).sum();
        test_rel(total, simpson_lagrange(quartic_cos, 0.0, 2.0, 4).unwrap(), 1e-15);
    }

    #[test]
    fn test_exact_for_quadratics() {
        let f = |x: f64| 2.0 * x * x - x + 3.0;
        let res = simpson_lagrange(f, 0.0, 3.0, 2).unwrap();
        test_rel(res, 18.0 - 4.5 + 9.0, 1e-13);
    }

    #[test]
    fn test_invalid_arguments() {
        let err = simpson_lagrange(quartic_cos, 0.0, -2.0, 4).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = simpson_lagrange_segments(quartic_cos, 0.0, 2.0, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
