//! Lagrange interpolation in the monomial basis.
//!
//! `interpolate` returns a dense [`Polynomial`] whose coefficients are always
//! ordered from the highest degree down to the constant term. Consumers that
//! need a fixed number of terms go through [`Polynomial::quadratic_terms`]
//! rather than inspecting the coefficient vector themselves.

use crate::error::{NumericError, Result};
use crate::utils::{as_f64, cast};
use num::Float;
use std::fmt;

/// Dense polynomial, `coeffs[0] x^d + coeffs[1] x^(d-1) + ... + coeffs[d]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial<T> {
    coeffs: Vec<T>,
}

impl<T: Float> Polynomial<T> {
    /// Build from coefficients ordered highest degree first. An empty vector
    /// is the zero polynomial.
    pub fn new(coeffs: Vec<T>) -> Self {
        if coeffs.is_empty() {
            Polynomial {
                coeffs: vec![T::zero()],
            }
        } else {
            Polynomial { coeffs }
        }
    }

    /// Coefficients, highest degree first.
    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    /// Nominal degree, i.e. the length of the coefficient vector minus one.
    /// Leading zeros are kept, so interpolating three collinear points still
    /// reports degree two.
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Evaluate with Horner's scheme.
    pub fn eval(&self, x: T) -> T {
        self.coeffs
            .iter()
            .fold(T::zero(), |acc, &c| acc * x + c)
    }

    /// Antiderivative with zero constant term.
    pub fn antiderivative(&self) -> Polynomial<T> {
        let d = self.degree();
        let mut coeffs: Vec<T> = self
            .coeffs
            .iter()
            .enumerate()
            .map(|(k, &c)| c / cast::<T, _>(d - k + 1))
            .collect();
        coeffs.push(T::zero());
        Polynomial { coeffs }
    }

    /// Exact integral over `[lo, hi]`.
    pub fn integrate(&self, lo: T, hi: T) -> T {
        let p = self.antiderivative();
        p.eval(hi) - p.eval(lo)
    }

    /// The terms `(A, B, C)` of `A x^2 + B x + C`, padding missing
    /// high-order terms with zeros. `None` if the degree exceeds two.
    pub fn quadratic_terms(&self) -> Option<(T, T, T)> {
        match *self.coeffs.as_slice() {
            [c] => Some((T::zero(), T::zero(), c)),
            [b, c] => Some((T::zero(), b, c)),
            [a, b, c] => Some((a, b, c)),
            _ => None,
        }
    }
}

impl<T: Float> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.degree();
        for (k, &c) in self.coeffs.iter().enumerate() {
            let power = d - k;
            let c = as_f64(c);
            if k == 0 {
                write!(f, "{}", c)?;
            } else if c < 0.0 {
                write!(f, " - {}", -c)?;
            } else {
                write!(f, " + {}", c)?;
            }
            match power {
                0 => {}
                1 => write!(f, " x")?,
                _ => write!(f, " x^{}", power)?,
            }
        }
        Ok(())
    }
}

/// Multiply `p` (highest degree first) by `(x - root)`.
fn mul_linear<T: Float>(p: &[T], root: T) -> Vec<T> {
    let mut out = vec![T::zero(); p.len() + 1];
    for (k, &c) in p.iter().enumerate() {
        out[k] = out[k] + c;
        out[k + 1] = out[k + 1] - c * root;
    }
    out
}

/// Compute the unique polynomial of degree at most `xs.len() - 1` passing
/// through the points `(xs[i], ys[i])`.
///
/// The returned polynomial always has `xs.len()` coefficients, highest
/// degree first.
///
/// # Examples
///
/// ```
/// use cyphus_elementary::lagrange::interpolate;
/// let p = interpolate(&[0.0f64, 1.0, 2.0], &[1.0, 2.0, 5.0]).unwrap();
/// let (a, b, c) = p.quadratic_terms().unwrap();
/// assert!((a - 1.0).abs() < 1e-12 && b.abs() < 1e-12 && (c - 1.0).abs() < 1e-12);
/// ```
pub fn interpolate<T: Float>(xs: &[T], ys: &[T]) -> Result<Polynomial<T>> {
    if xs.is_empty() {
        return Err(NumericError::InvalidInterpolationNodes {
            reason: "no nodes given",
        });
    }
    if xs.len() != ys.len() {
        return Err(NumericError::InvalidInterpolationNodes {
            reason: "abscissae and ordinates differ in length",
        });
    }
    if xs.iter().any(|x| !x.is_finite()) {
        return Err(NumericError::InvalidInterpolationNodes {
            reason: "non-finite abscissa",
        });
    }

    let n = xs.len();
    let mut coeffs = vec![T::zero(); n];

    for (j, (&x_j, &y_j)) in xs.iter().zip(ys.iter()).enumerate() {
        let mut basis = vec![T::one()];
        let mut denom = T::one();
        for (m, &x_m) in xs.iter().enumerate() {
            if m == j {
                continue;
            }
            let diff = x_j - x_m;
            if diff == T::zero() {
                return Err(NumericError::InvalidInterpolationNodes {
                    reason: "repeated abscissa",
                });
            }
            basis = mul_linear(&basis, x_m);
            denom = denom * diff;
        }

        let w = y_j / denom;
        for (c, b) in coeffs.iter_mut().zip(basis.iter()) {
            *c = *c + w * *b;
        }
    }

    Ok(Polynomial { coeffs })
}
