use crate::error::{NumericError, Result};
use log::debug;
use num::Float;

/// Convert a literal or count into the working float type. Infallible for
/// the primitive floats.
#[inline]
pub(crate) fn cast<T: Float, N: num::ToPrimitive>(x: N) -> T {
    T::from(x).unwrap_or_else(T::nan)
}

/// Lossy view of a float for error reporting.
#[inline]
pub(crate) fn as_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

/// Validate `[a, b]` and `n`, returning the subinterval width.
pub(crate) fn step_width<T: Float>(a: T, b: T, n: usize) -> Result<T> {
    if !(a.is_finite() && b.is_finite() && a < b) {
        return Err(NumericError::InvalidInterval {
            a: as_f64(a),
            b: as_f64(b),
        });
    }
    if n == 0 {
        return Err(NumericError::InvalidSubdivisions { n });
    }
    Ok((b - a) / cast(n))
}

/// Simpson-type rules pair up subintervals, so an odd count is bumped to
/// the next even one.
#[inline]
pub(crate) fn even_subdivisions(n: usize) -> Result<usize> {
    if n % 2 != 0 {
        let even = node_count(n)?;
        debug!("n adjusted to {} (Simpson rules need an even count)", even);
        Ok(even)
    } else {
        Ok(n)
    }
}

/// Number of nodes `n + 1` bounding `n` subintervals.
#[inline]
pub(crate) fn node_count(n: usize) -> Result<usize> {
    n.checked_add(1)
        .ok_or(NumericError::InvalidSubdivisions { n })
}
