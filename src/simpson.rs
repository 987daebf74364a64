use crate::error::Result;
use crate::utils::{cast, even_subdivisions, node_count, step_width};
use ndarray::Array1;
use num::Float;

/// Composite Simpson's rule with weights `1, 4, 2, 4, ..., 2, 4, 1` over
/// `n + 1` equally spaced nodes, scaled by `h / 3`.
///
/// An odd `n` is silently replaced by `n + 1`, so `simpson(f, a, b, 7)` and
/// `simpson(f, a, b, 8)` return the same value.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound of integration
/// * `b` - Upper bound of integration, `a < b`
/// * `n` - Number of subintervals, at least one
pub fn simpson<T, F>(f: F, a: T, b: T, n: usize) -> Result<T>
where
    T: Float,
    F: Fn(T) -> T,
{
    let n = even_subdivisions(n)?;
    let h = step_width(a, b, n)?;
    let two: T = cast(2);
    let four: T = cast(4);

    let mut sum = f(a) + f(b);
    for i in 1..n {
        let x_i = a + cast::<T, _>(i) * h;
        let weight = if i % 2 == 1 { four } else { two };
        sum = sum + weight * f(x_i);
    }

    Ok(sum * h / cast::<T, _>(3))
}

/// Array form of [`simpson`]: the weight vector and the sample vector are
/// built as `ndarray` arrays and contracted.
pub fn simpson_vectorized<T, F>(f: F, a: T, b: T, n: usize) -> Result<T>
where
    T: Float,
    F: Fn(T) -> T,
{
    let n = even_subdivisions(n)?;
    let h = step_width(a, b, n)?;
    let nodes = node_count(n)?;

    let y = Array1::linspace(a, b, nodes).mapv(f);
    let weights: Array1<T> = Array1::from_shape_fn(nodes, |i| simpson_weight(i, n));

    Ok(h / cast::<T, _>(3) * (&weights * &y).sum())
}

/// Weight of node `i` out of `n + 1` in the composite Simpson sum.
fn simpson_weight<T: Float>(i: usize, n: usize) -> T {
    if i == 0 || i == n {
        T::one()
    } else if i % 2 == 1 {
        cast(4)
    } else {
        cast(2)
    }
}
