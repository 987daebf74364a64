use crate::error::Result;
use crate::utils::{cast, node_count, step_width};
use ndarray::{s, Array1};
use num::Float;

/// Composite trapezoid rule,
/// `h * (f(a)/2 + f(b)/2 + sum_{i=1}^{n-1} f(a + i h))`.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound of integration
/// * `b` - Upper bound of integration, `a < b`
/// * `n` - Number of subintervals, at least one
pub fn trapezoid<T, F>(f: F, a: T, b: T, n: usize) -> Result<T>
where
    T: Float,
    F: Fn(T) -> T,
{
    let h = step_width(a, b, n)?;
    let half: T = cast(0.5);

    let mut sum = half * (f(a) + f(b));
    for i in 1..n {
        sum = sum + f(a + cast::<T, _>(i) * h);
    }

    Ok(sum * h)
}

/// Array form of [`trapezoid`]: samples `f` on `n + 1` equally spaced nodes
/// and reduces the array. Agrees with the loop version up to summation
/// order.
pub fn trapezoid_vectorized<T, F>(f: F, a: T, b: T, n: usize) -> Result<T>
where
    T: Float,
    F: Fn(T) -> T,
{
    let h = step_width(a, b, n)?;
    let half: T = cast(0.5);

    let y = Array1::linspace(a, b, node_count(n)?).mapv(f);
    let interior = y.slice(s![1..-1]).sum();

    Ok(h * (half * y[0] + half * y[n] + interior))
}
