use crate::error::Result;
use crate::rule::RectangleRule;
use crate::utils::{cast, step_width};
use num::Float;

/// Composite rectangle rule: `h * sum f(x_i)` with one sample per
/// subinterval, taken at the left end, the right end or the midpoint
/// depending on `rule`.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound of integration
/// * `b` - Upper bound of integration, `a < b`
/// * `n` - Number of subintervals, at least one
/// * `rule` - Which point of each subinterval is sampled
pub fn rectangle<T, F>(f: F, a: T, b: T, n: usize, rule: RectangleRule) -> Result<T>
where
    T: Float,
    F: Fn(T) -> T,
{
    let h = step_width(a, b, n)?;
    let offset: T = match rule {
        RectangleRule::Left => T::zero(),
        RectangleRule::Right => T::one(),
        RectangleRule::Midpoint => cast(0.5),
    };

    let mut sum = T::zero();
    for i in 0..n {
        let x_i = a + (cast::<T, _>(i) + offset) * h;
        sum = sum + f(x_i);
    }

    Ok(sum * h)
}
