use crate::error::Result;
use crate::rectangle::rectangle;
use crate::rule::Rule;
use crate::simpson::simpson;
use crate::simpson_lagrange::simpson_lagrange;
use crate::trapezoid::trapezoid;
use num::Float;

/// Integrate a function `f` over `[a, b]` with `n` subintervals using the
/// composite `rule`.
///
/// Simpson-type rules round an odd `n` up to the next even number.
///
/// # Examples
///
/// Integrate f(x) = x^2 over [0, 1] with Simpson's rule, which is exact
/// for polynomials up to degree three:
/// ```
/// use cyphus_elementary::prelude::*;
/// let res = integrate(|x: f64| x * x, 0.0, 1.0, 4, Rule::Simpson).unwrap();
/// assert!((res - 1.0 / 3.0).abs() < 1e-14);
/// ```
///
/// Select the rule from its name:
/// ```
/// use cyphus_elementary::prelude::*;
/// let rule: Rule = "midpoint".parse().unwrap();
/// let res = integrate(|x: f64| x, 0.0, 2.0, 10, rule).unwrap();
/// assert!((res - 2.0).abs() < 1e-14);
/// assert!("upper".parse::<Rule>().is_err());
/// ```
pub fn integrate<T, F>(f: F, a: T, b: T, n: usize, rule: Rule) -> Result<T>
where
    T: Float,
    F: Fn(T) -> T,
{
    match rule {
        Rule::Rectangle(variant) => rectangle(f, a, b, n, variant),
        Rule::Trapezoid => trapezoid(f, a, b, n),
        Rule::Simpson => simpson(f, a, b, n),
        Rule::SimpsonLagrange => simpson_lagrange(f, a, b, n),
    }
}
