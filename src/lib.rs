//! Elementary numerical kernels: composite Newton-Cotes quadrature
//! (rectangle, trapezoid, Simpson, Simpson from local Lagrange
//! interpolation) and Newton's method for a single real root.

#![allow(clippy::excessive_precision)]

pub mod convergence;
pub mod error;
pub mod lagrange;
pub mod newton;
pub mod prelude;
pub mod quad;
pub mod rectangle;
pub mod result;
pub mod rule;
pub mod simpson;
pub mod simpson_lagrange;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod trapezoid;
pub(crate) mod utils;
