//! Newton's method for a single real root.
//!
//! Starting from `x0`, iterate `x <- x - f(x) / f'(x)` until two successive
//! iterates are within `epsilon` of each other or `max_iter` steps have been
//! taken. Reaching `max_iter` is reported as a failure even when the step on
//! that same iteration was within tolerance.

use crate::error::{NumericError, Result};
use crate::result::{issue_warning, RootResult};
use crate::utils::{as_f64, cast};
use num::Float;

/// Default stopping tolerance on `|x_{k+1} - x_k|`.
pub const DEFAULT_EPSILON: f64 = 1e-6;
/// Default iteration cap.
pub const DEFAULT_MAX_ITER: usize = 100;

/// Find a root of `f` with derivative `df` starting from `x0`.
///
/// # Arguments
///
/// * `f` - Function whose root is sought
/// * `df` - Derivative of `f`
/// * `x0` - Starting point
/// * `epsilon` - Stop once successive iterates differ by at most this
/// * `max_iter` - Maximum number of Newton steps
///
/// # Examples
///
/// ```
/// use cyphus_elementary::newton::find_root;
/// let res = find_root(|x: f64| x * x * x - x, |x: f64| 3.0 * x * x - 1.0, 1.5, 1e-6, 100).unwrap();
/// assert!((res.root - 1.0).abs() < 1e-6);
/// ```
pub fn find_root<T, F, D>(f: F, df: D, x0: T, epsilon: T, max_iter: usize) -> Result<RootResult<T>>
where
    T: Float,
    F: Fn(T) -> T,
    D: Fn(T) -> T,
{
    let res = newton(f, df, x0, epsilon, max_iter);
    match &res {
        Ok(root) => root.report(),
        Err(err) => issue_warning(err),
    }
    res
}

fn newton<T, F, D>(f: F, df: D, x0: T, epsilon: T, max_iter: usize) -> Result<RootResult<T>>
where
    T: Float,
    F: Fn(T) -> T,
    D: Fn(T) -> T,
{
    if !(epsilon.is_finite() && epsilon >= T::zero()) {
        return Err(NumericError::InvalidTolerance {
            epsilon: as_f64(epsilon),
        });
    }
    if max_iter == 0 {
        return Err(NumericError::InvalidMaxIter { max_iter });
    }
    if !x0.is_finite() {
        return Err(NumericError::InvalidStartingPoint { x0: as_f64(x0) });
    }

    let mut iter: usize = 0;
    let mut next = x0;
    loop {
        iter += 1;
        let x = next;

        let dfx = df(x);
        if dfx == T::zero() {
            return Err(NumericError::DivisionByZero {
                x: as_f64(x),
                iteration: iter,
            });
        }
        let fx = f(x);
        next = x - fx / dfx;
        if !next.is_finite() {
            return Err(NumericError::UndefinedStep {
                x: as_f64(x),
                fx: as_f64(fx),
                dfx: as_f64(dfx),
                iteration: iter,
            });
        }

        if (next - x).abs() <= epsilon || iter >= max_iter {
            break;
        }
    }

    // The cap wins ties with the tolerance test.
    if iter == max_iter {
        Err(NumericError::ConvergenceFailure { iterations: iter })
    } else {
        Ok(RootResult {
            root: next,
            iterations: iter,
        })
    }
}

/// Newton solver with a fixed tolerance and iteration cap.
#[derive(Clone, Debug)]
pub struct NewtonSolver<T: Float> {
    /// Stopping tolerance on successive iterates.
    pub epsilon: T,
    /// Maximum number of Newton steps.
    pub max_iter: usize,
}

impl<T: Float> NewtonSolver<T> {
    /// Find a root of `f`, with derivative `df`, starting from `x0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyphus_elementary::newton::NewtonSolverBuilder;
    /// let solver = NewtonSolverBuilder::default().epsilon(1e-10).build();
    /// let res = solver.find_root(|x: f64| x.cos() - x, |x: f64| -x.sin() - 1.0, 0.5).unwrap();
    /// assert!((res.root - 0.739_085_133_215_160_6).abs() < 1e-10);
    /// ```
    pub fn find_root<F, D>(&self, f: F, df: D, x0: T) -> Result<RootResult<T>>
    where
        F: Fn(T) -> T,
        D: Fn(T) -> T,
    {
        find_root(f, df, x0, self.epsilon, self.max_iter)
    }
}

/// Builder struct used to construct a Newton solver with wanted parameters.
pub struct NewtonSolverBuilder<T: Float> {
    /// Stopping tolerance.
    epsilon: Option<T>,
    /// Iteration cap.
    max_iter: Option<usize>,
}

impl<T: Float> Default for NewtonSolverBuilder<T> {
    fn default() -> Self {
        NewtonSolverBuilder {
            epsilon: None,
            max_iter: None,
        }
    }
}

impl<T: Float> NewtonSolverBuilder<T> {
    /// Set the stopping tolerance.
    pub fn epsilon(mut self, epsilon: T) -> Self {
        self.epsilon = Some(epsilon);
        self
    }
    /// Set the maximum number of iterations.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = Some(max_iter);
        self
    }
    /// Build the solver.
    pub fn build(self) -> NewtonSolver<T> {
        NewtonSolver {
            epsilon: self.epsilon.unwrap_or_else(|| cast(DEFAULT_EPSILON)),
            max_iter: self.max_iter.unwrap_or(DEFAULT_MAX_ITER),
        }
    }
}
