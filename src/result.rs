use crate::error::NumericError;
use crate::utils::as_f64;
use log::{debug, warn};
use num::Float;

/// Structure for the result of a successful root search
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootResult<T> {
    /// Approximate root
    pub root: T,
    /// Number of Newton steps taken
    pub iterations: usize,
}

impl<T: Float> RootResult<T> {
    pub(crate) fn report(&self) {
        debug!(
            "Convergence reached in {} iterations, root = {}",
            self.iterations,
            as_f64(self.root)
        );
    }
}

/// Log a failed root search before it is handed back to the caller.
pub(crate) fn issue_warning(err: &NumericError) {
    match err {
        NumericError::ConvergenceFailure { iterations } => {
            warn!("Too many iterations, no convergence after {}", iterations)
        }
        NumericError::DivisionByZero { x, iteration } => {
            warn!("Zero derivative at x = {} on iteration {}", x, iteration)
        }
        NumericError::UndefinedStep { x, fx, dfx, iteration } => warn!(
            "Non-finite Newton step at x = {} (f = {}, f' = {}) on iteration {}",
            x, fx, dfx, iteration
        ),
        _ => warn!("Invalid argument(s): {}", err),
    }
}
