use std::error::Error;
use std::fmt;

/// Coarse classification of a `NumericError`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ErrorKind {
    /// Malformed input: bad interval, subdivision count, rule name,
    /// tolerance, ...
    InvalidArgument,
    /// A Newton step divided by a vanishing derivative, or produced a
    /// non-finite iterate.
    DivisionByZero,
    /// The iteration cap was reached before the stopping rule was met.
    ConvergenceFailure,
}

/// Errors reported by the quadrature rules and the root solver.
#[derive(Clone, Debug, PartialEq)]
pub enum NumericError {
    /// The interval `[a, b]` is empty, reversed or not finite.
    InvalidInterval { a: f64, b: f64 },
    /// The number of subintervals must be at least one.
    InvalidSubdivisions { n: usize },
    /// A rule name could not be parsed.
    UnknownRule { name: String },
    /// Interpolation nodes are empty, mismatched or repeated.
    InvalidInterpolationNodes { reason: &'static str },
    /// The stopping tolerance must be finite and non-negative.
    InvalidTolerance { epsilon: f64 },
    /// The iteration cap must be at least one.
    InvalidMaxIter { max_iter: usize },
    /// The starting point of an iteration is not finite.
    InvalidStartingPoint { x0: f64 },
    /// A convergence study was built without a reference value.
    MissingReference,
    /// The derivative vanished at iterate `x`.
    DivisionByZero { x: f64, iteration: usize },
    /// The Newton update at `x` was not finite.
    UndefinedStep { x: f64, fx: f64, dfx: f64, iteration: usize },
    /// `max_iter` iterations were performed without meeting the tolerance.
    ConvergenceFailure { iterations: usize },
}

impl NumericError {
    pub fn kind(&self) -> ErrorKind {
        match *self {
            NumericError::InvalidInterval { .. }
            | NumericError::InvalidSubdivisions { .. }
            | NumericError::UnknownRule { .. }
            | NumericError::InvalidInterpolationNodes { .. }
            | NumericError::InvalidTolerance { .. }
            | NumericError::InvalidMaxIter { .. }
            | NumericError::InvalidStartingPoint { .. }
            | NumericError::MissingReference => ErrorKind::InvalidArgument,
            NumericError::DivisionByZero { .. } | NumericError::UndefinedStep { .. } => {
                ErrorKind::DivisionByZero
            }
            NumericError::ConvergenceFailure { .. } => ErrorKind::ConvergenceFailure,
        }
    }
}

impl Error for NumericError {}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NumericError::InvalidInterval { a, b } => {
                write!(f, "Invalid interval [{}, {}]: bounds must be finite with a < b", a, b)
            }
            NumericError::InvalidSubdivisions { n } => {
                write!(f, "Invalid number of subintervals: {}, must be positive", n)
            }
            NumericError::UnknownRule { name } => write!(f, "Unknown quadrature rule '{}'", name),
            NumericError::InvalidInterpolationNodes { reason } => {
                write!(f, "Invalid interpolation nodes: {}", reason)
            }
            NumericError::InvalidTolerance { epsilon } => {
                write!(f, "Invalid tolerance {}: must be finite and non-negative", epsilon)
            }
            NumericError::InvalidMaxIter { max_iter } => {
                write!(f, "Invalid iteration limit {}: must be at least 1", max_iter)
            }
            NumericError::InvalidStartingPoint { x0 } => {
                write!(f, "Invalid starting point {}: must be finite", x0)
            }
            NumericError::MissingReference => {
                write!(f, "A reference value is required to compute errors")
            }
            NumericError::DivisionByZero { x, iteration } => write!(
                f,
                "Derivative vanishes at x = {} (iteration {})",
                x, iteration
            ),
            NumericError::UndefinedStep { x, fx, dfx, iteration } => write!(
                f,
                "Newton step undefined at x = {}: f(x) = {}, f'(x) = {} (iteration {})",
                x, fx, dfx, iteration
            ),
            NumericError::ConvergenceFailure { iterations } => write!(
                f,
                "Too many iterations: no convergence after {}",
                iterations
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, NumericError>;
