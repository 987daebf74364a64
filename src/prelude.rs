pub use crate::convergence::{ConvergenceStudy, ConvergenceStudyBuilder, ConvergenceTable};
pub use crate::error::{ErrorKind, NumericError};
pub use crate::lagrange::{interpolate, Polynomial};
pub use crate::newton::{find_root, NewtonSolver, NewtonSolverBuilder};
pub use crate::quad::integrate;
pub use crate::rectangle::rectangle;
pub use crate::result::RootResult;
pub use crate::rule::{RectangleRule, Rule};
pub use crate::simpson::{simpson, simpson_vectorized};
pub use crate::simpson_lagrange::{simpson_lagrange, simpson_lagrange_segments, Segment};
pub use crate::trapezoid::{trapezoid, trapezoid_vectorized};
