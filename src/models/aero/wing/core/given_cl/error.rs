use thiserror::Error;
use twine_solvers::equation::bisection;

use crate::models::aero::wing::core::SolveError;

/// Errors that can occur while trimming a wing to a target lift coefficient.
#[derive(Debug, Error)]
pub enum GivenClError {
    /// A wing solve failed.
    #[error("wing solve failed")]
    Solve(#[from] SolveError),

    /// The bisection solver encountered an error.
    ///
    /// Wing solve failures at intermediate angles are reported as
    /// [`GivenClError::Solve`] instead.
    #[error("bisection solver error")]
    Bisection(#[source] bisection::Error),

    /// The target is not finite or lies outside the lift range of the bracket.
    #[error("target CL {target_cl} is not within [{lower_cl}, {upper_cl}] over the alpha bracket")]
    Target {
        /// Requested lift coefficient.
        target_cl: f64,

        /// Lift coefficient at the lower bracket angle.
        lower_cl: f64,

        /// Lift coefficient at the upper bracket angle.
        upper_cl: f64,
    },

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual}")]
    MaxIters {
        /// Best lift coefficient residual achieved.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}

impl From<bisection::Error> for GivenClError {
    fn from(err: bisection::Error) -> Self {
        match err {
            bisection::Error::Model(source) => match source.downcast::<SolveError>() {
                Ok(solve) => Self::Solve(*solve),
                Err(source) => Self::Bisection(bisection::Error::Model(source)),
            },
            other => Self::Bisection(other),
        }
    }
}
