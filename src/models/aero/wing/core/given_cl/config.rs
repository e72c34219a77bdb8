use twine_solvers::equation::bisection;
use uom::si::{angle::degree, f64::Angle};

/// Solver configuration for trimming a wing to a target lift coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GivenClConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Angle of attack interval searched for the target, as `[lower, upper]`.
    pub alpha_bracket: [Angle; 2],

    /// Absolute tolerance for the angle of attack search variable.
    pub alpha_tol: Angle,

    /// Absolute tolerance for the lift coefficient residual (achieved - target).
    pub cl_tol: f64,
}

impl Default for GivenClConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            alpha_bracket: [Angle::new::<degree>(-10.0), Angle::new::<degree>(20.0)],
            alpha_tol: Angle::new::<degree>(1e-10),
            cl_tol: 1e-12,
        }
    }
}

impl GivenClConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.alpha_tol.get::<degree>(),
            x_rel_tol: 0.0,
            residual_tol: self.cl_tol,
        }
    }

    /// Bracket endpoints in degrees.
    pub(super) fn bracket(&self) -> [f64; 2] {
        let [lower, upper] = self.alpha_bracket;
        [lower.get::<degree>(), upper.get::<degree>()]
    }
}
