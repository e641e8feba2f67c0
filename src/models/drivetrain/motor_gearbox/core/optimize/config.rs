use twine_solvers::equation::bisection;
use uom::si::{angular_velocity::revolution_per_minute, f64::AngularVelocity};

use crate::support::search;

/// How the motor speed is searched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Algorithm {
    /// Bisection on the analytic slope `dW/dn`.
    #[default]
    Gradient,

    /// Derivative-free golden-section search on the weight itself.
    GoldenSection,
}

/// Optimizer configuration for the motor speed search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizeConfig {
    pub algorithm: Algorithm,

    /// Maximum iteration count.
    ///
    /// The default is generous enough for the derivative-free search.
    pub max_iters: usize,

    /// Absolute tolerance on the motor speed.
    pub speed_tol: AngularVelocity,

    /// Absolute tolerance on the weight slope, kg/rpm.
    ///
    /// Only used by [`Algorithm::Gradient`].
    pub slope_tol: f64,
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            max_iters: 20_000,
            speed_tol: AngularVelocity::new::<revolution_per_minute>(1e-6),
            slope_tol: 1e-12,
        }
    }
}

impl OptimizeConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.speed_tol.get::<revolution_per_minute>(),
            x_rel_tol: 0.0,
            residual_tol: self.slope_tol,
        }
    }

    /// Converts this configuration into a golden-section search configuration.
    pub(super) fn golden_section(&self) -> search::Config {
        search::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.speed_tol.get::<revolution_per_minute>(),
        }
    }
}
