//! Motor speed optimization.
//!
//! Motor mass falls with speed while gearbox mass rises, so total weight has
//! a single minimum in speed. This module finds it within speed bounds, either
//! by bisecting on the analytic slope or with a derivative-free search.

mod config;
mod error;
mod problem;

pub use config::{Algorithm, OptimizeConfig};
pub use error::OptimizeError;
pub use problem::{SpeedEvaluation, SpeedObjective};

use tracing::{debug, warn};
use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::si::{angular_velocity::revolution_per_minute, f64::AngularVelocity, mass::kilogram};

use crate::support::search;

use problem::SlopeProblem;

/// Whether the optimizer met its convergence test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convergence {
    /// The tolerance was met, or a bound was shown to be optimal.
    Converged,

    /// The iteration budget ran out; the best point found is reported.
    Unconverged { iters: usize },
}

impl Convergence {
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged)
    }
}

/// The lightest operating point found within the speed bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedOptimum {
    pub evaluation: SpeedEvaluation,
    pub convergence: Convergence,
}

/// Minimizes the objective over the motor speed interval `[min, max]`.
///
/// Bounds are assumed ordered; equal bounds evaluate a single point.
///
/// # Errors
///
/// Returns an [`OptimizeError`] if the objective is evaluated outside its
/// domain or the solver fails. Exhausting the iteration budget is not an
/// error.
pub fn optimize_speed(
    objective: &SpeedObjective,
    [min, max]: [AngularVelocity; 2],
    config: &OptimizeConfig,
) -> Result<SpeedOptimum, OptimizeError> {
    let optimum = match config.algorithm {
        Algorithm::Gradient => gradient(objective, [min, max], config)?,
        Algorithm::GoldenSection => golden_section(objective, [min, max], config)?,
    };

    let evaluation = &optimum.evaluation;
    if let Convergence::Unconverged { iters } = optimum.convergence {
        warn!(
            algorithm = ?config.algorithm,
            iters,
            rpm = evaluation.motor_speed.get::<revolution_per_minute>(),
            "motor speed optimizer hit its iteration limit, using best point found"
        );
    } else {
        debug!(
            algorithm = ?config.algorithm,
            rpm = evaluation.motor_speed.get::<revolution_per_minute>(),
            mass_kg = evaluation.mass().get::<kilogram>(),
            "motor speed optimized"
        );
    }

    Ok(optimum)
}

fn gradient(
    objective: &SpeedObjective,
    [min, max]: [AngularVelocity; 2],
    config: &OptimizeConfig,
) -> Result<SpeedOptimum, OptimizeError> {
    let converged = |evaluation| SpeedOptimum {
        evaluation,
        convergence: Convergence::Converged,
    };

    // Weight is convex in speed, so the slope sign at a bound decides
    // whether that bound is the minimum.
    let at_min = objective.call(&min)?;
    if at_min.slope() >= 0.0 || min >= max {
        return Ok(converged(at_min));
    }
    let at_max = objective.call(&max)?;
    if at_max.slope() <= 0.0 {
        return Ok(converged(at_max));
    }

    let solution = bisection::solve(
        objective,
        &SlopeProblem,
        [
            min.get::<revolution_per_minute>(),
            max.get::<revolution_per_minute>(),
        ],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Speeds inside validated bounds stay in the domain; treat a
            // failure as lying past the minimum.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    let convergence = if solution.status == bisection::Status::Converged {
        Convergence::Converged
    } else {
        Convergence::Unconverged {
            iters: solution.iters,
        }
    };

    Ok(SpeedOptimum {
        evaluation: solution.snapshot.output,
        convergence,
    })
}

fn golden_section(
    objective: &SpeedObjective,
    [min, max]: [AngularVelocity; 2],
    config: &OptimizeConfig,
) -> Result<SpeedOptimum, OptimizeError> {
    let solution = search::golden_section(
        |rpm| {
            let evaluation =
                objective.call(&AngularVelocity::new::<revolution_per_minute>(rpm))?;
            Ok::<_, OptimizeError>((evaluation.mass().get::<kilogram>(), evaluation))
        },
        [
            min.get::<revolution_per_minute>(),
            max.get::<revolution_per_minute>(),
        ],
        &config.golden_section(),
    )?;

    let convergence = match solution.status {
        search::Status::Converged => Convergence::Converged,
        search::Status::MaxIters => Convergence::Unconverged {
            iters: solution.iters,
        },
    };

    Ok(SpeedOptimum {
        evaluation: solution.output,
        convergence,
    })
}
