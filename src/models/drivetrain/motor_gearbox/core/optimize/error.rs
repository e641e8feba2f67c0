use thiserror::Error;
use twine_solvers::equation::bisection;

use crate::models::drivetrain::motor_gearbox::core::DomainError;

/// Errors that can occur while optimizing motor speed.
///
/// Running out of iterations is not an error; the best point found is
/// returned as [`Convergence::Unconverged`](super::Convergence::Unconverged).
#[derive(Debug, Error)]
pub enum OptimizeError {
    /// The objective was evaluated outside its domain.
    #[error("objective evaluation failed")]
    Domain(#[from] DomainError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),
}
