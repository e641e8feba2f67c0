//! Motor and gearbox weight estimation.
//!
//! Two interchangeable methods size a set of identical motor and gearbox
//! assemblies for a required output power:
//!
//! - **Regression** fits a line through the power and weight of cataloged
//!   motors that share a set of keywords, then adds an empirical gearbox at a
//!   chosen motor speed.
//! - **Computation** sizes the motor from magnetic shear stress and optimizes
//!   motor speed to minimize combined motor and gearbox weight.
//!
//! Every formula exposes exact partial derivatives with respect to its inputs.

pub mod catalog;

mod aggregate;
mod combined;
mod error;
mod estimate;
mod gearbox;
mod motor;
mod optimize;
mod regression;
mod request;

#[cfg(test)]
mod test_support;

pub use aggregate::{UnitCount, aggregate, aggregate_pair};
pub use combined::{CombinedEstimate, CombinedInputs, CombinedPartials, combined_weight};
pub use error::{ConfigError, DomainError, SizingError};
pub use estimate::{
    ComputationEstimate, ComputationPartials, Estimate, RegressionEstimate, RegressionPartials,
};
pub use gearbox::{
    GearboxEstimate, GearboxInputs, GearboxPartials, POUND_TO_KILOGRAM_FACTOR, TechnologyFactor,
    gearbox_weight,
};
pub use motor::{
    ComponentMasses, MotorTechnology, ReferenceMotor, StrayMasses, active_volume, motor_mass,
};
pub use optimize::{
    Algorithm, Convergence, OptimizeConfig, OptimizeError, SpeedEvaluation, SpeedObjective,
    SpeedOptimum, optimize_speed,
};
pub use regression::{FitError, RegressionFit};
pub use request::{
    ComputationMethod, GearboxSetup, Method, RegressionMethod, SizingRequest, SpeedBounds,
};

use catalog::Catalog;

/// Estimates the installed weight for `request` using motors from `catalog`.
///
/// # Errors
///
/// Returns a [`SizingError`] if the request is misconfigured, the regression
/// cannot be fit, a formula input is out of domain, or the optimizer fails.
pub fn estimate(catalog: &Catalog<'_>, request: &SizingRequest) -> Result<Estimate, SizingError> {
    match &request.method {
        Method::Regression(method) => {
            estimate::regression(catalog, request, method).map(Estimate::Regression)
        }
        Method::Computation(method) => {
            estimate::computation(request, method).map(Estimate::Computation)
        }
    }
}
