//! Problem formulation for the motor speed search.

use std::convert::Infallible;

use tracing::trace;
use twine_core::{EquationProblem, Model};
use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Mass, Power},
    mass::kilogram,
};

use crate::models::drivetrain::motor_gearbox::core::{
    CombinedEstimate, CombinedInputs, DomainError, MotorTechnology, TechnologyFactor,
    combined_weight,
};

/// Combined motor and gearbox weight as a function of motor speed alone.
///
/// Every other input of the combined expression is held fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedObjective {
    motor: MotorTechnology,
    power: Power,
    tech_factor: TechnologyFactor,
    rotor_speed: AngularVelocity,
}

impl SpeedObjective {
    #[must_use]
    pub fn new(
        motor: MotorTechnology,
        power: Power,
        tech_factor: TechnologyFactor,
        rotor_speed: AngularVelocity,
    ) -> Self {
        Self {
            motor,
            power,
            tech_factor,
            rotor_speed,
        }
    }

    /// The full combined inputs at `motor_speed`.
    #[must_use]
    pub fn inputs_at(&self, motor_speed: AngularVelocity) -> CombinedInputs {
        CombinedInputs {
            motor: self.motor,
            power: self.power,
            tech_factor: self.tech_factor,
            rotor_speed: self.rotor_speed,
            motor_speed,
        }
    }
}

impl Model for SpeedObjective {
    type Input = AngularVelocity;
    type Output = SpeedEvaluation;
    type Error = DomainError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let estimate = combined_weight(&self.inputs_at(*input))?;
        let evaluation = SpeedEvaluation {
            motor_speed: *input,
            estimate,
        };

        trace!(
            rpm = input.get::<revolution_per_minute>(),
            mass_kg = evaluation.mass().get::<kilogram>(),
            slope = evaluation.slope(),
            "evaluated motor speed"
        );

        Ok(evaluation)
    }
}

/// The objective evaluated at one motor speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedEvaluation {
    pub motor_speed: AngularVelocity,
    pub estimate: CombinedEstimate,
}

impl SpeedEvaluation {
    /// Motor plus gearbox mass.
    #[must_use]
    pub fn mass(&self) -> Mass {
        self.estimate.mass()
    }

    /// Weight slope with respect to motor speed, kg/rpm.
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.estimate.partials.motor_rpm
    }
}

/// Equation problem whose root is the stationary point of the objective.
///
/// The residual is `dW/dn` in kg/rpm, with the speed variable in rpm.
pub(super) struct SlopeProblem;

impl EquationProblem<1> for SlopeProblem {
    type Input = AngularVelocity;
    type Output = SpeedEvaluation;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(AngularVelocity::new::<revolution_per_minute>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.slope()])
    }
}
