//! Empirical gearbox weight correlation.
//!
//! Gearbox weight follows a Krantz-type power law calibrated against existing
//! gearbox designs:
//!
//! ```text
//! W = K · HP^0.76 · n^0.13 / R^0.89
//! ```
//!
//! where `HP` is output power in horsepower, `n` the motor (fast side) speed
//! and `R` the rotor (slow side) speed, both in rpm, and `K` a technology
//! factor in kilogram units.

use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Mass, Power},
    mass::kilogram,
    power::horsepower,
};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

use super::DomainError;

const POWER_EXPONENT: f64 = 0.76;
const MOTOR_SPEED_EXPONENT: f64 = 0.13;
const ROTOR_SPEED_EXPONENT: f64 = 0.89;

/// Converts a pound-based technology factor to kilogram units.
pub const POUND_TO_KILOGRAM_FACTOR: f64 = 0.454;

/// Gearbox technology factor `K` in kilogram units.
///
/// Lower values represent lighter, more advanced gearbox designs.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TechnologyFactor(Constrained<f64, StrictlyPositive>);

impl TechnologyFactor {
    /// Creates a technology factor from a kilogram-based value.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not strictly positive.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        StrictlyPositive::new(value).map(Self)
    }

    /// Creates a technology factor from a pound-based value, as commonly
    /// published for the Krantz correlation.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not strictly positive.
    pub fn from_pound_based(value: f64) -> ConstraintResult<Self> {
        Self::new(POUND_TO_KILOGRAM_FACTOR * value)
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        *self.0.as_ref()
    }
}

/// Pound-based factor of 72, i.e. 32.688 in kilogram units.
impl Default for TechnologyFactor {
    fn default() -> Self {
        Self(Constrained::new_unchecked(POUND_TO_KILOGRAM_FACTOR * 72.0))
    }
}

/// Inputs to the gearbox weight correlation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearboxInputs {
    /// Power transmitted by the gearbox.
    pub power: Power,

    /// Technology factor `K`, kilogram units.
    pub tech_factor: f64,

    /// Slow-side (rotor or propeller) speed.
    pub rotor_speed: AngularVelocity,

    /// Fast-side (motor) speed.
    pub motor_speed: AngularVelocity,
}

/// Partial derivatives of gearbox weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearboxPartials {
    /// kg/hp.
    pub power_hp: f64,

    /// kg per unit technology factor.
    pub tech_factor: f64,

    /// kg/rpm.
    pub rotor_rpm: f64,

    /// kg/rpm.
    pub motor_rpm: f64,
}

/// Gearbox weight and its partial derivatives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearboxEstimate {
    pub mass: Mass,
    pub partials: GearboxPartials,
}

/// Evaluates the gearbox weight correlation.
///
/// # Errors
///
/// Returns a [`DomainError`] if any input is not finite and strictly positive.
pub fn gearbox_weight(inputs: &GearboxInputs) -> Result<GearboxEstimate, DomainError> {
    let hp = DomainError::check("gearbox power (hp)", inputs.power.get::<horsepower>())?;
    let k = DomainError::check("gearbox technology factor", inputs.tech_factor)?;
    let r = DomainError::check(
        "rotor speed (rpm)",
        inputs.rotor_speed.get::<revolution_per_minute>(),
    )?;
    let n = DomainError::check(
        "motor speed (rpm)",
        inputs.motor_speed.get::<revolution_per_minute>(),
    )?;

    let (mass, partials) = krantz(hp, k, r, n);
    Ok(GearboxEstimate {
        mass: Mass::new::<kilogram>(mass),
        partials,
    })
}

/// Raw correlation in formula units; inputs must already be validated.
pub(super) fn krantz(hp: f64, k: f64, r: f64, n: f64) -> (f64, GearboxPartials) {
    let hp_term = hp.powf(POWER_EXPONENT);
    let n_term = n.powf(MOTOR_SPEED_EXPONENT);
    let r_term = r.powf(ROTOR_SPEED_EXPONENT);

    let mass = k * hp_term * n_term / r_term;

    let partials = GearboxPartials {
        power_hp: POWER_EXPONENT * k * hp.powf(POWER_EXPONENT - 1.0) * n_term / r_term,
        tech_factor: hp_term * n_term / r_term,
        rotor_rpm: -ROTOR_SPEED_EXPONENT * k * hp_term * n_term
            / r.powf(ROTOR_SPEED_EXPONENT + 1.0),
        motor_rpm: k * hp_term * MOTOR_SPEED_EXPONENT * n.powf(MOTOR_SPEED_EXPONENT - 1.0)
            / r_term,
    };

    (mass, partials)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::power::kilowatt;

    use crate::{
        models::drivetrain::motor_gearbox::core::test_support::central_difference,
        support::constraint::ConstraintError,
    };

    fn reference_inputs() -> GearboxInputs {
        GearboxInputs {
            power: Power::new::<horsepower>(670.511_044),
            tech_factor: POUND_TO_KILOGRAM_FACTOR * 72.0,
            rotor_speed: AngularVelocity::new::<revolution_per_minute>(4000.0),
            motor_speed: AngularVelocity::new::<revolution_per_minute>(20_000.0),
        }
    }

    #[test]
    fn reference_weight() {
        let estimate = gearbox_weight(&reference_inputs()).unwrap();
        assert_relative_eq!(
            estimate.mass.get::<kilogram>(),
            10.369_489_29,
            max_relative = 1e-4
        );
    }

    #[test]
    fn metric_technology_factor() {
        let k = TechnologyFactor::from_pound_based(72.0).unwrap();
        assert_relative_eq!(k.value(), 32.688, epsilon = 1e-12);
        assert_eq!(k, TechnologyFactor::default());
        assert!(TechnologyFactor::new(-1.0).is_err());
    }

    #[test]
    fn partials_match_central_differences() {
        let (hp, k, r, n) = (670.511_044, 32.688, 4000.0, 20_000.0);
        let (_, partials) = krantz(hp, k, r, n);

        let d_hp = central_difference(|x| krantz(x, k, r, n).0, hp);
        let d_k = central_difference(|x| krantz(hp, x, r, n).0, k);
        let d_r = central_difference(|x| krantz(hp, k, x, n).0, r);
        let d_n = central_difference(|x| krantz(hp, k, r, x).0, n);

        assert_relative_eq!(partials.power_hp, d_hp, max_relative = 1e-6);
        assert_relative_eq!(partials.tech_factor, d_k, max_relative = 1e-6);
        assert_relative_eq!(partials.rotor_rpm, d_r, max_relative = 1e-6);
        assert_relative_eq!(partials.motor_rpm, d_n, max_relative = 1e-6);
    }

    #[test]
    fn faster_motor_means_heavier_gearbox() {
        let slow = gearbox_weight(&reference_inputs()).unwrap();
        let fast = gearbox_weight(&GearboxInputs {
            motor_speed: AngularVelocity::new::<revolution_per_minute>(40_000.0),
            ..reference_inputs()
        })
        .unwrap();

        assert!(fast.mass > slow.mass);
        assert!(slow.partials.motor_rpm > 0.0);
        assert!(slow.partials.rotor_rpm < 0.0);
    }

    #[test]
    fn power_units_are_converted() {
        let from_kw = gearbox_weight(&GearboxInputs {
            power: Power::new::<kilowatt>(500.0),
            ..reference_inputs()
        })
        .unwrap();

        assert_relative_eq!(
            from_kw.mass.get::<kilogram>(),
            10.369_489_29,
            max_relative = 1e-6
        );
    }

    #[test]
    fn rejects_non_positive_inputs() {
        let err = gearbox_weight(&GearboxInputs {
            rotor_speed: AngularVelocity::new::<revolution_per_minute>(0.0),
            ..reference_inputs()
        })
        .unwrap_err();
        assert_eq!(err.parameter, "rotor speed (rpm)");

        let err = gearbox_weight(&GearboxInputs {
            motor_speed: AngularVelocity::new::<revolution_per_minute>(-100.0),
            ..reference_inputs()
        })
        .unwrap_err();
        assert_eq!(err.parameter, "motor speed (rpm)");

        let err = gearbox_weight(&GearboxInputs {
            tech_factor: 0.0,
            ..reference_inputs()
        })
        .unwrap_err();
        assert_eq!(err.parameter, "gearbox technology factor");
    }

    #[test]
    fn rejects_infinite_inputs() {
        let err = gearbox_weight(&GearboxInputs {
            motor_speed: AngularVelocity::new::<revolution_per_minute>(f64::INFINITY),
            ..reference_inputs()
        })
        .unwrap_err();

        assert_eq!(err.parameter, "motor speed (rpm)");
        assert_eq!(err.source, ConstraintError::NotFinite);
        assert!(err.value.is_infinite());

        let err = gearbox_weight(&GearboxInputs {
            power: Power::new::<kilowatt>(f64::INFINITY),
            ..reference_inputs()
        })
        .unwrap_err();
        assert_eq!(err.parameter, "gearbox power (hp)");
    }
}
