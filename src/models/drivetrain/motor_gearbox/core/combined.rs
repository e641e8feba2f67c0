//! Combined analytic motor and gearbox weight.
//!
//! A single expression for one motor and its gearbox:
//!
//! ```text
//! W = ρ · (π/4) · 60 · P / (π² · S · pf · n) + K · HP^0.76 · n^0.13 / R^0.89
//! ```
//!
//! The motor term takes power `P` in watts and the gearbox term takes the same
//! power `HP` in horsepower. Both come from one [`Power`] quantity.

use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Mass, Power},
    mass::kilogram,
    mass_density::kilogram_per_cubic_meter,
    power::{horsepower, watt},
    pressure::pascal,
};

use super::{
    DomainError, MotorTechnology, TechnologyFactor,
    gearbox::krantz,
    motor::{shear_stress_mass, sizing_volume},
};

/// Inputs to the combined weight expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombinedInputs {
    pub motor: MotorTechnology,

    /// Output power of one motor.
    pub power: Power,

    pub tech_factor: TechnologyFactor,

    /// Slow-side (rotor or propeller) speed.
    pub rotor_speed: AngularVelocity,

    /// Motor operating speed.
    pub motor_speed: AngularVelocity,
}

/// Partial derivatives of the combined weight, one per formula input.
///
/// `power_w` and `power_hp` are the partials of the motor and gearbox terms
/// with respect to their own power variant; [`power_total`](Self::power_total)
/// combines them for a change in the single underlying power.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombinedPartials {
    /// kg per kg/m³.
    pub density: f64,

    /// kg/W.
    pub power_w: f64,

    /// kg/hp.
    pub power_hp: f64,

    /// kg/Pa.
    pub shear_stress: f64,

    /// kg per unit power factor.
    pub power_factor: f64,

    /// kg per unit technology factor.
    pub tech_factor: f64,

    /// kg/rpm.
    pub rotor_rpm: f64,

    /// kg/rpm.
    pub motor_rpm: f64,
}

impl CombinedPartials {
    /// Total derivative with respect to power, kg/W.
    #[must_use]
    pub fn power_total(&self) -> f64 {
        self.power_w + self.power_hp * Power::new::<watt>(1.0).get::<horsepower>()
    }
}

/// Combined weight of one motor and gearbox with its partials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombinedEstimate {
    pub motor_mass: Mass,
    pub gearbox_mass: Mass,
    pub partials: CombinedPartials,
}

impl CombinedEstimate {
    /// Motor plus gearbox mass.
    #[must_use]
    pub fn mass(&self) -> Mass {
        self.motor_mass + self.gearbox_mass
    }
}

/// Evaluates the combined weight expression.
///
/// # Errors
///
/// Returns a [`DomainError`] if any input is not finite and strictly positive.
pub fn combined_weight(inputs: &CombinedInputs) -> Result<CombinedEstimate, DomainError> {
    let terms = Terms::validate(inputs)?;
    Ok(terms.evaluate())
}

/// The combined expression in formula units.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Terms {
    density: f64,
    watts: f64,
    hp: f64,
    shear_stress: f64,
    power_factor: f64,
    tech_factor: f64,
    rotor_rpm: f64,
    motor_rpm: f64,
}

impl Terms {
    fn validate(inputs: &CombinedInputs) -> Result<Self, DomainError> {
        let motor = &inputs.motor;
        Ok(Self {
            density: DomainError::check(
                "density (kg/m³)",
                motor.density.get::<kilogram_per_cubic_meter>(),
            )?,
            watts: DomainError::check("motor power (W)", inputs.power.get::<watt>())?,
            hp: inputs.power.get::<horsepower>(),
            shear_stress: DomainError::check(
                "shear stress (Pa)",
                motor.shear_stress.get::<pascal>(),
            )?,
            power_factor: DomainError::check("power factor", motor.power_factor)?,
            tech_factor: inputs.tech_factor.value(),
            rotor_rpm: DomainError::check(
                "rotor speed (rpm)",
                inputs.rotor_speed.get::<revolution_per_minute>(),
            )?,
            motor_rpm: DomainError::check(
                "motor speed (rpm)",
                inputs.motor_speed.get::<revolution_per_minute>(),
            )?,
        })
    }

    fn evaluate(&self) -> CombinedEstimate {
        let motor = shear_stress_mass(
            self.density,
            sizing_volume(
                self.watts,
                self.shear_stress,
                self.power_factor,
                self.motor_rpm,
            ),
        );
        let (gearbox, gearbox_partials) =
            krantz(self.hp, self.tech_factor, self.rotor_rpm, self.motor_rpm);

        // The motor term is linear in ρ and P and inverse in S, pf, and n.
        let partials = CombinedPartials {
            density: motor / self.density,
            power_w: motor / self.watts,
            power_hp: gearbox_partials.power_hp,
            shear_stress: -motor / self.shear_stress,
            power_factor: -motor / self.power_factor,
            tech_factor: gearbox_partials.tech_factor,
            rotor_rpm: gearbox_partials.rotor_rpm,
            motor_rpm: -motor / self.motor_rpm + gearbox_partials.motor_rpm,
        };

        CombinedEstimate {
            motor_mass: Mass::new::<kilogram>(motor),
            gearbox_mass: Mass::new::<kilogram>(gearbox),
            partials,
        }
    }
}
