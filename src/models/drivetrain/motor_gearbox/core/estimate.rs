//! Sizing results for both estimation methods.

use tracing::{debug, warn};
use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Mass, Power},
    mass::kilogram,
    power::{horsepower, kilowatt},
};

use super::{
    CombinedPartials, ComputationMethod, Convergence, GearboxInputs, OptimizeError,
    RegressionFit, RegressionMethod, SizingError, SizingRequest, SpeedObjective, UnitCount,
    aggregate_pair, catalog::Catalog, gearbox_weight, optimize_speed,
};

/// The result of a sizing request, shaped by the method that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Estimate {
    Regression(RegressionEstimate),
    Computation(ComputationEstimate),
}

impl Estimate {
    /// Installed weight of all motors and gearboxes.
    #[must_use]
    pub fn total_mass(&self) -> Mass {
        match self {
            Self::Regression(estimate) => estimate.total_mass,
            Self::Computation(estimate) => estimate.total_mass,
        }
    }

    /// Motor speed the estimate was evaluated at.
    #[must_use]
    pub fn motor_speed(&self) -> AngularVelocity {
        match self {
            Self::Regression(estimate) => estimate.motor_speed,
            Self::Computation(estimate) => estimate.motor_speed,
        }
    }

    /// Mass of one motor.
    #[must_use]
    pub fn motor_mass(&self) -> Mass {
        match self {
            Self::Regression(estimate) => estimate.motor_mass,
            Self::Computation(estimate) => estimate.motor_mass,
        }
    }

    /// Mass of one gearbox.
    #[must_use]
    pub fn gearbox_mass(&self) -> Mass {
        match self {
            Self::Regression(estimate) => estimate.gearbox_mass,
            Self::Computation(estimate) => estimate.gearbox_mass,
        }
    }

    /// Named partial derivatives of the installed weight.
    #[must_use]
    pub fn partials(&self) -> Vec<(&'static str, f64)> {
        match self {
            Self::Regression(estimate) => estimate.partials.entries().to_vec(),
            Self::Computation(estimate) => estimate.partials.entries().to_vec(),
        }
    }
}

/// A catalog regression estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionEstimate {
    /// Fitted regression, including the selected motors.
    pub fit: RegressionFit,

    pub motor_speed: AngularVelocity,
    pub count: UnitCount,

    /// Mass of one motor.
    pub motor_mass: Mass,

    /// Mass of one gearbox.
    pub gearbox_mass: Mass,

    /// Installed weight of all motors and gearboxes.
    pub total_mass: Mass,

    pub partials: RegressionPartials,
}

/// Partials of the installed weight of a regression estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionPartials {
    /// kg/kW, through both the fitted line and the gearbox.
    pub power: f64,

    /// kg/rpm.
    pub motor_speed: f64,

    /// kg/rpm.
    pub prop_speed: f64,

    /// kg per unit technology factor.
    pub tech_factor: f64,

    /// kg/kg, with respect to the mass of one motor.
    pub motor_mass: f64,

    /// kg/kg, with respect to the mass of one gearbox.
    pub gearbox_mass: f64,
}

impl RegressionPartials {
    #[must_use]
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("power", self.power),
            ("motor_speed", self.motor_speed),
            ("prop_speed", self.prop_speed),
            ("tech_factor", self.tech_factor),
            ("motor_mass", self.motor_mass),
            ("gearbox_mass", self.gearbox_mass),
        ]
    }
}

/// An analytic estimate at an optimized motor speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputationEstimate {
    /// Optimized motor speed.
    pub motor_speed: AngularVelocity,

    /// Speed interval searched.
    pub bounds: [AngularVelocity; 2],

    pub convergence: Convergence,
    pub count: UnitCount,

    /// Mass of one motor.
    pub motor_mass: Mass,

    /// Mass of one gearbox.
    pub gearbox_mass: Mass,

    /// Installed weight of all motors and gearboxes.
    pub total_mass: Mass,

    pub partials: ComputationPartials,
}

/// Partials of the installed weight of a computation estimate.
///
/// At an interior optimum `motor_speed` is zero to solver tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputationPartials {
    /// kg per kg/m³.
    pub density: f64,

    /// kg/W, through both the motor and the gearbox.
    pub power: f64,

    /// kg/Pa.
    pub shear_stress: f64,

    /// kg per unit power factor.
    pub power_factor: f64,

    /// kg per unit technology factor.
    pub tech_factor: f64,

    /// kg/rpm.
    pub prop_speed: f64,

    /// kg/rpm.
    pub motor_speed: f64,

    /// kg/kg, with respect to the combined mass of one unit.
    pub unit_mass: f64,
}

impl ComputationPartials {
    fn installed(unit: &CombinedPartials, count: UnitCount) -> Self {
        let n = count.factor();
        Self {
            density: n * unit.density,
            power: n * unit.power_total(),
            shear_stress: n * unit.shear_stress,
            power_factor: n * unit.power_factor,
            tech_factor: n * unit.tech_factor,
            prop_speed: n * unit.rotor_rpm,
            motor_speed: n * unit.motor_rpm,
            unit_mass: n,
        }
    }

    #[must_use]
    pub fn entries(&self) -> [(&'static str, f64); 8] {
        [
            ("density", self.density),
            ("power", self.power),
            ("shear_stress", self.shear_stress),
            ("power_factor", self.power_factor),
            ("tech_factor", self.tech_factor),
            ("prop_speed", self.prop_speed),
            ("motor_speed", self.motor_speed),
            ("unit_mass", self.unit_mass),
        ]
    }
}

/// Fits the catalog regression and adds a gearbox at the configured speed.
pub(super) fn regression(
    catalog: &Catalog<'_>,
    request: &SizingRequest,
    method: &RegressionMethod,
) -> Result<RegressionEstimate, SizingError> {
    let power = request.power();
    let count = request.count;

    let fit = RegressionFit::new(catalog, &method.keywords)?;
    let motor_mass = fit.evaluate(power);
    let gearbox = gearbox_weight(&GearboxInputs {
        power,
        tech_factor: request.gearbox.tech_factor.value(),
        rotor_speed: request.gearbox.prop_speed,
        motor_speed: method.motor_speed,
    })?;

    let n = count.factor();
    let hp_per_kw = Power::new::<kilowatt>(1.0).get::<horsepower>();
    let partials = RegressionPartials {
        power: n * (fit.slope() + gearbox.partials.power_hp * hp_per_kw),
        motor_speed: n * gearbox.partials.motor_rpm,
        prop_speed: n * gearbox.partials.rotor_rpm,
        tech_factor: n * gearbox.partials.tech_factor,
        motor_mass: n,
        gearbox_mass: n,
    };

    let total_mass = aggregate_pair(motor_mass, gearbox.mass, count);
    debug!(
        keywords = %method.keywords,
        power_kw = power.get::<kilowatt>(),
        motor_kg = motor_mass.get::<kilogram>(),
        gearbox_kg = gearbox.mass.get::<kilogram>(),
        total_kg = total_mass.get::<kilogram>(),
        "regression estimate"
    );

    Ok(RegressionEstimate {
        fit,
        motor_speed: method.motor_speed,
        count,
        motor_mass,
        gearbox_mass: gearbox.mass,
        total_mass,
        partials,
    })
}

/// Optimizes motor speed for the combined analytic weight.
pub(super) fn computation(
    request: &SizingRequest,
    method: &ComputationMethod,
) -> Result<ComputationEstimate, SizingError> {
    warn!("the analytic sizing method is a work in progress; treat its weights as rough");

    let power = request.power();
    let count = request.count;
    let bounds = method.bounds.resolve(power)?;

    let objective = SpeedObjective::new(
        method.motor,
        power,
        request.gearbox.tech_factor,
        request.gearbox.prop_speed,
    );
    let optimum =
        optimize_speed(&objective, bounds, &method.optimizer).map_err(|err| match err {
            OptimizeError::Domain(err) => SizingError::Domain(err),
            err => SizingError::Optimize(err),
        })?;

    let evaluation = optimum.evaluation;
    let unit = evaluation.estimate;
    let total_mass = aggregate_pair(unit.motor_mass, unit.gearbox_mass, count);
    debug!(
        power_kw = power.get::<kilowatt>(),
        rpm = evaluation.motor_speed.get::<revolution_per_minute>(),
        total_kg = total_mass.get::<kilogram>(),
        "computation estimate"
    );

    Ok(ComputationEstimate {
        motor_speed: evaluation.motor_speed,
        bounds,
        convergence: optimum.convergence,
        count,
        motor_mass: unit.motor_mass,
        gearbox_mass: unit.gearbox_mass,
        total_mass,
        partials: ComputationPartials::installed(&unit.partials, count),
    })
}
