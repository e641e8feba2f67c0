//! Motor and gearbox weight model.
//!
//! [`MotorGearboxSizing`] is a [`twine_core::Model`] mapping a
//! [`SizingRequest`] to an [`Estimate`] of installed weight. The computation
//! lives in the internal `core` module, whose types are re-exported here.
//!
//! # Example
//!
//! ```
//! use motor_gearbox_sizing::models::drivetrain::motor_gearbox::{
//!     MotorGearboxSizing, SizingRequest,
//! };
//! use twine_core::Model;
//! use uom::si::{f64::Power, mass::kilogram, power::kilowatt};
//!
//! let model = MotorGearboxSizing::default();
//! let request = SizingRequest::new(Power::new::<kilowatt>(500.0)).unwrap();
//!
//! let estimate = model.call(&request).unwrap();
//! assert!((estimate.total_mass().get::<kilogram>() - 408.956).abs() < 1e-2);
//! ```

mod core;

pub use self::core::{
    Algorithm, ComponentMasses, CombinedEstimate, CombinedInputs, CombinedPartials,
    ComputationEstimate, ComputationMethod, ComputationPartials, ConfigError, Convergence,
    DomainError, Estimate, FitError, GearboxEstimate, GearboxInputs, GearboxPartials,
    GearboxSetup, Method, MotorTechnology, OptimizeConfig, OptimizeError,
    POUND_TO_KILOGRAM_FACTOR, ReferenceMotor, RegressionEstimate, RegressionFit,
    RegressionMethod, RegressionPartials, SizingError, SizingRequest, SpeedBounds,
    SpeedEvaluation, SpeedObjective, SpeedOptimum, StrayMasses, TechnologyFactor, UnitCount,
    active_volume, aggregate, aggregate_pair, catalog, combined_weight, gearbox_weight,
    motor_mass, optimize_speed,
};

use twine_core::Model;

use self::core::catalog::Catalog;

/// Estimates installed motor and gearbox weight from a motor catalog.
#[derive(Debug, Clone, Copy)]
pub struct MotorGearboxSizing<'a> {
    catalog: Catalog<'a>,
}

impl<'a> MotorGearboxSizing<'a> {
    /// Creates a model that fits regressions over `catalog`.
    #[must_use]
    pub fn new(catalog: Catalog<'a>) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog<'a> {
        &self.catalog
    }

    /// Estimates the installed weight for `request`.
    ///
    /// # Errors
    ///
    /// Returns a [`SizingError`] if the request is misconfigured, the
    /// regression cannot be fit, or the analytic sizing fails.
    pub fn estimate(&self, request: &SizingRequest) -> Result<Estimate, SizingError> {
        self::core::estimate(&self.catalog, request)
    }
}

/// Uses the built-in catalog.
impl Default for MotorGearboxSizing<'static> {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl Model for MotorGearboxSizing<'_> {
    type Input = SizingRequest;
    type Output = Estimate;
    type Error = SizingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.estimate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        angular_velocity::revolution_per_minute,
        f64::{AngularVelocity, Power, Torque},
        mass::kilogram,
        power::kilowatt,
        torque::newton_meter,
    };

    use super::catalog::{KeywordQuery, Tag};

    fn request(power_kw: f64) -> SizingRequest {
        SizingRequest::new(Power::new::<kilowatt>(power_kw)).unwrap()
    }

    fn computation(bounds: SpeedBounds) -> Method {
        Method::Computation(ComputationMethod {
            bounds,
            ..ComputationMethod::default()
        })
    }

    fn rpm(value: f64) -> AngularVelocity {
        AngularVelocity::new::<revolution_per_minute>(value)
    }

    #[test]
    fn regression_reference_total() -> Result<(), SizingError> {
        let estimate = MotorGearboxSizing::default().call(&request(500.0))?;

        let Estimate::Regression(regression) = &estimate else {
            panic!("default method should be regression");
        };
        assert_eq!(regression.fit.selection().len(), 17);
        assert_relative_eq!(
            regression.motor_mass.get::<kilogram>(),
            91.869_550_7,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            regression.gearbox_mass.get::<kilogram>(),
            10.369_489_3,
            max_relative = 1e-6
        );
        assert_relative_eq!(
            estimate.total_mass().get::<kilogram>(),
            408.956_16,
            max_relative = 1e-6
        );
        assert_eq!(estimate.motor_speed(), rpm(20_000.0));
        Ok(())
    }

    #[test]
    fn regression_power_partial_matches_finite_difference() -> Result<(), SizingError> {
        let model = MotorGearboxSizing::default();
        let total = |kw: f64| -> Result<f64, SizingError> {
            Ok(model.call(&request(kw))?.total_mass().get::<kilogram>())
        };

        let Estimate::Regression(estimate) = model.call(&request(500.0))? else {
            panic!("default method should be regression");
        };
        let numeric = (total(500.01)? - total(499.99)?) / 0.02;

        assert_relative_eq!(estimate.partials.power, numeric, max_relative = 1e-6);
        assert_relative_eq!(estimate.partials.motor_mass, 4.0);
        Ok(())
    }

    #[test]
    fn computation_defaults_hit_the_speed_ceiling() -> Result<(), SizingError> {
        let request = request(500.0).with_method(computation(SpeedBounds::default()));
        let estimate = MotorGearboxSizing::default().call(&request)?;

        let Estimate::Computation(computation) = &estimate else {
            panic!("computation method requested");
        };
        assert!(computation.convergence.is_converged());
        assert_eq!(computation.motor_speed, rpm(20_000.0));
        assert_relative_eq!(
            estimate.total_mass().get::<kilogram>(),
            109.873_072_6,
            max_relative = 1e-7
        );
        // The ceiling is active, so lighter weight lies at higher speed.
        assert!(computation.partials.motor_speed < 0.0);
        Ok(())
    }

    #[test]
    fn computation_reports_installed_partials() -> Result<(), SizingError> {
        let request = request(500.0)
            .with_count(UnitCount::new(2).unwrap())
            .with_method(computation(SpeedBounds::speeds(rpm(1000.0), rpm(400_000.0))));
        let Estimate::Computation(estimate) = MotorGearboxSizing::default().call(&request)? else {
            panic!("computation method requested");
        };

        let unit = combined_weight(&CombinedInputs {
            motor: MotorTechnology::default(),
            power: request.power(),
            tech_factor: request.gearbox.tech_factor,
            rotor_speed: request.gearbox.prop_speed,
            motor_speed: estimate.motor_speed,
        })?;

        assert_relative_eq!(
            estimate.partials.density,
            2.0 * unit.partials.density,
            max_relative = 1e-12
        );
        assert_relative_eq!(estimate.partials.motor_speed, 0.0, epsilon = 1e-9);
        assert_eq!(estimate.partials.entries().len(), 8);
        assert_eq!(estimate.partials.entries()[0].0, "density");
        Ok(())
    }

    #[test]
    fn identical_requests_give_identical_estimates() -> Result<(), SizingError> {
        let model = MotorGearboxSizing::default();
        for request in [
            request(350.0),
            request(350.0).with_method(computation(SpeedBounds::default())),
        ] {
            assert_eq!(model.call(&request)?, model.call(&request)?);
        }
        Ok(())
    }

    #[test]
    fn unmatched_keywords_are_a_configuration_error() {
        let request = request(500.0).with_method(Method::Regression(RegressionMethod {
            keywords: KeywordQuery::from([Tag::Axial, Tag::InRunner]),
            ..RegressionMethod::default()
        }));
        let err = MotorGearboxSizing::default().call(&request).unwrap_err();

        assert!(err.is_configuration());
        assert!(matches!(err, SizingError::Fit(FitError::Catalog(_))));
    }

    #[test]
    fn unknown_keywords_lift_into_sizing_errors() {
        let parse = || -> Result<SizingRequest, SizingError> {
            let keywords = KeywordQuery::parse(["Axial", "Hovercraft"])?;
            Ok(request(500.0).with_method(Method::Regression(RegressionMethod {
                keywords,
                ..RegressionMethod::default()
            })))
        };
        let err = parse().unwrap_err();

        assert!(err.is_configuration());
        assert!(matches!(err, SizingError::Catalog(_)));
    }

    #[test]
    fn degenerate_fit_is_not_a_configuration_error() {
        let request = request(500.0).with_method(Method::Regression(RegressionMethod {
            keywords: KeywordQuery::from([Tag::Bmw]),
            ..RegressionMethod::default()
        }));
        let err = MotorGearboxSizing::default().call(&request).unwrap_err();

        assert!(!err.is_configuration());
        assert!(matches!(err, SizingError::Fit(FitError::Degenerate { .. })));
    }

    #[test]
    fn inverted_bounds_fail_before_optimizing() {
        let request =
            request(500.0).with_method(computation(SpeedBounds::speeds(rpm(25_000.0), rpm(5000.0))));
        let err = MotorGearboxSizing::default().call(&request).unwrap_err();

        assert!(err.is_configuration());
        assert!(matches!(
            err,
            SizingError::Config(ConfigError::InvertedSpeedBounds { .. })
        ));
    }

    #[test]
    fn torque_limit_overrides_speed_limit() -> Result<(), SizingError> {
        // 500 kW at 400 N·m is 11 936.6 rpm.
        let bounds = SpeedBounds {
            min_torque: Some(Torque::new::<newton_meter>(400.0)),
            ..SpeedBounds::default()
        };
        let request = request(500.0).with_method(computation(bounds));
        let Estimate::Computation(estimate) = MotorGearboxSizing::default().call(&request)? else {
            panic!("computation method requested");
        };

        assert_relative_eq!(
            estimate.bounds[1].get::<revolution_per_minute>(),
            11_936.620_73,
            max_relative = 1e-9
        );
        assert_eq!(estimate.motor_speed, estimate.bounds[1]);
        Ok(())
    }

    #[test]
    fn infinite_inputs_are_rejected() {
        let err = SizingRequest::new(Power::new::<kilowatt>(f64::INFINITY)).unwrap_err();
        assert!(matches!(err, ConfigError::Constraint { parameter: "power (kW)", .. }));

        let request = request(500.0)
            .with_method(computation(SpeedBounds::speeds(rpm(1000.0), rpm(f64::INFINITY))));
        let err = MotorGearboxSizing::default().call(&request).unwrap_err();

        assert!(err.is_configuration());
        assert!(matches!(
            err,
            SizingError::Config(ConfigError::Constraint {
                parameter: "maximum speed (rpm)",
                ..
            })
        ));
    }

    #[test]
    fn zero_rotor_speed_is_a_domain_error() {
        let request = request(500.0)
            .with_gearbox(GearboxSetup {
                prop_speed: rpm(0.0),
                ..GearboxSetup::default()
            })
            .with_method(computation(SpeedBounds::default()));
        let err = MotorGearboxSizing::default().call(&request).unwrap_err();

        assert!(matches!(err, SizingError::Domain(e) if e.parameter == "rotor speed (rpm)"));
    }

    #[test]
    fn custom_catalog() -> Result<(), SizingError> {
        let records: Vec<_> = catalog::Catalog::builtin()
            .records()
            .iter()
            .filter(|record| record.tags.contains(&Tag::Radial))
            .copied()
            .collect();
        let model = MotorGearboxSizing::new(catalog::Catalog::new(&records));

        let err = model.call(&request(500.0)).unwrap_err();
        assert!(err.is_configuration());

        let radial = request(500.0).with_method(Method::Regression(RegressionMethod {
            keywords: KeywordQuery::from([Tag::Radial]),
            ..RegressionMethod::default()
        }));
        assert!(model.call(&radial)?.total_mass().get::<kilogram>() > 0.0);
        Ok(())
    }
}
