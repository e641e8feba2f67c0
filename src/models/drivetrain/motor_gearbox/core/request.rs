//! Sizing request configuration.

use tracing::warn;
use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Power, Torque},
    power::kilowatt,
    torque::newton_meter,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    units::ShaftSpeed,
};

use super::{
    ConfigError, MotorTechnology, OptimizeConfig, TechnologyFactor, UnitCount,
    catalog::{KeywordQuery, Tag},
};

/// Gearbox assumptions shared by both estimation methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearboxSetup {
    pub tech_factor: TechnologyFactor,

    /// Gearbox output (propeller or fan) speed.
    pub prop_speed: AngularVelocity,
}

/// Default technology factor at a 4000 rpm propeller.
impl Default for GearboxSetup {
    fn default() -> Self {
        Self {
            tech_factor: TechnologyFactor::default(),
            prop_speed: AngularVelocity::new::<revolution_per_minute>(4000.0),
        }
    }
}

/// Catalog regression at a fixed motor speed.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionMethod {
    /// Tags every motor in the fit must carry.
    pub keywords: KeywordQuery,

    /// Motor speed used for the gearbox.
    pub motor_speed: AngularVelocity,
}

/// Axial-flux motors at 20 000 rpm.
impl Default for RegressionMethod {
    fn default() -> Self {
        Self {
            keywords: KeywordQuery::from([Tag::Axial]),
            motor_speed: AngularVelocity::new::<revolution_per_minute>(20_000.0),
        }
    }
}

/// Analytic sizing with motor speed optimized within bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ComputationMethod {
    pub motor: MotorTechnology,
    pub bounds: SpeedBounds,
    pub optimizer: OptimizeConfig,
}

/// How motor weight is estimated.
#[derive(Debug, Clone, PartialEq)]
pub enum Method {
    Regression(RegressionMethod),
    Computation(ComputationMethod),
}

impl Default for Method {
    fn default() -> Self {
        Self::Regression(RegressionMethod::default())
    }
}

/// Motor speed limits, given directly or through torque limits.
///
/// At a fixed power, a torque ceiling sets a speed floor and a torque floor
/// sets a speed ceiling (`ω = P / τ`). Unset limits fall back to 1000 and
/// 20 000 rpm.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpeedBounds {
    pub min_speed: Option<AngularVelocity>,
    pub max_speed: Option<AngularVelocity>,

    /// Overrides `max_speed` when set.
    pub min_torque: Option<Torque>,

    /// Overrides `min_speed` when set.
    pub max_torque: Option<Torque>,
}

impl SpeedBounds {
    pub const DEFAULT_MIN_SPEED_RPM: f64 = 1000.0;
    pub const DEFAULT_MAX_SPEED_RPM: f64 = 20_000.0;

    /// Bounds given directly as speeds.
    #[must_use]
    pub fn speeds(min: AngularVelocity, max: AngularVelocity) -> Self {
        Self {
            min_speed: Some(min),
            max_speed: Some(max),
            min_torque: None,
            max_torque: None,
        }
    }

    /// Bounds given as torque limits at the sizing power.
    #[must_use]
    pub fn torques(min: Torque, max: Torque) -> Self {
        Self {
            min_speed: None,
            max_speed: None,
            min_torque: Some(min),
            max_torque: Some(max),
        }
    }

    /// Resolves the speed interval `[min, max]` at `power`.
    ///
    /// A torque limit takes precedence over the speed limit on the same side.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Constraint`] if a torque limit or a resolved
    /// speed is not finite and strictly positive, or
    /// [`ConfigError::InvertedSpeedBounds`] if the resolved minimum exceeds the
    /// maximum.
    pub fn resolve(&self, power: Power) -> Result<[AngularVelocity; 2], ConfigError> {
        let min = match self.max_torque {
            Some(torque) => {
                let speed = speed_at(power, torque, "maximum torque")?;
                if self.min_speed.is_some() {
                    warn!(
                        max_torque_nm = torque.get::<newton_meter>(),
                        min_rpm = speed.get::<revolution_per_minute>(),
                        "maximum torque overrides the minimum speed"
                    );
                }
                speed
            }
            None => self.min_speed.unwrap_or(AngularVelocity::new::<revolution_per_minute>(
                Self::DEFAULT_MIN_SPEED_RPM,
            )),
        };

        let max = match self.min_torque {
            Some(torque) => {
                let speed = speed_at(power, torque, "minimum torque")?;
                if self.max_speed.is_some() {
                    warn!(
                        min_torque_nm = torque.get::<newton_meter>(),
                        max_rpm = speed.get::<revolution_per_minute>(),
                        "minimum torque overrides the maximum speed"
                    );
                }
                speed
            }
            None => self.max_speed.unwrap_or(AngularVelocity::new::<revolution_per_minute>(
                Self::DEFAULT_MAX_SPEED_RPM,
            )),
        };

        let min_rpm =
            ConfigError::check("minimum speed (rpm)", min.get::<revolution_per_minute>())?;
        let max_rpm =
            ConfigError::check("maximum speed (rpm)", max.get::<revolution_per_minute>())?;
        if min_rpm > max_rpm {
            return Err(ConfigError::InvertedSpeedBounds { min_rpm, max_rpm });
        }

        Ok([min, max])
    }
}

fn speed_at(
    power: Power,
    torque: Torque,
    parameter: &'static str,
) -> Result<AngularVelocity, ConfigError> {
    let torque_nm = ConfigError::check(parameter, torque.get::<newton_meter>())?;
    Ok(power.speed_at(Torque::new::<newton_meter>(torque_nm)))
}

/// A validated request to size a set of motors and gearboxes.
#[derive(Debug, Clone, PartialEq)]
pub struct SizingRequest {
    power: Constrained<Power, StrictlyPositive>,
    pub count: UnitCount,
    pub gearbox: GearboxSetup,
    pub method: Method,
}

impl SizingRequest {
    /// Creates a request with default count, gearbox, and method.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Constraint`] if `power` is not finite and
    /// strictly positive.
    pub fn new(power: Power) -> Result<Self, ConfigError> {
        ConfigError::check("power (kW)", power.get::<kilowatt>())?;
        Ok(Self {
            power: Constrained::new_unchecked(power),
            count: UnitCount::default(),
            gearbox: GearboxSetup::default(),
            method: Method::default(),
        })
    }

    /// Required output power of each motor.
    #[must_use]
    pub fn power(&self) -> Power {
        *self.power.as_ref()
    }

    #[must_use]
    pub fn with_count(self, count: UnitCount) -> Self {
        Self { count, ..self }
    }

    #[must_use]
    pub fn with_gearbox(self, gearbox: GearboxSetup) -> Self {
        Self { gearbox, ..self }
    }

    #[must_use]
    pub fn with_method(self, method: Method) -> Self {
        Self { method, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use approx::assert_relative_eq;
    use tracing::Level;

    use crate::support::constraint::ConstraintError;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    /// Runs `f` with warnings written to the returned buffer.
    fn with_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let value = tracing::subscriber::with_default(subscriber, f);
        (value, captured.text())
    }

    fn rpm(value: f64) -> AngularVelocity {
        AngularVelocity::new::<revolution_per_minute>(value)
    }

    #[test]
    fn default_bounds() {
        let [min, max] = SpeedBounds::default()
            .resolve(Power::new::<kilowatt>(500.0))
            .unwrap();

        assert_relative_eq!(min.get::<revolution_per_minute>(), 1000.0, epsilon = 1e-9);
        assert_relative_eq!(max.get::<revolution_per_minute>(), 20_000.0, epsilon = 1e-9);
    }

    #[test]
    fn torque_limits_map_to_speed_limits() {
        // 200 kW at 500 N·m is 3819.7 rpm; at 100 N·m it is 19 098.6 rpm.
        let bounds = SpeedBounds::torques(
            Torque::new::<newton_meter>(100.0),
            Torque::new::<newton_meter>(500.0),
        );
        let [min, max] = bounds.resolve(Power::new::<kilowatt>(200.0)).unwrap();

        assert_relative_eq!(min.get::<revolution_per_minute>(), 3819.718_634, max_relative = 1e-9);
        assert_relative_eq!(max.get::<revolution_per_minute>(), 19_098.593_17, max_relative = 1e-9);
    }

    #[test]
    fn torque_overrides_speed() {
        let bounds = SpeedBounds {
            max_torque: Some(Torque::new::<newton_meter>(500.0)),
            ..SpeedBounds::speeds(rpm(1000.0), rpm(20_000.0))
        };
        let ([min, max], logs) =
            with_warnings(|| bounds.resolve(Power::new::<kilowatt>(200.0)).unwrap());

        assert_relative_eq!(min.get::<revolution_per_minute>(), 3819.718_634, max_relative = 1e-9);
        assert_eq!(max, rpm(20_000.0));
        assert!(logs.contains("maximum torque overrides the minimum speed"));
        assert!(!logs.contains("minimum torque overrides"));
    }

    #[test]
    fn both_limits_on_both_sides_warn_twice() {
        let bounds = SpeedBounds {
            min_speed: Some(rpm(1000.0)),
            max_speed: Some(rpm(20_000.0)),
            ..SpeedBounds::torques(
                Torque::new::<newton_meter>(100.0),
                Torque::new::<newton_meter>(500.0),
            )
        };
        let ([min, max], logs) =
            with_warnings(|| bounds.resolve(Power::new::<kilowatt>(200.0)).unwrap());

        assert_relative_eq!(min.get::<revolution_per_minute>(), 3819.718_634, max_relative = 1e-9);
        assert_relative_eq!(max.get::<revolution_per_minute>(), 19_098.593_17, max_relative = 1e-9);
        assert!(logs.contains("maximum torque overrides the minimum speed"));
        assert!(logs.contains("minimum torque overrides the maximum speed"));
    }

    #[test]
    fn torque_alone_does_not_warn() {
        let bounds = SpeedBounds::torques(
            Torque::new::<newton_meter>(100.0),
            Torque::new::<newton_meter>(500.0),
        );
        let (resolved, logs) = with_warnings(|| bounds.resolve(Power::new::<kilowatt>(200.0)));

        assert!(resolved.is_ok());
        assert!(logs.is_empty());
    }

    #[test]
    fn infinite_speed_limit_rejected() {
        let err = SpeedBounds::speeds(rpm(1000.0), rpm(f64::INFINITY))
            .resolve(Power::new::<kilowatt>(500.0))
            .unwrap_err();

        assert_eq!(
            err,
            ConfigError::Constraint {
                parameter: "maximum speed (rpm)",
                value: f64::INFINITY,
                source: ConstraintError::NotFinite,
            }
        );
    }

    #[test]
    fn inverted_bounds_rejected() {
        let err = SpeedBounds::speeds(rpm(30_000.0), rpm(20_000.0))
            .resolve(Power::new::<kilowatt>(500.0))
            .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvertedSpeedBounds { min_rpm, max_rpm }
                if (min_rpm - 30_000.0).abs() < 1e-6 && (max_rpm - 20_000.0).abs() < 1e-6
        ));
    }

    #[test]
    fn non_positive_torque_rejected() {
        let bounds = SpeedBounds {
            min_torque: Some(Torque::new::<newton_meter>(0.0)),
            ..SpeedBounds::default()
        };
        let err = bounds.resolve(Power::new::<kilowatt>(500.0)).unwrap_err();

        assert_eq!(
            err,
            ConfigError::Constraint {
                parameter: "minimum torque (N·m)",
                value: 0.0,
                source: ConstraintError::Zero,
            }
        );
        assert_eq!(err.to_string(), "invalid minimum torque (N·m): 0");
    }

    #[test]
    fn request_defaults() {
        let request = SizingRequest::new(Power::new::<kilowatt>(500.0)).unwrap();

        assert_eq!(request.count.get(), 4);
        assert_relative_eq!(request.gearbox.tech_factor.value(), 32.688, epsilon = 1e-12);
        assert_eq!(request.gearbox.prop_speed, rpm(4000.0));
        assert_eq!(request.method, Method::Regression(RegressionMethod::default()));
    }

    #[test]
    fn request_rejects_non_positive_power() {
        let err = SizingRequest::new(Power::new::<kilowatt>(-5.0)).unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Constraint {
                parameter: "power (kW)",
                source: ConstraintError::Negative,
                value,
            } if (value + 5.0).abs() < 1e-12
        ));
        assert!(err.to_string().starts_with("invalid power (kW): -5"));
    }

    #[test]
    fn request_rejects_infinite_power() {
        let err = SizingRequest::new(Power::new::<kilowatt>(f64::INFINITY)).unwrap_err();

        assert_eq!(
            err,
            ConfigError::Constraint {
                parameter: "power (kW)",
                value: f64::INFINITY,
                source: ConstraintError::NotFinite,
            }
        );
    }
}
