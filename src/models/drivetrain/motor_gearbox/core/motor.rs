//! Shear-stress motor sizing.
//!
//! Electromagnetic torque scales with rotor surface shear stress and rotor
//! volume, so for a required power and speed the active volume is
//!
//! ```text
//! D²L = 60 · P / (π² · S · pf · n)
//! ```
//!
//! with `P` in watts, `S` in pascals, `pf` the power factor, and `n` in rpm.
//! Motor mass is that cylinder's volume, `(π/4) · D²L`, times a bulk density.

use std::f64::consts::PI;

use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Length, Mass, MassDensity, Power, Pressure, Volume},
    length::meter,
    mass::kilogram,
    mass_density::kilogram_per_cubic_meter,
    power::watt,
    pressure::{kilopascal, pascal},
    volume::cubic_meter,
};

use super::DomainError;

/// Electromagnetic and material assumptions for a motor design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorTechnology {
    /// Bulk density of the active motor volume.
    pub density: MassDensity,

    /// Magnetic shear stress at the rotor surface.
    pub shear_stress: Pressure,

    /// Power factor, between zero and one.
    pub power_factor: f64,
}

/// Reference motor density, 24.1 kPa shear stress, and a 0.95 power factor.
impl Default for MotorTechnology {
    fn default() -> Self {
        Self {
            density: ReferenceMotor::default().density(),
            shear_stress: Pressure::new::<kilopascal>(24.1),
            power_factor: 0.95,
        }
    }
}

/// Masses of the active components of the reference motor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentMasses {
    pub heat_sink: Mass,
    pub back_yoke: Mass,
    pub windings: Mass,
    pub magnets: Mass,
    pub titanium_shell: Mass,
    pub carbon_fiber_ring: Mass,
}

impl ComponentMasses {
    #[must_use]
    pub fn total(&self) -> Mass {
        self.heat_sink
            + self.back_yoke
            + self.windings
            + self.magnets
            + self.titanium_shell
            + self.carbon_fiber_ring
    }
}

/// Masses of the reference motor's structural and auxiliary parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrayMasses {
    pub ground_cylinder: Mass,
    pub bearing: Mass,
    pub ground_ring: Mass,
    pub lock_nut: Mass,
    pub fan: Mass,
    pub stator_ring: Mass,
}

impl StrayMasses {
    #[must_use]
    pub fn total(&self) -> Mass {
        self.ground_cylinder
            + self.bearing
            + self.ground_ring
            + self.lock_nut
            + self.fan
            + self.stator_ring
    }
}

/// A built motor whose measured mass and envelope calibrate the bulk density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceMotor {
    pub components: ComponentMasses,
    pub stray: StrayMasses,
    pub outer_diameter: Length,
    pub stack_length: Length,
}

/// A 0.337 m diameter, 0.2235 m stack aerospace outrunner.
impl Default for ReferenceMotor {
    fn default() -> Self {
        let kg = Mass::new::<kilogram>;
        Self {
            components: ComponentMasses {
                heat_sink: kg(6.168),
                back_yoke: kg(9.253),
                windings: kg(6.35),
                magnets: kg(18.73),
                titanium_shell: kg(12.551),
                carbon_fiber_ring: kg(4.941),
            },
            stray: StrayMasses {
                ground_cylinder: kg(3.130),
                bearing: kg(2.58),
                ground_ring: kg(0.454),
                lock_nut: kg(0.181),
                fan: kg(0.816),
                stator_ring: kg(0.227),
            },
            outer_diameter: Length::new::<meter>(0.337),
            stack_length: Length::new::<meter>(0.2235),
        }
    }
}

impl ReferenceMotor {
    #[must_use]
    pub fn total_mass(&self) -> Mass {
        self.components.total() + self.stray.total()
    }

    /// Volume of the cylinder enclosing the motor.
    #[must_use]
    pub fn envelope_volume(&self) -> Volume {
        let radius = self.outer_diameter.get::<meter>() / 2.0;
        Volume::new::<cubic_meter>(PI * radius * radius * self.stack_length.get::<meter>())
    }

    /// Total mass spread over the envelope volume.
    #[must_use]
    pub fn density(&self) -> MassDensity {
        MassDensity::new::<kilogram_per_cubic_meter>(
            self.total_mass().get::<kilogram>() / self.envelope_volume().get::<cubic_meter>(),
        )
    }
}

/// Returns the active volume `D²L` needed to deliver `power` at `speed`.
///
/// # Errors
///
/// Returns a [`DomainError`] if any input is not finite and strictly positive.
pub fn active_volume(
    power: Power,
    shear_stress: Pressure,
    power_factor: f64,
    speed: AngularVelocity,
) -> Result<Volume, DomainError> {
    let p = DomainError::check("motor power (W)", power.get::<watt>())?;
    let s = DomainError::check("shear stress (Pa)", shear_stress.get::<pascal>())?;
    let pf = DomainError::check("power factor", power_factor)?;
    let n = DomainError::check("motor speed (rpm)", speed.get::<revolution_per_minute>())?;

    Ok(Volume::new::<cubic_meter>(sizing_volume(p, s, pf, n)))
}

/// Returns the mass of a motor delivering `power` at `speed`.
///
/// # Errors
///
/// Returns a [`DomainError`] if any input is not finite and strictly positive.
pub fn motor_mass(
    technology: &MotorTechnology,
    power: Power,
    speed: AngularVelocity,
) -> Result<Mass, DomainError> {
    let rho = DomainError::check(
        "density (kg/m³)",
        technology.density.get::<kilogram_per_cubic_meter>(),
    )?;
    let volume = active_volume(
        power,
        technology.shear_stress,
        technology.power_factor,
        speed,
    )?;

    Ok(Mass::new::<kilogram>(shear_stress_mass(
        rho,
        volume.get::<cubic_meter>(),
    )))
}

/// `D²L` in m³ from validated formula-unit inputs.
pub(super) fn sizing_volume(watts: f64, shear_pa: f64, power_factor: f64, rpm: f64) -> f64 {
    60.0 * watts / (PI * PI * shear_pa * power_factor * rpm)
}

/// Motor mass in kg from density and `D²L`.
pub(super) fn shear_stress_mass(density: f64, sizing_volume: f64) -> f64 {
    density * PI / 4.0 * sizing_volume
}
