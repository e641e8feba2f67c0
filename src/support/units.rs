//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., power, speed, mass).
//! This module provides extensions that are useful for modeling but aren't included in [`uom`].
//!
//! ## Shaft speed
//!
//! The [`ShaftSpeed`] trait provides a [`speed_at`](ShaftSpeed::speed_at) method
//! that turns a shaft power and torque into the rotational speed they imply:
//!
//! ```
//! use uom::si::{
//!     angular_velocity::revolution_per_minute,
//!     f64::{Power, Torque},
//!     power::kilowatt,
//!     torque::newton_meter,
//! };
//! use motor_gearbox_sizing::support::units::ShaftSpeed;
//!
//! let power = Power::new::<kilowatt>(200.0);
//! let torque = Torque::new::<newton_meter>(500.0);
//! let speed = power.speed_at(torque);
//! assert!((speed.get::<revolution_per_minute>() - 3819.7).abs() < 0.1);
//! ```
//!
//! This extension trait is needed because [`uom`] gives torque an angle kind,
//! so `Power / Torque` does not produce an `AngularVelocity`.

mod shaft_speed;

pub use shaft_speed::ShaftSpeed;
