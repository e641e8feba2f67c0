//! # Motor Gearbox Sizing
//!
//! Weight estimation models for electric motor and gearbox assemblies, built
//! for [Twine](https://github.com/isentropic-dev/twine).
//!
//! Two estimation strategies are provided:
//!
//! - **Regression**: a least-squares line fit over a catalog of real motors,
//!   selected by keyword, paired with an empirical gearbox correlation.
//! - **Computation**: a closed-form shear-stress sizing equation for the motor
//!   combined with the same gearbox correlation, minimized over motor speed.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are part of the public API, but their APIs are not
//! stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
