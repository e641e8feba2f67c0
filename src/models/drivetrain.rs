//! Drivetrain models.
//!
//! This module contains models for electric drivetrain components such as
//! motors and the gearboxes that couple them to a propulsor.

pub mod motor_gearbox;
