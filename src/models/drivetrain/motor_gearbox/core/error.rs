use thiserror::Error;

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};

use super::{catalog::CatalogError, optimize::OptimizeError, regression::FitError};

/// A sizing formula received an input outside its real-valued domain.
///
/// Every formula input is raised to a fractional power or divides, so each
/// must be finite and strictly positive. The value is reported in the unit the formula
/// uses (e.g. rpm, hp, Pa).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{parameter} must be finite and strictly positive, got {value}")]
pub struct DomainError {
    /// Name of the offending input.
    pub parameter: &'static str,

    /// Offending value, in formula units.
    pub value: f64,

    /// The violated constraint.
    #[source]
    pub source: ConstraintError,
}

impl DomainError {
    /// Returns `value` if it is finite and strictly positive.
    pub(super) fn check(parameter: &'static str, value: f64) -> Result<f64, Self> {
        finite_positive(value).map_err(|source| Self {
            parameter,
            value,
            source,
        })
    }
}

/// A sizing request is inconsistent or out of range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// The resolved lower speed bound exceeds the upper bound.
    #[error("minimum motor speed {min_rpm} rpm exceeds maximum motor speed {max_rpm} rpm")]
    InvertedSpeedBounds { min_rpm: f64, max_rpm: f64 },

    /// A request parameter violates its numeric constraint.
    #[error("invalid {parameter}: {value}")]
    Constraint {
        /// Name of the offending parameter, with its unit.
        parameter: &'static str,

        /// Offending value, in the unit named by `parameter`.
        value: f64,

        #[source]
        source: ConstraintError,
    },
}

impl ConfigError {
    /// Returns `value` if it is finite and strictly positive.
    pub(super) fn check(parameter: &'static str, value: f64) -> Result<f64, Self> {
        finite_positive(value).map_err(|source| Self::Constraint {
            parameter,
            value,
            source,
        })
    }
}

fn finite_positive(value: f64) -> Result<f64, ConstraintError> {
    let value = StrictlyPositive::new(value).map(Constrained::into_inner)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConstraintError::NotFinite)
    }
}

/// Errors that can occur while estimating motor and gearbox weight.
#[derive(Debug, Error)]
pub enum SizingError {
    /// The request is misconfigured.
    #[error("invalid sizing request")]
    Config(#[from] ConfigError),

    /// Keywords could not be parsed.
    ///
    /// Lets `?` lift [`KeywordQuery::parse`](super::catalog::KeywordQuery::parse)
    /// errors; catalog filtering failures arrive through [`SizingError::Fit`].
    #[error("motor catalog query failed")]
    Catalog(#[from] CatalogError),

    /// The regression could not be fit.
    #[error("motor weight regression failed")]
    Fit(#[from] FitError),

    /// A formula input is outside its domain.
    #[error("sizing formula domain error")]
    Domain(#[from] DomainError),

    /// The motor speed optimization failed.
    #[error("motor speed optimization failed")]
    Optimize(#[from] OptimizeError),
}

impl SizingError {
    /// Returns `true` for errors caused by request configuration rather than
    /// by the physics inputs.
    ///
    /// These include unknown or unmatched keywords and inverted speed bounds.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::Catalog(_) | Self::Fit(FitError::Catalog(_))
        )
    }
}
