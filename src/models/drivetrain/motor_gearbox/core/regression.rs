//! Least-squares motor weight regression over a catalog selection.

use statrs::statistics::Statistics;
use thiserror::Error;
use tracing::debug;
use uom::si::{
    f64::{Mass, Power},
    mass::kilogram,
    power::kilowatt,
};

use super::catalog::{Catalog, CatalogError, KeywordQuery, Selection};

/// Errors that can occur while fitting a [`RegressionFit`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    /// The keyword query selected no motors.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The selected motors do not span at least two distinct powers.
    #[error("cannot fit a line through {points} motor(s) selected by {keywords}")]
    Degenerate {
        keywords: KeywordQuery,
        points: usize,
    },
}

/// A first-degree least-squares fit of motor weight against rated power.
///
/// The fit minimizes squared weight residuals, so `weight ≈ slope · power + intercept`
/// with power in kW and weight in kg.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionFit {
    slope: f64,
    intercept: f64,
    selection: Selection,
}

impl RegressionFit {
    /// Selects motors by keyword and fits a line through their power and weight.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::Catalog`] if no motor matches, or
    /// [`FitError::Degenerate`] if fewer than two distinct powers were selected.
    pub fn new(catalog: &Catalog<'_>, keywords: &KeywordQuery) -> Result<Self, FitError> {
        let selection = catalog.filter(keywords)?;
        Self::from_selection(selection)
    }

    /// Fits a line through an existing selection.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::Degenerate`] if fewer than two distinct powers are present.
    pub fn from_selection(selection: Selection) -> Result<Self, FitError> {
        let powers = &selection.powers_kw;
        let weights = &selection.weights_kg;

        let spans_two_powers = powers.iter().any(|&p| p != powers[0]);
        if powers.len() < 2 || !spans_two_powers {
            return Err(FitError::Degenerate {
                keywords: selection.keywords.clone(),
                points: selection.len(),
            });
        }

        // The n - 1 normalizations of covariance and variance cancel.
        let slope = powers.iter().covariance(weights.iter()) / powers.iter().variance();
        let intercept = weights.iter().mean() - slope * powers.iter().mean();

        debug!(
            keywords = %selection.keywords,
            motors = selection.len(),
            slope,
            intercept,
            "fitted motor weight regression"
        );

        Ok(Self {
            slope,
            intercept,
            selection,
        })
    }

    /// Weight change per unit power, kg/kW.
    ///
    /// This is the exact derivative of [`evaluate`](Self::evaluate) with respect
    /// to power at every operating point.
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Weight at zero power, kg.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// The motors the line was fit through.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Estimated motor weight at `power`.
    #[must_use]
    pub fn evaluate(&self, power: Power) -> Mass {
        Mass::new::<kilogram>(self.evaluate_kw(power.get::<kilowatt>()))
    }

    /// Estimated motor weights at each of `powers`.
    #[must_use]
    pub fn evaluate_all(&self, powers: &[Power]) -> Vec<Mass> {
        powers.iter().map(|&power| self.evaluate(power)).collect()
    }

    /// The fitted line evaluated at every selected motor's power, kg.
    ///
    /// Parallel to [`Selection::names`], for drawing the line through the data.
    #[must_use]
    pub fn fitted_weights(&self) -> Vec<f64> {
        self.selection
            .powers_kw
            .iter()
            .map(|&p| self.evaluate_kw(p))
            .collect()
    }

    fn evaluate_kw(&self, power_kw: f64) -> f64 {
        self.slope * power_kw + self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::drivetrain::motor_gearbox::core::catalog::{MotorRecord, Tag};

    fn axial() -> RegressionFit {
        RegressionFit::new(&Catalog::builtin(), &KeywordQuery::from([Tag::Axial])).unwrap()
    }

    #[test]
    fn axial_reference_weight() {
        let weight = axial().evaluate(Power::new::<kilowatt>(500.0));
        assert_relative_eq!(weight.get::<kilogram>(), 91.869_550_7, max_relative = 1e-8);
    }

    #[test]
    fn liquid_cooled_axial_outrunner_reference_weight() {
        let keywords = KeywordQuery::parse(["Axial", "Aero", "OutRunner", "LiquidCool"]).unwrap();
        let fit = RegressionFit::new(&Catalog::builtin(), &keywords).unwrap();

        let weight = fit.evaluate(Power::new::<kilowatt>(500.0));
        assert_relative_eq!(weight.get::<kilogram>(), 106.473_673_03, max_relative = 1e-8);
    }

    #[test]
    fn evaluation_is_affine_in_power() {
        let fit = axial();
        let (p1, p2) = (37.5, 1250.0);

        let w1 = fit.evaluate(Power::new::<kilowatt>(p1)).get::<kilogram>();
        let w2 = fit.evaluate(Power::new::<kilowatt>(p2)).get::<kilogram>();
        assert_relative_eq!(w1 + fit.slope() * (p2 - p1), w2, max_relative = 1e-12);
    }

    #[test]
    fn slope_matches_finite_difference() {
        let fit = axial();
        for (p, eps) in [(10.0, 1e-3), (500.0, 1e-2), (2000.0, 0.5)] {
            let lo = fit.evaluate(Power::new::<kilowatt>(p)).get::<kilogram>();
            let hi = fit.evaluate(Power::new::<kilowatt>(p + eps)).get::<kilogram>();
            assert_relative_eq!(fit.slope(), (hi - lo) / eps, epsilon = 1e-6);
        }
    }

    #[test]
    fn fitted_weights_follow_the_selection() {
        let fit = axial();
        let fitted = fit.fitted_weights();
        let powers: Vec<_> = fit
            .selection()
            .powers_kw
            .iter()
            .map(|&p| Power::new::<kilowatt>(p))
            .collect();

        assert_eq!(fitted.len(), fit.selection().len());
        for (expected, actual) in fitted.iter().zip(fit.evaluate_all(&powers)) {
            assert_relative_eq!(*expected, actual.get::<kilogram>());
        }
    }

    #[test]
    fn residuals_sum_to_zero() {
        let fit = axial();
        let residual_sum: f64 = fit
            .fitted_weights()
            .iter()
            .zip(&fit.selection().weights_kg)
            .map(|(fitted, actual)| actual - fitted)
            .sum();
        assert_relative_eq!(residual_sum, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn single_motor_is_degenerate() {
        let err = RegressionFit::new(&Catalog::builtin(), &KeywordQuery::from([Tag::Bmw]))
            .unwrap_err();

        assert_eq!(
            err,
            FitError::Degenerate {
                keywords: KeywordQuery::from([Tag::Bmw]),
                points: 1,
            }
        );
    }

    #[test]
    fn repeated_power_is_degenerate() {
        // Two NeuMotor variants share a rated power.
        let err = RegressionFit::new(&Catalog::builtin(), &KeywordQuery::from([Tag::NeuMotor]))
            .unwrap_err();
        assert!(matches!(err, FitError::Degenerate { points: 2, .. }));
    }

    #[test]
    fn no_match_propagates() {
        let keywords = KeywordQuery::from([Tag::Axial, Tag::Radial]);
        let err = RegressionFit::new(&Catalog::builtin(), &keywords).unwrap_err();
        assert_eq!(err, FitError::Catalog(CatalogError::NoMatch { keywords }));
    }

    #[test]
    fn exact_line_is_recovered() {
        static RECORDS: [MotorRecord; 3] = [
            record("a", 10.0, 5.0),
            record("b", 20.0, 7.0),
            record("c", 40.0, 11.0),
        ];

        let fit = RegressionFit::new(&Catalog::new(&RECORDS), &KeywordQuery::default()).unwrap();
        assert_relative_eq!(fit.slope(), 0.2, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept(), 3.0, epsilon = 1e-12);
    }

    const fn record(name: &'static str, power_kw: f64, weight_kg: f64) -> MotorRecord {
        MotorRecord {
            name,
            rated_power_kw: power_kw,
            max_power_kw: power_kw,
            rated_rpm: 3000.0,
            max_rpm: 3000.0,
            gear_ratio: 1.0,
            rated_torque_nm: 0.0,
            max_torque_nm: 0.0,
            voltage: 0.0,
            weight_kg,
            efficiency_pct: 1.0,
            cost: 0.0,
            tags: &[],
        }
    }
}
