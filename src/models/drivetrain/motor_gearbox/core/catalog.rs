//! Catalog of real motor specifications and keyword filtering.

mod records;
mod tag;

pub use tag::{KeywordQuery, Tag};

use thiserror::Error;
use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Mass, Power, Torque},
    mass::kilogram,
    power::kilowatt,
    torque::newton_meter,
};

/// Errors raised while querying a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A keyword does not name any [`Tag`].
    #[error("unknown motor keyword: {0:?}")]
    UnknownKeyword(String),

    /// No cataloged motor carries every queried tag.
    #[error("no cataloged motor matches all of the keywords {keywords}")]
    NoMatch {
        /// The query that matched nothing.
        keywords: KeywordQuery,
    },
}

/// Published specification of one motor.
///
/// Values are stored in data sheet units; the accessor methods return
/// [`uom`] quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorRecord {
    pub name: &'static str,
    pub rated_power_kw: f64,
    /// Peak power, typically sustainable for about 15 seconds.
    pub max_power_kw: f64,
    pub rated_rpm: f64,
    pub max_rpm: f64,
    pub gear_ratio: f64,
    pub rated_torque_nm: f64,
    pub max_torque_nm: f64,
    /// Nominal bus voltage, zero where unpublished.
    pub voltage: f64,
    pub weight_kg: f64,
    pub efficiency_pct: f64,
    pub cost: f64,
    pub tags: &'static [Tag],
}

impl MotorRecord {
    #[must_use]
    pub fn rated_power(&self) -> Power {
        Power::new::<kilowatt>(self.rated_power_kw)
    }

    #[must_use]
    pub fn max_power(&self) -> Power {
        Power::new::<kilowatt>(self.max_power_kw)
    }

    #[must_use]
    pub fn rated_speed(&self) -> AngularVelocity {
        AngularVelocity::new::<revolution_per_minute>(self.rated_rpm)
    }

    #[must_use]
    pub fn max_speed(&self) -> AngularVelocity {
        AngularVelocity::new::<revolution_per_minute>(self.max_rpm)
    }

    #[must_use]
    pub fn rated_torque(&self) -> Torque {
        Torque::new::<newton_meter>(self.rated_torque_nm)
    }

    #[must_use]
    pub fn max_torque(&self) -> Torque {
        Torque::new::<newton_meter>(self.max_torque_nm)
    }

    #[must_use]
    pub fn weight(&self) -> Mass {
        Mass::new::<kilogram>(self.weight_kg)
    }

    /// Returns `true` if this motor carries every tag in `keywords`.
    #[must_use]
    pub fn matches(&self, keywords: &KeywordQuery) -> bool {
        keywords.is_subset_of(self.tags)
    }
}

/// A read-only table of motor records.
///
/// The built-in table is fixed at compile time. Callers may supply their own
/// records, which the catalog borrows for its lifetime.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    records: &'a [MotorRecord],
}

impl Catalog<'static> {
    /// Returns the built-in catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            records: records::RECORDS,
        }
    }
}

impl Default for Catalog<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> Catalog<'a> {
    /// Creates a catalog over caller-supplied records.
    #[must_use]
    pub fn new(records: &'a [MotorRecord]) -> Self {
        Self { records }
    }

    /// Returns every record in catalog order.
    #[must_use]
    pub fn records(&self) -> &'a [MotorRecord] {
        self.records
    }

    /// Selects the motors that carry every tag in `keywords`.
    ///
    /// Catalog order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NoMatch`] if no record matches.
    pub fn filter(&self, keywords: &KeywordQuery) -> Result<Selection, CatalogError> {
        let mut selection = Selection {
            keywords: keywords.clone(),
            powers_kw: Vec::new(),
            weights_kg: Vec::new(),
            names: Vec::new(),
        };

        for record in self.records.iter().filter(|record| record.matches(keywords)) {
            selection.powers_kw.push(record.rated_power_kw);
            selection.weights_kg.push(record.weight_kg);
            selection.names.push(record.name);
        }

        if selection.names.is_empty() {
            return Err(CatalogError::NoMatch {
                keywords: keywords.clone(),
            });
        }

        Ok(selection)
    }
}

/// Power and weight of the motors selected by a keyword query.
///
/// The three vectors are parallel and follow catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// The query that produced this selection.
    pub keywords: KeywordQuery,

    /// Rated powers, kW.
    pub powers_kw: Vec<f64>,

    /// Weights, kg.
    pub weights_kg: Vec<f64>,

    /// Motor names.
    pub names: Vec<&'static str>,
}

impl Selection {
    /// Number of selected motors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no motors are selected.
    ///
    /// [`Catalog::filter`] never returns an empty selection, but one built by
    /// hand can be.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
