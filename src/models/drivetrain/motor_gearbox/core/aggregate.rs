use std::fmt;

use uom::si::f64::Mass;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

/// Number of identical motor and gearbox assemblies installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitCount(Constrained<u32, StrictlyPositive>);

impl UnitCount {
    /// Creates a unit count.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero.
    pub fn new(count: u32) -> ConstraintResult<Self> {
        StrictlyPositive::new(count).map(Self)
    }

    #[must_use]
    pub fn get(&self) -> u32 {
        *self.0.as_ref()
    }

    /// The count as a scale factor.
    ///
    /// This is also the derivative of any aggregated total with respect to
    /// each per-unit weight.
    #[must_use]
    pub fn factor(&self) -> f64 {
        f64::from(self.get())
    }
}

/// Four assemblies.
impl Default for UnitCount {
    fn default() -> Self {
        Self(Constrained::new_unchecked(4))
    }
}

impl fmt::Display for UnitCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Total installed weight of `count` units of `unit_weight`.
#[must_use]
pub fn aggregate(unit_weight: Mass, count: UnitCount) -> Mass {
    unit_weight * count.factor()
}

/// Total installed weight of `count` motors and `count` gearboxes.
#[must_use]
pub fn aggregate_pair(motor_weight: Mass, gearbox_weight: Mass, count: UnitCount) -> Mass {
    aggregate(motor_weight + gearbox_weight, count)
}
