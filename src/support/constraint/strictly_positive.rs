use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// # Examples
///
/// ```
/// use motor_gearbox_sizing::support::constraint::StrictlyPositive;
/// use uom::si::{angular_velocity::revolution_per_minute, f64::AngularVelocity};
///
/// let speed = StrictlyPositive::new(AngularVelocity::new::<revolution_per_minute>(4000.0));
/// assert!(speed.is_ok());
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-24.1e3).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        angular_velocity::revolution_per_minute, f64::AngularVelocity, f64::Pressure,
        pressure::pascal,
    };

    #[test]
    fn unit_counts() {
        let count = Constrained::<u32, StrictlyPositive>::new(4).unwrap();
        assert_eq!(count.into_inner(), 4);
        assert_eq!(StrictlyPositive::new(0_u32), Err(ConstraintError::Zero));
    }

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(0.95).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-1.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn speeds_and_stresses() {
        let speed = AngularVelocity::new::<revolution_per_minute>(20_000.0);
        assert!(StrictlyPositive::new(speed).is_ok());

        let speed = AngularVelocity::new::<revolution_per_minute>(-1.0);
        assert!(StrictlyPositive::new(speed).is_err());

        let stress = Pressure::new::<pascal>(0.0);
        assert!(StrictlyPositive::new(stress).is_err());
    }
}
