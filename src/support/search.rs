//! Bounded derivative-free minimization of a scalar function.
//!
//! [`golden_section`] shrinks a bracket `[lo, hi]` by the golden ratio each
//! iteration, keeping the sub-interval that must contain the minimum of a
//! unimodal function. It needs no derivatives, so it works for objectives whose
//! slope is unavailable or untrusted.
//!
//! # Example
//!
//! ```
//! use std::convert::Infallible;
//! use motor_gearbox_sizing::support::search::{Config, Status, golden_section};
//!
//! let solution = golden_section(
//!     |x| Ok::<_, Infallible>(((x - 2.0).powi(2), ())),
//!     [0.0, 5.0],
//!     &Config::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(solution.status, Status::Converged);
//! assert!((solution.x - 2.0).abs() < 1e-6);
//! ```

/// Golden-section search configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Maximum number of bracket reductions.
    pub max_iters: usize,

    /// The search stops once the bracket is narrower than this width.
    pub x_abs_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 1000,
            x_abs_tol: 1e-9,
        }
    }
}

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket shrank below [`Config::x_abs_tol`].
    Converged,

    /// [`Config::max_iters`] reductions were performed first.
    MaxIters,
}

/// The best point seen during a search.
#[derive(Debug, Clone)]
pub struct Solution<T> {
    /// Location of the lowest objective value evaluated.
    pub x: f64,

    /// Lowest objective value evaluated.
    pub value: f64,

    /// Output carried alongside the lowest objective value.
    pub output: T,

    /// Termination status.
    pub status: Status,

    /// Number of bracket reductions performed.
    pub iters: usize,
}

/// Minimizes `f` over the closed interval `bracket`.
///
/// The objective returns its value together with an arbitrary output that is
/// kept for the best point. Both bracket ends are evaluated, so a minimum that
/// sits on a bound is reported exactly. A reversed bracket is reordered.
///
/// # Errors
///
/// Returns the first error produced by `f`.
pub fn golden_section<T, E, F>(
    mut f: F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<T>, E>
where
    T: Clone,
    F: FnMut(f64) -> Result<(f64, T), E>,
{
    let inv_phi = (5.0_f64.sqrt() - 1.0) / 2.0;

    let [mut lo, mut hi] = bracket;
    if lo > hi {
        std::mem::swap(&mut lo, &mut hi);
    }

    let mut best = Probe::eval(&mut f, lo)?;
    best.keep_lower(Probe::eval(&mut f, hi)?);

    let mut left = Probe::eval(&mut f, hi - inv_phi * (hi - lo))?;
    let mut right = Probe::eval(&mut f, lo + inv_phi * (hi - lo))?;
    best.keep_lower(left.clone());
    best.keep_lower(right.clone());

    let mut iters = 0;
    let status = loop {
        if hi - lo <= config.x_abs_tol {
            break Status::Converged;
        }
        if iters == config.max_iters {
            break Status::MaxIters;
        }
        iters += 1;

        if left.value < right.value {
            hi = right.x;
            right = left;
            left = Probe::eval(&mut f, hi - inv_phi * (hi - lo))?;
            best.keep_lower(left.clone());
        } else {
            lo = left.x;
            left = right;
            right = Probe::eval(&mut f, lo + inv_phi * (hi - lo))?;
            best.keep_lower(right.clone());
        }
    };

    Ok(Solution {
        x: best.x,
        value: best.value,
        output: best.output,
        status,
        iters,
    })
}

#[derive(Debug, Clone)]
struct Probe<T> {
    x: f64,
    value: f64,
    output: T,
}

impl<T> Probe<T> {
    fn eval<E>(f: &mut impl FnMut(f64) -> Result<(f64, T), E>, x: f64) -> Result<Self, E> {
        let (value, output) = f(x)?;
        Ok(Self { x, value, output })
    }

    fn keep_lower(&mut self, other: Self) {
        if other.value < self.value {
            *self = other;
        }
    }
}
