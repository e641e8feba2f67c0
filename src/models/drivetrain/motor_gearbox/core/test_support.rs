/// Central finite-difference derivative of `f` at `x`.
///
/// The step is relative to `x` so the same helper works for inputs spanning
/// densities, watts, and pascals.
pub(super) fn central_difference(f: impl Fn(f64) -> f64, x: f64) -> f64 {
    let h = 1e-6 * x.abs().max(1.0);
    (f(x + h) - f(x - h)) / (2.0 * h)
}
