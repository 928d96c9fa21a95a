//! Small numerically-stable math utilities shared by the density evaluators.

use lst_core::{Error, Result};

/// `1 / sqrt(2π)` (precomputed to keep this crate const-friendly).
pub const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal density `φ(z) = exp(-z²/2) / sqrt(2π)`.
#[inline]
pub fn standard_normal_pdf(z: f64) -> f64 {
    INV_SQRT_2PI * (-0.5 * z * z).exp()
}

/// Gaussian density `N(mu, sigma)` at `x`.
///
/// `p(x) = φ((x-mu)/sigma) / sigma`
pub fn gauss_pdf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(Error::Validation(format!("sigma must be finite and > 0, got {}", sigma)));
    }
    if !mu.is_finite() {
        return Err(Error::Validation(format!("mu must be finite, got {}", mu)));
    }
    if !x.is_finite() {
        return Ok(0.0);
    }
    Ok(standard_normal_pdf((x - mu) / sigma) / sigma)
}
