//! Landau distribution density.
//!
//! The Landau density `φ(v)` has no closed form in elementary functions. This
//! module evaluates it with the piecewise rational approximation of the CERN
//! program library routine `DENLAN` (K.S. Kölbig): eight regimes over the
//! standardized variable `v = (x - x0) / eta`, from the exponentially
//! suppressed left tail through the peak near `v ≈ -0.22` to the `~1/v²`
//! right tail. Neighboring regimes agree at their boundaries to well below
//! the approximation error, so the curve is continuous everywhere.
//!
//! Two surfaces are provided:
//! - [`pdf`] / [`pdf_batch`] — the raw density `φ((x-x0)/eta) / eta`, whose
//!   maximum sits at `x0 + MODE·eta`.
//! - [`scaled`] / [`scaled_batch`] — the shifted and renormalized curve used
//!   for fitting: maximum at `mpv`, peak height equal to `a`.

use lst_core::{Error, Result};

/// Standardized mode of the Landau density: the `v` at which `φ(v)` attains
/// its maximum.
pub const MODE: f64 = -0.222_782_98;

// Rational-approximation coefficients (Kölbig, CERNLIB G110).
const P1: [f64; 5] = [0.425_989_487_5, -0.124_976_255, 0.039_842_437, -0.006_298_287_635, 0.001_511_162_253];
const Q1: [f64; 5] = [1.0, -0.338_826_062_9, 0.095_943_933_23, -0.016_080_422_83, 0.003_778_942_063];

const P2: [f64; 5] = [0.178_854_160_9, 0.117_395_740_3, 0.014_888_505_18, -0.001_394_989_411, 0.000_128_361_721_1];
const Q2: [f64; 5] = [1.0, 0.742_879_508_2, 0.315_393_296_1, 0.066_942_195_48, 0.008_790_609_714];

const P3: [f64; 5] = [0.178_854_450_3, 0.093_591_616_62, 0.006_325_387_654, 0.000_066_116_673_19, -0.000_002_031_049_101];
const Q3: [f64; 5] = [1.0, 0.609_780_992_1, 0.256_061_666_5, 0.047_467_223_84, 0.006_957_301_675];

const P4: [f64; 5] = [0.987_405_440_7, 118.672_327_3, 849.279_436, -743.779_244_4, 427.026_218_6];
const Q4: [f64; 5] = [1.0, 106.861_596_1, 337.649_621_4, 2016.712_389, 1597.063_511];

const P5: [f64; 5] = [1.003_675_074, 167.570_243_4, 4789.711_289, 21217.867_67, -22324.949_1];
const Q5: [f64; 5] = [1.0, 156.942_453_7, 3745.310_488, 9834.698_876, 66924.283_57];

const P6: [f64; 5] = [1.000_827_619, 664.914_313_6, 62972.926_65, 475554.699_8, -5743609.109];
const Q6: [f64; 5] = [1.0, 651.410_109_8, 56974.733_33, 165917.472_5, -2815759.939];

const A1: [f64; 3] = [0.041_666_666_67, -0.019_965_277_78, 0.027_095_389_66];
const A2: [f64; 2] = [-1.845_568_67, -4.284_640_743];

/// Degree-4 rational `P(v)/Q(v)` in Horner form.
#[inline]
fn rational(p: &[f64; 5], q: &[f64; 5], v: f64) -> f64 {
    let num = p[0] + (p[1] + (p[2] + (p[3] + p[4] * v) * v) * v) * v;
    let den = q[0] + (q[1] + (q[2] + (q[3] + q[4] * v) * v) * v) * v;
    num / den
}

/// Standardized Landau density `φ(v)` (unit scale, no Jacobian).
///
/// Regime dispatch over `v`; each branch is a closed-form approximation and
/// the boundaries (-5.5, -1, 1, 5, 12, 50, 300) match to within the fit
/// residual. Deep left-tail underflow returns `0.0`, as does a non-finite
/// `v` (the standardized variable can overflow for finite `x` and tiny
/// `eta`; the right tail decays as `1/v²`, so `0.0` is the limit).
#[inline]
pub(crate) fn density(v: f64) -> f64 {
    if !v.is_finite() {
        return 0.0;
    }
    if v < -5.5 {
        // Left tail: φ(v) ≈ exp(-1/u)·sqrt(u)/sqrt(2π) · (1 + O(u)), u = exp(v+1).
        let u = (v + 1.0).exp();
        if u < 1e-10 {
            return 0.0;
        }
        let ue = (-1.0 / u).exp();
        let us = u.sqrt();
        0.398_942_280_3 * (ue / us) * (1.0 + (A1[0] + (A1[1] + A1[2] * u) * u) * u)
    } else if v < -1.0 {
        let u = (-v - 1.0).exp();
        (-u).exp() * u.sqrt() * rational(&P1, &Q1, v)
    } else if v < 1.0 {
        rational(&P2, &Q2, v)
    } else if v < 5.0 {
        rational(&P3, &Q3, v)
    } else if v < 12.0 {
        let u = 1.0 / v;
        u * u * rational(&P4, &Q4, u)
    } else if v < 50.0 {
        let u = 1.0 / v;
        u * u * rational(&P5, &Q5, u)
    } else if v < 300.0 {
        let u = 1.0 / v;
        u * u * rational(&P6, &Q6, u)
    } else {
        // Far right tail via the asymptotic inverse 1/(v - v·ln(v)/(v+1)).
        let u = 1.0 / (v - v * v.ln() / (v + 1.0));
        u * u * (1.0 + (A2[0] + A2[1] * u) * u)
    }
}

fn check_location_scale(x0: f64, eta: f64) -> Result<()> {
    if !eta.is_finite() || eta <= 0.0 {
        return Err(Error::Validation(format!("eta must be finite and > 0, got {}", eta)));
    }
    if !x0.is_finite() {
        return Err(Error::Validation(format!("location must be finite, got {}", x0)));
    }
    Ok(())
}

/// Raw Landau density at `x` with location `x0` and scale `eta`.
///
/// `p(x) = φ((x - x0)/eta) / eta`. Note the maximum sits at
/// `x0 + MODE·eta`, not at `x0`; use [`scaled`] for a peak-at-`mpv` curve.
///
/// Non-finite `x` yields `0.0` (the contract covers finite inputs; this
/// keeps the output free of NaN/Inf in all cases).
pub fn pdf(x: f64, x0: f64, eta: f64) -> Result<f64> {
    check_location_scale(x0, eta)?;
    if !x.is_finite() {
        return Ok(0.0);
    }
    Ok(density((x - x0) / eta) / eta)
}

/// Raw Landau density over a sample grid, order-preserving.
pub fn pdf_batch(xs: &[f64], x0: f64, eta: f64) -> Result<Vec<f64>> {
    check_location_scale(x0, eta)?;
    Ok(xs
        .iter()
        .map(|&x| if x.is_finite() { density((x - x0) / eta) / eta } else { 0.0 })
        .collect())
}

/// Landau curve with its maximum at `mpv` and peak height `a`.
///
/// The standardized argument is shifted by [`MODE`] so the peak lands on
/// `mpv`, and the value is divided by the standardized peak height so the
/// maximum equals `a` (negative `a` inverts the curve).
pub fn scaled(x: f64, mpv: f64, eta: f64, a: f64) -> Result<f64> {
    check_location_scale(mpv, eta)?;
    if !a.is_finite() {
        return Err(Error::Validation(format!("amplitude must be finite, got {}", a)));
    }
    if !x.is_finite() {
        return Ok(0.0);
    }
    Ok(a * density((x - mpv) / eta + MODE) / density(MODE))
}

/// [`scaled`] over a sample grid, order-preserving.
pub fn scaled_batch(xs: &[f64], mpv: f64, eta: f64, a: f64) -> Result<Vec<f64>> {
    check_location_scale(mpv, eta)?;
    if !a.is_finite() {
        return Err(Error::Validation(format!("amplitude must be finite, got {}", a)));
    }
    let peak = density(MODE);
    Ok(xs
        .iter()
        .map(|&x| {
            if x.is_finite() { a * density((x - mpv) / eta + MODE) / peak } else { 0.0 }
        })
        .collect())
}
