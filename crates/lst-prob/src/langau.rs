//! Landau ⊛ Gauss ("langau") density.
//!
//! Models energy loss plus detector resolution: the Landau density with scale
//! `eta` convolved with a zero-mean Gaussian of width `sigma`. The integral
//! has no closed form, so each point is evaluated by composite Gauss-Legendre
//! quadrature over the effective support of the Gaussian kernel.
//!
//! [`scaled_batch`] is a two-phase pipeline: phase one evaluates the raw
//! convolution over the whole sample grid (independently per point, in
//! parallel), phase two reduces to the grid maximum and rescales so the peak
//! height equals the requested amplitude. The reduction is the only ordering
//! dependency, and it runs after all grid points are complete.

use lst_core::{Error, Result};
use rayon::prelude::*;

use crate::landau;
use crate::math::standard_normal_pdf;
use crate::quadrature;

/// Empirical stability bound on `sigma * eta` for the convolution.
///
/// Beyond this product the smoothed curve degenerates into a near-flat,
/// low-contrast shape where peak alignment is no longer meaningful. The
/// engine still returns finite values there; callers wanting the documented
/// accuracy should stay below this bound (and clamp `sigma` to `eta` when
/// `sigma > 100 * eta`).
pub const MAX_ETA_SIGMA: f64 = 100.0;

/// Half-width of the integration window in units of `sigma`.
///
/// The Gaussian mass outside `±8σ` is ~1e-15, far below the 1e-4 amplitude
/// tolerance, so truncating there is safe.
const KERNEL_HALF_WIDTH_SIGMAS: f64 = 8.0;

/// Gauss-Legendre nodes per quadrature segment.
const NODES_PER_SEGMENT: usize = 32;

/// Cap on quadrature segments per output point, bounding the evaluation
/// count at `MAX_SEGMENTS * NODES_PER_SEGMENT` integrand calls.
const MAX_SEGMENTS: usize = 16;

/// Relative `sigma / eta` threshold below which smearing is a no-op and the
/// convolution delegates to the plain Landau evaluator.
const SIGMA_NEGLIGIBLE: f64 = 1e-8;

fn check_params(x0: f64, eta: f64, sigma: f64) -> Result<()> {
    if !eta.is_finite() || eta <= 0.0 {
        return Err(Error::Validation(format!("eta must be finite and > 0, got {}", eta)));
    }
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(Error::Validation(format!("sigma must be finite and >= 0, got {}", sigma)));
    }
    if !x0.is_finite() {
        return Err(Error::Validation(format!("location must be finite, got {}", x0)));
    }
    Ok(())
}

/// Number of composite segments needed to resolve `eta`-wide Landau features
/// inside a `±8σ` window, capped to keep the per-point cost bounded.
fn segment_count(eta: f64, sigma: f64) -> usize {
    let window = 2.0 * KERNEL_HALF_WIDTH_SIGMAS * sigma;
    let wanted = (window / (4.0 * eta)).ceil();
    (wanted as usize).clamp(1, MAX_SEGMENTS)
}

/// Raw convolution value at `x`: `∫ shape(u) · φ((x-u)/σ)/σ du` over the
/// truncated kernel support.
fn convolve<F: Fn(f64) -> f64 + Sync>(
    shape: &F,
    x: f64,
    sigma: f64,
    nodes: &[f64],
    weights: &[f64],
    segments: usize,
) -> f64 {
    let lo = x - KERNEL_HALF_WIDTH_SIGMAS * sigma;
    let hi = x + KERNEL_HALF_WIDTH_SIGMAS * sigma;
    quadrature::integrate_composite(
        |u| shape(u) * standard_normal_pdf((x - u) / sigma) / sigma,
        lo,
        hi,
        nodes,
        weights,
        segments,
    )
}

/// Deterministic golden-section maximum search on `[lo, hi]`.
///
/// Assumes `f` is unimodal on the bracket; a fixed iteration count keeps the
/// result independent of call history.
fn golden_max<F: Fn(f64) -> f64>(f: F, lo: f64, hi: f64) -> f64 {
    const INVPHI: f64 = 0.618_033_988_749_894_8;
    const ITERS: usize = 90;

    let mut a = lo;
    let mut b = hi;
    let mut c = b - INVPHI * (b - a);
    let mut d = a + INVPHI * (b - a);
    let mut fc = f(c);
    let mut fd = f(d);
    for _ in 0..ITERS {
        if fc > fd {
            b = d;
            d = c;
            fd = fc;
            c = b - INVPHI * (b - a);
            fc = f(c);
        } else {
            a = c;
            c = d;
            fc = fd;
            d = a + INVPHI * (b - a);
            fd = f(d);
        }
    }
    0.5 * (a + b)
}

/// Raw Landau ⊛ Gauss density at `x`, Landau location `x0` and scale `eta`,
/// Gaussian width `sigma`.
///
/// `sigma == 0` (or negligible next to `eta`) degenerates to [`landau::pdf`].
///
/// Each call rebuilds the quadrature rule; when evaluating a whole grid,
/// prefer [`pdf_batch`], which builds it once and maps in parallel.
pub fn pdf(x: f64, x0: f64, eta: f64, sigma: f64) -> Result<f64> {
    check_params(x0, eta, sigma)?;
    if sigma <= SIGMA_NEGLIGIBLE * eta {
        return landau::pdf(x, x0, eta);
    }
    if !x.is_finite() {
        return Ok(0.0);
    }
    let (nodes, weights) = quadrature::gauss_legendre(NODES_PER_SEGMENT);
    let segments = segment_count(eta, sigma);
    let shape = |u: f64| landau::density((u - x0) / eta) / eta;
    Ok(convolve(&shape, x, sigma, &nodes, &weights, segments))
}

/// Raw Landau ⊛ Gauss density over a sample grid, order-preserving.
///
/// Grid points are independent; evaluation runs as a parallel map.
pub fn pdf_batch(xs: &[f64], x0: f64, eta: f64, sigma: f64) -> Result<Vec<f64>> {
    check_params(x0, eta, sigma)?;
    if sigma <= SIGMA_NEGLIGIBLE * eta {
        return landau::pdf_batch(xs, x0, eta);
    }
    let (nodes, weights) = quadrature::gauss_legendre(NODES_PER_SEGMENT);
    let segments = segment_count(eta, sigma);
    let shape = |u: f64| landau::density((u - x0) / eta) / eta;
    Ok(xs
        .par_iter()
        .map(|&x| {
            if x.is_finite() {
                convolve(&shape, x, sigma, &nodes, &weights, segments)
            } else {
                0.0
            }
        })
        .collect())
}

/// Landau ⊛ Gauss curve value at a single `x`, with the curve's maximum at
/// `mpv` and peak height `a`.
///
/// The curve's own maximum is located by the same golden-section search used
/// in [`scaled_batch`] and the result is scaled by that peak height; a single
/// point cannot carry the batch form's grid-max normalization.
///
/// The peak search costs on the order of a hundred convolution evaluations
/// and is repeated on every call; looping this over a grid pays that price
/// per point. Use [`scaled_batch`], which searches once for the whole grid.
pub fn scaled(x: f64, mpv: f64, eta: f64, sigma: f64, a: f64) -> Result<f64> {
    check_params(mpv, eta, sigma)?;
    if !a.is_finite() {
        return Err(Error::Validation(format!("amplitude must be finite, got {}", a)));
    }
    if sigma <= SIGMA_NEGLIGIBLE * eta {
        return landau::scaled(x, mpv, eta, a);
    }
    if !x.is_finite() {
        return Ok(0.0);
    }

    let (nodes, weights) = quadrature::gauss_legendre(NODES_PER_SEGMENT);
    let segments = segment_count(eta, sigma);
    let shape = |u: f64| landau::density((u - mpv) / eta + landau::MODE) / eta;
    let conv = |x: f64| convolve(&shape, x, sigma, &nodes, &weights, segments);

    let width = eta + sigma;
    let x_peak = golden_max(&conv, mpv - 2.0 * width, mpv + 2.0 * width);
    let peak = conv(x_peak).max(f64::MIN_POSITIVE);
    Ok(a * conv(x + (x_peak - mpv)) / peak)
}

/// Landau ⊛ Gauss curve with its maximum at `mpv` and peak height `a`.
///
/// Two-phase contract:
/// 1. the raw convolution is evaluated over the whole grid (parallel map,
///    order-preserving), with the evaluation shifted so the convolution's
///    own peak (located by golden-section search) lands on `mpv`;
/// 2. the grid is reduced to its maximum and every value is rescaled by
///    `a / max`, so the output maximum equals `a` exactly.
///
/// `sigma == 0` delegates to [`landau::scaled_batch`]; no quadrature runs.
pub fn scaled_batch(xs: &[f64], mpv: f64, eta: f64, sigma: f64, a: f64) -> Result<Vec<f64>> {
    check_params(mpv, eta, sigma)?;
    if !a.is_finite() {
        return Err(Error::Validation(format!("amplitude must be finite, got {}", a)));
    }
    if sigma <= SIGMA_NEGLIGIBLE * eta {
        return landau::scaled_batch(xs, mpv, eta, a);
    }
    if xs.is_empty() {
        return Ok(Vec::new());
    }

    let (nodes, weights) = quadrature::gauss_legendre(NODES_PER_SEGMENT);
    let segments = segment_count(eta, sigma);

    // Landau component aligned so its own peak sits at `mpv`.
    let shape = |u: f64| landau::density((u - mpv) / eta + landau::MODE) / eta;
    let conv = |x: f64| convolve(&shape, x, sigma, &nodes, &weights, segments);

    // The Gaussian smears the skewed Landau, pushing the joint peak off
    // `mpv`; locate the true peak and shift the evaluation to compensate.
    let width = eta + sigma;
    let x_peak = golden_max(&conv, mpv - 2.0 * width, mpv + 2.0 * width);
    let shift = x_peak - mpv;

    // Phase one: raw values over the grid.
    let raw: Vec<f64> = xs
        .par_iter()
        .map(|&x| if x.is_finite() { conv(x + shift) } else { 0.0 })
        .collect();

    // Phase two: global max reduction, then rescale.
    let peak = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !peak.is_finite() {
        return Err(Error::Computation(
            "langau: convolution produced a non-finite grid maximum".into(),
        ));
    }
    // Fully underflowed grid (deep tail): keep the scale factor finite.
    let peak = peak.max(f64::MIN_POSITIVE);
    let scale = a / peak;
    Ok(raw.iter().map(|&r| r * scale).collect())
}
