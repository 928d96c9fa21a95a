//! Gauss-Legendre quadrature on bounded 1-D intervals.
//!
//! Nodes are roots of the Legendre polynomial `P_n`, found by Newton iteration
//! from a Chebyshev initial guess; weights follow from `P'_n` at each root.
//! Everything here is deterministic: same order, same nodes, bit for bit.

/// Evaluate `(P_n(x), P_{n-1}(x))` via the three-term recurrence.
#[inline]
fn legendre_pair(n: usize, x: f64) -> (f64, f64) {
    let mut p0 = 1.0f64; // P_0(x)
    let mut p1 = x; // P_1(x)
    for j in 2..=n {
        let jf = j as f64;
        let p2 = ((2.0 * jf - 1.0) * x * p1 - (jf - 1.0) * p0) / jf;
        p0 = p1;
        p1 = p2;
    }
    (p1, p0)
}

/// Compute Gauss-Legendre nodes and weights on `[-1, 1]` for the given order.
///
/// Exploits symmetry: only the positive roots are solved for, each placed
/// together with its mirror image.
pub fn gauss_legendre(n: usize) -> (Vec<f64>, Vec<f64>) {
    let mut nodes = vec![0.0f64; n];
    let mut weights = vec![0.0f64; n];

    if n == 0 {
        return (nodes, weights);
    }
    if n == 1 {
        weights[0] = 2.0;
        return (nodes, weights);
    }

    let nf = n as f64;
    let m = n.div_ceil(2);

    for i in 0..m {
        // Initial guess via Chebyshev approximation.
        let mut x = ((std::f64::consts::PI * (i as f64 + 0.75)) / (nf + 0.5)).cos();

        for _ in 0..100 {
            let (pn, pn1) = legendre_pair(n, x);
            // P'_n(x) = n * (x * P_n(x) - P_{n-1}(x)) / (x^2 - 1)
            let dp = nf * (x * pn - pn1) / (x * x - 1.0);
            let dx = pn / dp;
            x -= dx;
            if dx.abs() < 1e-15 {
                break;
            }
        }

        let (pn, pn1) = legendre_pair(n, x);
        let dp = nf * (x * pn - pn1) / (x * x - 1.0);
        let w = 2.0 / ((1.0 - x * x) * dp * dp);

        nodes[i] = -x;
        nodes[n - 1 - i] = x;
        weights[i] = w;
        weights[n - 1 - i] = w;
    }

    (nodes, weights)
}

/// Map reference nodes from `[-1, 1]` to `[a, b]` and scale weights accordingly.
pub fn map_to_interval(nodes: &[f64], weights: &[f64], a: f64, b: f64) -> (Vec<f64>, Vec<f64>) {
    let half = 0.5 * (b - a);
    let mid = 0.5 * (a + b);
    let mapped_nodes: Vec<f64> = nodes.iter().map(|&x| mid + half * x).collect();
    let mapped_weights: Vec<f64> = weights.iter().map(|&w| w * half).collect();
    (mapped_nodes, mapped_weights)
}

/// Integrate `f` over `[a, b]` with a composite rule: the interval is split
/// into `segments` equal pieces and the reference rule is applied per piece.
///
/// Non-finite integrand values are skipped, keeping the sum finite even when
/// `f` underflows or overflows at isolated points.
pub fn integrate_composite<F: Fn(f64) -> f64>(
    f: F,
    a: f64,
    b: f64,
    nodes: &[f64],
    weights: &[f64],
    segments: usize,
) -> f64 {
    let segments = segments.max(1);
    let seg_len = (b - a) / segments as f64;
    let mut sum = 0.0;
    for s in 0..segments {
        let lo = a + seg_len * s as f64;
        let half = 0.5 * seg_len;
        let mid = lo + half;
        for (&t, &w) in nodes.iter().zip(weights) {
            let v = f(mid + half * t);
            if v.is_finite() {
                sum += w * half * v;
            }
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrates_polynomial_exactly() {
        // GL with n nodes integrates polynomials of degree ≤ 2n-1 exactly.
        // ∫_{-1}^{1} x^2 dx = 2/3, ∫_{-1}^{1} x^4 dx = 2/5.
        let (nodes, weights) = gauss_legendre(4);
        let i2: f64 = nodes.iter().zip(&weights).map(|(&x, &w)| x * x * w).sum();
        assert!((i2 - 2.0 / 3.0).abs() < 1e-14, "got {i2}");
        let i4: f64 = nodes.iter().zip(&weights).map(|(&x, &w)| x.powi(4) * w).sum();
        assert!((i4 - 2.0 / 5.0).abs() < 1e-14, "got {i4}");
    }

    #[test]
    fn test_weights_sum_to_interval_length() {
        let (nodes, weights) = gauss_legendre(32);
        let (_, mw) = map_to_interval(&nodes, &weights, 0.0, 3.0);
        let sum: f64 = mw.iter().sum();
        assert!((sum - 3.0).abs() < 1e-13, "weight sum = {sum}");
    }

    #[test]
    fn test_mapped_interval_linear() {
        // ∫_{0}^{1} x dx = 0.5
        let (nodes, weights) = gauss_legendre(8);
        let (mn, mw) = map_to_interval(&nodes, &weights, 0.0, 1.0);
        let integral: f64 = mn.iter().zip(&mw).map(|(&x, &w)| x * w).sum();
        assert!((integral - 0.5).abs() < 1e-14, "got {integral}");
    }

    #[test]
    fn test_composite_gaussian_mass() {
        // ∫_{-8}^{8} φ(x) dx ≈ 1 to well below 1e-10.
        let (nodes, weights) = gauss_legendre(32);
        let mass =
            integrate_composite(crate::math::standard_normal_pdf, -8.0, 8.0, &nodes, &weights, 4);
        assert!((mass - 1.0).abs() < 1e-10, "got {mass}");
    }

    #[test]
    fn test_composite_is_deterministic() {
        let (nodes, weights) = gauss_legendre(32);
        let f = |x: f64| (x * x).sin() + 2.0;
        let a = integrate_composite(f, -1.0, 5.0, &nodes, &weights, 6);
        let b = integrate_composite(f, -1.0, 5.0, &nodes, &weights, 6);
        assert!(a == b);
    }
}
