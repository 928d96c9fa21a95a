//! # lst-prob
//!
//! Probability densities for charged-particle energy-loss modeling:
//!
//! - [`landau`] — the Landau density, evaluated with a piecewise rational
//!   approximation over its full domain (exponentially suppressed left tail,
//!   peak region, slowly decaying right tail).
//! - [`langau`] — the convolution of a Landau density with a Gaussian
//!   resolution kernel, computed by deterministic Gauss-Legendre quadrature.
//!
//! Both evaluators are pure and stateless: identical inputs give bit-identical
//! outputs, and batch evaluation preserves the order of the sample grid.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod landau;
pub mod langau;
pub mod math;
pub mod quadrature;
