//! Hybridization function, its Hilbert transform and the adsorbate density of
//! states for a semi-elliptical band.
//!
//! With x = ε − ε_d (in half-widths) and V the adsorbate-metal coupling:
//!
//! Δ(ε) = 2V² √(1 − x²)            for |x| ≤ 1, zero elsewhere
//!
//! Λ(ε) = 2V² x                     for |x| ≤ 1
//!      = 2V² (x − √(x² − 1))       for x > 1
//!      = 2V² (x + √(x² − 1))       for x < −1
//!
//! ρ_aa(ε) = Δ / π / [x²(1 − 4V²) − 2xΔε(1 − 2V²) + 4V⁴ + Δε²]
//!
//! where Δε = ε_σ − ε_d is the adsorbate level relative to the band center.

extern crate nalgebra as na;

use crate::error::BandError;
use crate::geometry::{BandGeometry, HALF_WIDTH};
use crate::helper::finite_or_zero;
use na::DVector;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

/// Δ, Λ and ρ_aa sampled on the energy grid, index for index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectralProfile {
    pub delta: DVector<f64>,
    pub lambda: DVector<f64>,
    pub rho_aa: DVector<f64>,
    pub delta_at_lower_edge: f64,
    pub delta_at_upper_edge: f64,
    pub lambda_at_lower_edge: f64,
    pub lambda_at_upper_edge: f64,
    pub geometry: BandGeometry,
}

/// Δ at reduced energy `x` for squared coupling `v2`.
#[inline]
pub fn hybridization(x: f64, v2: f64) -> f64 {
    finite_or_zero(2.0 * v2 * (1.0 - x * x).sqrt())
}

/// Λ at reduced energy `x`. Energies that fall in none of the three branches
/// (NaN) are rejected.
pub fn hilbert_transform(x: f64, v2: f64) -> Result<f64, BandError> {
    if x.abs() <= HALF_WIDTH {
        Ok(2.0 * v2 * x)
    } else if x > HALF_WIDTH {
        Ok(2.0 * v2 * (x - (x * x - 1.0).sqrt()))
    } else if x < -HALF_WIDTH {
        Ok(2.0 * v2 * (x + (x * x - 1.0).sqrt()))
    } else {
        Err(BandError::validation(format!(
            "energy {} cannot be placed inside, above or below the band",
            x
        )))
    }
}

/// Adsorbate density of states at reduced energy `x` for a level sitting at
/// `eps_sigma_wrt_d` relative to the band center.
pub fn adsorbate_dos(x: f64, eps_sigma_wrt_d: f64, v2: f64) -> f64 {
    let denominator = x * x * (1.0 - 4.0 * v2) - 2.0 * x * eps_sigma_wrt_d * (1.0 - 2.0 * v2)
        + 4.0 * v2 * v2
        + eps_sigma_wrt_d * eps_sigma_wrt_d;
    let numerator = 2.0 * v2 * (1.0 - x * x).sqrt();
    finite_or_zero(numerator / denominator / PI)
}

/// Build the spectral profile of an adsorbate level `eps_sigma` coupled with
/// strength `beta_p` to a band centred at `eps_d`.
pub fn evaluate(
    eps: &[f64],
    beta_p: f64,
    eps_d: f64,
    eps_sigma: f64,
) -> Result<SpectralProfile, BandError> {
    let geometry = BandGeometry::new(eps, eps_d)?;
    let v2 = beta_p * beta_p;
    let eps_sigma_wrt_d = eps_sigma - eps_d;

    let reduced: Vec<f64> = eps.iter().map(|&e| geometry.reduced(e)).collect();
    let delta = DVector::from_iterator(eps.len(), reduced.iter().map(|&x| hybridization(x, v2)));
    let lambda = reduced
        .iter()
        .map(|&x| hilbert_transform(x, v2))
        .collect::<Result<Vec<f64>, BandError>>()?;
    let lambda = DVector::from_vec(lambda);
    let rho_aa = DVector::from_iterator(
        eps.len(),
        reduced.iter().map(|&x| adsorbate_dos(x, eps_sigma_wrt_d, v2)),
    );

    debug!(
        "spectral profile on {} points: band [{:.4}, {:.4}] at indices ({}, {})",
        eps.len(),
        geometry.lower_edge,
        geometry.upper_edge,
        geometry.lower_edge_index,
        geometry.upper_edge_index
    );

    Ok(SpectralProfile {
        delta_at_lower_edge: delta[geometry.lower_edge_index],
        delta_at_upper_edge: delta[geometry.upper_edge_index],
        lambda_at_lower_edge: lambda[geometry.lower_edge_index],
        lambda_at_upper_edge: lambda[geometry.upper_edge_index],
        delta,
        lambda,
        rho_aa,
        geometry,
    })
}
