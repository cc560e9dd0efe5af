//! Core one-electron energy evaluation

use crate::error::{Result, ScfError};
use band::helper::{finite_or_zero, trapezoid};
use band::{evaluate, find_roots, RootState, SpectralProfile};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

/// Which occupied localized states are present for a spin channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocalizedCase {
    /// Bonding and antibonding poles both below E_F
    Both,
    /// Only the bonding pole below the band is occupied
    PositiveOnly,
    /// Only the antibonding pole above the band is occupied
    NegativeOnly,
    /// No occupied localized states
    Continuum,
}

impl LocalizedCase {
    fn from_roots(roots: &RootState) -> Self {
        match (roots.positive_occupied(), roots.negative_occupied()) {
            (true, true) => LocalizedCase::Both,
            (true, false) => LocalizedCase::PositiveOnly,
            (false, true) => LocalizedCase::NegativeOnly,
            (false, false) => LocalizedCase::Continuum,
        }
    }

    /// The bonding pole takes one state out of the band, shifting the phase.
    fn phase_shift(&self) -> f64 {
        match self {
            LocalizedCase::Both | LocalizedCase::PositiveOnly => PI,
            LocalizedCase::NegativeOnly | LocalizedCase::Continuum => 0.0,
        }
    }
}

/// One-electron energy of one spin channel at one trial level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinChannelEnergy {
    pub eps_sigma: f64,
    /// Total one-electron energy (units of 2β)
    pub energy: f64,
    /// Phase integral over the occupied continuum divided by π
    pub arctan_component: f64,
    /// Electrons in this channel: occupied band weight plus occupied poles
    pub occupancy: f64,
    pub case: LocalizedCase,
    pub roots: RootState,
    pub profile: SpectralProfile,
}

/// Evaluate the one-electron energy for the level `eps_sigma`.
///
/// The phase argument must lie strictly in (−π, 0) over the whole occupied
/// domain; anything else is reported as [`ScfError::Invariant`].
pub fn one_electron_energy(
    eps: &[f64],
    eps_sigma: f64,
    eps_d: f64,
    beta_p: f64,
    fermi_energy: f64,
) -> Result<SpinChannelEnergy> {
    let profile = evaluate(eps, beta_p, eps_d, eps_sigma)?;
    let geometry = profile.geometry;
    let roots = find_roots(eps_sigma, beta_p, &geometry, fermi_energy);
    let case = LocalizedCase::from_roots(&roots);

    let v2 = beta_p * beta_p;
    let eps_sigma_wrt_d = eps_sigma - eps_d;
    let upper_bound = if geometry.upper_edge > fermi_energy {
        fermi_energy
    } else {
        geometry.upper_edge
    };

    let occupied: Vec<usize> = eps
        .iter()
        .enumerate()
        .filter(|&(_, &e)| geometry.lower_edge < e && e < upper_bound)
        .map(|(i, _)| i)
        .collect();
    let energy_occ: Vec<f64> = occupied.iter().map(|&i| eps[i] - eps_d).collect();

    let mut integrand = Vec::with_capacity(energy_occ.len());
    for &x in &energy_occ {
        let numerator = finite_or_zero(-2.0 * v2 * (1.0 - x * x).sqrt());
        let denominator = x * (2.0 * v2 - 1.0) + eps_sigma_wrt_d;
        let phase = numerator.atan2(denominator);
        if !(phase < 0.0 && phase > -PI) {
            return Err(ScfError::invariant(format!(
                "phase {} at energy {} is outside (-pi, 0) for eps_sigma = {}",
                phase,
                x + eps_d,
                eps_sigma
            )));
        }
        integrand.push(phase + case.phase_shift());
    }

    let arctan_component = trapezoid(&integrand, &energy_occ) / PI;
    let energy = match case {
        LocalizedCase::Both => arctan_component + roots.root_positive - roots.root_negative,
        LocalizedCase::PositiveOnly => arctan_component + roots.root_positive - fermi_energy,
        LocalizedCase::NegativeOnly => {
            arctan_component - roots.root_negative + geometry.upper_edge
        }
        LocalizedCase::Continuum => arctan_component,
    };

    let rho_occ: Vec<f64> = occupied.iter().map(|&i| profile.rho_aa[i]).collect();
    let occupancy = trapezoid(&rho_occ, &energy_occ) + roots.localized_occupation();

    debug!(
        "eps_sigma = {:.6}: case {:?}, arctan = {:.6}, energy = {:.6}, n = {:.4}",
        eps_sigma, case, arctan_component, energy, occupancy
    );

    Ok(SpinChannelEnergy {
        eps_sigma,
        energy,
        arctan_component,
        occupancy,
        case,
        roots,
        profile,
    })
}
