//! Model parameters of the spin-polarized Newns-Anderson calculation.
//!
//! Inputs arrive in eV and are converted once into units of 2β, where β is the
//! metal-metal coupling. In those units the d-band half-width is 1.

use crate::error::{Result, ScfError};
use band::HALF_WIDTH;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Caller-supplied inputs in physical units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalInputs {
    /// Adsorbate-metal coupling, dimensionless (units of 2β)
    pub beta_p: f64,
    /// Bare adsorbate level (eV, relative to the Fermi level)
    pub eps_a: f64,
    /// d-band center (eV)
    pub eps_d: f64,
    /// Metal-metal coupling (eV)
    pub beta: f64,
    /// Fermi energy (eV)
    pub fermi_energy: f64,
    /// Coulomb interaction on the adsorbate (eV)
    pub hubbard_u: f64,
    /// Energy grid (eV), strictly increasing
    pub eps: Vec<f64>,
}

/// Immutable parameter set, all energies in units of 2β.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    pub beta_p: f64,
    pub eps_a: f64,
    pub eps_d: f64,
    pub beta: f64,
    pub fermi_energy: f64,
    pub hubbard_u: f64,
    pub eps: Vec<f64>,
}

impl ModelParameters {
    pub fn new(inputs: PhysicalInputs) -> Result<Self> {
        if !(inputs.beta.is_finite() && inputs.beta > 0.0) {
            return Err(ScfError::validation(format!(
                "metal coupling beta must be positive, got {}",
                inputs.beta
            )));
        }
        if !inputs.beta_p.is_finite() {
            return Err(ScfError::validation("adsorbate coupling beta_p is not finite"));
        }

        let convert = 2.0 * inputs.beta;
        let params = ModelParameters {
            beta_p: inputs.beta_p,
            eps_a: inputs.eps_a / convert,
            eps_d: inputs.eps_d / convert,
            beta: inputs.beta,
            fermi_energy: inputs.fermi_energy / convert,
            hubbard_u: inputs.hubbard_u / convert,
            eps: inputs.eps.iter().map(|e| e / convert).collect(),
        };
        params.validate()?;

        info!("Model parameters (units of 2beta):");
        info!("  beta_p       : {:.6}", params.beta_p);
        info!("  eps_a        : {:.6}", params.eps_a);
        info!("  eps_d        : {:.6}", params.eps_d);
        info!("  beta (eV)    : {:.6}", params.beta);
        info!("  fermi_energy : {:.6}", params.fermi_energy);
        info!("  U            : {:.6}", params.hubbard_u);
        info!("  grid points  : {}", params.eps.len());

        Ok(params)
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("eps_a", self.eps_a),
            ("eps_d", self.eps_d),
            ("fermi_energy", self.fermi_energy),
            ("hubbard_u", self.hubbard_u),
        ] {
            if !value.is_finite() {
                return Err(ScfError::validation(format!("{} is not finite", name)));
            }
        }

        if self.eps.len() < 2 {
            return Err(ScfError::validation(
                "energy grid needs at least two points",
            ));
        }
        if !self.eps.windows(2).all(|w| w[1] > w[0]) {
            return Err(ScfError::validation(
                "energy grid must be strictly increasing",
            ));
        }

        let first = self.eps[0];
        let last = self.eps[self.eps.len() - 1];
        if first > self.eps_d - HALF_WIDTH || last < self.eps_d + HALF_WIDTH {
            return Err(ScfError::validation(format!(
                "energy grid [{:.3}, {:.3}] does not cover the band [{:.3}, {:.3}] (units of 2beta)",
                first,
                last,
                self.eps_d - HALF_WIDTH,
                self.eps_d + HALF_WIDTH
            )));
        }
        Ok(())
    }

    /// Factor that converts internal energies back to eV.
    pub fn convert(&self) -> f64 {
        2.0 * self.beta
    }

    /// Adsorbate level for one spin, shifted by the opposite spin occupation.
    #[inline]
    pub fn shifted_level(&self, opposite_occupation: f64) -> f64 {
        self.eps_a + self.hubbard_u * opposite_occupation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use band::helper::linspace;

    fn inputs() -> PhysicalInputs {
        PhysicalInputs {
            beta_p: 0.2,
            eps_a: -5.0,
            eps_d: -2.0,
            beta: 2.0,
            fermi_energy: 0.0,
            hubbard_u: 4.0,
            eps: linspace(-20.0, 20.0, 1000),
        }
    }

    #[test]
    fn test_energies_are_converted_once() {
        let params = ModelParameters::new(inputs()).unwrap();
        assert_eq!(params.convert(), 4.0);
        assert_eq!(params.eps_a, -1.25);
        assert_eq!(params.eps_d, -0.5);
        assert_eq!(params.hubbard_u, 1.0);
        assert_eq!(params.eps[0], -5.0);
        assert_eq!(params.eps[999], 5.0);
        // Dimensionless coupling is left untouched
        assert_eq!(params.beta_p, 0.2);
        assert_eq!(params.shifted_level(0.5), -0.75);
    }

    #[test]
    fn test_rejects_non_monotonic_grid() {
        let mut bad = inputs();
        bad.eps = vec![-20.0, 0.0, -1.0, 20.0];
        assert!(matches!(
            ModelParameters::new(bad),
            Err(ScfError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_grid_not_covering_band() {
        let mut bad = inputs();
        // Band spans [-6, 2] eV here
        bad.eps = linspace(-5.0, 5.0, 100);
        assert!(matches!(
            ModelParameters::new(bad),
            Err(ScfError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_non_positive_beta() {
        let mut bad = inputs();
        bad.beta = 0.0;
        assert!(ModelParameters::new(bad).is_err());

        let mut short = inputs();
        short.eps = vec![0.0];
        assert!(ModelParameters::new(short).is_err());
    }
}
