use super::ChemisorptionModel;
use crate::error::{Result, ScfError};
use tracing::debug;

/// Adds the linear orthogonalisation penalty
///
/// E_orth = 2 (n_a + f) α V_ak²
///
/// to the hybridization energy of the wrapped model, plus a constant offset
/// used when fitting against reference energies.
#[derive(Debug, Clone)]
pub struct OrthogonalisationCorrection<M: ChemisorptionModel> {
    pub inner: M,
    pub alpha: f64,
    /// Adsorbate-metal coupling in eV
    pub vak: f64,
    pub constant_offset: f64,
}

impl<M: ChemisorptionModel> OrthogonalisationCorrection<M> {
    pub fn new(inner: M, alpha: f64, vak: f64, constant_offset: f64) -> Self {
        OrthogonalisationCorrection {
            inner,
            alpha,
            vak,
            constant_offset,
        }
    }

    pub fn orthogonalisation_energy(&self) -> Result<f64> {
        let energy = 2.0
            * (self.inner.occupancy() + self.inner.d_band_filling())
            * self.alpha
            * self.vak
            * self.vak;
        if energy < 0.0 {
            return Err(ScfError::invariant(format!(
                "orthogonalisation energy {} is negative (alpha = {})",
                energy, self.alpha
            )));
        }
        Ok(energy)
    }

    pub fn chemisorption_energy(&self) -> Result<f64> {
        let hybridization = self.inner.hybridization_energy();
        let orthogonalisation = self.orthogonalisation_energy()?;
        debug!(
            "hybridization {:.6} eV + orthogonalisation {:.6} eV + offset {:.6} eV",
            hybridization, orthogonalisation, self.constant_offset
        );
        Ok(hybridization + orthogonalisation + self.constant_offset)
    }
}

impl<M: ChemisorptionModel> ChemisorptionModel for OrthogonalisationCorrection<M> {
    fn hybridization_energy(&self) -> f64 {
        self.inner.hybridization_energy()
    }

    fn occupancy(&self) -> f64 {
        self.inner.occupancy()
    }

    fn d_band_filling(&self) -> f64 {
        self.inner.d_band_filling()
    }
}
