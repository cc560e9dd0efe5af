use super::{AnalyticChemisorption, OrthogonalisationCorrection};
use crate::error::{Result, ScfError};
use crate::params::{ModelParameters, PhysicalInputs};
use crate::scf_impl::SelfConsistencyEngine;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Per-metal inputs shared by a fitting routine.
///
/// `vsd` and `width` are paired element by element: metal `i` has coupling
/// `vsd[i]` (eV) and a d-band of full width `width[i]` (eV), i.e. a
/// metal-metal coupling of `width[i] / 4`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetalSeries {
    pub vsd: Vec<f64>,
    pub width: Vec<f64>,
    pub eps_a: f64,
    /// Energy grid in eV; must cover every metal's band
    pub eps: Vec<f64>,
    #[serde(default)]
    pub fermi_energy: f64,
    #[serde(default)]
    pub hubbard_u: f64,
}

impl MetalSeries {
    pub fn new(vsd: Vec<f64>, width: Vec<f64>, eps_a: f64, eps: Vec<f64>) -> Result<Self> {
        let series = MetalSeries {
            vsd,
            width,
            eps_a,
            eps,
            fermi_energy: 0.0,
            hubbard_u: 0.0,
        };
        series.validate()?;
        Ok(series)
    }

    pub fn validate(&self) -> Result<()> {
        if self.vsd.is_empty() {
            return Err(ScfError::validation("Vsd is not defined"));
        }
        if self.width.is_empty() {
            return Err(ScfError::validation("width is not defined"));
        }
        if self.vsd.len() != self.width.len() {
            return Err(ScfError::validation(format!(
                "Vsd has {} entries but width has {}",
                self.vsd.len(),
                self.width.len()
            )));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.vsd.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vsd.is_empty()
    }

    /// Model parameters of metal `index` at d-band center `eps_d`, with the
    /// adsorbate coupling scaled by √beta. Returns the parameters together
    /// with V_ak in eV.
    pub fn metal_parameters(
        &self,
        index: usize,
        eps_d: f64,
        beta: f64,
    ) -> Result<(ModelParameters, f64)> {
        let (vsd, width) = match (self.vsd.get(index), self.width.get(index)) {
            (Some(&vsd), Some(&width)) => (vsd, width),
            _ => {
                return Err(ScfError::validation(format!(
                    "metal index {} is out of range for a series of {}",
                    index,
                    self.len()
                )))
            }
        };
        let metal_beta = width / 4.0;
        let vak = beta.abs().sqrt() * vsd;
        let params = ModelParameters::new(PhysicalInputs {
            beta_p: vak / (2.0 * metal_beta),
            eps_a: self.eps_a,
            eps_d,
            beta: metal_beta,
            fermi_energy: self.fermi_energy,
            hubbard_u: self.hubbard_u,
            eps: self.eps.clone(),
        })?;
        Ok((params, vak))
    }

    /// Chemisorption energy (eV) of every metal, in input order.
    ///
    /// `alpha` and `beta` are used by absolute value; the offset keeps its
    /// sign.
    pub fn chemisorption_energies(
        &self,
        alpha: f64,
        beta: f64,
        constant_offset: f64,
        eps_ds: &[f64],
        engine: &SelfConsistencyEngine,
    ) -> Result<Vec<f64>> {
        self.validate()?;
        if eps_ds.len() != self.len() {
            return Err(ScfError::validation(format!(
                "{} d-band centers given for {} metals",
                eps_ds.len(),
                self.len()
            )));
        }
        let alpha = alpha.abs();

        let energies = eps_ds
            .par_iter()
            .enumerate()
            .map(|(i, &eps_d)| {
                let (params, vak) = self.metal_parameters(i, eps_d, beta)?;
                let analytic = AnalyticChemisorption::solve(params, engine)?;
                OrthogonalisationCorrection::new(analytic, alpha, vak, constant_offset)
                    .chemisorption_energy()
            })
            .collect::<Result<Vec<f64>>>()?;

        info!(
            "alpha = {:.6}, beta = {:.6}, offset = {:.6}: {} chemisorption energies",
            alpha,
            beta.abs(),
            constant_offset,
            energies.len()
        );
        Ok(energies)
    }
}
