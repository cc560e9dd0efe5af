use super::ChemisorptionModel;
use crate::error::Result;
use crate::params::ModelParameters;
use crate::scf_impl::{SelfConsistencyEngine, SelfConsistentSolution};
use std::f64::consts::PI;

/// Fraction of a semi-elliptical band (half-width 1) lying below
/// `fermi_energy`: ½ + (x√(1−x²) + asin x)/π with x clamped to [−1, 1].
pub fn semi_elliptic_filling(fermi_energy: f64, eps_d: f64) -> f64 {
    let x = (fermi_energy - eps_d).clamp(-1.0, 1.0);
    0.5 + (x * (1.0 - x * x).sqrt() + x.asin()) / PI
}

/// The analytic spin-polarized engine seen through [`ChemisorptionModel`].
#[derive(Debug, Clone)]
pub struct AnalyticChemisorption {
    pub params: ModelParameters,
    pub solution: SelfConsistentSolution,
}

impl AnalyticChemisorption {
    pub fn solve(params: ModelParameters, engine: &SelfConsistencyEngine) -> Result<Self> {
        let solution = engine.solve(&params)?;
        Ok(AnalyticChemisorption { params, solution })
    }
}

impl ChemisorptionModel for AnalyticChemisorption {
    fn hybridization_energy(&self) -> f64 {
        self.solution.energy * self.params.convert()
    }

    fn occupancy(&self) -> f64 {
        self.solution.occupancy()
    }

    fn d_band_filling(&self) -> f64 {
        semi_elliptic_filling(self.params.fermi_energy, self.params.eps_d)
    }
}
