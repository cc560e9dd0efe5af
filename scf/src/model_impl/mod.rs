//! Chemisorption models built on top of the self-consistent solver
//!
//! Every model exposes the same three quantities, so a fitting routine can
//! swap one implementation for another and corrections can be layered as
//! decorators:
//!
//! - hybridization energy (eV)
//! - adsorbate occupancy (electrons)
//! - d-band filling (fraction of the band below the Fermi level)
//!
//! # Usage
//!
//! ```rust,ignore
//! let analytic = AnalyticChemisorption::solve(params, &SelfConsistencyEngine::new())?;
//! let model = OrthogonalisationCorrection::new(analytic, alpha, vak, 0.0);
//! let energy = model.chemisorption_energy()?;
//! ```

mod analytic;
mod repulsion;
mod series;

pub use analytic::{semi_elliptic_filling, AnalyticChemisorption};
pub use repulsion::OrthogonalisationCorrection;
pub use series::MetalSeries;

/// Quantities a chemisorption model hands to its collaborators.
pub trait ChemisorptionModel {
    /// Hybridization energy in eV.
    fn hybridization_energy(&self) -> f64;

    /// Electrons on the adsorbate.
    fn occupancy(&self) -> f64;

    /// Filled fraction of the d-band.
    fn d_band_filling(&self) -> f64;
}
