// Spin-polarized Newns-Anderson chemisorption library

pub mod app;
pub mod config;
pub mod energy_impl;
pub mod error;
pub mod io;
pub mod model_impl;
pub mod params;
pub mod scf_impl;

pub use energy_impl::{one_electron_energy, LocalizedCase, SpinChannelEnergy};
pub use error::{Result, ScfError};
pub use model_impl::{
    semi_elliptic_filling, AnalyticChemisorption, ChemisorptionModel, MetalSeries,
    OrthogonalisationCorrection,
};
pub use params::{ModelParameters, PhysicalInputs};
pub use scf_impl::{SelfConsistencyEngine, SelfConsistentSolution};
