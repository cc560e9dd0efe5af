use crate::model_impl::{
    semi_elliptic_filling, AnalyticChemisorption, ChemisorptionModel, OrthogonalisationCorrection,
};
use crate::params::ModelParameters;
use crate::scf_impl::SelfConsistentSolution;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;

pub fn report_summary(params: &ModelParameters, solution: &SelfConsistentSolution) {
    info!("\nSelf-consistent search finished.");
    if !solution.grid_searched() {
        info!("  U = 0: occupations fixed, no search performed");
    }

    info!("\nOccupations:");
    info!("  n_up   : {:.6}", solution.n_up);
    info!("  n_down : {:.6}", solution.n_down);
    info!("  moment : {:.6}", solution.magnetization());

    info!("\nAdsorbate occupancy:");
    info!("  up     : {:.6}", solution.occupancy_up);
    info!("  down   : {:.6}", solution.occupancy_down);
    info!("  total  : {:.6}", solution.occupancy());
    let rho_aa = solution.rho_aa();
    if let Some(index) = rho_aa.iter().position(|&r| r == rho_aa.max()) {
        info!(
            "  rho_aa peak    : {:.6} at {:.6} eV",
            rho_aa[index],
            params.eps[index] * params.convert()
        );
    }
    info!(
        "  d-band filling : {:.6}",
        semi_elliptic_filling(params.fermi_energy, params.eps_d)
    );

    info!(
        "\nHybridization energy: {:.10} (2beta) = {:.10} eV",
        solution.energy,
        solution.energy * params.convert()
    );
}

pub fn report_repulsion(
    model: &OrthogonalisationCorrection<AnalyticChemisorption>,
) -> Result<()> {
    let orthogonalisation = model
        .orthogonalisation_energy()
        .wrap_err("Orthogonalisation penalty is not physical")?;
    let total = model.chemisorption_energy()?;

    info!("\nChemisorption energy (eV):");
    info!("  hybridization     : {:+.6}", model.hybridization_energy());
    info!("  orthogonalisation : {:+.6}", orthogonalisation);
    info!("  offset            : {:+.6}", model.constant_offset);
    info!("  total             : {:+.6}", total);
    Ok(())
}
