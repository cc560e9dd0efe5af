use crate::config::{Args, Config};
use crate::model_impl::{AnalyticChemisorption, OrthogonalisationCorrection};
use crate::params::ModelParameters;
use crate::scf_impl::{SelfConsistencyEngine, SelfConsistentSolution};
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;

pub fn run_solver(
    args: &Args,
    config: &Config,
) -> Result<(ModelParameters, SelfConsistentSolution)> {
    let params = ModelParameters::new(config.physical_inputs(args))
        .wrap_err("Invalid model parameters")?;

    let engine = SelfConsistencyEngine::with_grid_size(config.grid_size(args));
    info!(
        "\nStarting occupation search on a {}x{} mesh...\n",
        engine.grid_size, engine.grid_size
    );
    let solution = engine
        .solve(&params)
        .wrap_err("Self-consistent occupation search failed")?;

    Ok((params, solution))
}

pub fn run_repulsion(
    params: ModelParameters,
    solution: SelfConsistentSolution,
    config: &Config,
) -> Result<OrthogonalisationCorrection<AnalyticChemisorption>> {
    // beta_p is V_ak in units of 2beta
    let vak = params.beta_p * params.convert();
    let alpha = config.repulsion_alpha();
    let offset = config.repulsion_offset();
    info!(
        "Adding orthogonalisation penalty: alpha = {:.6}, V_ak = {:.6} eV, offset = {:.6} eV",
        alpha, vak, offset
    );

    let analytic = AnalyticChemisorption { params, solution };
    Ok(OrthogonalisationCorrection::new(analytic, alpha, vak, offset))
}
