//! Chemisorption Command-Line Interface
//!
//! This is the main entry point for running spin-polarized Newns-Anderson
//! calculations with YAML configuration.

use anderson_scf::app::ChemisorptionApplication;
use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    ChemisorptionApplication::from_cli()?.run()
}
