//! Command-line argument parsing for chemisorption calculations

use clap::Parser;

/// Spin-polarized Newns-Anderson chemisorption energy with YAML configuration
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "config.yaml")]
    pub config_file: String,

    /// Override output file: (default stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Override Hubbard U (eV)
    #[arg(long)]
    pub hubbard_u: Option<f64>,

    /// Override d-band center (eV)
    #[arg(long)]
    pub eps_d: Option<f64>,

    /// Override occupation mesh resolution
    #[arg(long)]
    pub grid_size: Option<usize>,

    /// Write the converged solution as JSON to this file
    #[arg(long)]
    pub solution_json: Option<String>,
}
