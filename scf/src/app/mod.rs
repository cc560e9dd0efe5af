mod report;
mod runner;

pub use runner::{run_repulsion, run_solver};

use self::report::{report_repulsion, report_summary};
use crate::config::{Args, Config};
use crate::io::{setup_output, write_solution};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use std::fs::{self, File};
use tracing::info;

pub struct ChemisorptionApplication {
    args: Args,
    config: Config,
}

impl ChemisorptionApplication {
    pub fn from_cli() -> Result<Self> {
        let args = Args::parse();
        let config = load_config(&args)?;
        Ok(Self { args, config })
    }

    pub fn run(self) -> Result<()> {
        setup_output(self.args.output.as_ref());
        info!("Configuration loaded:\n{:?}", self.config);

        let (params, solution) = run_solver(&self.args, &self.config)?;
        report_summary(&params, &solution);

        if self.config.is_repulsion_enabled() {
            let corrected = run_repulsion(params, solution.clone(), &self.config)?;
            report_repulsion(&corrected)?;
        }

        if let Some(ref path) = self.args.solution_json {
            let mut file = File::create(path)
                .wrap_err_with(|| format!("Unable to create solution file: {}", path))?;
            write_solution(&mut file, &solution)?;
            info!("Solution written to: {}", path);
        }

        Ok(())
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let config_content = fs::read_to_string(&args.config_file)
        .wrap_err_with(|| format!("Unable to read configuration file: {}", args.config_file))?;

    let config = serde_yml::from_str::<Config>(&config_content)
        .wrap_err("Failed to parse configuration file")?
        .with_defaults();

    Ok(config)
}
