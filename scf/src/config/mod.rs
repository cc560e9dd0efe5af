//! Configuration management for chemisorption calculations
//!
//! This module handles configuration structures, defaults, and command-line
//! overrides.

mod args;

pub use args::Args;

use crate::params::PhysicalInputs;
use crate::scf_impl::DEFAULT_GRID_SIZE;
use band::helper::linspace;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub adsorbate: AdsorbateParams,
    pub metal: MetalParams,
    pub hubbard_u: Option<f64>,
    #[serde(default)]
    pub energy_grid: GridParams,
    #[serde(default)]
    pub scf_params: ScfParams,
    pub repulsion: Option<RepulsionParams>,
}

/// Adsorbate level and its coupling to the metal
#[derive(Debug, Deserialize, Serialize)]
pub struct AdsorbateParams {
    /// Bare level (eV)
    pub eps_a: f64,
    /// Coupling in units of 2beta
    pub beta_p: f64,
}

/// d-band description
#[derive(Debug, Deserialize, Serialize)]
pub struct MetalParams {
    /// Metal-metal coupling (eV)
    pub beta: f64,
    pub eps_d: f64,
    pub fermi_energy: Option<f64>,
}

/// Energy grid in eV
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GridParams {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub points: Option<usize>,
}

impl Default for GridParams {
    fn default() -> Self {
        GridParams {
            min: Some(-20.0),
            max: Some(20.0),
            points: Some(2000),
        }
    }
}

impl GridParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.min.is_none() {
            self.min = defaults.min;
        }
        if self.max.is_none() {
            self.max = defaults.max;
        }
        if self.points.is_none() {
            self.points = defaults.points;
        }
        self
    }

    pub fn build(&self) -> Vec<f64> {
        linspace(
            self.min.unwrap_or(-20.0),
            self.max.unwrap_or(20.0),
            self.points.unwrap_or(2000),
        )
    }
}

/// Self-consistency search parameters
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ScfParams {
    pub grid_size: Option<usize>,
}

impl Default for ScfParams {
    fn default() -> Self {
        ScfParams {
            grid_size: Some(DEFAULT_GRID_SIZE),
        }
    }
}

impl ScfParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        if self.grid_size.is_none() {
            self.grid_size = Self::default().grid_size;
        }
        self
    }
}

/// Linear orthogonalisation penalty parameters
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RepulsionParams {
    pub enabled: Option<bool>,
    pub alpha: Option<f64>,
    pub constant_offset: Option<f64>,
}

impl Default for RepulsionParams {
    fn default() -> Self {
        RepulsionParams {
            enabled: Some(true),
            alpha: Some(0.0),
            constant_offset: Some(0.0),
        }
    }
}

impl RepulsionParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.enabled.is_none() {
            self.enabled = defaults.enabled;
        }
        if self.alpha.is_none() {
            self.alpha = defaults.alpha;
        }
        if self.constant_offset.is_none() {
            self.constant_offset = defaults.constant_offset;
        }
        self
    }
}

impl Config {
    /// Apply defaults to all configuration sections
    pub fn with_defaults(mut self) -> Self {
        if self.hubbard_u.is_none() {
            self.hubbard_u = Some(0.0);
        }
        if self.metal.fermi_energy.is_none() {
            self.metal.fermi_energy = Some(0.0);
        }
        self.energy_grid = self.energy_grid.with_defaults();
        self.scf_params = self.scf_params.with_defaults();
        if let Some(repulsion) = self.repulsion.take() {
            self.repulsion = Some(repulsion.with_defaults());
        }
        self
    }

    /// Physical inputs with command-line overrides applied
    pub fn physical_inputs(&self, args: &Args) -> PhysicalInputs {
        PhysicalInputs {
            beta_p: self.adsorbate.beta_p,
            eps_a: self.adsorbate.eps_a,
            eps_d: args.eps_d.unwrap_or(self.metal.eps_d),
            beta: self.metal.beta,
            fermi_energy: self.metal.fermi_energy.unwrap_or(0.0),
            hubbard_u: args.hubbard_u.or(self.hubbard_u).unwrap_or(0.0),
            eps: self.energy_grid.build(),
        }
    }

    /// Occupation mesh resolution, command line first
    pub fn grid_size(&self, args: &Args) -> usize {
        args.grid_size
            .or(self.scf_params.grid_size)
            .unwrap_or(DEFAULT_GRID_SIZE)
    }

    /// Check if the orthogonalisation penalty is requested
    pub fn is_repulsion_enabled(&self) -> bool {
        self.repulsion
            .as_ref()
            .and_then(|r| r.enabled)
            .unwrap_or(false)
    }

    pub fn repulsion_alpha(&self) -> f64 {
        self.repulsion.as_ref().and_then(|r| r.alpha).unwrap_or(0.0)
    }

    pub fn repulsion_offset(&self) -> f64 {
        self.repulsion
            .as_ref()
            .and_then(|r| r.constant_offset)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
adsorbate:
  eps_a: -5.0
  beta_p: 0.2
metal:
  beta: 2.0
  eps_d: -2.0
"#;

    #[test]
    fn test_minimal_config_gets_defaults() {
        let config: Config = serde_yml::from_str::<Config>(MINIMAL).unwrap().with_defaults();

        assert_eq!(config.hubbard_u, Some(0.0));
        assert_eq!(config.metal.fermi_energy, Some(0.0));
        assert_eq!(config.energy_grid, GridParams::default());
        assert_eq!(config.scf_params.grid_size, Some(20));
        assert!(!config.is_repulsion_enabled());

        let inputs = config.physical_inputs(&Args::default());
        assert_eq!(inputs.eps.len(), 2000);
        assert_eq!(inputs.eps_d, -2.0);
        assert_eq!(inputs.hubbard_u, 0.0);
    }

    #[test]
    fn test_full_config_and_overrides() {
        let yaml = r#"
adsorbate: { eps_a: -5.0, beta_p: 0.2 }
metal: { beta: 2.0, eps_d: -2.0, fermi_energy: 0.5 }
hubbard_u: 4.0
energy_grid: { min: -15.0, points: 500 }
scf_params: { grid_size: 10 }
repulsion: { alpha: 0.1 }
"#;
        let config: Config = serde_yml::from_str::<Config>(yaml).unwrap().with_defaults();
        assert_eq!(config.energy_grid.max, Some(20.0));
        assert!(config.is_repulsion_enabled());
        assert_eq!(config.repulsion_alpha(), 0.1);
        assert_eq!(config.repulsion_offset(), 0.0);

        let args = Args {
            hubbard_u: Some(1.5),
            grid_size: Some(12),
            ..Args::default()
        };
        let inputs = config.physical_inputs(&args);
        assert_eq!(inputs.hubbard_u, 1.5);
        assert_eq!(inputs.fermi_energy, 0.5);
        assert_eq!(inputs.eps[0], -15.0);
        assert_eq!(inputs.eps.len(), 500);
        assert_eq!(config.grid_size(&args), 12);
        assert_eq!(config.grid_size(&Args::default()), 10);
    }
}
