//! Integration tests for the chemisorption workflow
//!
//! These tests drive the example YAML file through configuration, the
//! occupation search and the orthogonalisation penalty, comparing against
//! known reference values.

use anderson_scf::app::{run_repulsion, run_solver};
use anderson_scf::config::{Args, Config};
use anderson_scf::io::write_solution;
use anderson_scf::ChemisorptionModel;
use std::fs;
use std::path::PathBuf;

#[cfg(test)]
mod integration_tests {
    use super::*;

    /// Helper function to get the path to example files
    fn example_path(filename: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("example")
            .join(filename)
    }

    fn load_example() -> Config {
        let content = fs::read_to_string(example_path("config.yaml")).unwrap();
        serde_yml::from_str::<Config>(&content)
            .unwrap()
            .with_defaults()
    }

    #[test]
    fn test_example_config_with_repulsion() {
        let config = load_example();
        let (params, solution) = run_solver(&Args::default(), &config).unwrap();

        assert_eq!(solution.n_up, 0.0);
        assert!((solution.n_down - 15.0 / 19.0).abs() < 1e-15);
        assert!((solution.energy - (-0.042332221554289146)).abs() < 1e-9);

        let model = run_repulsion(params, solution.clone(), &config).unwrap();
        assert!((model.vak - 0.2).abs() < 1e-15);
        assert_eq!(model.d_band_filling(), 0.5);

        let expected_orth = 2.0 * (solution.occupancy() + 0.5) * 0.1 * 0.04;
        let orth = model.orthogonalisation_energy().unwrap();
        assert!((orth - expected_orth).abs() < 1e-12);

        let total = model.chemisorption_energy().unwrap();
        assert!((total - (solution.energy + expected_orth - 0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_command_line_overrides_hubbard_u() {
        let config = load_example();
        let args = Args {
            hubbard_u: Some(0.0),
            ..Args::default()
        };
        let (_, solution) = run_solver(&args, &config).unwrap();

        assert_eq!((solution.n_up, solution.n_down), (1.0, 1.0));
        assert!(!solution.grid_searched());
        assert!((solution.energy - (-0.27274732976284927)).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_grid_is_reported() {
        let mut config = load_example();
        // Grid stops short of the upper band edge
        config.energy_grid.max = Some(0.5);
        assert!(run_solver(&Args::default(), &config).is_err());
    }

    #[test]
    fn test_solution_file_contents() {
        let config = load_example();
        let args = Args {
            grid_size: Some(6),
            ..Args::default()
        };
        let (_, solution) = run_solver(&args, &config).unwrap();

        let mut buffer = Vec::new();
        write_solution(&mut buffer, &solution).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["n_up"], solution.n_up);
        assert_eq!(value["n_down"], solution.n_down);
        assert!(value["energies_grid"].is_object() || value["energies_grid"].is_array());
    }
}
