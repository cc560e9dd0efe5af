extern crate nalgebra as na;

use crate::energy_impl::one_electron_energy;
use crate::error::{Result, ScfError};
use crate::params::ModelParameters;
use band::helper::linspace;
use na::{DMatrix, DVector};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Resolution of the occupation mesh along each spin direction.
pub const DEFAULT_GRID_SIZE: usize = 20;

/// Converged state of the spin-polarized calculation, in units of 2β.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfConsistentSolution {
    /// Occupation of the spin whose partner level is shifted by U·n_up
    pub n_up: f64,
    pub n_down: f64,
    /// Chemisorption energy relative to the isolated adsorbate and E_F
    pub energy: f64,
    pub rho_aa_up: DVector<f64>,
    pub rho_aa_down: DVector<f64>,
    /// Occupancy from the spectral function of each channel
    pub occupancy_up: f64,
    pub occupancy_down: f64,
    /// Configuration energies, rows indexed by n_up and columns by n_down.
    /// `None` when U = 0 and no search was run.
    pub energies_grid: Option<DMatrix<f64>>,
}

impl SelfConsistentSolution {
    pub fn grid_searched(&self) -> bool {
        self.energies_grid.is_some()
    }

    /// Total adsorbate density of states.
    pub fn rho_aa(&self) -> DVector<f64> {
        &self.rho_aa_up + &self.rho_aa_down
    }

    pub fn occupancy(&self) -> f64 {
        self.occupancy_up + self.occupancy_down
    }

    pub fn magnetization(&self) -> f64 {
        self.n_up - self.n_down
    }
}

#[derive(Debug, Clone)]
pub struct SelfConsistencyEngine {
    pub grid_size: usize,
}

impl Default for SelfConsistencyEngine {
    fn default() -> Self {
        SelfConsistencyEngine {
            grid_size: DEFAULT_GRID_SIZE,
        }
    }
}

impl SelfConsistencyEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grid_size(grid_size: usize) -> Self {
        SelfConsistencyEngine { grid_size }
    }

    /// Trial occupations shared by both spin directions.
    pub fn occupation_range(&self) -> Vec<f64> {
        linspace(0.0, 1.0, self.grid_size)
    }

    /// Energy of the configuration (n_up, n_down) before the Fermi reference.
    pub fn configuration_energy(
        &self,
        params: &ModelParameters,
        n_up: f64,
        n_down: f64,
    ) -> Result<f64> {
        let up = one_electron_energy(
            &params.eps,
            params.shifted_level(n_down),
            params.eps_d,
            params.beta_p,
            params.fermi_energy,
        )?;
        let down = one_electron_energy(
            &params.eps,
            params.shifted_level(n_up),
            params.eps_d,
            params.beta_p,
            params.fermi_energy,
        )?;

        let mut energy = up.energy + down.energy;
        energy -= params.hubbard_u * n_up * n_down;
        energy -= params.eps_a;
        Ok(energy)
    }

    /// Evaluate every cell of the occupation mesh. Cells are independent and
    /// computed in parallel.
    pub fn energies_grid(&self, params: &ModelParameters) -> Result<DMatrix<f64>> {
        let range = self.occupation_range();
        let n = range.len();

        let cells: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .collect();

        let values: Vec<f64> = cells
            .par_iter()
            .map(|&(i, j)| self.configuration_energy(params, range[i], range[j]))
            .collect::<Result<Vec<f64>>>()?;

        let mut grid = DMatrix::zeros(n, n);
        for (&(i, j), value) in cells.iter().zip(values) {
            grid[(i, j)] = value;
        }
        Ok(grid)
    }

    pub fn solve(&self, params: &ModelParameters) -> Result<SelfConsistentSolution> {
        if self.grid_size < 2 {
            return Err(ScfError::validation(format!(
                "occupation grid needs at least two points, got {}",
                self.grid_size
            )));
        }

        let (n_up, n_down, energies_grid) = if params.hubbard_u == 0.0 {
            info!("U = 0: no self-consistent search needed, both spins fully occupied");
            (1.0, 1.0, None)
        } else {
            info!(
                "Searching {}x{} occupation mesh for the self-consistent point",
                self.grid_size, self.grid_size
            );
            let grid = self.energies_grid(params)?;
            let (index_nup, index_ndown) = select_minimax(&grid);
            let range = self.occupation_range();
            (range[index_nup], range[index_ndown], Some(grid))
        };

        let up = one_electron_energy(
            &params.eps,
            params.shifted_level(n_down),
            params.eps_d,
            params.beta_p,
            params.fermi_energy,
        )?;
        let down = one_electron_energy(
            &params.eps,
            params.shifted_level(n_up),
            params.eps_d,
            params.beta_p,
            params.fermi_energy,
        )?;

        let mut energy = up.energy + down.energy;
        energy -= params.hubbard_u * n_up * n_down;
        energy -= params.eps_a;
        energy += params.fermi_energy;

        info!("--------------------------");
        info!("n_up expectation value   : {} e", n_up);
        info!("n_down expectation value : {} e", n_down);
        info!("Self-consistency energy  : {:.8} (2beta)", energy);

        Ok(SelfConsistentSolution {
            n_up,
            n_down,
            energy,
            rho_aa_up: up.profile.rho_aa,
            rho_aa_down: down.profile.rho_aa,
            occupancy_up: up.occupancy,
            occupancy_down: down.occupancy,
            energies_grid,
        })
    }
}

/// First index of the largest value.
fn argmax<'a>(values: impl Iterator<Item = &'a f64>) -> (usize, f64) {
    let mut best = (0, f64::NEG_INFINITY);
    for (i, &v) in values.enumerate() {
        if i == 0 || v > best.1 {
            best = (i, v);
        }
    }
    best
}

/// Pick (n_up index, n_down index): maximize over n_up within each column,
/// then take the column whose maximum is lowest. Columns are scanned in
/// order and a later column replaces the stored one when its maximum is
/// `<=` the running lowest, so ties go to the last such column.
pub(crate) fn select_minimax(grid: &DMatrix<f64>) -> (usize, usize) {
    let mut lowest_energy: Option<f64> = None;
    let mut index_nup_overall = 0;
    let mut index_ndown_overall = 0;

    for j in 0..grid.ncols() {
        let (index_nup, maximum_energy) = argmax(grid.column(j).iter());
        debug!(
            "n_down column {}: maximum {:.8} at n_up index {}",
            j, maximum_energy, index_nup
        );

        match lowest_energy {
            None => {
                lowest_energy = Some(maximum_energy);
                index_nup_overall = index_nup;
                index_ndown_overall = j;
            }
            Some(current) => {
                // The index update compares against the already updated
                // lowest value.
                let updated = if maximum_energy <= current {
                    maximum_energy
                } else {
                    current
                };
                if maximum_energy <= updated {
                    index_nup_overall = index_nup;
                    index_ndown_overall = j;
                }
                lowest_energy = Some(updated);
            }
        }
    }

    (index_nup_overall, index_ndown_overall)
}
