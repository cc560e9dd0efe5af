use crate::error::BandError;
use crate::helper::nearest_index;
use serde::{Deserialize, Serialize};

/// Half-width of the semi-elliptical band in units of 2β.
pub const HALF_WIDTH: f64 = 1.0;

/// Band edges of a semi-elliptical d-band centred at `center`, together with
/// the indices of the grid points nearest to each edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandGeometry {
    pub center: f64,
    pub half_width: f64,
    pub lower_edge: f64,
    pub upper_edge: f64,
    pub lower_edge_index: usize,
    pub upper_edge_index: usize,
}

impl BandGeometry {
    pub fn new(eps: &[f64], eps_d: f64) -> Result<Self, BandError> {
        let lower_edge = eps_d - HALF_WIDTH;
        let upper_edge = eps_d + HALF_WIDTH;
        let lower_edge_index = nearest_index(eps, lower_edge)
            .ok_or_else(|| BandError::validation("energy grid is empty"))?;
        let upper_edge_index = nearest_index(eps, upper_edge)
            .ok_or_else(|| BandError::validation("energy grid is empty"))?;

        Ok(BandGeometry {
            center: eps_d,
            half_width: HALF_WIDTH,
            lower_edge,
            upper_edge,
            lower_edge_index,
            upper_edge_index,
        })
    }

    /// Energy relative to the band center, in half-widths.
    #[inline]
    pub fn reduced(&self, energy: f64) -> f64 {
        (energy - self.center) / self.half_width
    }
}
