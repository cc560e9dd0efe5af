//! Spectral building blocks of the Newns-Anderson model for a semi-elliptical
//! d-band.
//!
//! Every energy handled by this crate is expressed in units of 2β (twice the
//! metal-metal coupling), so the band half-width is exactly 1.

pub mod error;
pub mod geometry;
pub mod helper;
pub mod roots;
pub mod spectral;

#[cfg(test)]
mod roots_test;

pub use error::BandError;
pub use geometry::{BandGeometry, HALF_WIDTH};
pub use roots::{find_roots, LocalizedState, RootState};
pub use spectral::{evaluate, SpectralProfile};
