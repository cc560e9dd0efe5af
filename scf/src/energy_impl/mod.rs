//! One-electron energy of a single spin channel
//!
//! For an adsorbate level ε_σ coupled to a semi-elliptical band the one-electron
//! energy change is obtained from the phase of the pole function
//!
//! ΔE_1σ = (1/π) ∫ atan2(−Δ(ε), ε − ε_σ − Λ(ε)) dε + discrete corrections
//!
//! integrated from the lower band edge up to min(upper edge, E_F). Inside the
//! band both Δ and Λ are closed forms, so the argument reduces to
//! atan2(−2V²√(1−x²), x(2V²−1) + Δε). Localized states split off the band
//! contribute their pole energies directly; which terms appear depends on
//! whether the bonding and/or antibonding pole is occupied.
//!
//! # Usage
//!
//! ```rust,ignore
//! use anderson_scf::energy_impl::one_electron_energy;
//!
//! let spin = one_electron_energy(&params.eps, eps_sigma, params.eps_d,
//!                                params.beta_p, params.fermi_energy)?;
//! println!("{} ({:?})", spin.energy, spin.case);
//! ```

mod energy;

pub use energy::{one_electron_energy, LocalizedCase, SpinChannelEnergy};
