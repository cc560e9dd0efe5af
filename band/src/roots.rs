//! Poles of the adsorbate Green's function.
//!
//! The pole equation ε − ε_σ − Λ(ε) = 0 has either two real roots or a
//! complex-conjugate pair. Only real roots that fall outside the band can be
//! localized states; the complex pair never is.

use crate::geometry::BandGeometry;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Coupling at which 1 − 4V² vanishes and the root formulas degenerate.
pub const SINGULAR_COUPLING: f64 = 0.5;

/// A root that lies outside the band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalizedState {
    pub energy: f64,
    /// Below the Fermi level
    pub occupied: bool,
    /// Weight of the pole; zero unless occupied
    pub occupation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RootState {
    pub has_complex_root: bool,
    /// Real part of the "+" root, referenced to the same zero as the grid
    pub root_positive: f64,
    /// Real part of the "−" root, referenced to the same zero as the grid
    pub root_negative: f64,
    pub positive: Option<LocalizedState>,
    pub negative: Option<LocalizedState>,
}

impl RootState {
    pub fn positive_occupied(&self) -> bool {
        self.positive.map_or(false, |s| s.occupied)
    }

    pub fn negative_occupied(&self) -> bool {
        self.negative.map_or(false, |s| s.occupied)
    }

    pub fn occupation_positive(&self) -> f64 {
        self.positive.map_or(0.0, |s| s.occupation)
    }

    pub fn occupation_negative(&self) -> f64 {
        self.negative.map_or(0.0, |s| s.occupation)
    }

    /// Electrons held by occupied localized states.
    pub fn localized_occupation(&self) -> f64 {
        self.occupation_positive() + self.occupation_negative()
    }
}

/// 4V² + Δε² < 1 gives a complex-conjugate pair; equality stays real.
#[inline]
pub fn has_complex_root(eps_sigma_wrt_d: f64, v2: f64) -> bool {
    4.0 * v2 + eps_sigma_wrt_d * eps_sigma_wrt_d < 1.0
}

fn real_roots(eps_sigma_wrt_d: f64, beta_p: f64) -> (f64, f64) {
    let v2 = beta_p * beta_p;
    if beta_p != SINGULAR_COUPLING {
        let base = (1.0 - 2.0 * v2) * eps_sigma_wrt_d;
        let spread = 2.0 * v2 * (4.0 * v2 + eps_sigma_wrt_d * eps_sigma_wrt_d - 1.0).sqrt();
        let denominator = 1.0 - 4.0 * v2;
        ((base + spread) / denominator, (base - spread) / denominator)
    } else {
        let root = (1.0 + 4.0 * eps_sigma_wrt_d * eps_sigma_wrt_d) / (4.0 * eps_sigma_wrt_d);
        (root, root)
    }
}

// The imaginary part is dropped: only the real energy of the pole is tracked.
fn complex_roots(eps_sigma: f64, beta_p: f64) -> (f64, f64) {
    let v2 = beta_p * beta_p;
    let base = Complex64::new((1.0 - 2.0 * v2) * eps_sigma, 0.0);
    let radicand = Complex64::new(1.0 - 4.0 * v2 - eps_sigma * eps_sigma, 0.0).sqrt();
    let shift = Complex64::i() * 2.0 * v2 * radicand;
    let denominator = 1.0 - 4.0 * v2;
    (
        ((base + shift) / denominator).re,
        ((base - shift) / denominator).re,
    )
}

fn pole_occupation(eps_sigma_wrt_d: f64, beta_p: f64, sign: f64) -> f64 {
    let v2 = beta_p * beta_p;
    if beta_p != SINGULAR_COUPLING {
        let slope = 2.0 * v2 * eps_sigma_wrt_d
            * (4.0 * v2 + eps_sigma_wrt_d * eps_sigma_wrt_d - 1.0).powf(-0.5);
        ((1.0 - 2.0 * v2) + sign * slope) / (1.0 - 4.0 * v2)
    } else {
        let de2 = eps_sigma_wrt_d * eps_sigma_wrt_d;
        (4.0 * de2 - 1.0) / (4.0 * de2)
    }
}

/// Locate the poles for level `eps_sigma` and classify them against the band
/// edges of `geometry` and the Fermi level.
pub fn find_roots(
    eps_sigma: f64,
    beta_p: f64,
    geometry: &BandGeometry,
    fermi_energy: f64,
) -> RootState {
    let v2 = beta_p * beta_p;
    let eps_sigma_wrt_d = eps_sigma - geometry.center;

    if has_complex_root(eps_sigma_wrt_d, v2) {
        let (root_positive, root_negative) = complex_roots(eps_sigma, beta_p);
        debug!(
            "eps_sigma = {:.6}: complex pair, real parts {:.6} / {:.6}",
            eps_sigma, root_positive, root_negative
        );
        return RootState {
            has_complex_root: true,
            root_positive: root_positive + geometry.center,
            root_negative: root_negative + geometry.center,
            positive: None,
            negative: None,
        };
    }

    let (root_positive, root_negative) = real_roots(eps_sigma_wrt_d, beta_p);
    let root_positive = root_positive + geometry.center;
    let root_negative = root_negative + geometry.center;

    let classify = |energy: f64, sign: f64| {
        let occupied = energy < fermi_energy;
        LocalizedState {
            energy,
            occupied,
            occupation: if occupied {
                pole_occupation(eps_sigma_wrt_d, beta_p, sign)
            } else {
                0.0
            },
        }
    };

    let positive = (root_positive < geometry.lower_edge && eps_sigma_wrt_d < 2.0 * v2 - 1.0)
        .then(|| classify(root_positive, 1.0));
    let negative = (root_negative > geometry.upper_edge && eps_sigma_wrt_d > 1.0 - 2.0 * v2)
        .then(|| classify(root_negative, -1.0));

    debug!(
        "eps_sigma = {:.6}: real roots {:.6} / {:.6}, localized below {:?}, above {:?}",
        eps_sigma, root_positive, root_negative, positive, negative
    );

    RootState {
        has_complex_root: false,
        root_positive,
        root_negative,
        positive,
        negative,
    }
}
