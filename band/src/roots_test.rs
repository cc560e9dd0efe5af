#[cfg(test)]
mod tests {
    use crate::geometry::BandGeometry;
    use crate::helper::{linspace, trapezoid};
    use crate::roots::{find_roots, has_complex_root};
    use crate::spectral::evaluate;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn geometry(eps_d: f64) -> BandGeometry {
        BandGeometry::new(&linspace(-4.0, 4.0, 801), eps_d).unwrap()
    }

    #[test]
    fn test_discriminant_boundary_is_real() {
        // 4V² + Δε² == 1 exactly with V = 0, Δε = 1
        assert!(!has_complex_root(1.0, 0.0));
        let state = find_roots(1.0, 0.0, &geometry(0.0), 0.0);
        assert!(!state.has_complex_root);
        assert_eq!(state.root_positive, 1.0);
        assert_eq!(state.root_negative, 1.0);

        // Just inside the boundary the pair is complex
        assert!(has_complex_root(0.5, 0.0));
        let state = find_roots(0.5, 0.0, &geometry(0.0), 0.0);
        assert!(state.has_complex_root);
        assert!(state.positive.is_none() && state.negative.is_none());
    }

    #[test]
    fn test_complex_branch_never_localized() {
        let g = geometry(0.0);
        for &eps_sigma in &[-0.5, -0.1, 0.0, 0.3, 0.6] {
            let state = find_roots(eps_sigma, 0.2, &g, 10.0);
            assert!(state.has_complex_root);
            assert!(!state.positive_occupied());
            assert!(!state.negative_occupied());
            assert_eq!(state.localized_occupation(), 0.0);
            assert!(state.root_positive.is_finite());
        }
    }

    #[test]
    fn test_deep_level_gives_occupied_bound_state() {
        let g = geometry(0.0);
        let state = find_roots(-2.0, 0.2, &g, 0.0);

        assert!(!state.has_complex_root);
        let bound = state.positive.expect("positive root should be localized");
        assert!(bound.occupied);
        assert!(bound.energy < g.lower_edge);
        assert!(bound.occupation > 0.0 && bound.occupation <= 1.0);
        assert!(state.negative.is_none());
        assert_eq!(state.occupation_negative(), 0.0);
    }

    #[test]
    fn test_high_level_gives_empty_antibonding_state() {
        let g = geometry(0.0);
        let state = find_roots(2.0, 0.2, &g, 0.0);

        let antibonding = state.negative.expect("negative root should be localized");
        assert!(antibonding.energy > g.upper_edge);
        assert!(!antibonding.occupied);
        assert_eq!(antibonding.occupation, 0.0);
        assert!(state.positive.is_none());

        // Raising the Fermi level above the pole fills it
        let state = find_roots(2.0, 0.2, &g, 3.0);
        assert!(state.negative_occupied());
        let n = state.occupation_negative();
        assert!(n > 0.0 && n <= 1.0);
    }

    #[test]
    fn test_pole_occupations_stay_in_unit_interval() {
        let g = geometry(0.0);
        for &beta_p in &[0.05, 0.2, 0.35, 0.5, 0.7] {
            for &eps_sigma in &[-6.0, -3.0, -1.5, 1.5, 3.0, 6.0] {
                let state = find_roots(eps_sigma, beta_p, &g, 100.0);
                for n in [state.occupation_positive(), state.occupation_negative()] {
                    assert!(
                        (0.0..=1.0).contains(&n),
                        "occupation {} outside [0, 1] for V={}, eps={}",
                        n,
                        beta_p,
                        eps_sigma
                    );
                }
            }
        }
    }

    #[test]
    fn test_singular_coupling_uses_closed_form() {
        let g = geometry(0.0);
        let eps_sigma: f64 = -2.0;
        let state = find_roots(eps_sigma, 0.5, &g, 0.0);
        let expected = (1.0 + 4.0 * eps_sigma.powi(2)) / (4.0 * eps_sigma);

        assert!(!state.has_complex_root);
        assert_eq!(state.root_positive, expected);
        assert_eq!(state.root_negative, expected);
        let bound = state.positive.expect("bound state below the band");
        assert!(bound.occupied);
        let de2 = eps_sigma.powi(2);
        assert!((bound.occupation - (4.0 * de2 - 1.0) / (4.0 * de2)).abs() < 1e-15);
    }

    #[test]
    fn test_roots_follow_band_center() {
        let shifted = find_roots(-1.5, 0.2, &geometry(0.5), 0.0);
        let centred = find_roots(-2.0, 0.2, &geometry(0.0), 0.0);
        assert!((shifted.root_positive - 0.5 - centred.root_positive).abs() < 1e-12);
        assert!((shifted.root_negative - 0.5 - centred.root_negative).abs() < 1e-12);
    }

    #[test]
    fn test_band_and_pole_weight_sum_to_one() {
        let eps = linspace(-3.0, 3.0, 600);
        let g = BandGeometry::new(&eps, 0.0).unwrap();
        let profile = evaluate(&eps, 0.2, 0.0, -2.0).unwrap();
        let state = find_roots(-2.0, 0.2, &g, 0.0);

        let band_weight = trapezoid(profile.rho_aa.as_slice(), &eps);
        let total = band_weight + state.localized_occupation();
        assert!((total - 1.0).abs() < 1e-3, "total weight {}", total);
    }

    #[test]
    fn test_root_classification_is_traced() {
        let sink = Capture::default();
        let writer = sink.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            find_roots(-3.0, 0.2, &geometry(0.0), 0.0);
            find_roots(0.0, 0.2, &geometry(0.0), 0.0);
            evaluate(&linspace(-4.0, 4.0, 801), 0.2, 0.0, 0.0).unwrap();
        });

        let log = String::from_utf8(sink.0.lock().unwrap().clone()).unwrap();
        assert!(log.contains("real roots"), "{}", log);
        assert!(log.contains("complex pair"), "{}", log);
        assert!(log.contains("spectral profile on 801 points"), "{}", log);
    }
}
