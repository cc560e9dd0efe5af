use itertools::Itertools;

/// `n` evenly spaced samples over `[start, stop]`, both ends included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + i as f64 * step })
                .collect()
        }
    }
}

/// Trapezoidal rule over samples `y` taken at abscissae `x`.
///
/// Fewer than two samples integrate to zero.
pub fn trapezoid(y: &[f64], x: &[f64]) -> f64 {
    debug_assert_eq!(y.len(), x.len());
    x.iter()
        .zip(y.iter())
        .tuple_windows()
        .map(|((x0, y0), (x1, y1))| 0.5 * (x1 - x0) * (y0 + y1))
        .sum()
}

/// Index of the grid point closest to `value`; the first one wins on ties.
pub fn nearest_index(grid: &[f64], value: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &g) in grid.iter().enumerate() {
        let distance = (g - value).abs();
        match best {
            Some((_, d)) if distance >= d => {}
            _ => best = Some((i, distance)),
        }
    }
    best.map(|(i, _)| i)
}

/// Non-finite values (square roots of negative arguments, divisions by zero)
/// are defined as zero in this model.
#[inline]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let grid = linspace(0.0, 1.0, 20);
        assert_eq!(grid.len(), 20);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[19], 1.0);
        assert!(grid.windows(2).all(|w| w[1] > w[0]));
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
        assert!(linspace(2.0, 3.0, 0).is_empty());
    }

    #[test]
    fn test_trapezoid_linear_is_exact() {
        let x = linspace(-1.0, 2.0, 31);
        let y: Vec<f64> = x.iter().map(|v| 3.0 * v + 1.0).collect();
        // ∫(3x+1) from -1 to 2 = 7.5
        assert!((trapezoid(&y, &x) - 7.5).abs() < 1e-12);
        assert_eq!(trapezoid(&[1.0], &[0.0]), 0.0);
        assert_eq!(trapezoid(&[], &[]), 0.0);
    }

    #[test]
    fn test_nearest_index_prefers_first_on_ties() {
        let grid = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(nearest_index(&grid, 1.5), Some(1));
        assert_eq!(nearest_index(&grid, 2.9), Some(3));
        assert_eq!(nearest_index(&grid, -10.0), Some(0));
        assert_eq!(nearest_index(&[], 0.0), None);
    }

    #[test]
    fn test_finite_or_zero() {
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(-2.5), -2.5);
    }
}
