use approx::{assert_abs_diff_eq, assert_relative_eq};
use meistat::{MeistatError, Reduced};
use ndarray::{array, Array1, Array2};

fn scalar(result: Reduced) -> f64 {
    result.scalar().expect("expected a scalar result")
}

/// Deterministic sample data: a small linear congruential sequence mapped to [-50, 50)
fn sample_matrix(rows: usize, cols: usize, seed: u64) -> Array2<f64> {
    let mut state = seed;
    Array2::from_shape_fn((rows, cols), |_| {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((state >> 33) % 10_000) as f64 / 100.0 - 50.0
    })
}

fn samples() -> Vec<Array2<f64>> {
    vec![
        sample_matrix(1, 1, 1),
        sample_matrix(5, 3, 7),
        sample_matrix(12, 4, 42),
        sample_matrix(30, 2, 1234),
    ]
}

#[test]
fn test_mean_between_min_and_max() {
    for data in samples() {
        let low = scalar(meistat::min(&data, None).unwrap());
        let high = scalar(meistat::max(&data, None).unwrap());
        let center = scalar(meistat::mean(&data, None).unwrap());
        assert!(low <= center && center <= high);

        for axis in 0..2 {
            let lows = meistat::min(&data, Some(axis)).unwrap().into_array();
            let highs = meistat::max(&data, Some(axis)).unwrap().into_array();
            let centers = meistat::mean(&data, Some(axis)).unwrap().into_array();
            for ((l, c), h) in lows.iter().zip(centers.iter()).zip(highs.iter()) {
                assert!(l <= c && c <= h);
            }
        }
    }
}

#[test]
fn test_sum_is_axis_consistent() {
    for data in samples() {
        let total = scalar(meistat::sum(&data, None).unwrap());
        for axis in 0..2 {
            let partial = meistat::sum(&data, Some(axis)).unwrap().into_array();
            let regrouped = scalar(meistat::sum(&partial, None).unwrap());
            assert_relative_eq!(total, regrouped, epsilon = 1e-9, max_relative = 1e-12);
        }
    }
}

#[test]
fn test_zscore_is_idempotent() {
    for data in samples().into_iter().filter(|d| d.len() > 1) {
        let once = meistat::zscore(&data, None).unwrap();
        let twice = meistat::zscore(&once, None).unwrap();
        assert_abs_diff_eq!(scalar(meistat::mean(&twice, None).unwrap()), 0.0, epsilon = 1e-9);
        assert_relative_eq!(scalar(meistat::std_dev(&twice, 0, None).unwrap()), 1.0, epsilon = 1e-9);

        let by_column = meistat::zscore(&data, Some(0)).unwrap();
        assert_eq!(by_column.shape(), data.shape());
        for value in meistat::mean(&by_column, Some(0)).unwrap().into_array() {
            assert_abs_diff_eq!(value, 0.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_quantile_endpoints_match_extremes() {
    for data in samples() {
        assert_eq!(
            scalar(meistat::quantile(&data, 0.0, None).unwrap()),
            scalar(meistat::min(&data, None).unwrap())
        );
        assert_eq!(
            scalar(meistat::quantile(&data, 1.0, None).unwrap()),
            scalar(meistat::max(&data, None).unwrap())
        );
        assert_eq!(
            meistat::quantile(&data, 1.0, Some(1)).unwrap(),
            meistat::max(&data, Some(1)).unwrap()
        );
    }
}

#[test]
fn test_matrices_are_symmetric() {
    for data in samples().into_iter().filter(|d| d.nrows() > 1) {
        let corr = meistat::correlation_matrix(&data).unwrap();
        assert_eq!(corr, corr.t());
        for value in corr.diag() {
            assert_relative_eq!(*value, 1.0, epsilon = 1e-12);
        }

        for ddof in 0..2 {
            let cov = meistat::covariance_matrix(&data, ddof).unwrap();
            assert_eq!(cov, cov.t());
            let variances = meistat::dispersion(&data, ddof, Some(0)).unwrap().into_array();
            for (diagonal, variance) in cov.diag().iter().zip(variances.iter()) {
                assert_relative_eq!(*diagonal, *variance, max_relative = 1e-12);
            }
        }
    }
}

#[test]
fn test_covariance_matrix_matches_pairwise_covariance() {
    let data = sample_matrix(10, 3, 99);
    let cov = meistat::covariance_matrix(&data, 1).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            let pair = meistat::covariance(&data.column(i), &data.column(j), 1).unwrap();
            assert_eq!(cov[[i, j]], pair);
        }
    }
}

#[test]
fn test_dispersion_fails_when_ddof_equals_n() {
    for data in samples() {
        let n = data.len();
        assert!(matches!(
            meistat::dispersion(&data, n, None),
            Err(MeistatError::InvalidDdof { .. })
        ));
        let rows = data.nrows();
        assert!(meistat::dispersion(&data, rows, Some(0)).is_err());
    }
}

#[test]
fn test_reference_scenarios() {
    // Primitive reductions
    let x = array![3.0, 1.0, 4.0, 1.0, 5.0];
    assert_eq!(scalar(meistat::min(&x, None).unwrap()), 1.0);
    assert_eq!(scalar(meistat::max(&x, None).unwrap()), 5.0);
    assert_eq!(scalar(meistat::sum(&x, None).unwrap()), 14.0);
    assert_eq!(scalar(meistat::mean(&x, None).unwrap()), 2.8);

    // Dispersion
    let x = array![1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(scalar(meistat::dispersion(&x, 0, None).unwrap()), 2.0);
    assert_eq!(scalar(meistat::dispersion(&x, 1, None).unwrap()), 2.5);
    assert_eq!(scalar(meistat::std_dev(&x, 0, None).unwrap()), 2.0_f64.sqrt());

    // Median
    assert_eq!(scalar(meistat::median(&array![1.0, 2.0, 3.0, 4.0], None).unwrap()), 2.5);
    assert_eq!(scalar(meistat::median(&array![1.0, 2.0, 3.0], None).unwrap()), 2.0);

    // Quantiles
    for (q, expected) in [(0.0, 1.0), (0.25, 2.0), (0.5, 3.0), (0.75, 4.0), (1.0, 5.0)] {
        assert_eq!(scalar(meistat::quantile(&x, q, None).unwrap()), expected);
    }

    // Pairwise
    let y = array![2.0, 4.0, 6.0, 8.0, 10.0];
    let y_neg = array![10.0, 8.0, 6.0, 4.0, 2.0];
    assert_eq!(meistat::covariance(&x, &y, 0).unwrap(), 4.0);
    assert_relative_eq!(meistat::pearson(&x, &y).unwrap(), 1.0, epsilon = 1e-10);
    assert_relative_eq!(meistat::spearman(&x, &y).unwrap(), 1.0, epsilon = 1e-10);
    assert_relative_eq!(meistat::kendall(&x, &y).unwrap(), 1.0, epsilon = 1e-10);
    assert_relative_eq!(meistat::pearson(&x, &y_neg).unwrap(), -1.0, epsilon = 1e-10);
    assert_relative_eq!(meistat::spearman(&x, &y_neg).unwrap(), -1.0, epsilon = 1e-10);

    // Alternative means
    assert_relative_eq!(
        scalar(meistat::geometric_mean(&array![2.0, 8.0], None).unwrap()),
        4.0,
        epsilon = 1e-10
    );
    assert_abs_diff_eq!(
        scalar(meistat::harmonic_mean(&array![1.0, 2.0, 4.0], None).unwrap()),
        1.714285714,
        epsilon = 1e-9
    );
}

#[test]
fn test_axis_functionality() {
    let matrix = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];

    assert_eq!(
        meistat::mean(&matrix, Some(0)).unwrap(),
        Reduced::Array(array![2.5, 3.5, 4.5].into_dyn())
    );
    assert_eq!(
        meistat::dispersion(&matrix, 0, Some(0)).unwrap(),
        Reduced::Array(array![2.25, 2.25, 2.25].into_dyn())
    );
    assert_eq!(
        meistat::mean(&matrix, Some(1)).unwrap(),
        Reduced::Array(array![2.0, 5.0].into_dyn())
    );
    assert_eq!(meistat::mean(&matrix, None).unwrap(), Reduced::Scalar(3.5));
}

#[test]
fn test_integer_data_through_to_float() {
    let counts: Array1<i32> = array![1, 2, 2, 3];
    let data = meistat::to_float(&counts);
    assert_eq!(meistat::mode(&data).unwrap(), 2.0);
    assert_eq!(scalar(meistat::sum(&data, None).unwrap()), 8.0);
}
