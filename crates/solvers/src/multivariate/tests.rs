use super::*;

use approx::assert_relative_eq;

/// `k + Σ (xᵢ - cᵢ)²` and its gradient.
fn separable(center: &[f64], k: f64) -> (impl Fn(&Vector) -> f64, impl Fn(&Vector) -> Vector) {
    let c = Vector::try_from(center).unwrap();
    let c_grad = c.clone();
    let f = move |x: &Vector| k + (x - &c).norm_squared();
    let gradient = move |x: &Vector| 2.0 * (x - &c_grad);
    (f, gradient)
}

const CENTERS: [&[f64]; 5] = [
    &[3.0],
    &[1.0, -2.0],
    &[4.0, -3.0],
    &[0.5, -1.5, 2.0],
    &[1.0, 2.0, -3.0],
];

fn assert_at(solution: &Solution, center: &[f64], k: f64) {
    assert_eq!(solution.x.dim(), center.len());
    for (x, c) in solution.x.iter().zip(center) {
        assert_relative_eq!(*x, *c, epsilon = 1e-6);
    }
    assert_relative_eq!(solution.objective, k, epsilon = 1e-7);
}

#[test]
fn gradient_methods_find_separable_minimum() {
    for method in [GradientMethod::FastDescent, GradientMethod::StepDivision] {
        let config = GradientConfig {
            method,
            ..GradientConfig::default()
        };
        for center in CENTERS {
            for k in [-3.0, 0.0, 5.0] {
                let (f, gradient) = separable(center, k);
                let solution =
                    minimize_with_gradient_unobserved(f, gradient, center.len(), None, &config)
                        .unwrap();

                assert_eq!(solution.status, Status::Converged, "{method:?} {center:?}");
                assert_at(&solution, center, k);
            }
        }
    }
}

#[test]
fn coordinate_descent_finds_separable_minimum() {
    for center in CENTERS {
        for k in [-3.0, 0.0, 5.0] {
            let (f, _) = separable(center, k);
            let solution =
                minimize_unobserved(f, center.len(), None, &DirectConfig::default()).unwrap();

            assert_eq!(solution.status, Status::Converged, "{center:?}");
            assert_at(&solution, center, k);
        }
    }
}

#[test]
fn sum_of_squares_with_gradient() {
    let f = |x: &Vector| x[0] * x[0] + x[1] * x[1];
    let gradient = |x: &Vector| 2.0 * x;

    for method in [GradientMethod::FastDescent, GradientMethod::StepDivision] {
        let config = GradientConfig {
            method,
            ..GradientConfig::default()
        };

        // The origin is already stationary.
        let solution = minimize_with_gradient_unobserved(f, gradient, 2, None, &config).unwrap();
        assert_eq!(solution.iters, 0);
        assert_at(&solution, &[0.0, 0.0], 0.0);

        let start = Vector::try_from(vec![3.0, -4.0]).unwrap();
        let solution =
            minimize_with_gradient_unobserved(f, gradient, 2, Some(&start), &config).unwrap();
        assert_at(&solution, &[0.0, 0.0], 0.0);
    }
}

#[test]
fn shifted_bowl_without_gradient() {
    let f = |x: &Vector| 2.0 + (x[0] - 1.0).powi(2) + (x[1] + 1.0).powi(2);

    let solution = minimize_unobserved(f, 2, None, &DirectConfig::default()).unwrap();

    assert_relative_eq!(solution.x[0], 1.0, epsilon = 1e-7);
    assert_relative_eq!(solution.x[1], -1.0, epsilon = 1e-7);
    assert_relative_eq!(solution.objective, 2.0, epsilon = 1e-7);
}

#[test]
fn anisotropic_bowl() {
    let f = |x: &Vector| (x[0] - 1.0).powi(2) + 10.0 * (x[1] + 2.0).powi(2);
    let gradient =
        |x: &Vector| Vector::try_from(vec![2.0 * (x[0] - 1.0), 20.0 * (x[1] + 2.0)]).unwrap();
    let expected = [1.0, -2.0];

    let fast = fast_descent(f, gradient, &Vector::zeros(2).unwrap(), 1e-7, ()).unwrap();
    assert_at(&fast, &expected, 0.0);

    let division =
        step_division(f, gradient, &Vector::zeros(2).unwrap(), 1e-7, 0.5, ()).unwrap();
    assert_at(&division, &expected, 0.0);

    let coordinate = coordinate_descent(f, &Vector::zeros(2).unwrap(), 1e-7, 0.5, ()).unwrap();
    assert_at(&coordinate, &expected, 0.0);
}

#[test]
fn invalid_lambda_is_rejected() {
    let start = Vector::zeros(2).unwrap();
    let f = |x: &Vector| x.norm_squared();
    let gradient = |x: &Vector| 2.0 * x;

    for lambda in [0.0, 1.0, -0.5, 1.5] {
        assert!(matches!(
            step_division(f, gradient, &start, 1e-7, lambda, ()),
            Err(Error::InvalidParameter { name: "lambda", .. })
        ));
        assert!(matches!(
            coordinate_descent(f, &start, 1e-7, lambda, ()),
            Err(Error::InvalidParameter { name: "lambda", .. })
        ));

        let gradient_config = GradientConfig {
            method: GradientMethod::StepDivision,
            lambda,
            ..GradientConfig::default()
        };
        assert!(matches!(
            minimize_with_gradient_unobserved(f, gradient, 2, None, &gradient_config),
            Err(Error::InvalidParameter { name: "lambda", .. })
        ));

        let direct_config = DirectConfig {
            lambda,
            ..DirectConfig::default()
        };
        assert!(matches!(
            minimize_unobserved(f, 2, None, &direct_config),
            Err(Error::InvalidParameter { name: "lambda", .. })
        ));
    }
}

#[test]
fn fine_precision_is_rejected_before_evaluating() {
    let mut calls = 0;
    let mut f = |x: &Vector| {
        calls += 1;
        x.norm_squared()
    };
    let gradient = |x: &Vector| 2.0 * x;
    let start = Vector::zeros(1).unwrap();
    let fine = 9e-11;

    for method in [GradientMethod::FastDescent, GradientMethod::StepDivision] {
        let config = GradientConfig {
            precision: fine,
            method,
            ..GradientConfig::default()
        };
        assert!(matches!(
            minimize_with_gradient_unobserved(&mut f, gradient, 1, None, &config),
            Err(Error::InvalidPrecision { .. })
        ));
    }
    let config = DirectConfig {
        precision: fine,
        ..DirectConfig::default()
    };
    assert!(matches!(
        minimize_unobserved(&mut f, 1, None, &config),
        Err(Error::InvalidPrecision { .. })
    ));
    assert!(matches!(
        fast_descent(&mut f, gradient, &start, fine, ()),
        Err(Error::InvalidPrecision { .. })
    ));
    assert!(matches!(
        step_division(&mut f, gradient, &start, fine, 0.5, ()),
        Err(Error::InvalidPrecision { .. })
    ));
    assert!(matches!(
        coordinate_descent(&mut f, &start, fine, 0.5, ()),
        Err(Error::InvalidPrecision { .. })
    ));

    assert_eq!(calls, 0);
}

#[test]
fn start_dimension_must_match() {
    let f = |x: &Vector| x.norm_squared();
    let start = Vector::zeros(3).unwrap();

    assert_eq!(
        minimize_unobserved(f, 2, Some(&start), &DirectConfig::default()),
        Err(Error::DimensionMismatch {
            expected: 2,
            actual: 3
        })
    );
    let gradient = |x: &Vector| 2.0 * x;

    assert!(matches!(
        minimize_with_gradient_unobserved(
            f,
            gradient,
            2,
            Some(&start),
            &GradientConfig::default()
        ),
        Err(Error::DimensionMismatch { .. })
    ));
}

#[test]
fn zero_dimensions_are_rejected() {
    assert!(matches!(
        minimize_unobserved(|x: &Vector| x.norm_squared(), 0, None, &DirectConfig::default()),
        Err(Error::InvalidParameter { name: "dims", .. })
    ));
}

#[test]
fn gradient_of_wrong_dimension_is_an_error() {
    let f = |x: &Vector| x.norm_squared();
    let gradient = |_: &Vector| Vector::filled(3, 1.0).unwrap();

    for method in [GradientMethod::FastDescent, GradientMethod::StepDivision] {
        let config = GradientConfig {
            method,
            ..GradientConfig::default()
        };
        assert_eq!(
            minimize_with_gradient_unobserved(f, gradient, 2, None, &config),
            Err(Error::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        );
    }
}

#[test]
fn step_division_stalls_when_no_step_decreases() {
    // Sufficient decrease needs h <= 5e-13 here, below the precision / 2 floor.
    let f = |x: &Vector| 1e12 * x.norm_squared();
    let gradient = |x: &Vector| 2e12 * x;
    let start = Vector::try_from(vec![1.0]).unwrap();

    let solution = step_division(f, gradient, &start, 1e-7, 0.5, ()).unwrap();

    assert_eq!(solution.status, Status::Stalled);
    assert_eq!(solution.iters, 1);
    assert_eq!(solution.x, start);
    assert_relative_eq!(solution.objective, 1e12);

    let config = GradientConfig {
        method: GradientMethod::StepDivision,
        ..GradientConfig::default()
    };
    let solution =
        minimize_with_gradient_unobserved(f, gradient, 1, Some(&start), &config).unwrap();
    assert_eq!(solution.status, Status::Stalled);
}

#[test]
fn observer_can_stop_early() {
    let (f, gradient) = separable(&[1.0, -2.0], 0.0);
    let start = Vector::try_from(vec![40.0, 25.0]).unwrap();

    let mut displacements = Vec::new();
    let solution = step_division(&f, &gradient, &start, 1e-7, 0.5, |event: &Event<'_>| {
        displacements.push(event.displacement);
        assert!(event.gradient_norm.is_some());
        (event.iter == 2).then_some(Action::StopEarly)
    })
    .unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
    assert_eq!(displacements.len(), 2);

    let solution = coordinate_descent(&f, &start, 1e-7, 0.5, |event: &Event<'_>| {
        assert!(event.gradient_norm.is_none());
        assert_eq!(event.x.dim(), 2);
        Some(Action::StopEarly)
    })
    .unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 1);
}

#[test]
fn evaluations_include_line_searches() {
    let (f, gradient) = separable(&[1.0, -2.0], 0.0);
    let mut calls = 0;
    let counted = |x: &Vector| {
        calls += 1;
        f(x)
    };

    let solution = minimize_with_gradient_unobserved(
        counted,
        &gradient,
        2,
        None,
        &GradientConfig::default(),
    )
    .unwrap();

    assert_eq!(solution.evals, calls);
    assert!(solution.evals > solution.iters);
}
