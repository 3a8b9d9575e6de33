use super::*;

use approx::assert_relative_eq;
use rand::{SeedableRng, rngs::StdRng};

/// `sin(x) + sin(10x / 3)` has several local minima on `[2.7, 7.5]`.
fn multimodal(x: f64) -> f64 {
    x.sin() + (10.0 * x / 3.0).sin()
}

const MULTIMODAL_INTERVAL: [f64; 2] = [2.7, 7.5];
const MULTIMODAL_LIPSCHITZ: f64 = 5.0;
const MULTIMODAL_MIN_X: f64 = 5.145_735;
const MULTIMODAL_MIN: f64 = -1.899_599_349;

fn config(method: Method, placement: Placement, precision: f64) -> Config {
    Config {
        lipschitz: MULTIMODAL_LIPSCHITZ,
        precision,
        method,
        placement,
        ..Config::default()
    }
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn every_method_finds_multimodal_minimum() {
    let precision = 1e-3;
    let configs = [
        config(Method::Uniform, Placement::default(), precision),
        config(Method::Sequential, Placement::default(), precision),
        config(Method::PiecewiseLinear, Placement::Random, precision),
        config(Method::PiecewiseLinear, Placement::Midpoint, precision),
        config(Method::PiecewiseLinear, Placement::EnvelopeMinimum, precision),
    ];

    for config in configs {
        let solution =
            minimize_unobserved(multimodal, MULTIMODAL_INTERVAL, &config, &mut rng()).unwrap();

        assert_eq!(solution.status, Status::Converged, "{config:?}");
        assert!(solution.objective - MULTIMODAL_MIN < precision, "{config:?}");
        assert!(solution.objective >= MULTIMODAL_MIN - 1e-9);
        assert_relative_eq!(solution.x, MULTIMODAL_MIN_X, epsilon = 1e-2);
    }
}

#[test]
fn sequential_needs_fewer_samples_than_uniform() {
    let uniform = minimize_unobserved(
        multimodal,
        MULTIMODAL_INTERVAL,
        &config(Method::Uniform, Placement::default(), 1e-3),
        &mut rng(),
    )
    .unwrap();
    let sequential = minimize_unobserved(
        multimodal,
        MULTIMODAL_INTERVAL,
        &config(Method::Sequential, Placement::default(), 1e-3),
        &mut rng(),
    )
    .unwrap();

    assert!(sequential.evals < uniform.evals);
}

#[test]
fn piecewise_linear_is_cheapest() {
    let sequential = minimize_unobserved(
        multimodal,
        MULTIMODAL_INTERVAL,
        &config(Method::Sequential, Placement::default(), 1e-4),
        &mut rng(),
    )
    .unwrap();
    let piecewise = minimize_unobserved(
        multimodal,
        MULTIMODAL_INTERVAL,
        &config(Method::PiecewiseLinear, Placement::EnvelopeMinimum, 1e-4),
        &mut rng(),
    )
    .unwrap();

    assert!(piecewise.evals < sequential.evals);
}

#[test]
fn seeded_random_placement_is_reproducible() {
    let config = config(Method::PiecewiseLinear, Placement::Random, 1e-5);

    let first =
        minimize_unobserved(multimodal, MULTIMODAL_INTERVAL, &config, &mut rng()).unwrap();
    let second =
        minimize_unobserved(multimodal, MULTIMODAL_INTERVAL, &config, &mut rng()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn quadratic_with_loose_constant() {
    let f = |x: f64| (x - 1.0).powi(2);
    let base = Config {
        lipschitz: 14.0,
        precision: 1e-4,
        ..Config::default()
    };

    for placement in [Placement::Midpoint, Placement::EnvelopeMinimum] {
        let config = Config { placement, ..base };
        let solution = minimize_unobserved(f, [-3.0, 4.0], &config, &mut rng()).unwrap();

        assert_eq!(solution.status, Status::Converged);
        assert!(solution.objective < 1e-4);
        assert_relative_eq!(solution.x, 1.0, epsilon = 1e-2);
    }
}

#[test]
fn envelope_minimum_lands_on_kink() {
    let config = Config {
        placement: Placement::EnvelopeMinimum,
        ..Config::default()
    };
    let solution =
        minimize_unobserved(|x: f64| (x - 0.3).abs(), [-1.0, 1.0], &config, &mut rng()).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.evals, 3);
    assert_relative_eq!(solution.x, 0.3, epsilon = 1e-12);
    assert_relative_eq!(solution.objective, 0.0, epsilon = 1e-12);
}

#[test]
fn monotone_function_converges_on_endpoints() {
    for placement in [
        Placement::Random,
        Placement::Midpoint,
        Placement::EnvelopeMinimum,
    ] {
        let config = Config {
            placement,
            ..Config::default()
        };
        let solution = minimize_unobserved(|x: f64| x, [0.0, 1.0], &config, &mut rng()).unwrap();

        assert_eq!(solution.evals, 2);
        assert_relative_eq!(solution.x, 0.0);
        assert_relative_eq!(solution.objective, 0.0);
    }
}

#[test]
fn reversed_interval_is_swapped() {
    let config = Config {
        placement: Placement::Midpoint,
        ..Config::default()
    };
    let solution = minimize_unobserved(|x: f64| x, [1.0, 0.0], &config, &mut rng()).unwrap();

    assert_relative_eq!(solution.x, 0.0);
}

#[test]
fn zero_width_interval_evaluates_once() {
    for method in [Method::Uniform, Method::Sequential, Method::PiecewiseLinear] {
        let config = Config {
            method,
            ..Config::default()
        };
        let solution = minimize_unobserved(|x: f64| x * x, [2.0, 2.0], &config, &mut rng()).unwrap();

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.evals, 1);
        assert_relative_eq!(solution.x, 2.0);
        assert_relative_eq!(solution.objective, 4.0);
    }
}

#[test]
fn support_cap_stops_search() {
    let config = Config {
        max_support_points: 3,
        ..config(Method::PiecewiseLinear, Placement::Midpoint, 1e-7)
    };
    let solution =
        minimize_unobserved(multimodal, MULTIMODAL_INTERVAL, &config, &mut rng()).unwrap();

    assert_eq!(solution.status, Status::SupportLimit);
    assert_eq!(solution.evals, 3);
    assert_relative_eq!(solution.x, 5.1, epsilon = 1e-12);
}

#[test]
fn invalid_inputs_are_rejected_before_evaluating() {
    let mut calls = 0;
    let mut f = |x: f64| {
        calls += 1;
        x
    };

    let fine = Config {
        precision: 9e-11,
        ..Config::default()
    };
    assert!(matches!(
        minimize_unobserved(&mut f, [0.0, 1.0], &fine, &mut rng()),
        Err(Error::InvalidPrecision { .. })
    ));

    let flat = Config {
        lipschitz: 0.0,
        ..Config::default()
    };
    assert!(matches!(
        minimize_unobserved(&mut f, [0.0, 1.0], &flat, &mut rng()),
        Err(Error::InvalidParameter {
            name: "lipschitz",
            ..
        })
    ));

    for interval in [[f64::NAN, 1.0], [0.0, f64::INFINITY]] {
        assert!(matches!(
            minimize_unobserved(&mut f, interval, &Config::default(), &mut rng()),
            Err(Error::InvalidParameter {
                name: "interval",
                ..
            })
        ));
    }

    assert_eq!(calls, 0);
}

#[test]
fn observer_can_stop_early() {
    for method in [Method::Uniform, Method::Sequential, Method::PiecewiseLinear] {
        let solution = minimize(
            multimodal,
            MULTIMODAL_INTERVAL,
            &config(method, Placement::Midpoint, 1e-3),
            &mut rng(),
            |event: &Event| (event.evals == 4).then_some(Action::StopEarly),
        )
        .unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.evals, 4);
    }
}

#[test]
fn lower_bound_is_reported_only_by_envelope() {
    let mut bounds = Vec::new();
    minimize(
        multimodal,
        MULTIMODAL_INTERVAL,
        &config(Method::PiecewiseLinear, Placement::EnvelopeMinimum, 1e-3),
        &mut rng(),
        |event: &Event| -> Option<Action> {
            bounds.push((event.lower_bound, event.best.objective));
            None
        },
    )
    .unwrap();

    assert_eq!(bounds[0].0, None);
    for (lower, best) in &bounds[1..] {
        let lower = lower.expect("envelope exists after two supports");
        assert!(lower <= *best);
    }

    let mut sampled = Vec::new();
    minimize(
        multimodal,
        MULTIMODAL_INTERVAL,
        &config(Method::Sequential, Placement::default(), 1e-2),
        &mut rng(),
        |event: &Event| -> Option<Action> {
            sampled.push(event.lower_bound);
            None
        },
    )
    .unwrap();

    assert!(sampled.iter().all(Option::is_none));
}
