//! Randomized line-search trials.
//!
//! Each trial draws integers `c` and `k` in `[-100, 100)`, minimizes
//! `k + (x - c)²` with the selected line-search method, and checks the result
//! against the known minimum `(c, k)`.

use clap::{Parser, ValueEnum};
use minima_core::Point;
use minima_solvers::line;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "minima-demo")]
#[command(about = "Checks line-search results against randomly shifted quadratics")]
struct Args {
    /// Number of random trials
    #[arg(long, default_value_t = 10_000)]
    trials: usize,

    /// Line-search method
    #[arg(long, value_enum, default_value_t = MethodArg::GoldenSection)]
    method: MethodArg,

    /// Line-search precision
    #[arg(long, default_value_t = 1e-7)]
    precision: f64,

    /// Largest accepted distance from the known minimum
    #[arg(long, default_value_t = 1e-6)]
    tolerance: f64,

    /// Seed for reproducible trials (drawn from entropy if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Tracing filter, e.g. `info` or `minima_solvers=debug`
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MethodArg {
    Dichotomy,
    GoldenSection,
    Fibonacci,
}

impl From<MethodArg> for line::Method {
    fn from(method: MethodArg) -> Self {
        match method {
            MethodArg::Dichotomy => Self::Dichotomy,
            MethodArg::GoldenSection => Self::GoldenSection,
            MethodArg::Fibonacci => Self::Fibonacci,
        }
    }
}

/// Totals across all trials.
#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    failures: usize,
    evals: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let config = line::Config {
        precision: args.precision,
        method: args.method.into(),
    };

    info!(trials = args.trials, method = ?args.method, "starting trials");
    let summary = run_trials(&mut rng, args.trials, &config, args.tolerance)?;
    info!(
        failures = summary.failures,
        evals = summary.evals,
        "trials finished"
    );

    println!(
        "{} of {} trials missed the minimum by more than {}; {} evaluations in total",
        summary.failures, args.trials, args.tolerance, summary.evals
    );
    Ok(())
}

fn run_trials<R: Rng>(
    rng: &mut R,
    trials: usize,
    config: &line::Config,
    tolerance: f64,
) -> Result<Summary, minima_solvers::Error> {
    let mut summary = Summary::default();

    for trial in 0..trials {
        let c = f64::from(rng.gen_range(-100_i32..100));
        let k = f64::from(rng.gen_range(-100_i32..100));

        let solution = line::minimize_unobserved(|x| k + (x - c) * (x - c), config)?;
        summary.evals += solution.evals;

        let miss = (solution.point() - Point::new(c, k)).norm();
        if miss > tolerance {
            summary.failures += 1;
            warn!(
                trial,
                c,
                k,
                x = solution.x,
                objective = solution.objective,
                miss,
                "result outside tolerance"
            );
        }
    }

    Ok(summary)
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_target(true)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let args = Args::try_parse_from(["minima-demo"]).unwrap();

        assert_eq!(args.trials, 10_000);
        assert_eq!(args.method, MethodArg::GoldenSection);
        assert_eq!(args.seed, None);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn method_names_are_kebab_case() {
        let args = Args::try_parse_from(["minima-demo", "--method", "fibonacci", "--seed", "3"])
            .unwrap();
        assert_eq!(args.method, MethodArg::Fibonacci);
        assert_eq!(args.seed, Some(3));

        let args = Args::try_parse_from(["minima-demo", "--method", "golden-section"]).unwrap();
        assert_eq!(line::Method::from(args.method), line::Method::GoldenSection);
    }

    #[test]
    fn seeded_trials_all_pass() {
        for method in [
            MethodArg::Dichotomy,
            MethodArg::GoldenSection,
            MethodArg::Fibonacci,
        ] {
            let config = line::Config {
                precision: 1e-7,
                method: method.into(),
            };
            let mut rng = StdRng::seed_from_u64(11);
            let summary = run_trials(&mut rng, 50, &config, 1e-5).unwrap();

            assert_eq!(summary.failures, 0, "{method:?}");
            assert!(summary.evals > 0);
        }
    }

    #[test]
    fn invalid_precision_is_reported() {
        let config = line::Config {
            precision: 1e-12,
            method: line::Method::Dichotomy,
        };
        let mut rng = StdRng::seed_from_u64(0);

        assert!(run_trials(&mut rng, 1, &config, 1e-6).is_err());
    }
}
