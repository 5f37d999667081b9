use std::io::{ self, Write };
use std::process;

use tracing::{ error, info, warn };
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use knapsack::benchmark;
use knapsack::config::{ Config, Source };
use knapsack::generator::Generator;
use knapsack::problem::Problem;
use knapsack::report::Report;

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load(config: &Config) -> Result<Problem, Box<dyn std::error::Error>> {
    let mut problem = match &config.source {
        Source::File(path) => {
            info!(path = %path.display(), "reading catalog");
            Problem::read(path)?
        },
        Source::Generated { generator, seed } => {
            let seed = seed.unwrap_or_else(Generator::random_seed);
            info!(seed, items = generator.item_count, "generating catalog");
            generator.generate(seed)
        }
    };

    if let Some(capacity) = config.capacity {
        problem.capacity = capacity;
    }

    Ok(problem)
}

fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let problem = load(&config)?;
    let comparison = benchmark::compare(&problem)?;

    for run in &[&comparison.exhaustive, &comparison.greedy] {
        if let Err(e) = run.solution.verify(&problem) {
            warn!(solver = run.solver, error = %e, "solution failed verification");
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if config.json {
        serde_json::to_writer_pretty(&mut out, &comparison)?;
        writeln!(out)?;
    } else {
        Report::new(config.locale, config.color).comparison(&mut out, &problem, &comparison)?;
    }

    Ok(())
}

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(knapsack::ConfigError::Clap(e)) => e.exit(),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    init_logging(config.verbose);

    if let Err(e) = run(config) {
        error!(error = %e, "knapsack comparison failed");
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
