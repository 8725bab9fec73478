//! Command-line front end for `taylor-rs`.
//!
//! ```text
//! taylor approx exp 1.0
//! taylor approx binom 0.5 --center 0.5 --json
//! taylor sweep --order 5 --output sweep.csv
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use taylor_rs::prelude::*;
use taylor_rs::{
    SweepConfig, DEFAULT_CENTER, DEFAULT_MAX_TERMS, DEFAULT_ORDER, DEFAULT_STEP, DEFAULT_TOLERANCE,
    DEFAULT_X_BOUNDS, DEFAULT_Y_BOUNDS,
};

/// Truncated Taylor series approximations
#[derive(Parser)]
#[command(name = "taylor")]
#[command(about = "Approximate exp, cos, (1+x)^a and ln(x) with truncated Taylor series", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the number of terms needed to reach the tolerance at one point
    Approx {
        /// Function to expand (exp, cos, binom, ln)
        function: SeriesFunction,

        /// Evaluation point
        #[arg(allow_negative_numbers = true)]
        x: f64,

        /// Binomial exponent / logarithm expansion center
        #[arg(short = 'a', long, default_value_t = DEFAULT_CENTER, allow_negative_numbers = true)]
        center: f64,

        /// Absolute error tolerance
        #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
        tolerance: f64,

        /// Maximum number of terms to try
        #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_TERMS)]
        max_terms: usize,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sample the fixed-order approximations over a range of x
    Sweep {
        /// Number of terms in every series
        #[arg(short, long, default_value_t = DEFAULT_ORDER)]
        order: usize,

        /// Binomial exponent / logarithm expansion center
        #[arg(short = 'a', long, default_value_t = DEFAULT_CENTER, allow_negative_numbers = true)]
        center: f64,

        /// Lower end of the x range (inclusive)
        #[arg(long, default_value_t = DEFAULT_X_BOUNDS.0, allow_negative_numbers = true)]
        x_low: f64,

        /// Upper end of the x range (exclusive)
        #[arg(long, default_value_t = DEFAULT_X_BOUNDS.1, allow_negative_numbers = true)]
        x_high: f64,

        /// Spacing between samples
        #[arg(long, default_value_t = DEFAULT_STEP)]
        step: f64,

        /// Lower display bound for y
        #[arg(long, default_value_t = DEFAULT_Y_BOUNDS.0, allow_negative_numbers = true)]
        y_low: f64,

        /// Upper display bound for y
        #[arg(long, default_value_t = DEFAULT_Y_BOUNDS.1, allow_negative_numbers = true)]
        y_high: f64,

        /// Comma-separated functions to sample (default: all)
        #[arg(short, long, value_delimiter = ',')]
        functions: Vec<SeriesFunction>,

        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Write JSON instead of CSV
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(io::stderr)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("taylor started with verbosity level: {}", cli.verbose);

    let result = match cli.command {
        Commands::Approx {
            function,
            x,
            center,
            tolerance,
            max_terms,
            json,
        } => run_approx(function, x, center, tolerance, max_terms, json),
        Commands::Sweep {
            order,
            center,
            x_low,
            x_high,
            step,
            y_low,
            y_high,
            functions,
            output,
            json,
        } => {
            let config = SweepConfig {
                x_low,
                x_high,
                step,
                order,
                center,
                y_low,
                y_high,
            };
            run_sweep(config, &functions, output, json)
        }
    };

    if let Err(e) = result {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run_approx(
    function: SeriesFunction,
    x: f64,
    center: f64,
    tolerance: f64,
    max_terms: usize,
    json: bool,
) -> Result<()> {
    let model = Taylor::new()
        .tolerance(tolerance)
        .max_terms(max_terms)
        .center(center)
        .build()
        .context("invalid approximation settings")?;

    let result = model
        .approximate(x, function)
        .with_context(|| format!("cannot approximate {} at x={}", function, x))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &result)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", result)?;
    }
    Ok(())
}

fn run_sweep(
    config: SweepConfig<f64>,
    functions: &[SeriesFunction],
    output: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let model = Taylor::new()
        .order(config.order)
        .center(config.center)
        .x_range(config.x_low, config.x_high)
        .y_range(config.y_low, config.y_high)
        .step(config.step)
        .build()
        .context("invalid sweep settings")?;

    let sweep = if functions.is_empty() {
        model.sweep()?
    } else {
        model.sweep_functions(functions)?
    };

    info!("{}", sweep.title());
    info!(
        "x bounds [{}, {}), y bounds [{}, {}], {} samples",
        sweep.x_bounds.0,
        sweep.x_bounds.1,
        sweep.y_bounds.0,
        sweep.y_bounds.1,
        sweep.x.len()
    );
    for entry in sweep.legend() {
        debug!("legend: {}", entry);
    }
    for series in &sweep.series {
        match series.max_error() {
            Some(err) => info!("{:>8}: max |error| = {:.6}", series.function.label(), err),
            None => info!("{:>8}: undefined on the whole range", series.function.label()),
        }
    }

    let mut out: Box<dyn Write> = match &output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    if json {
        serde_json::to_writer_pretty(&mut out, &sweep)?;
        writeln!(out)?;
    } else {
        write_csv(&mut out, &sweep)?;
    }
    out.flush()?;

    if let Some(path) = output {
        info!("Results exported to {}", path.display());
    }
    Ok(())
}

/// Write `x,<fn>_approx,<fn>_actual,...` rows; undefined samples are `NaN`.
fn write_csv(out: &mut dyn Write, sweep: &SweepResult<f64>) -> io::Result<()> {
    write!(out, "x")?;
    for series in &sweep.series {
        write!(out, ",{0}_approx,{0}_actual", series.function)?;
    }
    writeln!(out)?;

    for (i, x) in sweep.x.iter().enumerate() {
        write!(out, "{:.6}", x)?;
        for series in &sweep.series {
            write!(out, ",{:.6},{:.6}", series.approx[i], series.actual[i])?;
        }
        writeln!(out)?;
    }
    Ok(())
}
