use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use spacecraft_kinematics::{
    run_scenario, ConfigError, Kilograms, KilogramsPerSecond, Kilometers, KilometersPerHour,
    MetersPerSecondSquared, Scenario, ScenarioReport, Seconds,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Single-step spacecraft kinematics with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "kinematics")]
#[command(about = "One forward step of spacecraft velocity, distance and fuel", long_about = None)]
struct Args {
    /// JSON scenario file; flags below override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial velocity in km/h
    #[arg(short = 'v', long, allow_negative_numbers = true)]
    initial_velocity: Option<f64>,

    /// Constant acceleration in m/s² (negative decelerates)
    #[arg(short, long, allow_negative_numbers = true)]
    acceleration: Option<f64>,

    /// Elapsed time in seconds
    #[arg(short, long, allow_negative_numbers = true)]
    time: Option<f64>,

    /// Initial distance in km
    #[arg(short = 'd', long, allow_negative_numbers = true)]
    initial_distance: Option<f64>,

    /// Fuel on board in kg
    #[arg(short, long, allow_negative_numbers = true)]
    fuel: Option<f64>,

    /// Fuel burn rate in kg/s
    #[arg(short, long, allow_negative_numbers = true)]
    burn_rate: Option<f64>,

    /// Accept a velocity that reverses sign within the interval
    #[arg(short = 'r', long)]
    allow_reverse: bool,

    /// Reject velocity reversal even if the config file allows it
    #[arg(long, conflicts_with = "allow_reverse")]
    no_allow_reverse: bool,
}

impl Args {
    /// Base scenario (file or defaults) with command-line overrides applied.
    fn scenario(&self) -> Result<Scenario, ConfigError> {
        let mut scenario = match &self.config {
            Some(path) => Scenario::from_json_file(path)?,
            None => Scenario::default(),
        };

        if let Some(v) = self.initial_velocity {
            scenario.initial_velocity_kmh = KilometersPerHour::new(v);
        }
        if let Some(a) = self.acceleration {
            scenario.acceleration_ms2 = MetersPerSecondSquared::new(a);
        }
        if let Some(t) = self.time {
            scenario.elapsed_time_sec = Seconds::new(t);
        }
        if let Some(d) = self.initial_distance {
            scenario.initial_distance_km = Kilometers::new(d);
        }
        if let Some(f) = self.fuel {
            scenario.fuel_kg = Kilograms::new(f);
        }
        if let Some(b) = self.burn_rate {
            scenario.fuel_burn_rate_kg_s = KilogramsPerSecond::new(b);
        }
        if self.allow_reverse {
            scenario.allow_reverse = true;
        }
        if self.no_allow_reverse {
            scenario.allow_reverse = false;
        }

        Ok(scenario)
    }
}

fn init_tracing() {
    // Logs go to stderr so stdout carries only the report
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Process exit status: 0 all calculations succeeded, 1 at least one failed,
/// 2 the scenario could not be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Success = 0,
    CalculationFailed = 1,
    ConfigInvalid = 2,
}

impl Outcome {
    fn of(result: &Result<ScenarioReport, ConfigError>) -> Self {
        match result {
            Ok(report) if report.is_success() => Outcome::Success,
            Ok(_) => Outcome::CalculationFailed,
            Err(_) => Outcome::ConfigInvalid,
        }
    }

    fn code(self) -> u8 {
        self as u8
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> ExitCode {
        ExitCode::from(outcome.code())
    }
}

/// Resolve the scenario and run it.
fn run(args: &Args) -> Result<ScenarioReport, ConfigError> {
    let scenario = args.scenario()?;
    debug!(?scenario, "resolved scenario");
    Ok(run_scenario(&scenario))
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let result = run(&args);
    match &result {
        Ok(report) => println!("{report}"),
        Err(e) => eprintln!("error: {e}"),
    }
    Outcome::of(&result).into()
}
