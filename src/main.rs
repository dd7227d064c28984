//! route-cleaner - drop GPS fixes that imply implausible travel
//!
//! Usage:
//!   route-cleaner [OPTIONS] <FILE.csv>
//!
//! Each input row is `latitude,longitude,epoch_seconds` with no header. The
//! cleaned route is printed to stdout, or written as CSV with `--logfile`.

use clap::Parser;
use log::{error, info};
use route_cleaner::{
    clean_route, export_data, import_data, logs,
    outlier_filter::{DEFAULT_MAX_ACCELERATION, DEFAULT_MAX_DECELERATION, DEFAULT_MAX_SPEED_MPH},
    CleaningConfig,
};
use simplelog::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "route-cleaner")]
#[command(about = "Discard GPS points that need implausible speed or acceleration to reach", long_about = None)]
struct Cli {
    /// CSV file of `latitude,longitude,epoch_seconds` rows
    file: String,

    /// Maximum journey speed in mph
    #[arg(short = 's', long = "max-speed", value_name = "MPH", default_value_t = DEFAULT_MAX_SPEED_MPH)]
    max_speed: f64,

    /// Maximum acceleration in mph per second
    #[arg(short = 'a', long = "max-acc", value_name = "VALUE", default_value_t = DEFAULT_MAX_ACCELERATION, allow_hyphen_values = true)]
    max_acceleration: f64,

    /// Maximum deceleration in mph per second (a negative number)
    #[arg(short = 'd', long = "max-dec", value_name = "VALUE", default_value_t = DEFAULT_MAX_DECELERATION, allow_hyphen_values = true)]
    max_deceleration: f64,

    /// Write the cleaned route to FILE (`.csv` is appended if missing)
    #[arg(short = 'l', long = "logfile", value_name = "FILE")]
    logfile: Option<String>,

    /// Also keep a rotating log under DIR
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = CleaningConfig::default()
        .with_max_speed(cli.max_speed)
        .with_max_acceleration(cli.max_acceleration)
        .with_max_deceleration(cli.max_deceleration);

    info!("Reading file {}...", cli.file);
    let route = import_data::load_csv(&cli.file)?;
    let cleaned = clean_route(&route, &config)?;

    match &cli.logfile {
        Some(logfile) => {
            let path = export_data::route_to_csv_file(&cleaned.points, logfile)?;
            println!("Successfully created {path}");
        }
        None => println!("{}", export_data::route_to_pretty_json(&cleaned.points)?),
    }
    eprintln!("{}", cleaned.report);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = logs::init(level, cli.log_dir.as_deref()) {
        eprintln!("Failed to initialise logging: {e:?}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:?}");
            ExitCode::FAILURE
        }
    }
}
