//! executable part of this library. pick a range in the GUI, or pass it on the command line
//! and print the weekend dates it contains

use chrono::{Datelike, NaiveDate};
use clap::Parser;
use std::{error::Error, fmt::Write as _, fs::File, io::Write};
use tracing::{info, warn};
use weekday_picker::{
    DatePicker, PickerEvent, RangeResult,
    calendar::{VisibleMonth, WEEKDAY_NAMES},
    config::{Config, ConfigError, load_config},
    csv::result_to_csv,
    gui,
    presets::{Clock, FixedClock, PredefinedRangeResolver, SystemClock},
};

/// Weekday Picker - pick a date range and list the weekend dates inside it
///
/// By default, this application runs in GUI mode. Use the --cli flag to run in command-line mode.
#[derive(Parser, Debug)]
#[command(version, about = "Weekday Picker - pick a date range and list the weekend dates inside it", long_about = None)]
struct Args {
    /// file with predefined ranges and selectable years
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// run in CLI mode (no GUI)
    #[arg(short = 'C', long)]
    cli: bool,

    /// first date to click (YYYY-MM-DD)
    #[arg(short, long)]
    start: Option<NaiveDate>,

    /// second date to click (YYYY-MM-DD)
    #[arg(short, long, requires = "start")]
    end: Option<NaiveDate>,

    /// label of a predefined range to apply instead of clicking
    #[arg(short, long, conflicts_with_all = ["start", "end"])]
    preset: Option<String>,

    /// use this date as today (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// filename of csv to write the result to
    #[arg(short, long)]
    out: Option<String>,

    /// print the calendar grid of this month (1-12)
    #[arg(long, requires = "year", value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,

    /// year of the printed calendar grid
    #[arg(long, requires = "month")]
    year: Option<i32>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = read_config(&args.config)?;

    if args.cli {
        // Run in CLI mode
        info!("running in CLI mode");
        let output = run_cli(&args, config)?;
        print!("{output}");
    } else {
        // Run in GUI mode (default)
        info!("starting GUI mode");
        gui::run(config)?;
    }

    Ok(())
}

/// load the config, a missing file falls back to the built-in ranges
fn read_config(path: &str) -> Result<Config, ConfigError> {
    match load_config(path) {
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path, "config not found, using default ranges");
            Ok(Config::default())
        }
        other => other,
    }
}

/// drive a picker from the arguments and render everything to print
fn run_cli(args: &Args, config: Config) -> Result<String, Box<dyn Error>> {
    let clock: Box<dyn Clock> = match args.today {
        Some(today) => Box::new(FixedClock(today)),
        None => Box::new(SystemClock),
    };
    let mut picker = DatePicker::at_today(PredefinedRangeResolver::new(config.ranges, clock));
    let mut output = String::new();

    if let (Some(month), Some(year)) = (args.month, args.year) {
        let visible = VisibleMonth::new(month as i32 - 1, year)
            .ok_or_else(|| format!("year {year} can not be shown"))?;
        output.push_str(&format_grid(&visible));
    }

    let result = if let Some(label) = &args.preset {
        let index = picker.presets().position(label).ok_or_else(|| {
            format!(
                "unknown predefined range {label:?}, available: {}",
                picker.presets().labels().join(", ")
            )
        })?;
        picker.handle(PickerEvent::ApplyPredefinedRange(index))
    } else {
        let mut result = None;
        for date in [args.start, args.end].into_iter().flatten() {
            result = picker.handle(PickerEvent::ClickDate(date)).or(result);
        }
        result
    };

    match result {
        Some(result) => {
            writeln!(output, "{}", serde_json::to_string(&result)?)?;
            if let Some(out) = &args.out {
                store_csv(&result, out)?;
                info!(out, "stored weekends");
            }
        }
        None if args.preset.is_some() || args.start.is_some() => {
            warn!(selection = ?picker.selection(), "no complete range, weekend endpoints are ignored");
        }
        None => {}
    }

    Ok(output)
}

/// the month as text, days of adjacent months in parentheses
fn format_grid(visible: &VisibleMonth) -> String {
    let mut text = format!("{visible}\n");
    for name in WEEKDAY_NAMES {
        text.push_str(&format!("{name:>5}"));
    }
    text.push('\n');

    for week in visible.grid().chunks(7) {
        for date in week {
            let day = if visible.contains(date) {
                date.day().to_string()
            } else {
                format!("({})", date.day())
            };
            text.push_str(&format!("{day:>5}"));
        }
        text.push('\n');
    }

    text
}

fn store_csv(result: &RangeResult, filename: &str) -> Result<(), Box<dyn Error>> {
    let mut file = File::create(filename)?;
    file.write_all(result_to_csv(result)?.as_bytes())?;
    Ok(())
}
