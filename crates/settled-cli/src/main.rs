//! `settled` CLI — estimate UK settled-status eligibility from a travel
//! history of entry/exit dates.
//!
//! ## Usage
//!
//! ```sh
//! # Record travel dates into dates.txt
//! settled record --entered 01/01/2020 --left 10/01/2020
//! settled record --entered 01/02/2020
//!
//! # Evaluate the history (prompts interactively if the file is missing)
//! settled check
//!
//! # Evaluate against a pinned reference date, machine-readable
//! settled check --today 15/01/2021 --json
//!
//! # Just the earliest application date
//! settled qualifying-date
//!
//! # Keep the records somewhere else
//! settled check -f ~/travel/uk-dates.txt
//! ```

mod prompt;
mod render;
mod store;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use settled_core::records::DATE_FORMAT;
use settled_core::{
    assemble_report, evaluate_continuity, normalize, qualifying_date, ContinuityPolicy,
    ResidenceInterval,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "settled",
    version,
    about = "UK settled-status continuous-residence estimator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dates file holding the travel records
    #[arg(short, long, global = true, default_value = "dates.txt")]
    file: PathBuf,

    /// Emit JSON on stdout instead of the text report
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the travel history against the continuous-residence rule
    Check {
        /// Reference date, dd/mm/yyyy (defaults to the current local date)
        #[arg(long)]
        today: Option<String>,
        /// Fail instead of prompting when there are no records
        #[arg(long)]
        no_input: bool,
    },
    /// Append one travel record to the dates file
    Record {
        /// Entry date, dd/mm/yyyy
        #[arg(long)]
        entered: String,
        /// Exit date, dd/mm/yyyy (omit while still resident)
        #[arg(long)]
        left: Option<String>,
    },
    /// Print the earliest settled-status application date
    QualifyingDate,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let Cli {
        command,
        file,
        json,
    } = Cli::parse();

    match command {
        Commands::Check { today, no_input } => run_check(&file, today.as_deref(), no_input, json),
        Commands::Record { entered, left } => run_record(&file, &entered, left.as_deref(), json),
        Commands::QualifyingDate => run_qualifying_date(&file, json),
    }
}

fn run_check(file: &Path, today: Option<&str>, no_input: bool, json: bool) -> Result<()> {
    let today = match today {
        Some(text) => parse_cli_date(text)?,
        None => Local::now().date_naive(),
    };

    let stored = store::load_history(file)?;
    if stored.is_none() {
        eprintln!("No '{}' file found.", file.display());
    }
    let history = match stored {
        Some(history) if !history.is_empty() => history,
        _ => {
            if no_input {
                bail!("no travel records in '{}'", file.display());
            }
            prompt::collect_history()?
        }
    };
    if history.is_empty() {
        bail!("no travel records to check");
    }

    let history = normalize(&history);
    store::save_history(file, &history)?;

    let assessment = evaluate_continuity(&history, today, &ContinuityPolicy::default())?;
    let earliest = qualifying_date(&history)?;
    let report = assemble_report(&history, today, &assessment, earliest);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::render_report(&report, render::DISCLAIMER));
    }
    Ok(())
}

fn run_record(file: &Path, entered: &str, left: Option<&str>, json: bool) -> Result<()> {
    let interval = ResidenceInterval {
        entry: parse_cli_date(entered)?,
        exit: left.map(parse_cli_date).transpose()?,
    };
    store::append_record(file, &interval)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&interval)?);
    } else {
        // Echo the lines exactly as they landed in the file.
        print!(
            "{}",
            settled_core::format_records(std::slice::from_ref(&interval))
        );
    }
    Ok(())
}

fn run_qualifying_date(file: &Path, json: bool) -> Result<()> {
    let history = store::load_history(file)?
        .ok_or_else(|| anyhow!("No '{}' file found.", file.display()))?;
    let history = normalize(&history);
    let date = qualifying_date(&history)?;

    if json {
        println!("{}", serde_json::to_string(&date)?);
    } else {
        println!("{}", date.format(DATE_FORMAT));
    }
    Ok(())
}

/// Parse a dd/mm/yyyy date given as a command-line argument.
fn parse_cli_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| anyhow!("invalid date '{}': use dd/mm/yyyy", text))
}
