mod errors;
mod schema;
mod validation;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::errors::AppError;
use crate::schema::resume::Resume;
use crate::validation::{validate_resume, Violation};

/// Validate a resume document against the JSON Resume schema.
///
/// Exits 0 when the document is valid, 1 when it has violations, and with
/// an error message when the file cannot be read or decoded.
#[derive(Parser, Debug)]
#[command(name = "validator", version, about)]
struct Cli {
    /// Path to the resume JSON file.
    file: PathBuf,

    /// Emit violations as a JSON array instead of one per line.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let violations = run(&cli)?;

    if violations.is_empty() {
        info!("{} is valid", cli.file.display());
        return Ok(ExitCode::SUCCESS);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&violations)?);
    } else {
        for violation in &violations {
            println!("{violation}");
        }
    }
    Ok(ExitCode::FAILURE)
}

fn run(cli: &Cli) -> Result<Vec<Violation>, AppError> {
    let raw = std::fs::read_to_string(&cli.file).map_err(|source| AppError::Read {
        path: cli.file.clone(),
        source,
    })?;
    // Decode is all-or-nothing: a malformed date anywhere surfaces here,
    // before any validation runs.
    let resume: Resume = serde_json::from_str(&raw)?;
    Ok(validate_resume(&resume, Utc::now().date_naive()))
}
