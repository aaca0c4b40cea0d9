use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use dotenvy::dotenv;
use tracing::{error, info};

use rescore_core::extract::{PlainTextExtractor, TextExtractor};
use rescore_core::logging::{init_tracing_subscriber, install_tracing_panic_hook};
use rescore_core::{Analyzer, ProfileStore};

#[derive(Debug, Parser)]
#[command(
    name = "rescore",
    about = "Score a resume text file against a job role or a free-form job description"
)]
struct Cli {
    /// Path to the resume as a UTF-8 text file
    resume: PathBuf,

    /// Predefined job role name from the taxonomy
    #[arg(long, env = "RS_ROLE", conflicts_with = "description")]
    role: Option<String>,

    /// Free-form job description text
    #[arg(long, env = "RS_JOB_DESCRIPTION")]
    description: Option<String>,

    /// Replacement taxonomy JSON (role name -> profile)
    #[arg(long, env = "RS_PROFILES")]
    profiles: Option<PathBuf>,

    /// Externally computed semantic-similarity score in [0, 100]
    #[arg(long)]
    similarity: Option<f64>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    dotenv().ok();
    init_tracing_subscriber("rescore");
    install_tracing_panic_hook("rescore");

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "analysis failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.role.is_none() && cli.description.is_none() {
        bail!("either --role or --description must be provided");
    }

    let store = match &cli.profiles {
        Some(path) => ProfileStore::from_path(path)
            .with_context(|| format!("loading profiles from {}", path.display()))?,
        None => ProfileStore::builtin().context("loading built-in profiles")?,
    };
    info!(roles = store.len(), "profile taxonomy loaded");

    let bytes = std::fs::read(&cli.resume)
        .with_context(|| format!("reading {}", cli.resume.display()))?;
    let resume_text = PlainTextExtractor.extract_text(&bytes)?;

    let analyzer = Analyzer::new(store);
    let report = match (&cli.role, &cli.description) {
        (Some(role), _) => analyzer.analyze_role(&resume_text, role, cli.similarity)?,
        (None, Some(description)) => {
            analyzer.analyze_description(&resume_text, description, cli.similarity)?
        }
        (None, None) => unreachable!("validated above"),
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");

    Ok(())
}
