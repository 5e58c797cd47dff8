use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use intent_registry_check::{report, validate_file, DEFAULT_CSV_FILE};
use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Validate the cluster intent registry CSV before automation consumes it.
#[derive(Parser, Debug)]
#[command(name = "registry-check")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Registry file to check
    #[arg(default_value = DEFAULT_CSV_FILE)]
    csv_file: PathBuf,

    /// Report format written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for report::Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => report::Format::Text,
            OutputFormat::Json => report::Format::Json,
        }
    }
}

fn main() -> Result<ExitCode> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    info!(file = %cli.csv_file.display(), "validating registry");

    // ─── 2) load, check header, validate rows ────────────────────────
    let outcome = validate_file(&cli.csv_file);

    // ─── 3) report ───────────────────────────────────────────────────
    if let Err(err) = &outcome {
        debug!(error = %err, "run aborted");
    }
    let rendered = report::render_outcome(&cli.csv_file, &outcome, cli.format.into())
        .context("serializing report")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered.text).context("writing report")?;

    Ok(if rendered.passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
