use std::path::PathBuf;

use clap::{Parser, Subcommand};
use l10n_template::generate::{self, DEFAULT_INPUT, DEFAULT_OUTPUT, GenerateOptions};
use l10n_template::{Result, ToolError};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    let outcome = init_logging().and_then(|()| run(cli));
    match outcome {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    }
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

/// Returns whether the process should exit successfully.
fn run(cli: Cli) -> Result<bool> {
    match cli.command.unwrap_or_default() {
        Command::Generate(args) => {
            generate::generate(&GenerateOptions::new(args.input, args.output))?;
            Ok(true)
        }
        Command::Audit(args) => {
            let report = generate::audit(&args.input)?;
            for line in report.lines() {
                println!("{line}");
            }
            Ok(report.is_clean() || !args.strict)
        }
    }
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Build a CSV translation template from a string catalog."
)]
struct Cli {
    /// Defaults to `generate` with the default paths.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write the translation template.
    Generate(GenerateArgs),
    /// Report unused strings, bad links and duplicated texts.
    Audit(AuditArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Generate(GenerateArgs {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        })
    }
}

#[derive(clap::Args)]
struct GenerateArgs {
    /// Catalog file with `strings` and `links`.
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Template file to create or overwrite.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

#[derive(clap::Args)]
struct AuditArgs {
    /// Catalog file with `strings` and `links`.
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Exit with a failure status when any problem is found.
    #[arg(long)]
    strict: bool,
}
