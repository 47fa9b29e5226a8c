use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use nodelint_config::LoadError;

mod report;

use report::JsonReport;

/// Exit status when the document fails structural validation.
const EXIT_INVALID: u8 = 1;
/// Exit status when the document could not be read.
const EXIT_UNREADABLE: u8 = 3;
/// Exit status when the document is not well-formed JSON.
const EXIT_MALFORMED: u8 = 4;

/// Nodelint - checks that a workflow document is well-formed before import
#[derive(Parser)]
#[command(name = "nodelint")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Path to the workflow file (JSON)
  #[arg(default_value = "workflow.json")]
  workflow_file: PathBuf,

  /// Output format
  #[arg(long, value_enum, default_value_t = Format::Text)]
  format: Format,

  /// Only print the final verdict
  #[arg(short, long)]
  quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
  Text,
  Json,
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  match run(&cli) {
    Ok(code) => code,
    Err(err) => {
      eprintln!("error: {err:#}");
      ExitCode::FAILURE
    }
  }
}

fn run(cli: &Cli) -> Result<ExitCode> {
  let text = cli.format == Format::Text;

  if text && !cli.quiet {
    println!("Validating workflow: {}", cli.workflow_file.display());
  }

  let doc = match nodelint_config::load(&cli.workflow_file) {
    Ok(doc) => doc,
    Err(err) => {
      let code = if err.is_unreadable() {
        EXIT_UNREADABLE
      } else {
        EXIT_MALFORMED
      };
      if text {
        println!("{}", load_failure_text(&err));
      } else {
        print_json(&JsonReport::load_failure(&err))?;
      }
      return Ok(ExitCode::from(code));
    }
  };

  match nodelint_workflow::validate(&doc) {
    Ok(summary) => {
      if text {
        if !cli.quiet {
          print!("{}", report::summary_text(&summary));
        }
        println!("Workflow is valid and ready for import");
      } else {
        print_json(&JsonReport::Valid { summary: &summary })?;
      }
      Ok(ExitCode::SUCCESS)
    }
    Err(err) => {
      if text {
        println!("Validation failed: {err}");
      } else {
        print_json(&JsonReport::invalid(&err))?;
      }
      Ok(ExitCode::from(EXIT_INVALID))
    }
  }
}

fn load_failure_text(err: &LoadError) -> String {
  match err {
    LoadError::MalformedInput { .. } => format!("Validation failed: {err}"),
    LoadError::NotFound { .. } | LoadError::Read { .. } => err.to_string(),
  }
}

fn print_json(report: &JsonReport<'_>) -> Result<()> {
  let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
  println!("{json}");
  Ok(())
}
