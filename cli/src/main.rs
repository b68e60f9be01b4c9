use crate::config::{CliConfig, OutputFormat};
use crate::logger::initialize_logger;
use crate::report::{process_files, render_json, render_text};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

mod config;
mod error;
mod logger;
mod report;

/// Prints the raw span total, per-pile coverage total and maximum combined-pair
/// coverage of each inventory file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
  /// Inventory files, one pile of two `low-high` ranges per line.
  #[arg(required = true)]
  files: Vec<PathBuf>,

  /// TOML file with `parallel`, `format` and `log_level` keys.
  #[arg(short, long)]
  config: Option<PathBuf>,

  #[arg(short, long, value_enum)]
  format: Option<OutputFormat>,

  /// Evaluate files and aggregates on the current thread only.
  #[arg(long)]
  sequential: bool,

  #[arg(short, long)]
  log_level: Option<String>,
}

impl Args {
  fn overrides(&self) -> CliConfig {
    CliConfig {
      parallel: if self.sequential { Some(false) } else { None },
      format: self.format,
      log_level: self.log_level.clone(),
    }
  }
}

fn main() -> ExitCode {
  let args = Args::parse();

  let file_config = match args.config {
    Some(ref path) => CliConfig::load(path),
    None => Ok(CliConfig::default()),
  };
  let settings = match file_config.and_then(|config| config.merge(args.overrides()).resolve()) {
    Ok(settings) => settings,
    Err(e) => {
      eprintln!("error: {}", e);
      return ExitCode::FAILURE;
    }
  };
  initialize_logger(settings.log_level);
  info!("processing {} files with {:?}", args.files.len(), settings);

  let reports = process_files(&args.files, &settings.summary_options());
  match settings.format {
    OutputFormat::Text => print!("{}", render_text(&reports)),
    OutputFormat::Json => match render_json(&reports) {
      Ok(json) => println!("{}", json),
      Err(e) => {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
      }
    },
  }

  if reports.iter().all(|report| report.is_ok()) {
    ExitCode::SUCCESS
  } else {
    ExitCode::FAILURE
  }
}
