use crate::error::CliError;
use clap::ValueEnum;
use log::LevelFilter;
use pile_coverage::SummaryOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Eq, PartialEq, Copy, Clone, Debug, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  Text,
  Json,
}

/// Optional settings, read from a TOML file or from command-line flags.
#[derive(Eq, PartialEq, Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
  pub parallel: Option<bool>,
  pub format: Option<OutputFormat>,
  pub log_level: Option<String>,
}

impl CliConfig {
  pub fn load(path: &Path) -> Result<CliConfig, CliError> {
    let contents = fs::read_to_string(path).map_err(|source| CliError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    toml::from_str(&contents).map_err(|source| CliError::Config {
      path: path.to_path_buf(),
      source,
    })
  }

  pub fn merge(self, overrides: CliConfig) -> CliConfig {
    CliConfig {
      parallel: overrides.parallel.or(self.parallel),
      format: overrides.format.or(self.format),
      log_level: overrides.log_level.or(self.log_level),
    }
  }

  pub fn resolve(self) -> Result<Settings, CliError> {
    let log_level = match self.log_level {
      None => LevelFilter::Warn,
      Some(level) => level.parse::<LevelFilter>().map_err(|_| CliError::LogLevel(level.clone()))?,
    };
    Ok(Settings {
      parallel: self.parallel.unwrap_or(true),
      format: self.format.unwrap_or(OutputFormat::Text),
      log_level,
    })
  }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Settings {
  pub parallel: bool,
  pub format: OutputFormat,
  pub log_level: LevelFilter,
}

impl Settings {
  pub fn summary_options(&self) -> SummaryOptions {
    SummaryOptions { parallel: self.parallel }
  }
}
