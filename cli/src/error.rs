use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
  #[error("failed to read {}: {source}", path.display())]
  Read { path: PathBuf, source: io::Error },

  #[error("invalid config {}: {source}", path.display())]
  Config { path: PathBuf, source: toml::de::Error },

  #[error("unknown log level {0:?}")]
  LogLevel(String),

  #[error(transparent)]
  Inventory(#[from] pile_coverage::Error),
}
