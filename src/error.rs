use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Eq, PartialEq, Clone, Debug)]
pub enum Error {
  /// A line did not contain exactly two range tokens.
  #[error("line {line}: expected 2 range tokens, found {found}")]
  MalformedLine { line: usize, found: usize },

  /// A token did not match `<low>-<high>`.
  #[error("line {line}: malformed range token {token:?}")]
  MalformedRange { line: usize, token: String },

  #[error("invalid range {low}-{high}: high bound is below low bound")]
  InvalidRange { low: u64, high: u64 },

  #[error("cannot coalesce an empty pile")]
  EmptyInput,
}
