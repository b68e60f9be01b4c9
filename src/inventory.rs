use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Number of distinct integers covered by one or more ranges.
///
/// Bounds are `u64`, so a single full-width range already covers `2^64`
/// integers. Counts use `u128` to stay exact.
pub type Count = u128;

/// Closed integer range `[low, high]`.
///
/// Fields are public, so the `high >= low` invariant is checked by
/// [`Range::new`] and again by every operation that consumes ranges.
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
  pub low: u64,
  pub high: u64,
}

impl Range {
  pub fn new(low: u64, high: u64) -> Result<Range> {
    Range { low, high }.validated()
  }

  pub fn validated(self) -> Result<Range> {
    if self.high < self.low {
      Err(Error::InvalidRange { low: self.low, high: self.high })
    } else {
      Ok(self)
    }
  }

  pub fn span_len(&self) -> Result<Count> {
    let range = self.validated()?;
    Ok(Count::from(range.high - range.low) + 1)
  }
}

/// Ranges read from a single input line. Duplicates and overlaps are allowed.
#[derive(Eq, PartialEq, Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pile {
  pub ranges: Vec<Range>,
}

impl Pile {
  pub fn new(ranges: Vec<Range>) -> Pile {
    Pile { ranges }
  }

  pub fn raw_span_total(&self) -> Result<Count> {
    self.ranges.iter().try_fold(0, |total, range| Ok(total + range.span_len()?))
  }
}

#[derive(Eq, PartialEq, Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
  pub piles: Vec<Pile>,
}

impl Inventory {
  pub fn new(piles: Vec<Pile>) -> Inventory {
    Inventory { piles }
  }

  pub fn len(&self) -> usize {
    self.piles.len()
  }

  pub fn is_empty(&self) -> bool {
    self.piles.is_empty()
  }
}

/// Disjoint spans sorted by `low`, as produced by `coalesce`.
#[derive(Eq, PartialEq, Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedPile {
  pub spans: Vec<Range>,
}

impl MergedPile {
  pub fn coverage_count(&self) -> Result<Count> {
    self.spans.iter().try_fold(0, |total, span| Ok(total + span.span_len()?))
  }
}

impl From<MergedPile> for Pile {
  fn from(merged: MergedPile) -> Pile {
    Pile::new(merged.spans)
  }
}
