use crate::error::{Error, Result};
use crate::inventory::{Count, MergedPile, Pile, Range};
use log::trace;

/// Sorts the ranges of `pile` and folds overlapping ones into disjoint spans.
///
/// A range is folded into the current span when its `low` does not exceed the
/// span's `high`. Ranges that merely follow each other (`3` then `4`) stay
/// separate spans; the coverage count is the same either way.
pub fn coalesce(pile: &Pile) -> Result<MergedPile> {
  let mut sorted: Vec<Range> = pile
    .ranges
    .iter()
    .map(|range| range.validated())
    .collect::<Result<Vec<Range>>>()?;
  sorted.sort_unstable();

  let mut sorted = sorted.into_iter();
  let mut current: Range = match sorted.next() {
    None => return Err(Error::EmptyInput),
    Some(first) => first,
  };
  let mut spans: Vec<Range> = Vec::new();
  for range in sorted {
    if range.low <= current.high {
      current.high = current.high.max(range.high);
    } else {
      spans.push(current);
      current = range;
    }
  }
  spans.push(current);

  trace!("coalesced {} ranges into {} spans", pile.ranges.len(), spans.len());
  Ok(MergedPile { spans })
}

pub fn coverage_count(pile: &Pile) -> Result<Count> {
  coalesce(pile)?.coverage_count()
}
