use crate::coalesce::coverage_count;
use crate::combine::combine_adjacent_pairs;
use crate::error::Result;
use crate::inventory::{Count, Inventory, Pile};
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Eq, PartialEq, Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryOptions {
  pub parallel: bool,
}

impl Default for SummaryOptions {
  fn default() -> Self {
    Self { parallel: true }
  }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
  pub raw_span_total: Count,
  pub pile_coverage_total: Count,
  pub max_pair_coverage: Count,
}

pub fn raw_span_total(inventory: &Inventory) -> Result<Count> {
  inventory
    .piles
    .iter()
    .try_fold(0, |total, pile| Ok(total + pile.raw_span_total()?))
}

pub fn pile_coverage_total(inventory: &Inventory) -> Result<Count> {
  Ok(coverage_counts(&inventory.piles, false)?.into_iter().sum())
}

// An empty inventory has no pairs and yields 0.
pub fn max_pair_coverage(inventory: &Inventory) -> Result<Count> {
  max_pair_coverage_with(inventory, false)
}

pub fn summarize(inventory: &Inventory, options: &SummaryOptions) -> Result<Summary> {
  let summary = if options.parallel {
    let (raw_span_total, (pile_coverage_total, max_pair_coverage)) = rayon::join(
      || raw_span_total(inventory),
      || {
        rayon::join(
          || coverage_counts(&inventory.piles, true).map(|counts| counts.into_iter().sum::<Count>()),
          || max_pair_coverage_with(inventory, true),
        )
      },
    );
    Summary {
      raw_span_total: raw_span_total?,
      pile_coverage_total: pile_coverage_total?,
      max_pair_coverage: max_pair_coverage?,
    }
  } else {
    Summary {
      raw_span_total: raw_span_total(inventory)?,
      pile_coverage_total: pile_coverage_total(inventory)?,
      max_pair_coverage: max_pair_coverage(inventory)?,
    }
  };
  debug!("summarized {} piles: {:?}", inventory.len(), summary);
  Ok(summary)
}

fn max_pair_coverage_with(inventory: &Inventory, parallel: bool) -> Result<Count> {
  let pairs = combine_adjacent_pairs(inventory);
  Ok(coverage_counts(&pairs, parallel)?.into_iter().max().unwrap_or(0))
}

fn coverage_counts(piles: &[Pile], parallel: bool) -> Result<Vec<Count>> {
  if parallel {
    piles.par_iter().map(coverage_count).collect()
  } else {
    piles.iter().map(coverage_count).collect()
  }
}
