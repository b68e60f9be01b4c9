use crate::inventory::{Inventory, Pile};

/// Concatenates every pile with its successor.
///
/// Returns one derived pile per input pile. The last pile has no successor and
/// is copied as is, so this is not a symmetric sliding window.
pub fn combine_adjacent_pairs(inventory: &Inventory) -> Vec<Pile> {
  let piles = &inventory.piles;
  (0..piles.len())
    .map(|i| {
      let window = &piles[i..piles.len().min(i + 2)];
      let mut ranges = Vec::with_capacity(window.iter().map(|pile| pile.ranges.len()).sum());
      for pile in window {
        ranges.extend_from_slice(&pile.ranges);
      }
      Pile::new(ranges)
    })
    .collect()
}
