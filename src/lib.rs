//! Coalesces piles of closed integer ranges and counts the integers they
//! cover, per pile and over each pile joined with its successor.

pub use coalesce::*;
pub use combine::*;
pub use error::*;
pub use inventory::*;
pub use parse::*;
pub use summary::*;

mod coalesce;
mod combine;
mod error;
mod inventory;
mod parse;
mod summary;
