use crate::error::{Error, Result};
use crate::inventory::{Inventory, Pile, Range};
use log::debug;
use std::str::FromStr;

const RANGES_PER_LINE: usize = 2;

/// Parses one pile per line. Blank text yields an empty inventory; a blank
/// line between piles is a malformed line. Line numbers in errors count the
/// leading blank lines too.
pub fn parse_inventory(text: &str) -> Result<Inventory> {
  let text = text.trim_end();
  let body = text.trim_start();
  if body.is_empty() {
    return Ok(Inventory::default());
  }
  let skipped_lines = text[..text.len() - body.len()].matches('\n').count();
  let piles = body
    .split('\n')
    .enumerate()
    .map(|(i, line)| parse_pile(skipped_lines + i + 1, line))
    .collect::<Result<Vec<Pile>>>()?;
  debug!("parsed inventory of {} piles", piles.len());
  Ok(Inventory::new(piles))
}

/// Parses a line of exactly two `<low>-<high>` tokens. `line` is the 1-based
/// line number used in errors.
pub fn parse_pile(line: usize, text: &str) -> Result<Pile> {
  let tokens: Vec<&str> = text.split_whitespace().collect();
  if tokens.len() != RANGES_PER_LINE {
    return Err(Error::MalformedLine { line, found: tokens.len() });
  }
  let ranges = tokens
    .into_iter()
    .map(|token| parse_range(line, token))
    .collect::<Result<Vec<Range>>>()?;
  Ok(Pile::new(ranges))
}

fn parse_range(line: usize, token: &str) -> Result<Range> {
  let malformed = || Error::MalformedRange { line, token: token.to_string() };
  let mut bounds = token.split('-');
  let (low, high) = match (bounds.next(), bounds.next(), bounds.next()) {
    (Some(low), Some(high), None) => (low, high),
    _ => return Err(malformed()),
  };
  let low = parse_bound(low).ok_or_else(malformed)?;
  let high = parse_bound(high).ok_or_else(malformed)?;
  Range::new(low, high)
}

/// Plain decimal digits only; `u64::from_str` alone would also accept `+7`.
fn parse_bound(text: &str) -> Option<u64> {
  if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }
  text.parse().ok()
}

impl FromStr for Range {
  type Err = Error;

  fn from_str(s: &str) -> Result<Range> {
    parse_range(1, s.trim())
  }
}

#[cfg(test)]
mod tests {
  use super::{parse_inventory, parse_pile};
  use crate::error::Error;
  use crate::inventory::{Inventory, Pile, Range};

  #[test]
  fn parses_lines_in_order() {
    let inventory = parse_inventory("1-3 2-5\n8-10 20-25\n").unwrap();
    assert_eq!(
      inventory,
      Inventory::new(vec![
        Pile::new(vec![Range { low: 1, high: 3 }, Range { low: 2, high: 5 }]),
        Pile::new(vec![Range { low: 8, high: 10 }, Range { low: 20, high: 25 }]),
      ])
    );
  }

  #[test]
  fn tolerates_crlf_and_extra_spaces() {
    let inventory = parse_inventory("  1-3   2-5\r\n4-4\t6-9\r\n").unwrap();
    assert_eq!(inventory.len(), 2);
    assert_eq!(inventory.piles[1].ranges[1], Range { low: 6, high: 9 });
  }

  #[test]
  fn line_numbers_include_leading_blank_lines() {
    assert_eq!(
      parse_inventory("\n\n1-3 2-5\n1-3"),
      Err(Error::MalformedLine { line: 4, found: 1 })
    );
    assert_eq!(
      parse_inventory(" \r\n  7-8 x-1\n"),
      Err(Error::MalformedRange { line: 2, token: "x-1".to_string() })
    );
  }

  #[test]
  fn blank_text_is_empty_inventory() {
    assert_eq!(parse_inventory(" \n\n "), Ok(Inventory::default()));
  }

  #[test]
  fn single_token_line() {
    assert_eq!(parse_pile(1, "1-3"), Err(Error::MalformedLine { line: 1, found: 1 }));
  }

  #[test]
  fn three_token_line() {
    assert_eq!(
      parse_inventory("1-3 4-5\n1-3 4-5 6-7"),
      Err(Error::MalformedLine { line: 2, found: 3 })
    );
  }

  #[test]
  fn blank_line_between_piles() {
    assert_eq!(
      parse_inventory("1-3 4-5\n\n6-7 8-9"),
      Err(Error::MalformedLine { line: 2, found: 0 })
    );
  }

  #[test]
  fn malformed_tokens() {
    for token in &["1", "1-", "-3", "1-2-3", "a-3", "1-b", "+1-3", "1--3", "99999999999999999999-1"] {
      let line = format!("1-3 {}", token);
      assert_eq!(
        parse_pile(4, &line),
        Err(Error::MalformedRange { line: 4, token: token.to_string() }),
        "token {:?}",
        token
      );
    }
  }

  #[test]
  fn reversed_range() {
    assert_eq!(parse_pile(1, "5-2 1-1"), Err(Error::InvalidRange { low: 5, high: 2 }));
  }

  #[test]
  fn range_from_str() {
    assert_eq!("0-18446744073709551615".parse::<Range>(), Ok(Range { low: 0, high: u64::MAX }));
    assert_eq!("5-2".parse::<Range>(), Err(Error::InvalidRange { low: 5, high: 2 }));
  }
}
