use crate::error::CliError;
use log::{debug, warn};
use pile_coverage::{parse_inventory, summarize, Inventory, Summary, SummaryOptions};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct FileReport {
  pub path: PathBuf,
  pub outcome: Result<Summary, CliError>,
}

impl FileReport {
  pub fn is_ok(&self) -> bool {
    self.outcome.is_ok()
  }
}

/// Line numbers in parse errors refer to the file as read.
pub fn load_inventory(path: &Path) -> Result<Inventory, CliError> {
  let text = fs::read_to_string(path).map_err(|source| CliError::Read {
    path: path.to_path_buf(),
    source,
  })?;
  Ok(parse_inventory(&text)?)
}

pub fn process_file(path: &Path, options: &SummaryOptions) -> FileReport {
  let outcome = load_inventory(path).and_then(|inventory| {
    debug!("{}: {} piles", path.display(), inventory.len());
    Ok(summarize(&inventory, options)?)
  });
  if let Err(ref e) = outcome {
    warn!("{}: {}", path.display(), e);
  }
  FileReport { path: path.to_path_buf(), outcome }
}

pub fn process_files(paths: &[PathBuf], options: &SummaryOptions) -> Vec<FileReport> {
  if options.parallel {
    paths.par_iter().map(|path| process_file(path, options)).collect()
  } else {
    paths.iter().map(|path| process_file(path, options)).collect()
  }
}

pub fn render_text(reports: &[FileReport]) -> String {
  let mut out = String::new();
  for report in reports {
    let line = match &report.outcome {
      Ok(summary) => format!(
        "{}: part1={} part2={} part3={}",
        report.path.display(),
        summary.raw_span_total,
        summary.pile_coverage_total,
        summary.max_pair_coverage
      ),
      Err(e) => format!("{}: error: {}", report.path.display(), e),
    };
    out.push_str(&line);
    out.push('\n');
  }
  out
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsonOutcome<'a> {
  Summary(&'a Summary),
  Error { error: String },
}

pub fn render_json(reports: &[FileReport]) -> serde_json::Result<String> {
  let outcomes: BTreeMap<String, JsonOutcome> = reports
    .iter()
    .map(|report| {
      let outcome = match &report.outcome {
        Ok(summary) => JsonOutcome::Summary(summary),
        Err(e) => JsonOutcome::Error { error: e.to_string() },
      };
      (report.path.display().to_string(), outcome)
    })
    .collect();
  serde_json::to_string_pretty(&outcomes)
}

#[cfg(test)]
mod tests {
  use super::{load_inventory, process_files, render_json, render_text, FileReport};
  use crate::error::CliError;
  use pile_coverage::{Summary, SummaryOptions};
  use std::path::PathBuf;

  fn reports() -> Vec<FileReport> {
    vec![
      FileReport {
        path: PathBuf::from("short.txt"),
        outcome: Ok(Summary { raw_span_total: 26, pile_coverage_total: 23, max_pair_coverage: 15 }),
      },
      FileReport {
        path: PathBuf::from("bad.txt"),
        outcome: Err(CliError::Inventory(pile_coverage::Error::MalformedLine { line: 1, found: 1 })),
      },
    ]
  }

  #[test]
  fn text() {
    assert_eq!(
      render_text(&reports()),
      "short.txt: part1=26 part2=23 part3=15\nbad.txt: error: line 1: expected 2 range tokens, found 1\n"
    );
  }

  #[test]
  fn json() {
    let json: serde_json::Value = serde_json::from_str(&render_json(&reports()).unwrap()).unwrap();
    assert_eq!(
      json,
      serde_json::json!({
        "bad.txt": { "error": "line 1: expected 2 range tokens, found 1" },
        "short.txt": { "rawSpanTotal": 26, "pileCoverageTotal": 23, "maxPairCoverage": 15 },
      })
    );
  }

  #[test]
  fn parse_error_reports_file_line() {
    let path = std::env::temp_dir().join(format!("pile-coverage-{}-leading-blank.txt", std::process::id()));
    std::fs::write(&path, "\n\n1-3 2-5\n1-3\n").unwrap();
    let outcome = load_inventory(&path);
    std::fs::remove_file(&path).unwrap();
    match outcome {
      Err(CliError::Inventory(e)) => assert_eq!(e, pile_coverage::Error::MalformedLine { line: 4, found: 1 }),
      other => panic!("unexpected outcome: {:?}", other),
    }
  }

  #[test]
  fn missing_file_is_reported_in_order() {
    let paths = vec![
      PathBuf::from("../tests/inventories/short/input.txt"),
      PathBuf::from("does/not/exist.txt"),
    ];
    for parallel in &[true, false] {
      let reports = process_files(&paths, &SummaryOptions { parallel: *parallel });
      assert_eq!(reports.len(), 2);
      assert_eq!(reports[0].path, paths[0]);
      assert_eq!(
        reports[0].outcome.as_ref().ok(),
        Some(&Summary { raw_span_total: 26, pile_coverage_total: 23, max_pair_coverage: 15 })
      );
      assert!(!reports[1].is_ok());
      match &reports[1].outcome {
        Err(CliError::Read { path, .. }) => assert_eq!(path, &paths[1]),
        other => panic!("unexpected outcome: {:?}", other),
      }
    }
  }
}
