//! Report formatters.
//!
//! This module renders a finished probe run in different formats
//! (human-readable text, JSON).

pub mod human;
pub mod json;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use std::io::Write;

use crate::probe::{Classification, ProbeResult, ProbeRun};

/// Output format for probe reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Mandatory fields, one label per line
    #[default]
    Human,
    /// Every result plus a summary
    Json,
}

/// Trait for formatting probe reports.
pub trait ReportFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &ProbeReport, writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;

/// A completed run, ready to render.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    /// Endpoint that was probed, if any.
    pub url: Option<String>,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Every result, in probe order.
    pub results: Vec<ProbeResult>,
    /// No target was configured.
    pub unconfigured: bool,
}

impl ProbeReport {
    pub fn new(url: Option<String>, started_at: DateTime<Utc>, run: ProbeRun) -> Self {
        Self {
            url,
            started_at,
            results: run.results,
            unconfigured: run.unconfigured,
        }
    }

    /// Results with the given classification, in probe order.
    pub fn with_classification(
        &self,
        classification: Classification,
    ) -> impl Iterator<Item = &ProbeResult> {
        self.results
            .iter()
            .filter(move |r| r.classification == classification)
    }

    pub fn count(&self, classification: Classification) -> usize {
        self.with_classification(classification).count()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_values() {
        assert_eq!(
            OutputFormat::from_str("json", false),
            Ok(OutputFormat::Json)
        );
        assert_eq!(
            OutputFormat::from_str("HUMAN", true),
            Ok(OutputFormat::Human)
        );
        assert!(OutputFormat::from_str("xml", false).is_err());
    }

    #[test]
    fn counts_by_classification() {
        let report = fixtures::scenario_report();
        assert_eq!(report.count(Classification::Mandatory), 2);
        assert_eq!(report.count(Classification::Optional), 2);
        assert_eq!(report.count(Classification::Unknown), 0);
    }

    #[test]
    fn new_takes_results_from_run() {
        let run = ProbeRun {
            results: fixtures::scenario_report().results,
            unconfigured: true,
        };
        let report = ProbeReport::new(None, Utc::now(), run);
        assert_eq!(report.results.len(), 4);
        assert!(report.unconfigured);
    }
}
