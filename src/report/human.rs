//! Human-readable output formatter.
//!
//! The default report lists only mandatory fields, one label per line:
//!
//! ```text
//! mandatory fields:
//! name
//! address/city
//! ```

use super::{ProbeReport, ReportFormatter};
use crate::probe::Classification;
use std::io::Write;

/// Formats reports as plain text.
#[derive(Debug, Default)]
pub struct HumanFormatter {
    show_all: bool,
}

impl HumanFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also list optional and unknown fields.
    pub fn show_all(mut self, show_all: bool) -> Self {
        self.show_all = show_all;
        self
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &ProbeReport, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "mandatory fields:")?;
        for result in report.with_classification(Classification::Mandatory) {
            writeln!(writer, "{}", result.label())?;
        }

        if !self.show_all {
            return Ok(());
        }

        for classification in [Classification::Optional, Classification::Unknown] {
            if report.count(classification) == 0 {
                continue;
            }
            writeln!(writer)?;
            writeln!(writer, "{} fields:", classification)?;
            for result in report.with_classification(classification) {
                writeln!(writer, "{}", result.label())?;
            }
        }

        Ok(())
    }
}
