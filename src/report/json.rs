//! JSON output formatter.
//!
//! Emits every result, not just mandatory fields, for tooling integration.

use super::{ProbeReport, ReportFormatter};
use crate::probe::Classification;
use serde::Serialize;
use std::io::Write;

/// Formats reports as JSON.
#[derive(Debug, Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    url: Option<&'a str>,
    started_at: String,
    unconfigured: bool,
    results: Vec<JsonResult<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonResult<'a> {
    path: &'a [String],
    field: &'a str,
    label: String,
    classification: Classification,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    mandatory: usize,
    optional: usize,
    unknown: usize,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &ProbeReport, writer: &mut W) -> std::io::Result<()> {
        let output = JsonOutput {
            url: report.url.as_deref(),
            started_at: report.started_at.to_rfc3339(),
            unconfigured: report.unconfigured,
            results: report
                .results
                .iter()
                .map(|r| JsonResult {
                    path: r.path.segments(),
                    field: &r.field,
                    label: r.label(),
                    classification: r.classification,
                    status: r.status,
                })
                .collect(),
            summary: JsonSummary {
                total: report.results.len(),
                mandatory: report.count(Classification::Mandatory),
                optional: report.count(Classification::Optional),
                unknown: report.count(Classification::Unknown),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
