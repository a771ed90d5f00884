//! JSON output formatter.
//!
//! Produces a pretty-printed JSON document containing scan metadata, a
//! severity summary, the ordered findings, and any per-file read errors.

use crate::finding::ScanReport;

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    root: &'a str,
    timestamp: &'a str,
    files_scanned: usize,
    exit_code: i32,
    verdict: &'static str,
    summary: Summary,
    findings: &'a [crate::finding::Finding],
    errors: &'a [crate::finding::ScanError],
}

#[derive(serde::Serialize)]
struct Summary {
    total: usize,
    critical: usize,
    high: usize,
    medium: usize,
    low: usize,
    info: usize,
}

/// Formats a [`ScanReport`] as pretty-printed JSON.
///
/// The output includes the scan root, the derived exit code and verdict, a
/// severity summary object, and the full list of findings and read errors.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid data).
pub fn format(report: &ScanReport) -> String {
    let counts = report.count_by_severity();
    let output = JsonOutput {
        root: &report.root,
        timestamp: &report.timestamp,
        files_scanned: report.files_scanned,
        exit_code: report.exit_code(),
        verdict: report.verdict(),
        summary: Summary {
            total: counts.total(),
            critical: counts.critical,
            high: counts.high,
            medium: counts.medium,
            low: counts.low,
            info: counts.info,
        },
        findings: &report.findings,
        errors: &report.errors,
    };

    serde_json::to_string_pretty(&output).expect("JSON serialization failed")
}
