//! Human-readable colored text formatter.
//!
//! Produces a terminal-friendly report with ANSI color codes, grouping
//! findings by severity from most to least severe and closing with a
//! one-line summary and the verdict.

use crate::finding::{ScanReport, Severity};
use colored::Colorize;

fn severity_tag(severity: Severity) -> String {
    match severity {
        Severity::Critical => "CRITICAL".red().bold().to_string(),
        Severity::High => "    HIGH".red().to_string(),
        Severity::Medium => "  MEDIUM".yellow().bold().to_string(),
        Severity::Low => "     LOW".yellow().to_string(),
        Severity::Info => "    INFO".blue().to_string(),
    }
}

/// Formats a [`ScanReport`] as human-readable, ANSI-colored text.
///
/// Sections rendered (in order):
/// 1. **Header**: scan root and timestamp.
/// 2. **Findings**: grouped by severity, most severe first.
/// 3. **Summary**: file and severity counts plus the verdict.
pub fn format(report: &ScanReport) -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "\n{}\n",
        format!("  Skill Scan: {}  ", report.root)
            .bold()
            .on_blue()
            .white()
    ));
    out.push_str(&format!("  Timestamp: {}\n\n", report.timestamp));

    if report.findings.is_empty() {
        out.push_str(&format!("{}\n\n", "No issues detected.".green().bold()));
    }

    // Group by severity, most severe first. Within a group the scan order
    // (sorted walk, top-to-bottom per file) is preserved.
    for severity in Severity::DISPLAY_ORDER {
        let mut group = report
            .findings
            .iter()
            .filter(|f| f.severity == severity)
            .peekable();
        if group.peek().is_none() {
            continue;
        }
        out.push_str(&format!("{}\n", severity.label().bold().underline()));
        for finding in group {
            out.push_str(&format!(
                "  [{tag}] {rule_id:<28} {message}\n",
                tag = severity_tag(finding.severity),
                rule_id = finding.rule_id.dimmed(),
                message = finding.message,
            ));
            let location = match finding.line {
                Some(line) => format!("{}:{}", finding.file.display(), line),
                None => format!("{}", finding.file.display()),
            };
            out.push_str(&format!("             {}\n", location.dimmed()));
            if let Some(ref snippet) = finding.snippet {
                out.push_str(&format!("             > {}\n", snippet.dimmed()));
            }
        }
        out.push('\n');
    }

    // Summary
    let counts = report.count_by_severity();
    out.push_str(&format!(
        "Files scanned: {}  |  {} findings ({} critical, {} high, {} medium, {} low, {} info)\n",
        report.files_scanned,
        counts.total(),
        counts.critical,
        counts.high,
        counts.medium,
        counts.low,
        counts.info,
    ));

    let verdict = match report.exit_code() {
        2 => report.verdict().red().bold().to_string(),
        1 => report.verdict().yellow().bold().to_string(),
        _ => report.verdict().green().bold().to_string(),
    };
    out.push_str(&format!("Verdict: {verdict}\n"));

    out
}
