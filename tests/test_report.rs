use std::path::{Path, PathBuf};

use skillscan::finding::{Category, Finding, ScanError, ScanReport, Severity};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_finding(severity: Severity) -> Finding {
    Finding {
        rule_id: "exec/sudo",
        severity,
        category: Category::Execution,
        message: "probe".to_string(),
        file: PathBuf::from("scripts/setup.sh"),
        line: Some(3),
        snippet: Some("sudo make install".to_string()),
    }
}

fn report_with(severities: &[Severity]) -> ScanReport {
    let mut report = ScanReport::new(Path::new("./my-skill"));
    for &severity in severities {
        report.findings.push(make_finding(severity));
    }
    report
}

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

#[test]
fn empty_report_exits_zero() {
    let report = report_with(&[]);
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.verdict(), "no issues detected");
}

#[test]
fn medium_and_below_never_gate() {
    let report = report_with(&[Severity::Medium, Severity::Low, Severity::Info]);
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.verdict(), "no blocking issues");
}

#[test]
fn high_exits_one() {
    let report = report_with(&[Severity::Info, Severity::High, Severity::Medium]);
    assert_eq!(report.exit_code(), 1);
    assert_eq!(report.verdict(), "review recommended");
}

#[test]
fn critical_outranks_high() {
    let report = report_with(&[Severity::High, Severity::Critical]);
    assert_eq!(report.exit_code(), 2);
    assert_eq!(report.verdict(), "do not use without review");
}

#[test]
fn single_critical_is_enough() {
    let report = report_with(&[Severity::Critical]);
    assert_eq!(report.exit_code(), 2);
}

#[test]
fn many_mediums_do_not_escalate() {
    let report = report_with(&[Severity::Medium; 50]);
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn scan_errors_do_not_gate() {
    let mut report = report_with(&[]);
    report.errors.push(ScanError {
        path: PathBuf::from("broken.sh"),
        error: "stream did not contain valid UTF-8".to_string(),
    });
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.verdict(), "no issues detected");
}

// ---------------------------------------------------------------------------
// Counting and ordering
// ---------------------------------------------------------------------------

#[test]
fn count_by_severity_counts_every_group() {
    let report = report_with(&[
        Severity::Critical,
        Severity::Critical,
        Severity::High,
        Severity::Info,
        Severity::Info,
        Severity::Info,
    ]);
    let counts = report.count_by_severity();
    assert_eq!(counts.critical, 2);
    assert_eq!(counts.high, 1);
    assert_eq!(counts.medium, 0);
    assert_eq!(counts.low, 0);
    assert_eq!(counts.info, 3);
    assert_eq!(counts.total(), 6);
}

#[test]
fn severity_orders_critical_highest() {
    assert!(Severity::Critical > Severity::High);
    assert!(Severity::High > Severity::Medium);
    assert!(Severity::Medium > Severity::Low);
    assert!(Severity::Low > Severity::Info);
    assert_eq!(Severity::DISPLAY_ORDER[0], Severity::Critical);
    assert_eq!(Severity::DISPLAY_ORDER[4], Severity::Info);
}

#[test]
fn severity_serializes_lowercase() {
    assert_eq!(
        serde_json::to_value(Severity::Critical).unwrap(),
        serde_json::json!("critical")
    );
    assert_eq!(
        serde_json::to_value(Severity::Info).unwrap(),
        serde_json::json!("info")
    );
}

#[test]
fn category_serializes_kebab_case() {
    assert_eq!(
        serde_json::to_value(Category::PromptInjection).unwrap(),
        serde_json::json!("prompt-injection")
    );
    assert_eq!(
        serde_json::to_value(Category::FileOps).unwrap(),
        serde_json::json!("file-ops")
    );
}

#[test]
fn report_records_root_and_timestamp() {
    let report = ScanReport::new(Path::new("./my-skill"));
    assert_eq!(report.root, "./my-skill");
    assert!(!report.timestamp.is_empty());
    assert_eq!(report.files_scanned, 0);
}
