//! Scan orchestration.
//!
//! [`run_scan`] is the single entry point shared by the CLI and by
//! integration tests: resolve the active rule set from configuration,
//! walk the target, and hand back the finished report.

use crate::config::Config;
use crate::finding::ScanReport;
use crate::rules;
use crate::walker;
use std::path::Path;

/// Scans `root` with the rule set enabled by `config`.
///
/// The returned report owns everything downstream consumers need: the
/// ordered findings, the per-file error channel, and counters used to
/// derive the exit code.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use skillscan::config::Config;
/// use skillscan::scan::run_scan;
///
/// let config = Config::default();
/// let report = run_scan(Path::new("./my-skill"), &config);
/// println!("{} findings", report.findings.len());
/// ```
pub fn run_scan(root: &Path, config: &Config) -> ScanReport {
    let rules = rules::active(config);
    let mut report = ScanReport::new(root);
    walker::scan_path(root, &rules, config, &mut report);
    report
}
