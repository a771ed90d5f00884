use std::fmt;
use std::path::{Path, PathBuf};

/// Ranked severity of a finding.
///
/// Declared in ascending order so the derived [`Ord`] ranks `Critical`
/// above everything else.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Report rendering order: most severe group first.
    pub const DISPLAY_ORDER: [Severity; 5] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
        Severity::Info,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::Info => "INFO",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Critical => write!(f, "critical"),
            Severity::High => write!(f, "high"),
            Severity::Medium => write!(f, "medium"),
            Severity::Low => write!(f, "low"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Risk category a rule (and therefore a finding) belongs to.
///
/// `Manifest` is reserved for structural findings emitted by the manifest
/// analyzer; the other variants tag pattern-catalog rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Execution,
    Exfiltration,
    Secrets,
    PromptInjection,
    Financial,
    Network,
    FileOps,
    Manifest,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Execution => write!(f, "execution"),
            Category::Exfiltration => write!(f, "exfiltration"),
            Category::Secrets => write!(f, "secrets"),
            Category::PromptInjection => write!(f, "prompt-injection"),
            Category::Financial => write!(f, "financial"),
            Category::Network => write!(f, "network"),
            Category::FileOps => write!(f, "file-ops"),
            Category::Manifest => write!(f, "manifest"),
        }
    }
}

/// A single detected match of a rule against scanned content.
///
/// Never mutated after creation; appended to the report's finding list and
/// read back during rendering.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Finding {
    pub rule_id: &'static str,
    pub severity: Severity,
    pub category: Category,
    pub message: String,
    pub file: PathBuf,
    /// 1-based line of the match, when the finding points at a location.
    pub line: Option<usize>,
    /// The matched source line, trimmed, at most 100 characters.
    pub snippet: Option<String>,
}

/// A file the walker selected but could not scan.
///
/// Kept separate from findings: read failures are diagnostics, not risk
/// signals, and never influence the exit code.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ScanError {
    pub path: PathBuf,
    pub error: String,
}

/// Per-severity finding counts, produced by [`ScanReport::count_by_severity`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub info: usize,
}

impl SeverityCounts {
    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low + self.info
    }
}

/// Accumulated result of one scan run.
///
/// Created empty before traversal, appended to while the walker feeds files
/// through the matcher, and read-only once reporting starts.
#[derive(Debug, serde::Serialize)]
pub struct ScanReport {
    /// Display form of the scan root, as given on the command line.
    pub root: String,
    pub timestamp: String,
    pub files_scanned: usize,
    pub findings: Vec<Finding>,
    pub errors: Vec<ScanError>,
}

impl ScanReport {
    pub fn new(root: &Path) -> Self {
        ScanReport {
            root: root.display().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            files_scanned: 0,
            findings: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Count findings per severity in a single pass.
    ///
    /// Prefer this over five separate filtered iterations when the summary
    /// needs all counts at once (pretty and JSON output both do).
    pub fn count_by_severity(&self) -> SeverityCounts {
        self.findings
            .iter()
            .fold(SeverityCounts::default(), |mut acc, f| {
                match f.severity {
                    Severity::Critical => acc.critical += 1,
                    Severity::High => acc.high += 1,
                    Severity::Medium => acc.medium += 1,
                    Severity::Low => acc.low += 1,
                    Severity::Info => acc.info += 1,
                }
                acc
            })
    }

    /// Exit status for this report: most severe finding wins.
    ///
    /// Any CRITICAL finding yields 2, else any HIGH yields 1, else 0.
    /// MEDIUM and below never raise the status, and scan errors are not
    /// findings, so they never influence it either.
    pub fn exit_code(&self) -> i32 {
        // Single pass: track both flags simultaneously.
        let (has_critical, has_high) =
            self.findings
                .iter()
                .fold((false, false), |(c, h), f| match f.severity {
                    Severity::Critical => (true, h),
                    Severity::High => (c, true),
                    _ => (c, h),
                });

        if has_critical {
            2
        } else if has_high {
            1
        } else {
            0
        }
    }

    /// One-line verdict matching the exit status.
    pub fn verdict(&self) -> &'static str {
        match self.exit_code() {
            2 => "do not use without review",
            1 => "review recommended",
            _ => {
                if self.findings.is_empty() {
                    "no issues detected"
                } else {
                    "no blocking issues"
                }
            }
        }
    }
}
