//! Structural checks for the skill manifest.
//!
//! A `SKILL.md` file gets four heuristics the generic matcher cannot
//! express, emitted in a fixed order so repeated scans produce identical
//! reports, then the full content goes through the shared pattern pass.
//!
//! Fenced code blocks are counted but their contents are not re-dispatched
//! as separate artifacts; the pattern pass already covers the whole file as
//! plain text.

use crate::finding::{Category, Finding, Severity};
use crate::matcher;
use crate::rules::Rule;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Reserved manifest filename, matched case-insensitively.
pub const MANIFEST_NAME: &str = "SKILL.md";

/// Returns `true` when `name` is the manifest convention name.
///
/// # Examples
///
/// ```
/// use skillscan::manifest::is_manifest;
///
/// assert!(is_manifest("SKILL.md"));
/// assert!(is_manifest("skill.MD"));
/// assert!(!is_manifest("README.md"));
/// ```
pub fn is_manifest(name: &str) -> bool {
    name.eq_ignore_ascii_case(MANIFEST_NAME)
}

// A description can live in frontmatter (`description:`) or as a heading.
static RE_DESCRIPTION_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^\s*description\s*:").unwrap());

static RE_DESCRIPTION_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^#{1,6}\s*description\b").unwrap());

// Opening fence tagged with a shell or interpreted language. Horizontal
// whitespace only, so an untagged fence followed by a line that happens to
// start with a language word is not miscounted.
static RE_SCRIPT_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^[ \t]*```[ \t]*(bash|sh|shell|zsh|python|py|javascript|js|typescript|ts|node)\b",
    )
    .unwrap()
});

static RE_EXEC_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(execute|run|invoke|launch|spawn)\b").unwrap());

static RE_COMMAND_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bcommands?\b").unwrap());

static RE_BROWSER_AUTOMATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(puppeteer|playwright|selenium|webdriver|headless\s+(chrome|chromium|browser))\b")
        .unwrap()
});

static RE_SCRIPT_EVAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(evaluate|eval|execute_?script|inject(ed)?\s+script)\b").unwrap()
});

fn emit(findings: &mut Vec<Finding>, id: &'static str, severity: Severity, message: String, file: &Path) {
    findings.push(Finding {
        rule_id: id,
        severity,
        category: Category::Manifest,
        message,
        file: file.to_path_buf(),
        line: None,
        snippet: None,
    });
}

/// Runs the structural checks, then delegates to [`matcher::scan_content`].
pub fn scan_manifest(content: &str, file: &Path, rules: &[&'static Rule], findings: &mut Vec<Finding>) {
    if !RE_DESCRIPTION_FIELD.is_match(content) && !RE_DESCRIPTION_HEADING.is_match(content) {
        emit(
            findings,
            "manifest/missing-description",
            Severity::Low,
            "Missing skill description, nothing states what this skill does".to_string(),
            file,
        );
    }

    let fences = RE_SCRIPT_FENCE.find_iter(content).count();
    if fences > 0 {
        emit(
            findings,
            "manifest/script-blocks",
            Severity::Info,
            format!("Manifest embeds {fences} executable code block(s), review them manually"),
            file,
        );
    }

    if RE_EXEC_KEYWORD.is_match(content) && RE_COMMAND_KEYWORD.is_match(content) {
        emit(
            findings,
            "manifest/tool-command",
            Severity::Info,
            "Manifest pairs execution language with command references".to_string(),
            file,
        );
    }

    if RE_BROWSER_AUTOMATION.is_match(content) && RE_SCRIPT_EVAL.is_match(content) {
        emit(
            findings,
            "manifest/browser-scripting",
            Severity::Medium,
            "Browser automation combined with script evaluation".to_string(),
            file,
        );
    }

    matcher::scan_content(content, file, rules, findings);
}
