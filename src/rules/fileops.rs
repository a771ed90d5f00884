use crate::finding::{Category, Severity};
use crate::rules::Rule;
use regex::Regex;
use std::sync::LazyLock;

// Credential stores and system identity files a skill has no business reading.
static RE_SENSITIVE_READ: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)/etc/(passwd|shadow|sudoers)\b|(\$\{?HOME\}?|~)/\.(ssh|aws|kube|gnupg)\b|\bid_(rsa|ed25519|ecdsa)\b|\B\.netrc\b",
    )
    .unwrap()
});

// Two or more parent hops; a single ../ is everyday relative addressing.
static RE_PATH_TRAVERSAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\./(\.\./?)+").unwrap());

static RE_HOME_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:~|\$\{?HOME\}?)/").unwrap());

static RE_SYSTEM_WRITE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)>>?\s*/(etc|boot|sbin|usr/s?bin|usr/local/s?bin)/|\b(cp|mv|ln|install|tee)\s+[^\n]*/(etc|boot|sbin|usr/s?bin|usr/local/s?bin)/",
    )
    .unwrap()
});

pub static RULES: &[Rule] = &[
    Rule {
        id: "fileop/sensitive-read",
        severity: Severity::High,
        category: Category::FileOps,
        regex: &RE_SENSITIVE_READ,
        message: "Access to system credential or identity files",
    },
    Rule {
        id: "fileop/path-traversal",
        severity: Severity::Medium,
        category: Category::FileOps,
        regex: &RE_PATH_TRAVERSAL,
        message: "Repeated parent-directory traversal escapes the skill directory",
    },
    Rule {
        id: "fileop/home-reference",
        severity: Severity::Low,
        category: Category::FileOps,
        regex: &RE_HOME_REFERENCE,
        message: "Home-directory path reference, review what is touched",
    },
    Rule {
        id: "fileop/system-write",
        severity: Severity::High,
        category: Category::FileOps,
        regex: &RE_SYSTEM_WRITE,
        message: "Write into a protected system directory",
    },
];
