use crate::finding::{Category, Severity};
use crate::rules::Rule;
use regex::Regex;
use std::sync::LazyLock;

// Long unbroken run of key-alphabet characters inside quotes. The run must
// sit directly between the quotes, so quoted URLs and prose stay quiet.
static RE_OPAQUE_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["'][A-Za-z0-9+/=_-]{32,}["']"#).unwrap());

static RE_CREDENTIAL_ASSIGN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)\b(password|passwd|secret|api[_-]?key|apikey|access[_-]?key|auth[_-]?token|token|private[_-]?key|client[_-]?secret)\b\s*[:=]\s*["'][^"'\n]{4,}["']"#,
    )
    .unwrap()
});

// PEM block markers are uppercase by definition; keep this case-sensitive.
static RE_PRIVATE_KEY_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-----BEGIN [A-Z ]*PRIVATE KEY-----").unwrap());

static RE_SECRETS_DIR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\.secrets\b").unwrap());

static RE_ENV_READ: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bprocess\.env\b|\bos\.environ\b|\bgetenv\s*\(").unwrap()
});

pub static RULES: &[Rule] = &[
    Rule {
        id: "secrets/opaque-literal",
        severity: Severity::Medium,
        category: Category::Secrets,
        regex: &RE_OPAQUE_LITERAL,
        message: "Long opaque string literal resembles an embedded key",
    },
    Rule {
        id: "secrets/credential-assign",
        severity: Severity::High,
        category: Category::Secrets,
        regex: &RE_CREDENTIAL_ASSIGN,
        message: "Credential assigned as a literal value",
    },
    Rule {
        id: "secrets/private-key-block",
        severity: Severity::Critical,
        category: Category::Secrets,
        regex: &RE_PRIVATE_KEY_BLOCK,
        message: "Embedded private key block",
    },
    Rule {
        id: "secrets/secrets-dir",
        severity: Severity::Medium,
        category: Category::Secrets,
        regex: &RE_SECRETS_DIR,
        message: "Reference to a secrets directory",
    },
    Rule {
        id: "secrets/env-read",
        severity: Severity::Info,
        category: Category::Secrets,
        regex: &RE_ENV_READ,
        message: "Environment variable dereference, review what is read and where it goes",
    },
];
