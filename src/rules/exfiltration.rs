use crate::finding::{Category, Severity};
use crate::rules::Rule;
use regex::Regex;
use std::sync::LazyLock;

// Remote download piped straight into an interpreter. The [^|\n]* keeps the
// match on one line and on the first pipe after the download command.
static RE_PIPE_TO_SHELL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(curl|wget)\b[^|\n]*\|\s*(sudo\s+)?(bash|sh|zsh|python3?|node)\b").unwrap()
});

// Match both $VAR and ${VAR} in the request body of a curl/wget upload.
static RE_ENV_IN_PAYLOAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(curl|wget)\b[^\n]*\s-(d|-data[a-z-]*|F|-form)\s+["']?\$"#).unwrap()
});

// HTTP client call whose argument list dereferences the environment.
static RE_ENV_IN_REQUEST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(fetch|axios\.\w+|requests\.\w+|httpx\.\w+|urlopen)\s*\([^)\n]*(process\.env|os\.environ|getenv\()",
    )
    .unwrap()
});

static RE_ENV_PIPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(env|printenv)\b[^|\n]*\|\s*(curl|wget|nc|ncat)\b").unwrap()
});

// Webhook endpoint and a secret-ish token on the same line, either order.
static RE_WEBHOOK_SECRET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(webhook|hooks\.slack\.com|discord\.com/api/webhooks)\b[^\n]*\b(secret|token|api[_-]?key|password|credential)s?\b|\b(secret|token|api[_-]?key|password|credential)s?\b[^\n]*\b(webhook|hooks\.slack\.com|discord\.com/api/webhooks)\b",
    )
    .unwrap()
});

// base64 output piped onward to a network tool, or substituted into one.
static RE_ENCODE_UPLOAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bbase64\b[^|\n]*\|[^|\n]*\b(curl|wget|nc|ncat)\b|\b(curl|wget)\b[^\n]*\$\(\s*base64\b",
    )
    .unwrap()
});

pub static RULES: &[Rule] = &[
    Rule {
        id: "exfil/pipe-to-shell",
        severity: Severity::Critical,
        category: Category::Exfiltration,
        regex: &RE_PIPE_TO_SHELL,
        message: "Remote download piped directly into a shell interpreter",
    },
    Rule {
        id: "exfil/env-in-payload",
        severity: Severity::Critical,
        category: Category::Exfiltration,
        regex: &RE_ENV_IN_PAYLOAD,
        message: "Environment variable sent as an upload payload",
    },
    Rule {
        id: "exfil/env-in-request",
        severity: Severity::Critical,
        category: Category::Exfiltration,
        regex: &RE_ENV_IN_REQUEST,
        message: "HTTP request built from environment variable contents",
    },
    Rule {
        id: "exfil/env-pipe",
        severity: Severity::Critical,
        category: Category::Exfiltration,
        regex: &RE_ENV_PIPE,
        message: "Full environment piped to an outbound network tool",
    },
    Rule {
        id: "exfil/webhook-secret",
        severity: Severity::High,
        category: Category::Exfiltration,
        regex: &RE_WEBHOOK_SECRET,
        message: "Webhook endpoint and secret material referenced together",
    },
    Rule {
        id: "exfil/encode-upload",
        severity: Severity::High,
        category: Category::Exfiltration,
        regex: &RE_ENCODE_UPLOAD,
        message: "Content base64-encoded and handed to an upload tool",
    },
];
