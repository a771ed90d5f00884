use crate::finding::{Category, Severity};
use crate::rules::Rule;
use regex::Regex;
use std::sync::LazyLock;

// Literal-IP URL with the loopback octet excluded by alternation (the
// engine has no lookahead). 127.x goes to the localhost rule instead so a
// dev server never shows up as HIGH.
static RE_IP_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://(\d{1,2}|1[01]\d|12[0-689]|1[3-9]\d|2[0-4]\d|25[0-5])(\.\d{1,3}){3}")
        .unwrap()
});

static RE_LOCALHOST_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://(localhost|127\.0\.0\.1)\b").unwrap());

static RE_SUSPICIOUS_TLD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?im)https?://[a-z0-9.-]+\.(xyz|top|tk|ml|ga|cf|gq|buzz|click|icu|rest|lol)(["'/:\s]|$)"#)
        .unwrap()
});

static RE_TUNNEL_SERVICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(ngrok\.(io|app|dev)|trycloudflare\.com|serveo\.net|localtunnel\.me|loca\.lt|telebit\.cloud|pagekite\.me)\b",
    )
    .unwrap()
});

static RE_PASTE_SERVICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(pastebin\.com|hastebin\.com|paste\.ee|ghostbin\.co|rentry\.co|dpaste\.org|0x0\.st|transfer\.sh|termbin\.com)\b",
    )
    .unwrap()
});

pub static RULES: &[Rule] = &[
    Rule {
        id: "net/ip-url",
        severity: Severity::High,
        category: Category::Network,
        regex: &RE_IP_URL,
        message: "URL with a literal IP address hides the endpoint from domain review",
    },
    Rule {
        id: "net/localhost-url",
        severity: Severity::Low,
        category: Category::Network,
        regex: &RE_LOCALHOST_URL,
        message: "Localhost URL, verify nothing probes local services",
    },
    Rule {
        id: "net/suspicious-tld",
        severity: Severity::Medium,
        category: Category::Network,
        regex: &RE_SUSPICIOUS_TLD,
        message: "URL on a TLD commonly used for disposable hosting",
    },
    Rule {
        id: "net/tunnel-service",
        severity: Severity::High,
        category: Category::Network,
        regex: &RE_TUNNEL_SERVICE,
        message: "Tunneling-service domain reaches endpoints review cannot see",
    },
    Rule {
        id: "net/paste-service",
        severity: Severity::Medium,
        category: Category::Network,
        regex: &RE_PASTE_SERVICE,
        message: "Paste or drop service domain, a common payload host",
    },
];
