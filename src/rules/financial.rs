use crate::finding::{Category, Severity};
use crate::rules::Rule;
use regex::Regex;
use std::sync::LazyLock;

// Transfer-everything phrasing needs a funds-like object within reach, so
// prose such as "send all logs to the server" stays quiet.
static RE_TRANSFER_ALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(transfer|send|sweep|withdraw|move)\s+(the\s+|your\s+|my\s+)?(all|entire|everything|full)\b[^\n]{0,20}\b(funds?|balance|tokens?|assets?|money|holdings?|coins?|wallet)\b",
    )
    .unwrap()
});

static RE_WALLET_DRAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bdrain(ing|ed)?\b[^\n]{0,30}\b(wallet|funds?|account|balance)\b|\b(wallet|funds?|account|balance)\b[^\n]{0,30}\bdrain(ing|ed)?\b",
    )
    .unwrap()
});

static RE_KEY_MATERIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(private\s+key|seed\s+phrase|secret\s+recovery\s+phrase|mnemonic|keystore)\b")
        .unwrap()
});

static RE_UNLIMITED_APPROVAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(unlimited|infinite|max(imum)?|no[-\s]limit)\s+(token\s+)?(allowance|approval|spend(ing)?|amount)\b|\bapprove\b[^\n]{0,20}\b(unlimited|infinite)\b",
    )
    .unwrap()
});

// Slippage configured at or above 50 percent.
static RE_HIGH_SLIPPAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bslippage\b[^\n0-9]{0,20}(100|[5-9][0-9])\b").unwrap()
});

pub static RULES: &[Rule] = &[
    Rule {
        id: "wallet/transfer-all",
        severity: Severity::Critical,
        category: Category::Financial,
        regex: &RE_TRANSFER_ALL,
        message: "Transfer-everything phrasing over funds or balances",
    },
    Rule {
        id: "wallet/drain",
        severity: Severity::High,
        category: Category::Financial,
        regex: &RE_WALLET_DRAIN,
        message: "Drain language referencing a wallet or account",
    },
    Rule {
        id: "wallet/key-material",
        severity: Severity::High,
        category: Category::Financial,
        regex: &RE_KEY_MATERIAL,
        message: "Reference to wallet key material or recovery phrases",
    },
    Rule {
        id: "wallet/unlimited-approval",
        severity: Severity::High,
        category: Category::Financial,
        regex: &RE_UNLIMITED_APPROVAL,
        message: "Unlimited spending amount or token approval",
    },
    Rule {
        id: "wallet/high-slippage",
        severity: Severity::High,
        category: Category::Financial,
        regex: &RE_HIGH_SLIPPAGE,
        message: "Slippage tolerance configured at 50% or higher",
    },
];
