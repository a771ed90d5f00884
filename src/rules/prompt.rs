use crate::finding::{Category, Severity};
use crate::rules::Rule;
use regex::Regex;
use std::sync::LazyLock;

static RE_IGNORE_INSTRUCTIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)ignore\s+(all\s+)?(previous|prior|above|earlier)\s+(instructions?|prompts?|rules?)")
        .unwrap()
});

static RE_DISREGARD_INSTRUCTIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)disregard\s+(all\s+)?(previous|prior|above|your)\s+(instructions?|prompts?|rules?|guidelines?)",
    )
    .unwrap()
});

static RE_ROLE_REASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\byou\s+are\s+now\b").unwrap());

// Injected system-role markers: tags, chat-template delimiters, and a
// line-leading `system:` speaker label. Horizontal whitespace only after
// `^`, otherwise the match could start on a blank line above the label.
static RE_SYSTEM_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)</?system\s*>|\[/?system\]|<\|im_(start|end)\|>|^[ \t]*system\s*:\s").unwrap()
});

pub static RULES: &[Rule] = &[
    Rule {
        id: "prompt/ignore-instructions",
        severity: Severity::High,
        category: Category::PromptInjection,
        regex: &RE_IGNORE_INSTRUCTIONS,
        message: "Instruction-override phrasing targeting the agent",
    },
    Rule {
        id: "prompt/disregard-instructions",
        severity: Severity::High,
        category: Category::PromptInjection,
        regex: &RE_DISREGARD_INSTRUCTIONS,
        message: "Instruction-disregard phrasing targeting the agent",
    },
    Rule {
        id: "prompt/role-reassignment",
        severity: Severity::High,
        category: Category::PromptInjection,
        regex: &RE_ROLE_REASSIGNMENT,
        message: "Role-reassignment phrasing attempts to repurpose the agent",
    },
    Rule {
        id: "prompt/system-marker",
        severity: Severity::High,
        category: Category::PromptInjection,
        regex: &RE_SYSTEM_MARKER,
        message: "Injected system-role marker or chat-template delimiter",
    },
];
