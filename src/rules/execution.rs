use crate::finding::{Category, Severity};
use crate::rules::Rule;
use regex::Regex;
use std::sync::LazyLock;

// Dynamic code evaluation: eval()/exec() calls, JS Function constructors,
// and shell eval of quoted or expanded content. The leading [^.\w\n] keeps
// method calls like `re.exec(str)` from firing; the regex engine has no
// lookbehind, so the guard consumes one character. Newline stays out of the
// guard class so a line-start match goes through `^` and keeps its line
// number on the right line.
static RE_DYNAMIC_EVAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)(^|[^.\w\n])(eval|exec)\s*\(|\bnew\s+Function\s*\(|\beval\s+["'$]"#).unwrap()
});

static RE_COMMAND_SUBSTITUTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\([^)\n]+\)").unwrap());

// rm with force/recursive flags aimed at root or home. Scoped deletes like
// `rm -rf /tmp/build` stay quiet; the target must be the bare path.
static RE_DESTRUCTIVE_DELETE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?mi)\brm\s+(-[rRfF]+\s+){1,3}(/|"?\$\{?HOME\}?"?/?|~/?)(\s+--no-preserve-root)?\s*$"#,
    )
    .unwrap()
});

static RE_SUDO: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bsudo\s+\w").unwrap());

static RE_WORLD_WRITABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bchmod\s+(-[a-zA-Z]+\s+)*(0?777\b|a?\+rwx\b)").unwrap());

// nohup ... &, output discarded then backgrounded, or & disown.
static RE_SILENT_BACKGROUND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bnohup\b[^\n&]*&|>\s*/dev/null\s+2>&1\s*&|&\s*disown\b").unwrap()
});

pub static RULES: &[Rule] = &[
    Rule {
        id: "exec/dynamic-eval",
        severity: Severity::Critical,
        category: Category::Execution,
        regex: &RE_DYNAMIC_EVAL,
        message: "Dynamic code evaluation executes arbitrary generated content",
    },
    Rule {
        id: "exec/command-substitution",
        severity: Severity::Medium,
        category: Category::Execution,
        regex: &RE_COMMAND_SUBSTITUTION,
        message: "Shell command substitution injects command output into the command line",
    },
    Rule {
        id: "exec/destructive-delete",
        severity: Severity::Critical,
        category: Category::Execution,
        regex: &RE_DESTRUCTIVE_DELETE,
        message: "Recursive force-delete aimed at root or home directory",
    },
    Rule {
        id: "exec/sudo",
        severity: Severity::Medium,
        category: Category::Execution,
        regex: &RE_SUDO,
        message: "Privilege escalation via sudo",
    },
    Rule {
        id: "exec/world-writable",
        severity: Severity::High,
        category: Category::Execution,
        regex: &RE_WORLD_WRITABLE,
        message: "World-writable file mode invites tampering by any local process",
    },
    Rule {
        id: "exec/silent-background",
        severity: Severity::Medium,
        category: Category::Execution,
        regex: &RE_SILENT_BACKGROUND,
        message: "Process silently backgrounded with its output discarded",
    },
];
