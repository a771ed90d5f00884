//! The pattern catalog.
//!
//! Static detection rules, grouped by risk category. Each category module
//! exposes a `RULES` table; [`all`] chains the tables in catalog order and
//! [`active`] filters them through the per-category config toggles.
//!
//! Rules are deliberately broad. This is a lexical triage tool, not a proof
//! system: false positives are acceptable, silent misses are not. A regex
//! that fails to compile is a build-time defect; every table entry goes
//! through [`LazyLock`](std::sync::LazyLock) statics whose initializers
//! panic on malformed patterns, and the catalog test forces each one.

pub mod execution;
pub mod exfiltration;
pub mod fileops;
pub mod financial;
pub mod network;
pub mod prompt;
pub mod secrets;

use crate::config::Config;
use crate::finding::{Category, Severity};
use regex::Regex;
use std::sync::LazyLock;

/// One detectable risk signature.
pub struct Rule {
    /// Stable identifier (e.g. `"exfil/pipe-to-shell"`), shown in reports,
    /// `--list-rules`, and SARIF output.
    pub id: &'static str,
    pub severity: Severity,
    pub category: Category,
    pub regex: &'static LazyLock<Regex>,
    pub message: &'static str,
}

/// Every rule in the catalog, in fixed catalog order.
pub fn all() -> Vec<&'static Rule> {
    let mut rules: Vec<&'static Rule> = Vec::new();
    rules.extend(execution::RULES);
    rules.extend(exfiltration::RULES);
    rules.extend(secrets::RULES);
    rules.extend(prompt::RULES);
    rules.extend(financial::RULES);
    rules.extend(network::RULES);
    rules.extend(fileops::RULES);
    rules
}

/// The catalog filtered to categories enabled in `config`.
pub fn active(config: &Config) -> Vec<&'static Rule> {
    all()
        .into_iter()
        .filter(|rule| config.is_category_enabled(rule.category))
        .collect()
}
