//! # skillscan
//!
//! Static security scanner for AI agent skills.
//!
//! `skillscan` walks a skill directory (or a single file) and matches its
//! text against a built-in catalog of risky patterns: command execution,
//! data exfiltration, hardcoded secrets, prompt injection, wallet-drain
//! phrasing, suspicious network endpoints, and sensitive file access. The
//! `SKILL.md` manifest additionally gets structural checks. Reports come
//! out as colored text, JSON, or [SARIF].
//!
//! No file is ever executed or interpreted; everything is matched as
//! plain text.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use skillscan::{config::Config, output, scan};
//!
//! let config = Config::load(None).expect("failed to load config");
//! let report = scan::run_scan(Path::new("./my-skill"), &config);
//!
//! if report.exit_code() == 0 {
//!     println!("Clean: {}", report.verdict());
//! } else {
//!     let text = output::format_report(&report, &output::OutputFormat::Pretty);
//!     print!("{text}");
//! }
//! ```
//!
//! ## Architecture
//!
//! The crate is organized around a pipeline:
//!
//! 1. **[`config`]** loads category and manifest toggles from TOML.
//! 2. **[`rules`]** holds the static pattern catalog, one module per category.
//! 3. **[`walker`]** discovers scannable files, skipping hidden entries
//!    and dependency caches.
//! 4. **[`matcher`]** / **[`manifest`]** run the rules over file content;
//!    manifests get structural checks first.
//! 5. **[`finding`]** defines the core data types ([`finding::Finding`],
//!    [`finding::ScanReport`]) and the exit-code contract.
//! 6. **[`output`]** formats reports as pretty text, JSON, or SARIF.
//!
//! [SARIF]: https://sarifweb.azurewebsites.net/

pub mod config;
pub mod finding;
pub mod manifest;
pub mod matcher;
pub mod output;
pub mod rules;
pub mod scan;
pub mod walker;
