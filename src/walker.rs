//! File discovery and per-file dispatch.

use crate::config::Config;
use crate::finding::{ScanError, ScanReport};
use crate::manifest;
use crate::matcher;
use crate::rules::Rule;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Extensions selected for scanning, matched case-insensitively.
pub const SCAN_EXTENSIONS: &[&str] = &[
    "md", "js", "ts", "py", "sh", "bash", "json", "yaml", "yml", "toml",
];

/// Directory names pruned from the walk along with their entire subtree.
pub const SKIP_DIRS: &[&str] = &["node_modules"];

fn is_skipped(name: &str) -> bool {
    name.starts_with('.') || SKIP_DIRS.contains(&name)
}

/// Returns `true` when a walked file should be scanned.
///
/// The manifest is always selected regardless of how its name is cased;
/// everything else is selected by extension.
pub fn selected_for_scan(path: &Path) -> bool {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        if manifest::is_manifest(name) {
            return true;
        }
    }
    match path.extension() {
        Some(ext) => {
            let ext = ext.to_string_lossy().to_lowercase();
            SCAN_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

/// Walks `root` and scans every selected file into `report`.
///
/// A file root is dispatched directly without the extension filter, so
/// `skillscan ./notes.txt` scans the file the user explicitly named. A
/// directory root is walked in sorted order with hidden entries and
/// [`SKIP_DIRS`] pruned at every depth.
pub fn scan_path(root: &Path, rules: &[&'static Rule], config: &Config, report: &mut ScanReport) {
    if root.is_file() {
        scan_file(root, rules, config, report);
        return;
    }

    let walk = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            // Depth 0 is the root itself; never prune it, even when the
            // user scans a hidden directory.
            e.depth() == 0
                || e.file_name()
                    .to_str()
                    .map(|name| !is_skipped(name))
                    .unwrap_or(true)
        });

    for entry in walk {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                report.errors.push(ScanError {
                    path,
                    error: err.to_string(),
                });
                continue;
            }
        };
        if entry.file_type().is_file() && selected_for_scan(entry.path()) {
            scan_file(entry.path(), rules, config, report);
        }
    }
}

/// Reads one file and routes it to the manifest or generic analyzer.
///
/// Unreadable files (missing, permission denied, not valid UTF-8) land in
/// the report's error channel and never produce findings.
fn scan_file(path: &Path, rules: &[&'static Rule], config: &Config, report: &mut ScanReport) {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            report.errors.push(ScanError {
                path: path.to_path_buf(),
                error: err.to_string(),
            });
            return;
        }
    };
    report.files_scanned += 1;

    let is_manifest = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(manifest::is_manifest);

    if is_manifest && config.manifest.structural {
        manifest::scan_manifest(&content, path, rules, &mut report.findings);
    } else {
        matcher::scan_content(&content, path, rules, &mut report.findings);
    }
}
