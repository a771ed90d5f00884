//! Full-content pattern matching.
//!
//! Every rule runs over the whole text blob with global matching, so a rule
//! with k non-overlapping occurrences in one file produces exactly k
//! findings. Line numbers come from counting newlines before the match
//! offset; snippets are the enclosing source line, trimmed and capped.

use crate::finding::Finding;
use crate::rules::Rule;
use std::path::Path;

/// Snippets never exceed this many characters.
const SNIPPET_MAX: usize = 100;

/// Runs every rule against `content` and appends one [`Finding`] per match.
///
/// `find_iter` starts from offset zero on every call, so no match position
/// carries over between files sharing a rule.
pub fn scan_content(content: &str, file: &Path, rules: &[&'static Rule], findings: &mut Vec<Finding>) {
    for rule in rules {
        for m in rule.regex.find_iter(content) {
            findings.push(Finding {
                rule_id: rule.id,
                severity: rule.severity,
                category: rule.category,
                message: rule.message.to_string(),
                file: file.to_path_buf(),
                line: Some(line_number(content, m.start())),
                snippet: Some(snippet_at(content, m.start())),
            });
        }
    }
}

/// 1-based line number of a byte offset: newlines before it, plus one.
fn line_number(content: &str, offset: usize) -> usize {
    content[..offset].bytes().filter(|&b| b == b'\n').count() + 1
}

/// The source line containing `offset`, trimmed and truncated.
fn snippet_at(content: &str, offset: usize) -> String {
    let start = content[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let end = content[offset..]
        .find('\n')
        .map(|i| offset + i)
        .unwrap_or(content.len());
    truncate_snippet(content[start..end].trim())
}

fn truncate_snippet(line: &str) -> String {
    if line.len() > SNIPPET_MAX {
        // Slice at a char boundary; a raw byte index can fall mid-codepoint
        // and panic on multi-byte UTF-8.
        let cut = line
            .char_indices()
            .nth(SNIPPET_MAX - 3)
            .map(|(i, _)| i)
            .unwrap_or(line.len());
        format!("{}...", &line[..cut])
    } else {
        line.to_string()
    }
}
