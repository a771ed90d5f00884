use std::fs;

use skillscan::config::Config;
use skillscan::finding::Severity;
use skillscan::scan::run_scan;

#[test]
fn hidden_and_dependency_dirs_are_pruned() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("SKILL.md"),
        "---\ndescription: Sync helper\n---\n# Sync\n\nKeeps folders tidy.\n",
    )
    .unwrap();

    let scripts = dir.path().join("scripts");
    fs::create_dir_all(&scripts).unwrap();
    fs::write(scripts.join("install.sh"), "sudo make install\n").unwrap();

    // All of these would raise findings if they were walked.
    let hidden = dir.path().join(".ci");
    fs::create_dir_all(&hidden).unwrap();
    fs::write(hidden.join("deploy.sh"), "eval(payload)\n").unwrap();

    let node_modules = dir.path().join("node_modules/pkg");
    fs::create_dir_all(&node_modules).unwrap();
    fs::write(node_modules.join("index.js"), "eval(payload)\n").unwrap();

    let nested = dir.path().join("vendor/sub/node_modules");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("helper.sh"), "eval(payload)\n").unwrap();

    let report = run_scan(dir.path(), &Config::default());

    assert_eq!(report.files_scanned, 2, "only SKILL.md and install.sh are walked");
    assert_eq!(report.findings.len(), 1, "{:?}", report.findings);
    assert_eq!(report.findings[0].rule_id, "exec/sudo");
    assert!(report.findings.iter().all(|f| {
        let p = f.file.to_string_lossy();
        !p.contains("node_modules") && !p.contains("/.ci/")
    }));
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn only_known_extensions_are_scanned() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), "eval(x)\n").unwrap();
    fs::write(dir.path().join("build.gradle"), "eval(x)\n").unwrap();
    fs::write(dir.path().join("run.py"), "eval(x)\n").unwrap();

    let report = run_scan(dir.path(), &Config::default());

    assert_eq!(report.files_scanned, 1);
    assert_eq!(report.findings.len(), 1);
    assert!(report.findings[0].file.ends_with("run.py"));
    assert_eq!(report.findings[0].severity, Severity::Critical);
}

#[test]
fn manifest_is_detected_case_insensitively() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("skill.md"), "# Bare\n").unwrap();

    let report = run_scan(dir.path(), &Config::default());

    assert_eq!(report.files_scanned, 1);
    assert!(
        report
            .findings
            .iter()
            .any(|f| f.rule_id == "manifest/missing-description"),
        "lowercase skill.md still gets structural checks: {:?}",
        report.findings
    );
}

#[test]
fn single_file_root_bypasses_the_extension_filter() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("payload.dat");
    fs::write(&file, "eval(danger)\n").unwrap();

    let report = run_scan(&file, &Config::default());

    assert_eq!(report.files_scanned, 1);
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].rule_id, "exec/dynamic-eval");
}

#[test]
fn explicitly_named_hidden_root_is_scanned() {
    let dir = tempfile::tempdir().unwrap();
    let hidden_root = dir.path().join(".workspace");
    fs::create_dir_all(&hidden_root).unwrap();
    fs::write(hidden_root.join("task.sh"), "sudo reboot\n").unwrap();

    // Hidden entries are pruned below the root, never the root itself.
    let report = run_scan(&hidden_root, &Config::default());

    assert_eq!(report.files_scanned, 1);
    assert_eq!(report.findings.len(), 1);
}

#[test]
fn unreadable_file_lands_in_the_error_channel() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bin.sh"), b"\xff\xfe not utf-8").unwrap();
    fs::write(dir.path().join("good.sh"), "sudo ok\n").unwrap();

    let report = run_scan(dir.path(), &Config::default());

    assert_eq!(report.errors.len(), 1, "{:?}", report.errors);
    assert!(report.errors[0].path.ends_with("bin.sh"));
    // The bad file produces no findings and the scan continues past it.
    assert_eq!(report.files_scanned, 1);
    assert_eq!(report.findings.len(), 1);
    assert!(report.findings[0].file.ends_with("good.sh"));
    // Read failures never gate.
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn walk_order_is_sorted_and_stable() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.sh"), "sudo b\n").unwrap();
    fs::write(dir.path().join("a.sh"), "sudo a\n").unwrap();

    let first = run_scan(dir.path(), &Config::default());
    let second = run_scan(dir.path(), &Config::default());

    assert_eq!(first.findings.len(), 2);
    assert!(first.findings[0].file.ends_with("a.sh"));
    assert!(first.findings[1].file.ends_with("b.sh"));

    let key = |r: &skillscan::finding::ScanReport| {
        r.findings
            .iter()
            .map(|f| (f.rule_id, f.file.clone(), f.line))
            .collect::<Vec<_>>()
    };
    assert_eq!(key(&first), key(&second));
}
