//! Integration tests running the styled2panda binary against temp projects.
//!
//! These verify that:
//! - Rewritable declarations are changed on disk
//! - Skipped and failed declarations survive byte-for-byte
//! - --dry-run reports without touching files

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn run_binary(project: &Path, extra_args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_styled2panda"))
        .arg(project)
        .args(extra_args)
        .output()
        .expect("failed to run styled2panda")
}

fn write_project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    fs::write(dir.path().join("tsconfig.json"), "{}\n").unwrap();
    for (name, contents) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }
    dir
}

#[test]
fn rewrites_styled_declaration_on_disk() {
    let dir = write_project(&[(
        "src/Button.tsx",
        "const Button = styled.button`\n  color: red;\n  background-color: papayawhip;\n`;\n",
    )]);

    let output = run_binary(dir.path(), &[]);
    assert!(output.status.success(), "{:?}", output);

    let contents = fs::read_to_string(dir.path().join("src/Button.tsx")).unwrap();
    assert_eq!(
        contents,
        "const Button = styled('button', {\n  \"base\": {\n    \"color\": \"red\",\n    \"backgroundColor\": \"papayawhip\"\n  }\n});\n"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Button rewritten"), "{stdout}");
    assert!(stdout.contains("1 rewritten, 0 skipped, 0 failed"), "{stdout}");
}

#[test]
fn template_with_expressions_survives_byte_for_byte() {
    let source = "const Card = styled.div`\n  color: ${props => props.color};\n`;\n";
    let dir = write_project(&[("src/Card.tsx", source)]);

    let output = run_binary(dir.path(), &[]);
    assert!(output.status.success(), "{:?}", output);

    let contents = fs::read_to_string(dir.path().join("src/Card.tsx")).unwrap();
    assert_eq!(contents, source);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("skipped (template contains expressions)"), "{stdout}");
}

#[test]
fn failed_literal_survives_and_is_reported() {
    let source = "const Bad = styled.div`\n  color red;\n`;\n";
    let dir = write_project(&[("src/Bad.ts", source)]);

    let output = run_binary(dir.path(), &[]);
    assert!(output.status.success(), "{:?}", output);

    let contents = fs::read_to_string(dir.path().join("src/Bad.ts")).unwrap();
    assert_eq!(contents, source);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("failed (line 2: malformed declaration"), "{stdout}");
}

#[test]
fn dry_run_reports_but_leaves_files_untouched() {
    let source = "const Button = styled.button`\n  color: red;\n`;\n";
    let dir = write_project(&[("src/Button.tsx", source)]);

    let output = run_binary(dir.path(), &["--dry-run"]);
    assert!(output.status.success(), "{:?}", output);

    let contents = fs::read_to_string(dir.path().join("src/Button.tsx")).unwrap();
    assert_eq!(contents, source);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Button rewritten"), "{stdout}");
    assert!(stdout.contains("(1 changed)"), "{stdout}");
}

#[test]
fn missing_tsconfig_is_a_driver_error() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("App.tsx"),
        "const A = styled.div`\n  color: red;\n`;\n",
    )
    .unwrap();

    let output = run_binary(dir.path(), &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot find tsconfig.json"), "{stderr}");
}

#[test]
fn ignore_globs_exclude_files() {
    let source = "const A = styled.div`\n  color: red;\n`;\n";
    let dir = write_project(&[("src/generated/A.ts", source)]);

    let output = run_binary(dir.path(), &["--ignore", "**/generated/**"]);
    assert!(output.status.success(), "{:?}", output);

    let contents = fs::read_to_string(dir.path().join("src/generated/A.ts")).unwrap();
    assert_eq!(contents, source);
}

#[test]
fn json_report_lists_declarations() {
    let dir = write_project(&[(
        "src/App.tsx",
        "const A = styled.div`\n  color: red;\n`;\nconst B = css`\n  color: blue;\n`;\n",
    )]);

    let output = run_binary(dir.path(), &["--output", "json"]);
    assert!(output.status.success(), "{:?}", output);

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["rewritten"], 1);
    assert_eq!(report["skipped"], 1);
    assert_eq!(report["files_changed"], 1);
    let reports = report["reports"].as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["declaration"], "A");
    assert_eq!(reports[0]["status"]["kind"], "rewritten");
    assert_eq!(reports[1]["status"]["kind"], "skipped-tag-shape");
}
