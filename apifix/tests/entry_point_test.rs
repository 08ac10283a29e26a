//! Tests for the shared entry point (argument handling and reporting).
#![allow(clippy::unwrap_used)]

use apifix::entry_point::run_with_args_to;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_run_rewrites_given_root() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("config.ts");
    fs::write(&file, "export const url = process.env.NEXT_PUBLIC_API_URL;\n").unwrap();

    let mut buffer = Vec::new();
    let code = run_with_args_to(
        vec![dir.path().to_string_lossy().to_string()],
        &mut buffer,
    )
    .unwrap();

    assert_eq!(code, 0);
    let output = String::from_utf8(buffer).unwrap();
    assert!(output.contains("Fixing "));
    assert!(output.contains("1 of 1 candidate files rewritten"));

    let content = fs::read_to_string(&file).unwrap();
    assert!(content.contains("export const url = API_BASE;"));
}

#[test]
fn test_run_reports_nothing_to_do() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("clean.ts"), "export const n = 1;\n").unwrap();

    let mut buffer = Vec::new();
    let code = run_with_args_to(
        vec![dir.path().to_string_lossy().to_string()],
        &mut buffer,
    )
    .unwrap();

    assert_eq!(code, 0);
    let output = String::from_utf8(buffer).unwrap();
    assert!(output.contains("no candidate file contained"));
}

#[test]
fn test_json_report() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("a.ts"),
        "const u = process.env.NEXT_PUBLIC_API_URL;\n",
    )
    .unwrap();

    let mut buffer = Vec::new();
    let code = run_with_args_to(
        vec![dir.path().to_string_lossy().to_string(), "--json".to_owned()],
        &mut buffer,
    )
    .unwrap();
    assert_eq!(code, 0);

    let output = String::from_utf8(buffer).unwrap();
    // The JSON report follows the per-file "Fixing" lines.
    let json_start = output.find('{').unwrap();
    let report: serde_json::Value = serde_json::from_str(&output[json_start..]).unwrap();
    assert_eq!(report["files_scanned"], 1);
    assert_eq!(report["files_modified"], 1);
    assert!(report["modified"][0]
        .as_str()
        .unwrap()
        .ends_with("a.ts"));
}

#[test]
fn test_help_exits_zero() {
    let mut buffer = Vec::new();
    let code = run_with_args_to(vec!["--help".to_owned()], &mut buffer).unwrap();
    assert_eq!(code, 0);
    let output = String::from_utf8(buffer).unwrap();
    assert!(output.contains("Usage"));
}

#[test]
fn test_unknown_flag_exits_one() {
    let mut buffer = Vec::new();
    let code = run_with_args_to(vec!["--bogus".to_owned()], &mut buffer).unwrap();
    assert_eq!(code, 1);
}

#[test]
fn test_exclude_flag_skips_folder() {
    let dir = tempdir().unwrap();
    let vendored = dir.path().join("vendored");
    fs::create_dir(&vendored).unwrap();
    fs::write(
        vendored.join("sdk.ts"),
        "const u = process.env.NEXT_PUBLIC_API_URL;\n",
    )
    .unwrap();

    let mut buffer = Vec::new();
    let code = run_with_args_to(
        vec![
            dir.path().to_string_lossy().to_string(),
            "--exclude".to_owned(),
            "vendored".to_owned(),
        ],
        &mut buffer,
    )
    .unwrap();
    assert_eq!(code, 0);

    let content = fs::read_to_string(vendored.join("sdk.ts")).unwrap();
    assert!(content.contains("process.env.NEXT_PUBLIC_API_URL"));
}
