//! Integration tests for the sorting-network binary.
//!
//! These tests run the compiled binary and compare its output against the
//! golden `.expect.txt` / `.expect.svg` files in `demos/`.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Path to the compiled binary, provided by cargo for integration tests.
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_sorting-network"))
}

/// Get the demos directory.
fn demos_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("demos");
    path
}

/// Run the binary with the given stdin input and CLI args.
fn run_raw(input: &str, args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::Write;
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(input.as_bytes()).ok();
            }
            child.wait_with_output()
        })
        .expect("Failed to run binary")
}

/// Run the binary and require success. Returns stdout.
fn run_binary(input: &str, args: &[&str]) -> String {
    let output = run_raw(input, args);
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Non-UTF8 output")
}

/// Find all (name, net_file, expect_file) triples with the given golden extension.
fn find_demo_pairs(expect_ext: &str) -> Vec<(String, PathBuf, PathBuf)> {
    let dir = demos_dir();
    let mut pairs = Vec::new();
    if let Ok(entries) = fs::read_dir(&dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("net") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let expect_path = dir.join(format!("{name}.{expect_ext}"));
            if expect_path.exists() {
                pairs.push((name.to_string(), path.clone(), expect_path));
            }
        }
    }
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    pairs
}

fn check_golden(expect_ext: &str, args: &[&str]) {
    let pairs = find_demo_pairs(expect_ext);
    assert!(!pairs.is_empty(), "No *.{expect_ext} demos in {:?}", demos_dir());

    let mut failures = Vec::new();
    for (name, net_file, expect_file) in &pairs {
        let src = fs::read_to_string(net_file)
            .unwrap_or_else(|e| panic!("Cannot read {:?}: {}", net_file, e));
        let expected = fs::read_to_string(expect_file)
            .unwrap_or_else(|e| panic!("Cannot read {:?}: {}", expect_file, e));
        let actual = run_binary(&src, args);
        if actual != expected {
            failures.push(format!("FAIL: {name}\n--- expected\n{expected}--- actual\n{actual}"));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Golden file mismatches ({}/{}):\n{}",
            failures.len(),
            pairs.len(),
            failures.join("\n")
        );
    }
}

// ─── Golden file tests ──────────────────────────────────────────────────────

#[test]
fn test_check_matches_expect() {
    check_golden("expect.txt", &["--check"]);
}

#[test]
fn test_svg_matches_expect() {
    check_golden("expect.svg", &["--svg"]);
}

// ─── Flag tests ─────────────────────────────────────────────────────────────

#[test]
fn test_input_flag_reads_file() {
    let path = demos_dir().join("sort4.net");
    let out = run_binary("", &["--check", "--input", path.to_str().unwrap()]);
    assert_eq!(out, "It is a sorting network!\n");
}

#[test]
fn test_sort_flag() {
    let out = run_binary("0:1,2:3\n0:2,1:3\n1:2\n", &["--sort", "4,-1,3,2"]);
    assert_eq!(out, "-1\n2\n3\n4\n");
}

#[test]
fn test_actions_run_in_order() {
    let out = run_binary("0:1", &["--svg", "--sort", "2,1", "--check"]);
    assert!(out.starts_with("It is a sorting network!\n1\n2\n<?xml"));
    assert!(out.ends_with("</svg>\n"));
}

#[test]
fn test_no_action_prints_canonical_network() {
    let out = run_binary(" 1:0 ,\n3:2\n", &[]);
    assert_eq!(out, "0:1,2:3\n");
}

#[test]
fn test_output_flag_writes_file() {
    let path = std::env::temp_dir().join(format!("sorting-network-{}.txt", std::process::id()));
    let out = run_binary("0:1", &["--check", "-o", path.to_str().unwrap()]);
    assert!(out.is_empty());
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, "It is a sorting network!\n");
    fs::remove_file(&path).ok();
}

#[test]
fn test_threads_flag() {
    let src = fs::read_to_string(demos_dir().join("batcher8.net")).unwrap();
    let out = run_binary(&src, &["--check", "--threads", "2"]);
    assert_eq!(out, "It is a sorting network!\n");
}

#[test]
fn test_scale_flag_scales_glyphs() {
    let out = run_binary("0:1", &["--svg", "--scale", "2"]);
    assert!(out.contains(r#"width="140px" height="120px""#));
    assert!(out.contains(r#"r="6""#));
    assert!(out.contains("stroke-width:2"));
}

// ─── Error tests ────────────────────────────────────────────────────────────

fn assert_fails(input: &str, args: &[&str], needle: &str) {
    let output = run_raw(input, args);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(needle),
        "stderr {stderr:?} does not mention {needle:?}"
    );
}

#[test]
fn test_malformed_token_fails() {
    assert_fails("0:1,2-3", &["--check"], "invalid comparator: 2-3");
}

#[test]
fn test_equal_inputs_fails() {
    assert_fails("0:1\n2:2", &["--check"], "cannot be the same");
}

#[test]
fn test_sort_out_of_range_fails() {
    assert_fails("0:1,2:3", &["--sort", "3,2,1"], "wire 3");
}

#[test]
fn test_sort_invalid_number_fails() {
    assert_fails("0:1", &["--sort", "1,x"], "invalid number 'x'");
}

#[test]
fn test_max_wires_fails() {
    assert_fails("0:1,1:2,0:1", &["--check", "--max-wires", "2"], "limited to 2");
}

#[test]
fn test_missing_input_file_fails() {
    assert_fails("", &["--input", "/nonexistent/network.net"], "cannot read");
}

#[test]
fn test_scale_out_of_range_is_rejected() {
    for scale in ["--scale=0", "--scale=-5", "--scale=65", "--scale=300000000000000000"] {
        let output = run_raw("0:1", &["--svg", scale]);
        assert!(!output.status.success(), "{scale} was accepted");
        assert!(output.stdout.is_empty(), "{scale} rendered output");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("--scale"), "stderr {stderr:?} does not name the flag");
    }
}
