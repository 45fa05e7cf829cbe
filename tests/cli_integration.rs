//! Integration tests for the `txt2bin` binary.
//!
//! stdin and stdout are redirected to files so the exact bytes written
//! (or not written) can be checked.

use std::fs::{self, File};
use std::path::Path;
use std::process::{Command, Stdio};

use tempfile::tempdir;

/// Run `txt2bin` with `input` on stdin; returns (exit code, stdout bytes, stderr).
fn run_txt2bin(dir: &Path, input: &[u8]) -> (i32, Vec<u8>, String) {
    let in_path = dir.join("index.txt");
    let out_path = dir.join("index.bin");
    fs::write(&in_path, input).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_txt2bin"))
        .stdin(Stdio::from(File::open(&in_path).unwrap()))
        .stdout(Stdio::from(File::create(&out_path).unwrap()))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    let stdout = fs::read(&out_path).unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (output.status.code().unwrap(), stdout, stderr)
}

#[test]
fn test_successful_conversion() {
    let dir = tempdir().unwrap();
    let (code, stdout, stderr) = run_txt2bin(dir.path(), b"2 0 1\n5 abc -3 7\n");

    assert_eq!(code, 0);
    assert_eq!(stdout, vec![2, 0, 1, 5, 7, b'a', b'b', b'c', 0xfd]);
    assert!(stderr.is_empty());
}

#[test]
fn test_failure_writes_nothing() {
    let dir = tempdir().unwrap();
    // Second declared group is missing; the first must not leak out.
    let (code, stdout, stderr) = run_txt2bin(dir.path(), b"2 0 2\n5 abc -3 7\n");

    assert_eq!(code, 3);
    assert!(stdout.is_empty());
    assert!(stderr.contains("group 1, TP[0]"));
}

#[test]
fn test_exit_code_per_error_class() {
    let dir = tempdir().unwrap();
    let cases: [(&[u8], i32); 4] = [
        (b"2 0", 2),
        (b"2 0 1 5 abc x 7", 3),
        (b"2 0 1 5 abc 200 7", 4),
        (b"2 0 1 5 ab", 5),
    ];

    for (input, expected) in cases {
        let (code, stdout, _) = run_txt2bin(dir.path(), input);
        assert_eq!(code, expected, "input {:?}", String::from_utf8_lossy(input));
        assert!(stdout.is_empty());
    }
}

#[test]
fn test_arguments_are_ignored() {
    let dir = tempdir().unwrap();
    let in_path = dir.path().join("index.txt");
    fs::write(&in_path, b"1 0 1 9").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_txt2bin"))
        .arg("--verbose")
        .stdin(Stdio::from(File::open(&in_path).unwrap()))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(output.stdout, vec![1, 0, 1, 9]);
    assert!(String::from_utf8_lossy(&output.stderr).contains("takes no arguments"));
}
