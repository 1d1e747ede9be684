//! CLI integration tests for flacinfo
//!
//! Runs the flacinfo binary against generated files and checks its output.

mod common;

use std::process::{Command, Output};

use common::{streaminfo_body, vorbis_body, write_temp_flac, FlacBuilder, StreamInfoFields};

/// Run flacinfo and return output
fn run_flacinfo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_flacinfo"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

fn stdout_string(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_string(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn sample_file() -> tempfile::NamedTempFile {
    let data = FlacBuilder::new()
        .block(0, false, &streaminfo_body(&StreamInfoFields::default()))
        .block(4, true, &vorbis_body("test vendor", &["TITLE=One", "GENRE=Rock"]))
        .build();
    write_temp_flac(&data)
}

#[test]
fn test_text_output() {
    let file = sample_file();
    let output = run_flacinfo(&["-f", file.path().to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr_string(&output));

    let stdout = stdout_string(&output);
    assert!(stdout.contains("METADATA block #0\n  type: 0 (STREAMINFO)\n"));
    assert!(stdout.contains("  sample_rate: 44100\n"));
    assert!(stdout.contains("  channels: 2\n"));
    assert!(stdout.contains("METADATA block #1\n  type: 4 (VORBIS_COMMENT)\n  is last: true\n"));
    assert!(stdout.contains("  vendor string: test vendor\n"));
    assert!(stdout.contains("    comment[1]: GENRE=Rock\n"));
}

#[test]
fn test_json_output() {
    let file = sample_file();
    let output = run_flacinfo(&["--file", file.path().to_str().unwrap(), "--format", "json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["blocks"][0]["body"]["bits_per_sample"], 16);
    assert_eq!(json["blocks"][1]["body"]["vendor_string"], "test vendor");
    assert_eq!(json["blocks"][1]["header"]["block_type"]["name"], "VORBIS_COMMENT");
}

#[test]
fn test_not_a_flac_file() {
    let file = write_temp_flac(b"RIFF\x24\x00\x00\x00WAVE");
    let output = run_flacinfo(&["-f", file.path().to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stdout_string(&output).is_empty());
    assert!(stderr_string(&output).contains("not a FLAC stream"));
}

#[test]
fn test_empty_file_is_not_flac() {
    let file = write_temp_flac(b"");
    let output = run_flacinfo(&["-f", file.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_string(&output).contains("not a FLAC stream"));
}

#[test]
fn test_huge_buffer_size_on_small_file() {
    let file = sample_file();
    let output = run_flacinfo(&[
        "-f",
        file.path().to_str().unwrap(),
        "--buffer-size",
        &usize::MAX.to_string(),
    ]);
    assert!(output.status.success(), "stderr: {}", stderr_string(&output));
    assert!(stdout_string(&output).contains("type: 4 (VORBIS_COMMENT)"));
}

#[test]
fn test_missing_file() {
    let output = run_flacinfo(&["-f", "/nonexistent/path/song.flac"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_string(&output).contains("failed to read FLAC metadata"));
}

#[test]
fn test_quiet_mode() {
    let file = sample_file();
    let output = run_flacinfo(&["-q", "-f", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}
