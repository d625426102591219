mod common;

use common::{run_jargon, TestEnv};

#[test]
fn extract_subcommand_is_available() {
    let output = run_jargon(&["extract", "--help"]);

    assert!(
        output.status.success(),
        "extract --help should succeed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn extract_reports_missing_transcription_file() {
    let output = run_jargon(&["extract", "does-not-exist.txt"]);

    assert!(
        !output.status.success(),
        "extract should fail for a missing transcription file"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to read transcription file"),
        "expected missing file error, got:\n{}",
        stderr
    );
}

#[test]
fn extract_rejects_unknown_format() {
    let env = TestEnv::new();
    let transcript = env.write_file("meeting.txt", "We use a WIP limit of 3.");

    let output = env.run(&[
        "extract",
        transcript.to_str().expect("utf-8 path"),
        "--format",
        "yaml",
    ]);

    assert!(
        !output.status.success(),
        "extract should fail for an unsupported format"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unsupported format"),
        "expected format error, got:\n{}",
        stderr
    );
}

#[test]
fn extract_requires_api_key() {
    let env = TestEnv::new();
    let transcript = env.write_file("meeting.txt", "We use a WIP limit of 3.");

    let output = env.run(&["extract", transcript.to_str().expect("utf-8 path")]);

    assert!(
        !output.status.success(),
        "extract should fail without a configured API key"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("API key is missing"),
        "expected missing API key error, got:\n{}",
        stderr
    );
}

#[test]
fn extract_rejects_empty_transcription() {
    let env = TestEnv::new();
    let transcript = env.write_file("empty.txt", "   \n");

    let output = env.run(&["extract", transcript.to_str().expect("utf-8 path")]);

    assert!(
        !output.status.success(),
        "extract should fail for an empty transcription"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Transcription is empty"),
        "expected empty transcription error, got:\n{}",
        stderr
    );
}
