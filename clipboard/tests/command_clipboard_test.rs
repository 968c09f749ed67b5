//! Round trips through real helper programs.
//!
//! Standard Unix tools stand in for `xclip` and friends: copy writes the
//! helper's stdin to a file, paste prints that file back.

#![cfg(unix)]

use clipfill_clipboard::{
    ClipboardBackend, ClipboardError, ClipboardProvider as _, CommandClipboard, HelperCommand,
};

fn file_backed_clipboard(dir: &tempfile::TempDir) -> CommandClipboard {
    let path = dir.path().join("selection");
    let path = path.to_str().expect("temp path should be UTF-8");
    let store = format!("cat > '{path}'");

    CommandClipboard::with_commands(
        "file",
        HelperCommand::new("sh", &["-c", store.as_str()]),
        HelperCommand::new("cat", &[path]),
    )
}

#[test]
fn test_copy_then_paste_through_helpers() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let mut clipboard = file_backed_clipboard(&dir);

    let text = "Texto de prueba desde pyperclip dentro de AutoKey";
    clipboard.copy(text).expect("copy should succeed");
    let pasted = clipboard.paste().expect("paste should succeed");

    assert_eq!(pasted, text);
}

#[test]
fn test_empty_text_round_trips() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let mut clipboard = file_backed_clipboard(&dir);

    clipboard.copy("").expect("copy should succeed");
    let pasted = clipboard.paste().expect("paste should succeed");

    assert_eq!(pasted, "");
}

#[test]
fn test_failing_paste_reports_stderr() {
    let mut clipboard = CommandClipboard::with_commands(
        "broken",
        HelperCommand::new("true", &[]),
        HelperCommand::new("sh", &["-c", "echo 'Error: Can not open display' >&2; exit 1"]),
    );

    let err = clipboard.paste().expect_err("paste should fail");
    match err {
        ClipboardError::CommandFailed {
            program, stderr, ..
        } => {
            assert_eq!(program, "sh");
            assert_eq!(stderr, "Error: Can not open display");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_failing_copy_reports_exit_status() {
    let mut clipboard = CommandClipboard::with_commands(
        "broken",
        HelperCommand::new("sh", &["-c", "cat > /dev/null; exit 3"]),
        HelperCommand::new("true", &[]),
    );

    let err = clipboard.copy("text").expect_err("copy should fail");
    assert!(
        matches!(err, ClipboardError::CommandFailed { ref status, .. } if status.contains('3')),
        "unexpected error: {err}"
    );
}

/// Larger than any pipe buffer, so the write cannot finish before the
/// helper exits.
const LARGE_PAYLOAD: usize = 4 * 1024 * 1024;

#[test]
fn test_helper_exiting_before_reading_reports_exit_status() {
    let mut clipboard = CommandClipboard::with_commands(
        "early-exit",
        HelperCommand::new("sh", &["-c", "exit 3"]),
        HelperCommand::new("true", &[]),
    );

    let err = clipboard
        .copy(&"x".repeat(LARGE_PAYLOAD))
        .expect_err("copy should fail");
    assert!(
        matches!(err, ClipboardError::CommandFailed { ref status, .. } if status.contains('3')),
        "unexpected error: {err}"
    );
}

#[test]
fn test_successful_helper_that_skips_input_reports_write_error() {
    let mut clipboard = CommandClipboard::with_commands(
        "early-exit",
        HelperCommand::new("sh", &["-c", "exit 0"]),
        HelperCommand::new("true", &[]),
    );

    let err = clipboard
        .copy(&"x".repeat(LARGE_PAYLOAD))
        .expect_err("copy should fail");
    assert!(
        matches!(err, ClipboardError::AccessError(ref msg) if msg.contains("failed to write to sh")),
        "unexpected error: {err}"
    );
}

#[test]
fn test_non_utf8_paste_is_rejected() {
    let mut clipboard = CommandClipboard::with_commands(
        "binary",
        HelperCommand::new("true", &[]),
        HelperCommand::new("printf", &["\\377\\376"]),
    );

    let err = clipboard.paste().expect_err("paste should fail");
    assert!(
        matches!(err, ClipboardError::InvalidUtf8(_)),
        "unexpected error: {err}"
    );
}

#[test]
fn test_every_command_backend_has_helpers() {
    for backend in ClipboardBackend::ALL {
        let helpers = CommandClipboard::for_backend(backend);
        assert_eq!(
            helpers.is_some(),
            backend != ClipboardBackend::Native,
            "unexpected helpers for {backend}"
        );
    }
}
