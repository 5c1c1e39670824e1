use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::tempdir;

#[test]
fn cli_highlight_reads_path() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file_path = dir.path().join("sample.py");
    fs::write(&file_path, "def greet():\n    return 'hi'\n")?;

    let output = Command::new(env!("CARGO_BIN_EXE_highlight-svg-mcp"))
        .args([
            "highlight",
            "--path",
            file_path.to_string_lossy().as_ref(),
            "--language",
            "python",
            "--width",
            "640",
            "--background",
            "#222222",
        ])
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains(r#"width="640" height="90""#));
    assert!(stdout.contains(r##"fill="#222222""##));
    assert!(stdout.contains("language-python"));
    Ok(())
}

#[test]
fn cli_highlight_reads_stdin_and_reports_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_highlight-svg-mcp"))
        .args(["highlight", "--json", "--language", "not-a-real-language"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;

    {
        let mut stdin = child.stdin.take().expect("stdin available");
        stdin.write_all(b"let x = 1;")?;
    }

    let output = child.wait_with_output()?;
    assert!(output.status.success());
    let structured: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(structured["fallback"], serde_json::json!(true));
    assert_eq!(structured["grammar"], "JavaScript");
    assert_eq!(structured["language"], "not-a-real-language");
    Ok(())
}

#[test]
fn cli_highlight_missing_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::new(env!("CARGO_BIN_EXE_highlight-svg-mcp"))
        .args(["highlight", "--path", "/tmp/definitely-missing-source-file.js"])
        .output()?;

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}
