#![cfg(feature = "cli")]

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Runs the binary against an isolated config so the host's settings never leak in.
fn run(args: &[&str], stdin: Option<&str>) -> Output {
    let tmp_dir = TempDir::new().unwrap();
    let config = tmp_dir.path().join("logline.toml");
    fs::write(&config, "[formatter]\ntimezone = \"utc\"\nlocale = \"C\"\n").unwrap();

    let mut child = Command::new(env!("CARGO_BIN_EXE_logline"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run logline");

    {
        let mut pipe = child.stdin.take().unwrap();
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).unwrap();
        }
    }

    child.wait_with_output().unwrap()
}

#[test]
fn line_formats_the_example_event() {
    let output = run(
        &["line", "-s", "kernel.boot", "-t", "50709000", "started in {0}ms", "42"],
        None,
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "14:05:09 kernel.boot: INFO: started in 42ms");
}

#[test]
fn line_with_missing_argument_fails() {
    let output = run(&["line", "-t", "0", "value: {0}"], None);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("argument mismatch"));
}

#[test]
fn json_formats_stdin_events() {
    let input = concat!(
        r#"{"timestamp_millis":1000,"source_name":"a","level":"debug","raw_message":"x={0}","message_args":["y"]}"#,
        "\n",
    );
    let output = run(&["json"], Some(input));
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "00:00:01 a: DEBUG: x=y");
}

#[test]
fn levels_respects_locale_flag() {
    let output = run(&["levels", "--locale", "de_DE"], None);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("warn   WARNUNG"));
    assert!(stdout.contains("error  FEHLER"));
}

#[test]
fn missing_include_is_reported_on_stderr() {
    let tmp_dir = TempDir::new().unwrap();
    let config = tmp_dir.path().join("base.toml");
    let gone = tmp_dir.path().join("gone.toml");
    fs::write(
        &config,
        format!("source = \"{}\"\n[formatter]\ntimezone = \"utc\"\nlocale = \"C\"\n", gone.display()),
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_logline"))
        .arg("--config")
        .arg(&config)
        .args(["line", "-t", "0", "hi"])
        .output()
        .expect("failed to run logline");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim_end(), "00:00:00 : INFO: hi");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Source file not found"), "{stderr}");
    assert!(stderr.contains("gone.toml"), "{stderr}");
}

#[test]
fn unknown_command_exits_failure() {
    let output = run(&["does-not-exist"], None);
    assert!(!output.status.success());
}
