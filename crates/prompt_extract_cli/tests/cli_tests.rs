use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

const SOURCE: &str = "UNIFIED_SYSTEM_PROMPT = \"\"\"uk case!\"\"\"\nUNIFIED_SYSTEM_PROMPT_USA = \"\"\"\nusa\ncase\n\"\"\"\n";

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_prompt_extract"))
        .args(args)
        .current_dir(dir)
        .env_remove("PROMPT_EXTRACT_ROOT")
        .env_remove("PROMPT_EXTRACT_SOURCE")
        .env_remove("PROMPT_EXTRACT_OUTPUT")
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).unwrap()
}

#[test]
fn missing_source_reports_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_str().unwrap();
    let out = run(dir.path(), &["--root", root]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout(&out),
        format!(
            "Error: Source file not found at {}\n",
            dir.path()
                .join("../MPC_server/server/defense_lawyer/defense_lawyer_client.py")
                .display()
        )
    );
    assert!(!dir.path().join("backend").exists());
}

#[test]
fn unreadable_source_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.json");
    let out = run(
        dir.path(),
        &[
            "--source",
            dir.path().to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ],
    );
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "");
    assert!(!output.exists());
}

#[test]
fn extract_prints_summary() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("client.py");
    let output = dir.path().join("backend").join("lawyer_prompts.json");
    fs::write(&source, SOURCE).unwrap();

    let out = run(
        dir.path(),
        &[
            "extract",
            "--source",
            source.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ],
    );
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout(&out),
        format!(
            "Extracting prompts from {}...\n\nExtracted 2 prompts:\n  - case_ai_uk: 8 chars (uk case!...)\n  - case_ai_usa: 8 chars (usa case...)\n\nSaved to {}\n",
            source.display(),
            output.display()
        )
    );
    assert!(output.exists());
}

#[test]
fn flags_before_subcommand_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("client.py");
    let output = dir.path().join("out.json");
    fs::write(&source, SOURCE).unwrap();

    let out = run(
        dir.path(),
        &[
            "--source",
            source.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "extract",
        ],
    );
    assert_eq!(out.status.code(), Some(2));
    assert_eq!(stdout(&out), "");
    assert!(!output.exists());
}

#[test]
fn show_falls_back_for_empty_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let prompts = dir.path().join("e.json");
    fs::write(&prompts, r#"{"case_ai_uk": ""}"#).unwrap();

    let out = run(
        dir.path(),
        &[
            "show",
            "--agent",
            "case_ai",
            "--country",
            "uk",
            "--prompts",
            prompts.to_str().unwrap(),
        ],
    );
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).starts_with(
        "You are the JustHemis Lawyer AI - an elite legal AI assistant specializing in UK law."
    ));
}
