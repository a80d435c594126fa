use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_compare_all_match() -> Result<()> {
    let test = CliTest::with_catalogs(&[
        ("zh-CN", r#"{"a": {"b": 1}, "c": 2}"#),
        ("en-US", r#"{"a": {"b": 1}, "c": 2}"#),
    ])?;

    let output = test.run(&["compare"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Reference en-US: 3 keys"));
    assert!(out.contains("(reference)"));
    assert!(out.contains("All languages match en-US"));
    Ok(())
}

#[test]
fn test_compare_reports_differences() -> Result<()> {
    let test = CliTest::with_catalogs(&[
        ("en-US", r#"{"a": 1, "b": 2}"#),
        ("ja-JP", r#"{"a": 1}"#),
        ("zh-CN", r#"{"a": 1, "b": 2, "c": 3}"#),
    ])?;

    let output = test.run(&["compare"])?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("ja-JP       1      -1"));
    assert!(out.contains("zh-CN       3      +1"));
    assert!(out.contains("2 language(s) differ from en-US"));
    assert!(out.contains("Run with --details to list the differing keys."));
    assert!(!out.contains("missing b"));
    Ok(())
}

#[test]
fn test_compare_details() -> Result<()> {
    let test = CliTest::with_catalogs(&[
        ("en-US", r#"{"a": 1, "b": 2}"#),
        ("zh-CN", r#"{"a": 1, "z": 2}"#),
    ])?;

    let output = test.run(&["compare", "--details"])?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("same count, different keys (1 missing, 1 extra)"));
    assert!(out.contains("missing b"));
    assert!(out.contains("extra z"));
    Ok(())
}

#[test]
fn test_compare_reference_override() -> Result<()> {
    let test = CliTest::with_catalogs(&[
        ("en-US", r#"{"a": 1}"#),
        ("zh-CN", r#"{"a": 1, "b": 2}"#),
    ])?;

    let output = test.run(&["compare", "--reference", "zh-CN"])?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("Reference zh-CN: 2 keys"));
    assert!(out.contains("en-US       1      -1"));
    Ok(())
}

#[test]
fn test_compare_sequences_without_indexing() -> Result<()> {
    let test = CliTest::with_catalogs(&[
        ("en-US", r#"{"steps": ["one", "two"]}"#),
        ("zh-CN", r#"{"steps": ["一"]}"#),
    ])?;
    test.write_file(".lockstep.json", r#"{"indexSequences": false}"#)?;

    let output = test.run(&["compare"])?;

    assert!(output.status.success(), "stdout: {}", stdout(&output));
    assert!(stdout(&output).contains("Reference en-US: 1 keys"));
    Ok(())
}
