use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const EN_US: &str = "{\n  \"a\": {\n    \"b\": \"B\"\n  }\n}\n";
const ZH_CN: &str = r#"{"a": {"b": "乙", "c": "丙"}}"#;

#[test]
fn test_remove_extra_dry_run_leaves_files() -> Result<()> {
    let test = CliTest::with_catalogs(&[("en-US", EN_US), ("zh-CN", ZH_CN)])?;

    let output = test.run(&["remove-extra", "--dry"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("would remove a.c"));
    assert!(out.contains("Would delete 1 key(s) in 1 file(s)."));
    assert!(out.contains("Run without --dry to delete these keys."));
    assert_eq!(test.read_catalog("zh-CN")?, ZH_CN);
    assert_eq!(test.read_catalog("en-US")?, EN_US);
    Ok(())
}

#[test]
fn test_remove_extra_rewrites_catalog() -> Result<()> {
    let test = CliTest::with_catalogs(&[("en-US", EN_US), ("zh-CN", ZH_CN)])?;

    let output = test.run(&["remove-extra"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("removed a.c"));
    assert!(out.contains("Deleted 1 key(s) in 1 file(s) (processed 1 key(s))."));
    assert_eq!(
        test.read_catalog("zh-CN")?,
        "{\n  \"a\": {\n    \"b\": \"乙\"\n  }\n}\n"
    );
    assert_eq!(test.read_catalog("en-US")?, EN_US);
    Ok(())
}

#[test]
fn test_remove_extra_is_idempotent() -> Result<()> {
    let test = CliTest::with_catalogs(&[("en-US", EN_US), ("zh-CN", ZH_CN)])?;

    test.run(&["remove-extra"])?;
    let after_first = test.read_catalog("zh-CN")?;
    let output = test.run(&["remove-extra"])?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("No extra keys found (reference en-US)"));
    assert_eq!(test.read_catalog("zh-CN")?, after_first);
    Ok(())
}

#[test]
fn test_remove_extra_nested_subtree() -> Result<()> {
    let test = CliTest::with_catalogs(&[
        ("en-US", r#"{"keep": 1}"#),
        ("zh-CN", r#"{"old": {"deep": {"leaf": 1}}, "keep": 1}"#),
    ])?;

    let output = test.run(&["remove-extra"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("removed old\n"));
    assert!(out.contains("skipped old.deep (parent path not found)"));
    assert!(out.contains("skipped old.deep.leaf (parent path not found)"));
    assert!(out.contains("  - skipped: 2 key(s)"));
    assert_eq!(test.read_catalog("zh-CN")?, "{\n  \"keep\": 1\n}\n");
    Ok(())
}

#[test]
fn test_remove_extra_preserves_member_order() -> Result<()> {
    let test = CliTest::with_catalogs(&[
        ("en-US", r#"{"zebra": 1, "alpha": 2}"#),
        ("zh-CN", r#"{"zebra": 1, "middle": 3, "alpha": 2}"#),
    ])?;

    let output = test.run(&["remove-extra"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_catalog("zh-CN")?,
        "{\n  \"zebra\": 1,\n  \"alpha\": 2\n}\n"
    );
    Ok(())
}

#[test]
fn test_remove_extra_never_adds_missing_keys() -> Result<()> {
    let test = CliTest::with_catalogs(&[
        ("en-US", r#"{"a": 1, "b": 2}"#),
        ("zh-CN", r#"{"a": 1}"#),
    ])?;

    let output = test.run(&["remove-extra"])?;

    assert!(output.status.success());
    assert_eq!(test.read_catalog("zh-CN")?, r#"{"a": 1}"#);
    Ok(())
}

#[test]
fn test_remove_extra_sequence_elements() -> Result<()> {
    let test = CliTest::with_catalogs(&[
        ("en-US", r#"{"steps": ["a"]}"#),
        ("zh-CN", r#"{"steps": ["a", "b"]}"#),
    ])?;

    let output = test.run(&["remove-extra"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("removed steps[1]"));
    assert_eq!(
        test.read_catalog("zh-CN")?,
        "{\n  \"steps\": [\n    \"a\"\n  ]\n}\n"
    );

    let second = test.run(&["remove-extra"])?;
    assert!(second.status.success());
    assert!(stdout(&second).contains("No extra keys found (reference en-US)"));
    Ok(())
}

#[test]
fn test_remove_extra_dry_run_matches_apply() -> Result<()> {
    let test = CliTest::with_catalogs(&[
        ("en-US", r#"{"keep": 1}"#),
        ("zh-CN", r#"{"old": {"deep": 1}, "keep": 1}"#),
    ])?;

    let dry = stdout(&test.run(&["remove-extra", "--dry"])?);
    assert!(dry.contains("would remove old\n"));
    assert!(dry.contains("would skip old.deep (parent path not found)"));
    assert!(dry.contains("Would delete 1 key(s) in 1 file(s)."));

    let applied = stdout(&test.run(&["remove-extra"])?);
    assert!(applied.contains("Deleted 1 key(s) in 1 file(s) (processed 2 key(s))."));
    Ok(())
}

#[test]
fn test_remove_extra_reports_clean_paths() -> Result<()> {
    let test = CliTest::with_catalogs(&[("en-US", EN_US), ("zh-CN", ZH_CN)])?;

    let output = test.run(&["remove-extra", "--dry"])?;

    let expected = test.root().join("messages").join("zh-CN.json");
    let out = stdout(&output);
    assert!(
        out.contains(&format!("zh-CN ({})", expected.display())),
        "stdout: {}",
        out
    );
    assert!(!out.contains("/./"));
    Ok(())
}
