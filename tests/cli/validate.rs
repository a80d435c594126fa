use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, stderr, stdout};

const ZH_CN: &str = "{\n  \"a\": {\n    \"b\": \"乙\"\n  }\n}\n";
const EN_US: &str = "{\n  \"a\": {\n    \"b\": \"B\"\n  }\n}\n";

#[test]
fn test_validate_passes() -> Result<()> {
    let test = CliTest::with_catalogs(&[("zh-CN", ZH_CN), ("en-US", EN_US)])?;

    let output = test.run(&["validate"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("All files have the same line count"));
    assert!(out.contains("All validations passed (2 catalog files)"));
    Ok(())
}

#[test]
fn test_validate_fails_on_line_parity_only() -> Result<()> {
    // Same structure, different formatting.
    let test = CliTest::with_catalogs(&[("zh-CN", ZH_CN), ("en-US", "{\"a\": {\"b\": \"B\"}}\n")])?;

    let output = test.run(&["validate"])?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("File line counts are inconsistent"));
    assert!(out.contains("✓ en-US: structure matches zh-CN"));
    assert!(out.contains("Validation failed"));
    Ok(())
}

#[test]
fn test_validate_fails_on_structure() -> Result<()> {
    let test = CliTest::with_catalogs(&[
        ("zh-CN", ZH_CN),
        ("en-US", "{\n  \"a\": {\n    \"c\": \"C\"\n  }\n}\n"),
    ])?;

    let output = test.run(&["validate"])?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("All files have the same line count"));
    assert!(out.contains("✘ en-US: 1 missing, 1 extra"));
    Ok(())
}

#[test]
fn test_validate_silent() -> Result<()> {
    let test = CliTest::with_catalogs(&[("zh-CN", ZH_CN), ("en-US", "{}")])?;

    let output = test.run(&["validate", "--silent"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    Ok(())
}

#[test]
fn test_quick_check_passed() -> Result<()> {
    let test = CliTest::with_catalogs(&[("zh-CN", ZH_CN), ("en-US", EN_US)])?;

    let output = test.run(&["quick-check"])?;

    assert!(output.status.success());
    assert_snapshot!(stdout(&output), @"✓ Quick check passed");
    Ok(())
}

#[test]
fn test_quick_check_failed() -> Result<()> {
    let test = CliTest::with_catalogs(&[("zh-CN", ZH_CN), ("en-US", "{}\n")])?;

    let output = test.run(&["quick-check"])?;

    assert_eq!(output.status.code(), Some(1));
    assert_snapshot!(stdout(&output), @"✘ Quick check failed");
    Ok(())
}

#[test]
fn test_validate_with_explicit_languages() -> Result<()> {
    let test = CliTest::with_catalogs(&[
        ("zh-CN", ZH_CN),
        ("en-US", EN_US),
        ("ja-JP", "{}"),
    ])?;

    let output = test.run(&["validate", "--languages", "zh-CN,en-US"])?;

    assert!(output.status.success(), "stdout: {}", stdout(&output));
    assert!(!stdout(&output).contains("ja-JP"));
    Ok(())
}

#[test]
fn test_validate_roster_file() -> Result<()> {
    let test = CliTest::with_catalogs(&[("zh-CN", ZH_CN), ("en-US", EN_US), ("ja-JP", "{}")])?;
    test.write_file(
        "src/i18n/config.ts",
        r#"export const SUPPORTED_LANGUAGES = {
  'zh-CN': '简体中文',
  'en-US': 'English',
} as const;
"#,
    )?;
    test.write_file(".lockstep.json", r#"{"rosterFile": "src/i18n/config.ts"}"#)?;

    let output = test.run(&["validate"])?;

    assert!(output.status.success(), "stdout: {}", stdout(&output));
    assert!(!stdout(&output).contains("ja-JP"));
    Ok(())
}

#[test]
fn test_validate_unknown_config_field() -> Result<()> {
    let test = CliTest::with_catalogs(&[("zh-CN", ZH_CN), ("en-US", EN_US)])?;
    test.write_file(".lockstep.json", r#"{"defaultLocale": "en"}"#)?;

    let output = test.run(&["validate"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("failed to parse config file"));
    Ok(())
}
