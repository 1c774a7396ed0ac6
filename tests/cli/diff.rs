use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_diff_without_previous_export() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "hi"}"#)])?;

    assert_cmd_snapshot!(test.diff_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
      No previous export at ./export/translations.csv, nothing to compare

    ----- stderr -----
    ");
    assert!(!test.root().join("export").exists());
    Ok(())
}

#[test]
fn test_diff_reports_pending_changes() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "hi", "z": "zed"}"#)])?;
    test.export(&[])?;
    let before = test.read_file("export/translations.csv")?;

    test.write_locale("en", r#"{"a": "hello", "b": "bye"}"#)?;
    let mut cmd = test.diff_command();
    cmd.arg("--show-deleted");

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 1
    ----- stdout -----
    NEW     b
    UPDATE  a
    DELETE  z

    ✘ 3 changes since the last export (1 new, 1 updated, 1 deleted)

    ----- stderr -----
    ");

    // Nothing is written
    assert_eq!(test.read_file("export/translations.csv")?, before);
    assert!(test.files_with_prefix("export", "journal")?.is_empty());
    Ok(())
}

#[test]
fn test_diff_clean_after_export() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "hi"}"#)])?;
    test.export(&[])?;

    assert_cmd_snapshot!(test.diff_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ No changes since the last export

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_diff_only_deletions_hidden() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "hi", "z": "zed"}"#)])?;
    test.export(&[])?;

    test.write_locale("en", r#"{"a": "hi"}"#)?;

    assert_cmd_snapshot!(test.diff_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ No changes since the last export
      1 deleted key hidden (use --show-deleted to show)

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_diff_new_keys_with_hidden_deletions() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", r#"{"a": "hi", "z": "zed"}"#),
        ("fr", r#"{"a": "salut", "z": "zède"}"#),
    ])?;
    test.export(&[])?;

    test.write_locale("en", r#"{"a": "hi", "c": "see", "b": "bee"}"#)?;
    test.write_locale("fr", r#"{"a": "salut"}"#)?;

    assert_cmd_snapshot!(test.diff_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    NEW     c
    NEW     b

    ✘ 2 changes since the last export (2 new, 0 updated, 0 deleted)
      1 deleted key hidden (use --show-deleted to show)

    ----- stderr -----
    ");
    Ok(())
}
