use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .trexrc.json

    ----- stderr -----
    ");

    let content = test.read_file(".trexrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    for field in ["localesDir", "outputDir", "keyColumn", "showDeleted", "delimiter"] {
        assert!(parsed.get(field).is_some(), "Config should have '{field}' field");
    }
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".trexrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: .trexrc.json already exists
    ");
    assert_eq!(test.read_file(".trexrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "hi"}"#)])?;

    test.command().arg("init").output()?;
    test.export(&[])?;

    assert!(test.root().join("export/translations.csv").exists());
    Ok(())
}
