use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr};

#[test]
fn test_export_writes_consolidated_table() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", r#"{"Common": {"save": "Save", "cancel": "Cancel"}}"#),
        ("fr", r#"{"Common": {"save": "Enregistrer"}, "extra": "Bonus"}"#),
    ])?;

    assert_cmd_snapshot!(test.export_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Exported 3 keys for 2 locales to ./export/translations.csv
      No previous export found, journal not written
    ✓ Wrote metadata ./export/metadata.csv

    ----- stderr -----
    ");

    insta::assert_snapshot!(test.read_file("export/translations.csv")?, @r"
    TRANSLATION_KEY,EN,FR
    ,,
    Common.save,Save,Enregistrer
    Common.cancel,Cancel,
    extra,,Bonus
    ,,
    ");
    Ok(())
}

#[test]
fn test_export_writes_metadata() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", r#"{"a": "Good morning", "b": "Bye"}"#),
        ("fr", r#"{"a": "bonjour", "b": ""}"#),
    ])?;

    test.export(&[])?;

    assert_eq!(
        test.read_file("export/metadata.csv")?,
        "LOCALE,NUMBER_OF_KEYS,NUMBER_OF_WORDS\n,,\nen,2,3\nfr,2,1\n"
    );
    Ok(())
}

#[test]
fn test_first_export_writes_no_journal() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "hi"}"#)])?;

    test.export(&[])?;

    assert!(test.files_with_prefix("export", "journal")?.is_empty());
    Ok(())
}

#[test]
fn test_second_identical_export_is_idempotent() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", r#"{"a": "hi", "b": "bye"}"#),
        ("fr", r#"{"a": "salut"}"#),
    ])?;

    test.export(&[])?;
    let first_export = test.read_file("export/translations.csv")?;
    let first_metadata = test.read_file("export/metadata.csv")?;

    assert_cmd_snapshot!(test.export_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Exported 2 keys for 2 locales to ./export/translations.csv
      No changes since the last export, journal not written
    ✓ Wrote metadata ./export/metadata.csv

    ----- stderr -----
    ");

    assert_eq!(test.read_file("export/translations.csv")?, first_export);
    assert_eq!(test.read_file("export/metadata.csv")?, first_metadata);
    assert!(test.files_with_prefix("export", "journal")?.is_empty());
    Ok(())
}

#[test]
fn test_export_with_config_file_and_overrides() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".trexrc.json",
        r#"{
            "localesDir": "./i18n",
            "translationFileName": "index.js",
            "outputDir": "./reports",
            "outputFileName": "all.csv",
            "keyColumn": "KEY",
            "localeColumns": { "en": "English" }
        }"#,
    )?;
    test.write_file("i18n/en/index.js", r#"module.exports = {"a": "hi"};"#)?;
    test.write_file("i18n/pt-br/index.js", r#"module.exports = {"a": "oi"};"#)?;

    test.export(&["--delimiter", ";"])?;

    assert_eq!(
        test.read_file("reports/all.csv")?,
        "KEY;English;PT-BR\n;;\na;hi;oi\n;;\n"
    );
    Ok(())
}

#[test]
fn test_malformed_translation_source_aborts() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "hi"}"#)])?;
    test.write_file("locales/fr/translation.js", "export default nothing;")?;

    assert_cmd_snapshot!(test.export_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: malformed translation source './locales/fr/translation.js': no embedded object literal found (expected a '{' followed by a later '}')
    ");
    assert!(!test.root().join("export").exists());
    Ok(())
}

#[test]
fn test_malformed_snapshot_aborts() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "hi"}"#)])?;
    test.write_file("export/translations.csv", "SOMETHING,EN\na,hi\n")?;

    assert_cmd_snapshot!(test.export_command(), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: malformed snapshot './export/translations.csv': missing key column "TRANSLATION_KEY"
    "#);
    assert_eq!(
        test.read_file("export/translations.csv")?,
        "SOMETHING,EN\na,hi\n"
    );
    Ok(())
}

#[test]
fn test_missing_locales_dir_fails() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.export_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Locales directory './locales' does not exist.
    Hint: Check your .trexrc.json 'localesDir' setting.
    ");
    Ok(())
}

#[test]
fn test_mixed_case_locale_keeps_its_identity() -> Result<()> {
    let test = CliTest::with_locales(&[("pt-BR", r#"{"a": "oi"}"#)])?;
    test.export(&[])?;

    test.write_locale("pt-BR", r#"{"a": "ola"}"#)?;
    test.export(&["--journal-file-name", "journal.csv", "--show-old-values"])?;

    assert_eq!(
        test.read_file("export/journal.csv")?,
        "TRANSLATION_KEY,PT-BR,PT-BR_OLD,UPDATE_TYPE\n,,,\na,ola,oi,UPDATE\n,,,\n"
    );
    Ok(())
}

#[test]
fn test_shared_column_name_aborts() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "hi"}"#), ("fr", r#"{"a": "salut"}"#)])?;

    let mut cmd = test.export_command();
    cmd.args(["--locale-columns", r#"{"en": "FR"}"#]);

    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: locales "en" and "fr" both map to column "FR" (set distinct names in 'localeColumns')
    "#);
    assert!(!test.root().join("export").exists());
    Ok(())
}

#[test]
fn test_journal_name_clashing_with_export_aborts() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "hi"}"#)])?;

    let mut cmd = test.export_command();
    cmd.args(["--journal-file-name", "translations.csv"]);

    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: 'journalFileName' and 'outputFileName' are both "translations.csv"
    "#);
    Ok(())
}

#[test]
fn test_invalid_locale_columns_argument() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "hi"}"#)])?;

    let output = test
        .export_command()
        .args(["--locale-columns", "not json"])
        .output()?;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("--locale-columns"));
    Ok(())
}
