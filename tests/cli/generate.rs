use anyhow::{Context, Result};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, FakeSheetsApi};

const LIST: &str = r#"{
    "sheets": [
        { "properties": { "title": "English" } },
        { "properties": { "title": "Sheet1" } },
        { "properties": { "title": "German" } }
    ]
}"#;

const ENGLISH: &str = r#"{
    "range": "English!A1:Z1000",
    "majorDimension": "ROWS",
    "values": [
        ["namespace", "key", "value"],
        ["ui", "title", "Hello"],
        ["ui", "sub-title", "World"]
    ]
}"#;

const GERMAN: &str = r#"{
    "range": "German!A1:Z1000",
    "majorDimension": "ROWS",
    "values": [
        ["namespace", "key", "value"],
        ["main menu", "sign_out", "Abmelden"],
        ["ui", "", "ignored"]
    ]
}"#;

const SHEET1: &str = r#"{
    "range": "Sheet1!A1:Z1000",
    "majorDimension": "ROWS",
    "values": [["a", "b", "c"], ["x", "y", "z"]]
}"#;

fn start_api() -> Result<FakeSheetsApi> {
    FakeSheetsApi::start(&[
        ("/v4/spreadsheets/abc123", LIST),
        ("/v4/spreadsheets/abc123/values/English", ENGLISH),
        ("/v4/spreadsheets/abc123/values/German", GERMAN),
        ("/v4/spreadsheets/abc123/values/Sheet1", SHEET1),
    ])
}

fn setup_config(test: &CliTest, api: &FakeSheetsApi, extra: Value) -> Result<()> {
    let mut config = json!({
        "spreadsheetId": "abc123",
        "apiKey": "secret",
        "apiUrl": api.url(),
    });
    if let (Some(config), Value::Object(extra)) = (config.as_object_mut(), extra) {
        config.extend(extra);
    }
    test.write_file(".sheetlocalesrc.json", &serde_json::to_string(&config)?)
}

fn parse_locale(content: &str) -> Result<Value> {
    serde_json::from_str(content).context("Locale file should be valid JSON")
}

#[test]
fn test_generate_writes_json_files() -> Result<()> {
    let test = CliTest::new()?;
    let api = start_api()?;
    setup_config(&test, &api, json!({}))?;

    let output = test.generate_command().output()?;
    assert!(output.status.success());

    let english = parse_locale(&test.read_file("locales/en.json")?)?;
    assert_eq!(english, json!({ "ui": { "title": "Hello", "subTitle": "World" } }));

    let german = parse_locale(&test.read_file("locales/de.json")?)?;
    assert_eq!(german, json!({ "mainMenu": { "signOut": "Abmelden" } }));

    Ok(())
}

#[test]
fn test_generate_uses_beautify_width() -> Result<()> {
    let test = CliTest::new()?;
    let api = start_api()?;
    setup_config(&test, &api, json!({ "beautify": 2 }))?;

    test.generate_command().output()?;

    assert_snapshot!(test.read_file("locales/en.json")?, @r#"
    {
      "ui": {
        "title": "Hello",
        "subTitle": "World"
      }
    }
    "#);

    Ok(())
}

#[test]
fn test_generate_esm_module() -> Result<()> {
    let test = CliTest::new()?;
    let api = start_api()?;
    setup_config(&test, &api, json!({}))?;

    let output = test
        .generate_command()
        .args(["--format", "esm", "--beautify", "0"])
        .output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("locales/en.js")?,
        r#"export default {"ui":{"title":"Hello","subTitle":"World"}}"#
    );
    assert!(!test.root().join("locales/en.json").exists());

    Ok(())
}

#[test]
fn test_generate_cjs_module_into_custom_dir() -> Result<()> {
    let test = CliTest::new()?;
    let api = start_api()?;
    setup_config(&test, &api, json!({ "format": "cjs", "outputDir": "./i18n" }))?;

    test.generate_command().output()?;

    let content = test.read_file("i18n/de.js")?;
    assert!(content.starts_with("module.exports = {"));

    Ok(())
}

#[test]
fn test_generate_skips_unrecognized_sheet() -> Result<()> {
    let test = CliTest::new()?;
    let api = start_api()?;
    setup_config(&test, &api, json!({}))?;

    let output = test.generate_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(stdout.contains("\"Sheet1\" skipped: Incorrect ISO language name: Sheet1"));
    assert!(stdout.contains("Generated 2 locale files, skipped 1 sheet"));
    assert!(stderr.contains("Incorrect ISO language name: Sheet1"));

    let files = std::fs::read_dir(test.root().join("locales"))?.count();
    assert_eq!(files, 2);

    Ok(())
}

#[test]
fn test_generate_uses_configured_languages() -> Result<()> {
    let test = CliTest::new()?;
    let api = start_api()?;
    setup_config(
        &test,
        &api,
        json!({ "languages": [{ "name": "English (US)", "code": "en-US" }] }),
    )?;

    let output = test.generate_command().output()?;
    assert!(output.status.success());

    assert!(test.root().join("locales/en-US.json").exists());
    assert!(!test.root().join("locales/de.json").exists());

    Ok(())
}

#[test]
fn test_generate_continues_when_a_sheet_fails_to_load() -> Result<()> {
    let test = CliTest::new()?;
    // English rows are missing, so that fetch gets a 404
    let api = FakeSheetsApi::start(&[
        ("/v4/spreadsheets/abc123", LIST),
        ("/v4/spreadsheets/abc123/values/German", GERMAN),
        ("/v4/spreadsheets/abc123/values/Sheet1", SHEET1),
    ])?;
    setup_config(&test, &api, json!({}))?;

    let output = test.generate_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Error loading spreadsheet abc123 with range English"));
    assert!(test.root().join("locales/de.json").exists());
    assert!(!test.root().join("locales/en.json").exists());

    Ok(())
}

#[test]
fn test_generate_aborts_when_listing_fails() -> Result<()> {
    let test = CliTest::new()?;
    let api = FakeSheetsApi::start(&[])?;
    setup_config(&test, &api, json!({}))?;

    let output = test.generate_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("No locale files generated: Error loading spreadsheet abc123"));
    assert!(!test.root().join("locales").exists());

    Ok(())
}

#[test]
fn test_generate_aborts_on_empty_spreadsheet() -> Result<()> {
    let test = CliTest::new()?;
    let api = FakeSheetsApi::start(&[("/v4/spreadsheets/abc123", r#"{ "sheets": [] }"#)])?;
    setup_config(&test, &api, json!({}))?;

    let output = test.generate_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Empty list of sheets"));

    Ok(())
}

#[test]
fn test_generate_requires_spreadsheet_id_and_api_key() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.generate_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Spreadsheet ID and API key are required"));

    let output = test
        .generate_command()
        .args(["--spreadsheet-id", "abc123"])
        .output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("API key is required"));

    let output = test
        .generate_command()
        .env("SHEETLOCALES_API_KEY", "secret")
        .output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Spreadsheet ID is required"));

    Ok(())
}

#[test]
fn test_generate_never_logs_api_key() -> Result<()> {
    let test = CliTest::new()?;
    let api = start_api()?;
    setup_config(&test, &api, json!({}))?;

    let output = test.generate_command().arg("--verbose").output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stderr.contains("waiting for the list of sheets"));
    assert!(!stdout.contains("secret"));
    assert!(!stderr.contains("secret"));

    Ok(())
}

#[test]
fn test_generate_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".sheetlocalesrc.json", r#"{ "format": "yaml" }"#)?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config file"));

    Ok(())
}
