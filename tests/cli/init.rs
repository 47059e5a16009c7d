use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert_eq!(test.stdout(&output), "✓ Created .gdlocalerc.json\n");

    let content = test.read_file(".gdlocalerc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["sourceExtension"], "cs");
    assert_eq!(parsed["markupExtension"], "tscn");
    assert_eq!(parsed["languagesDir"], "assets");
    assert_eq!(parsed["outputCsv"], "locale_tokens.csv");
    assert_eq!(parsed["defaultLanguages"], serde_json::json!(["EN_US", "PT_BR"]));

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".gdlocalerc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        test.stderr(&output),
        "error: .gdlocalerc.json already exists\n"
    );
    assert_eq!(test.read_file(".gdlocalerc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("Main.cs", r#"Tr("{welcome}");"#)?;

    let output = test.extract_command().output()?;

    assert!(
        output.status.success(),
        "Extract should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(test.exists("locale_tokens.csv"));

    Ok(())
}
