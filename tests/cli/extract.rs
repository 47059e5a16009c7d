use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_extract_collects_tokens_from_scripts_and_scenes() -> Result<()> {
    let test = CliTest::with_file(
        "a.cs",
        r#"var hello = "{greeting}";
var text = $"prefix {ignored} suffix";
"#,
    )?;
    test.write_file(
        "b.tscn",
        "[node name=\"Label\"]\ntext = '{greeting}'\ntooltip = '{farewell}'\n",
    )?;

    let output = test.extract_command().args(["-o", "locale_tokens.csv"]).output()?;

    assert!(output.status.success());
    assert_eq!(
        test.stdout(&output),
        "✓ Language template saved: locale_tokens.csv\n"
    );
    insta::assert_snapshot!(test.read_file("locale_tokens.csv")?, @r#"
    token,origin,EN_US,PT_BR
    "farewell","b.tscn","",""
    "greeting","a.cs;b.tscn","",""
    "#);

    Ok(())
}

#[test]
fn test_extract_keeps_translations_and_refreshes_origin() -> Result<()> {
    let test = CliTest::with_file("new.cs", r#"Tr("{greeting}");"#)?;
    test.write_file(
        "locale_tokens.csv",
        "token,origin,EN_US\n\"greeting\",\"old.cs\",\"Hello\"\n\"unused\",\"gone.cs\",\"Bye\"",
    )?;

    let output = test.extract_command().output()?;

    assert!(output.status.success());
    insta::assert_snapshot!(test.read_file("locale_tokens.csv")?, @r#"
    token,origin,EN_US
    "greeting","new.cs","Hello"
    "unused","gone.cs","Bye"
    "#);

    Ok(())
}

#[test]
fn test_extract_without_tokens_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("Player.cs", "public class Player {}\n")?;

    let output = test.extract_command().output()?;

    assert!(output.status.success());
    assert_eq!(test.stdout(&output), "✓ No tokens found in project.\n");
    assert!(!test.exists("locale_tokens.csv"));

    Ok(())
}

#[test]
fn test_extract_skips_excluded_paths() -> Result<()> {
    let test = CliTest::with_file("scripts/Menu.cs", r#"Tr("{menu_title}");"#)?;
    test.write_file("addons/plugin/Tool.cs", r#"Tr("{plugin_only}");"#)?;
    test.write_file("scenes/debug.tscn", "text = \"{debug_label}\"\n")?;
    test.write_file(
        ".vscode/locale_tokens_blacklist.txt",
        "addons\n\nscenes/debug.tscn\n",
    )?;

    let output = test.extract_command().output()?;

    assert!(output.status.success());
    insta::assert_snapshot!(test.read_file("locale_tokens.csv")?, @r#"
    token,origin,EN_US,PT_BR
    "menu_title","scripts/Menu.cs","",""
    "#);

    Ok(())
}

#[test]
fn test_extract_uses_config_output_and_languages() -> Result<()> {
    let test = CliTest::with_file("Hud.cs", r#"Tr("{score}");"#)?;
    test.write_file(
        ".gdlocalerc.json",
        r#"{ "outputCsv": "i18n/tokens.csv", "defaultLanguages": ["EN_US", "DE_DE", "JA_JP"] }"#,
    )?;

    let output = test.extract_command().output()?;

    assert!(output.status.success());
    assert_eq!(
        test.stdout(&output),
        "✓ Language template saved: [ROOT]/i18n/tokens.csv\n"
    );
    insta::assert_snapshot!(test.read_file("i18n/tokens.csv")?, @r#"
    token,origin,EN_US,DE_DE,JA_JP
    "score","Hud.cs","","",""
    "#);

    Ok(())
}

#[test]
fn test_extract_verbose_prints_counts() -> Result<()> {
    let test = CliTest::with_file("a.cs", r#"Tr("{one}"); Tr("{two}");"#)?;

    let output = test
        .extract_command()
        .args(["-o", "out.csv", "--verbose"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        test.stdout(&output),
        "✓ Language template saved: out.csv\nScanned 1 file, 2 tokens\n"
    );

    Ok(())
}

#[test]
fn test_extract_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file("a.cs", r#"Tr("{one}");"#)?;
    test.write_file(
        ".gdlocalerc.json",
        r#"{ "sourceExtension": "cs", "markupExtension": ".CS" }"#,
    )?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(
        test.stderr(&output)
            .starts_with("error: 'sourceExtension' and 'markupExtension' must differ"),
        "unexpected stderr: {}",
        test.stderr(&output)
    );
    assert!(!test.exists("locale_tokens.csv"));

    Ok(())
}
