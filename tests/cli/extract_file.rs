use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_extract_file_writes_seed_csv() -> Result<()> {
    let test = CliTest::with_file(
        "scenes/main.tscn",
        "[node name=\"Title\"]\ntext = \"{title}\"\n[node name=\"Start\"]\ntext = '{start_game}'\n",
    )?;

    let output = test
        .command()
        .args(["extract-file", "scenes/main.tscn", "-o", "seed/main.csv"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(test.stdout(&output), "✓ Language template saved: seed/main.csv\n");
    insta::assert_snapshot!(test.read_file("seed/main.csv")?, @r#"
    token,origin,EN_US,PT_BR
    "start_game","scenes/main.tscn","",""
    "title","scenes/main.tscn","",""
    "#);

    Ok(())
}

#[test]
fn test_extract_file_strips_interpolated_strings_in_scripts() -> Result<()> {
    let test = CliTest::with_file(
        "Hud.cs",
        r#"Label.Text = $"Score: {score}" + Tr('{realtoken}');"#,
    )?;

    let output = test
        .command()
        .args(["extract-file", "Hud.cs", "-o", "hud.csv"])
        .output()?;

    assert!(output.status.success());
    insta::assert_snapshot!(test.read_file("hud.csv")?, @r#"
    token,origin,EN_US,PT_BR
    "realtoken","Hud.cs","",""
    "#);

    Ok(())
}

#[test]
fn test_extract_file_without_tokens() -> Result<()> {
    let test = CliTest::with_file("empty.tscn", "[gd_scene format=3]\n")?;

    let output = test
        .command()
        .args(["extract-file", "empty.tscn", "-o", "empty.csv"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(test.stdout(&output), "✓ No tokens found in empty.tscn.\n");
    assert!(!test.exists("empty.csv"));

    Ok(())
}

#[test]
fn test_extract_file_missing_input() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["extract-file", "missing.cs", "-o", "out.csv"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(
        test.stderr(&output)
            .starts_with("error: Failed to read file: missing.cs"),
        "unexpected stderr: {}",
        test.stderr(&output)
    );

    Ok(())
}

#[test]
fn test_extract_file_reads_invalid_utf8() -> Result<()> {
    let test = CliTest::new()?;
    std::fs::write(
        test.root().join("Menu.cs"),
        b"// Configura\xe7\xe3o\nTr(\"{title}\");",
    )?;

    let output = test
        .command()
        .args(["extract-file", "Menu.cs", "-o", "menu.csv"])
        .output()?;

    assert!(output.status.success());
    insta::assert_snapshot!(test.read_file("menu.csv")?, @r#"
    token,origin,EN_US,PT_BR
    "title","Menu.cs","",""
    "#);

    Ok(())
}
