use anyhow::Result;

use crate::CliTest;

#[test]
fn test_rename_moves_sidecars() -> Result<()> {
    let test = CliTest::with_file("scripts/Player.cs", "class Hero {}")?;
    test.write_file("scripts/Player.cs.uid", "uid://b8kq2x5m1n0")?;

    let output = test
        .rename_command()
        .args(["scripts/Player.cs", "scripts/Hero.cs"])
        .output()?;

    assert!(output.status.success());
    insta::assert_snapshot!(test.stdout(&output), @"✓ UID file renamed: Player.cs.uid → Hero.cs.uid");
    assert!(!test.exists("scripts/Player.cs.uid"));
    assert_eq!(test.read_file("scripts/Hero.cs.uid")?, "uid://b8kq2x5m1n0");

    Ok(())
}

#[test]
fn test_rename_reports_each_pair() -> Result<()> {
    let test = CliTest::with_file("A.cs.uid", "uid://a")?;

    let output = test
        .rename_command()
        .args(["A.cs", "B.cs", "C.cs", "D.cs"])
        .output()?;

    assert!(output.status.success());
    insta::assert_snapshot!(test.stdout(&output), @r"
    ✓ UID file renamed: A.cs.uid → B.cs.uid
    warning: UID file not found: C.cs.uid

    ✘ 1 problem (0 errors, 1 warning)
    ");
    assert!(test.exists("B.cs.uid"));

    Ok(())
}

#[test]
fn test_rename_failure_is_reported_per_pair() -> Result<()> {
    let test = CliTest::with_file("A.cs.uid", "uid://a")?;
    test.write_file("E.cs.uid", "uid://e")?;

    let output = test
        .rename_command()
        .args(["A.cs", "missing_dir/B.cs", "E.cs", "F.cs"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let stdout = test.stdout(&output);
    assert!(stdout.starts_with("error: Failed to rename UID file A.cs.uid to missing_dir/B.cs.uid"));
    assert!(stdout.contains("✓ UID file renamed: E.cs.uid → F.cs.uid"));
    assert!(test.exists("A.cs.uid"));
    assert!(test.exists("F.cs.uid"));

    Ok(())
}

#[test]
fn test_rename_resolves_pairs_against_root() -> Result<()> {
    let test = CliTest::with_file("game/scripts/Enemy.cs.uid", "uid://enemy")?;
    test.write_file("scripts/Enemy.cs.uid", "uid://outside")?;

    let output = test
        .rename_command()
        .args(["--root", "game", "scripts/Enemy.cs", "scripts/Boss.cs"])
        .output()?;

    assert!(output.status.success());
    insta::assert_snapshot!(test.stdout(&output), @"✓ UID file renamed: Enemy.cs.uid → Boss.cs.uid");
    assert_eq!(test.read_file("game/scripts/Boss.cs.uid")?, "uid://enemy");
    assert!(!test.exists("game/scripts/Enemy.cs.uid"));
    assert!(test.exists("scripts/Enemy.cs.uid"));

    Ok(())
}

#[test]
fn test_rename_missing_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .rename_command()
        .args(["--root", "nowhere", "a.cs", "b.cs"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        test.stderr(&output),
        "error: Project root does not exist: nowhere\n"
    );

    Ok(())
}

#[test]
fn test_rename_rejects_odd_path_count() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.rename_command().args(["a.cs", "b.cs", "c.cs"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        test.stderr(&output),
        "error: Expected OLD NEW path pairs, got 3 path(s)\n"
    );

    Ok(())
}
