use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_extract_to_stdout() -> Result<()> {
    let test = CliTest::with_file(
        "app/index.html",
        "<html><translate>hello world!</translate>\n\
         <p>{$'hello filter'|translate$}</p></html>\n",
    )?;

    let output = test.run(&["extract"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let pot = stdout(&output);
    assert!(pot.contains("msgid \"hello world!\""), "pot: {}", pot);
    assert!(pot.contains("msgid \"hello filter\""), "pot: {}", pot);
    assert!(pot.contains("#: app/index.html:1"), "pot: {}", pot);
    assert!(pot.contains("#: app/index.html:2"), "pot: {}", pot);
    assert!(stderr(&output).contains("Extracted 2 message(s) from 1 file(s)"));

    Ok(())
}

#[test]
fn test_extract_merges_across_files() -> Result<()> {
    let test = CliTest::with_file("a.html", "<p translate>shared</p>")?;
    test.write_file("b.html", "<p translate>shared</p>")?;

    let output = test.run(&["extract"]);

    assert_eq!(output.status.code(), Some(0));
    let pot = stdout(&output);
    assert_eq!(pot.matches("msgid \"shared\"").count(), 1, "pot: {}", pot);
    assert!(pot.contains("#: a.html:1"), "pot: {}", pot);
    assert!(pot.contains("#: b.html:1"), "pot: {}", pot);

    Ok(())
}

#[test]
fn test_extract_plural_and_comment() -> Result<()> {
    let test = CliTest::with_file(
        "worlds.html",
        "<translate translate-comment=\"Counts worlds\" \
         translate-plural=\"hello {$count$} worlds!\">hello one world!</translate>",
    )?;

    let output = test.run(&["extract"]);

    assert_eq!(output.status.code(), Some(0));
    let pot = stdout(&output);
    assert!(pot.contains("#. Counts worlds"), "pot: {}", pot);
    assert!(pot.contains("msgid \"hello one world!\""), "pot: {}", pot);
    assert!(
        pot.contains("msgid_plural \"hello {$count$} worlds!\""),
        "pot: {}",
        pot
    );
    assert!(pot.contains("msgstr[1] \"\""), "pot: {}", pot);

    Ok(())
}

#[test]
fn test_extract_with_output_file() -> Result<()> {
    let test = CliTest::with_file("index.html", "<translate>hello</translate>")?;

    let output = test.run(&["extract", "--output", "messages.pot"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).is_empty());
    let pot = test.read_file("messages.pot")?;
    assert!(pot.contains("msgid \"hello\""), "pot: {}", pot);

    Ok(())
}

#[test]
fn test_extract_respects_config_ignores() -> Result<()> {
    let test = CliTest::with_file("index.html", "<translate>kept</translate>")?;
    test.write_file("vendor/lib.html", "<translate>dropped</translate>")?;
    test.write_file(
        ".angexrc.json",
        r#"{
            "ignores": ["vendor/**"]
        }"#,
    )?;

    let output = test.run(&["extract"]);

    assert_eq!(output.status.code(), Some(0));
    let pot = stdout(&output);
    assert!(pot.contains("msgid \"kept\""), "pot: {}", pot);
    assert!(!pot.contains("msgid \"dropped\""), "pot: {}", pot);

    Ok(())
}

#[test]
fn test_extract_empty_project() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["extract"]);

    assert_eq!(output.status.code(), Some(0));
    let pot = stdout(&output);
    assert!(pot.starts_with("# Translations template."), "pot: {}", pot);
    assert!(stderr(&output).contains("Extracted 0 message(s) from 0 file(s)"));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".angexrc.json", "{ not json")?;

    let output = test.run(&["extract"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error"), "stderr: {}", stderr(&output));

    Ok(())
}
