use anyhow::Result;

use crate::{CliTest, stderr};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let config = test.read_file(".angexrc.json")?;
    let parsed: serde_json::Value = serde_json::from_str(&config)?;
    assert!(parsed.get("includes").is_some());

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".angexrc.json", "{}")?;

    let output = test.run(&["init"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr(&output).contains("already exists"),
        "stderr: {}",
        stderr(&output)
    );

    Ok(())
}
