use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["outputDir"], "i18n-messages");
    assert_eq!(parsed["locale"], "zh-CH");
    assert_eq!(parsed["autoAssignId"], true);
    assert_eq!(parsed["scanCallArguments"], false);
    assert_eq!(parsed["loggingNamespaces"], serde_json::json!(["console"]));
    assert!(
        parsed.get("scriptDetectionPattern").is_some(),
        "Config should have 'scriptDetectionPattern' field"
    );

    // 2-space indentation
    assert!(
        content.contains("\n  \"outputDir\""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .zhscanrc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".zhscanrc.json").exists());

    let content = test.read_file(".zhscanrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".zhscanrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(test.read_file(".zhscanrc.json")?, "{}");
    assert!(String::from_utf8_lossy(&output.stdout).contains(".zhscanrc.json already exists"));

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("src/app.tsx", r#"export function App() { return <div>测试</div>; }"#)?;

    let output = test.scan_command().output()?;
    assert!(
        output.status.success(),
        "Scan should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(test.root().join("i18n-messages/zh-CH.json").exists());

    Ok(())
}
