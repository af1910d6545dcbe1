use anyhow::Result;
use insta::assert_snapshot;
use insta_cmd::assert_cmd_snapshot;
use serde_json::json;

use crate::CliTest;

fn sample_project() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file(
        "src/app.tsx",
        r#"export const App = () => (
  <div title="标题">
    你好
  </div>
);
"#,
    )?;
    test.write_file(
        "src/api.ts",
        r#"export function fail() {
  msg = "你好";
  throw new Error("请求失败");
}
"#,
    )?;
    Ok(test)
}

#[test]
fn test_scan_prints_occurrences_and_summary() -> Result<()> {
    let test = sample_project()?;

    assert_cmd_snapshot!(test.scan_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    你好#generic#src/api.ts#2#2#AssignmentExpression
    请求失败#generic#src/api.ts#3#8#NewExpression
    标题#jsx-attribute#src/app.tsx#2#7#JSXAttribute
    你好#jsx-text#src/app.tsx#2#18#JSXText
    ✓ Scanned 2 source files
      4 occurrences
      3 unique catalog entries
      wrote i18n-messages/sourcemap.txt, i18n-messages/zh-CH.json

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_scan_writes_sourcemap() -> Result<()> {
    let test = sample_project()?;

    let output = test.scan_command().output()?;
    assert!(output.status.success());

    assert_snapshot!(test.read_file("i18n-messages/sourcemap.txt")?, @r"
    你好#generic#src/api.ts#2#2#0
    请求失败#generic#src/api.ts#3#8#1
    标题#jsx-attribute#src/app.tsx#2#7#2
    你好#jsx-text#src/app.tsx#2#18#3
    ");

    Ok(())
}

#[test]
fn test_scan_writes_catalog() -> Result<()> {
    let test = sample_project()?;

    test.scan_command().output()?;

    let content = test.read_file("i18n-messages/zh-CH.json")?;
    assert!(content.starts_with("[\n\t{"), "catalog should be tab-indented");
    assert_eq!(
        test.read_json("i18n-messages/zh-CH.json")?,
        json!([
            {
                "id": "你好",
                "defaultMessage": "你好",
                "source": [
                    { "type": "generic", "location": "src/api.ts#2#2" },
                    { "type": "jsx-text", "location": "src/app.tsx#2#18" }
                ]
            },
            {
                "id": "请求失败",
                "defaultMessage": "请求失败",
                "source": [{ "type": "generic", "location": "src/api.ts#3#8" }]
            },
            {
                "id": "标题",
                "defaultMessage": "标题",
                "source": [{ "type": "jsx-attribute", "location": "src/app.tsx#2#7" }]
            }
        ])
    );

    Ok(())
}

#[test]
fn test_scan_is_idempotent() -> Result<()> {
    let test = sample_project()?;

    test.scan_command().output()?;
    let first = test.read_file("i18n-messages/zh-CH.json")?;
    test.scan_command().output()?;
    let second = test.read_file("i18n-messages/zh-CH.json")?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_scan_recreates_output_dir() -> Result<()> {
    let test = sample_project()?;
    test.write_file("i18n-messages/stale.json", "[]")?;

    test.scan_command().output()?;

    assert!(!test.root().join("i18n-messages/stale.json").exists());
    assert!(test.root().join("i18n-messages/sourcemap.txt").exists());

    Ok(())
}

#[test]
fn test_scan_quiet() -> Result<()> {
    let test = CliTest::with_file("page.jsx", "const el = <p>段落</p>;")?;

    assert_cmd_snapshot!(test.scan_command().arg("--quiet"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Scanned 1 source file
      1 occurrence
      1 unique catalog entry
      wrote i18n-messages/sourcemap.txt, i18n-messages/zh-CH.json

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_scan_empty_project() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", "export const App = () => <div>Hello</div>;")?;

    let output = test.scan_command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("i18n-messages/sourcemap.txt")?, "");
    assert_eq!(test.read_file("i18n-messages/zh-CH.json")?, "[]");

    Ok(())
}

#[test]
fn test_scan_skips_excluded_paths() -> Result<()> {
    let test = CliTest::with_file("src/app.js", r#"a = "保留";"#)?;
    test.write_file("node_modules/lib/index.js", r#"a = "依赖";"#)?;
    test.write_file("src/__tests__/app.test.js", r#"a = "测试";"#)?;
    test.write_file("src/generated/api.js", r#"a = "生成";"#)?;
    test.write_file(".zhscanrc.json", r#"{ "excludePatterns": ["src/generated/**"] }"#)?;

    test.scan_command().output()?;

    assert_eq!(
        test.read_file("i18n-messages/sourcemap.txt")?,
        "保留#generic#src/app.js#1#0#0\n"
    );

    Ok(())
}

#[test]
fn test_scan_config_and_cli_overrides() -> Result<()> {
    let test = CliTest::with_file("src/app.js", r#"alert("提示");"#)?;
    test.write_file(
        ".zhscanrc.json",
        r#"{ "targetDir": "locales", "autoZhKey": false, "callExpression": true }"#,
    )?;

    let output = test.scan_command().args(["--locale", "zh-CN"]).output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_json("locales/zh-CN.json")?,
        json!([
            {
                "id": "",
                "defaultMessage": "提示",
                "source": [{ "type": "generic", "location": "src/app.js#1#0" }]
            }
        ])
    );

    let output = test
        .scan_command()
        .args(["--output-dir", "out"])
        .output()?;
    assert!(output.status.success());
    assert!(test.root().join("out/zh-CH.json").exists());

    Ok(())
}

#[test]
fn test_scan_call_arguments_flag() -> Result<()> {
    let test = CliTest::with_file("src/app.js", r#"alert("提示"); console.log("调试");"#)?;

    test.scan_command().output()?;
    assert_eq!(test.read_file("i18n-messages/sourcemap.txt")?, "");

    test.scan_command().arg("--scan-call-arguments").output()?;
    assert_eq!(
        test.read_file("i18n-messages/sourcemap.txt")?,
        "提示#generic#src/app.js#1#0#0\n"
    );

    Ok(())
}

#[test]
fn test_scan_subdirectory_root() -> Result<()> {
    let test = sample_project()?;

    test.scan_command().arg("src").output()?;

    let sourcemap = test.read_file("i18n-messages/sourcemap.txt")?;
    assert!(sourcemap.starts_with("你好#generic#src/api.ts#2#2#0\n"));

    Ok(())
}

#[test]
fn test_scan_isolates_parse_errors() -> Result<()> {
    let test = CliTest::with_file("src/broken.js", "const = ;")?;
    test.write_file("src/ok.js", r#"msg = "正常";"#)?;

    assert_cmd_snapshot!(test.scan_command().arg("--quiet"), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✓ Scanned 2 source files
      1 occurrence
      1 unique catalog entry
      wrote i18n-messages/sourcemap.txt, i18n-messages/zh-CH.json

    ----- stderr -----
    warning: 1 file(s) could not be parsed:
      --> src/broken.js
    ");

    assert_eq!(
        test.read_file("i18n-messages/sourcemap.txt")?,
        "正常#generic#src/ok.js#1#0#0\n"
    );

    Ok(())
}

#[test]
fn test_scan_fail_fast() -> Result<()> {
    let test = CliTest::with_file("src/broken.js", "const = ;")?;
    test.write_file("src/ok.js", r#"msg = "正常";"#)?;

    let output = test.scan_command().arg("--fail-fast").output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Scan aborted at src/broken.js"), "{}", stderr);
    assert!(!test.root().join("i18n-messages").exists());

    Ok(())
}

#[test]
fn test_scan_invalid_config() -> Result<()> {
    let test = CliTest::with_file("src/app.js", r#"a = "中文";"#)?;
    test.write_file(".zhscanrc.json", r#"{ "scriptDetectionPattern": "[" }"#)?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("scriptDetectionPattern"));

    Ok(())
}

#[test]
fn test_scan_missing_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.scan_command().arg("does-not-exist").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Scan root is not a directory"));

    Ok(())
}
