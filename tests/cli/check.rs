use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, row, table_rows};

#[test]
fn test_documented_function() -> Result<()> {
    let test = CliTest::with_file(
        "src/math.ts",
        r#"/**
 * Adds two numbers.
 * @param a - The first number.
 * @param b - The second number.
 * @returns The sum.
 */
export function add(a: number, b: number): number {
  return a + b;
}
"#,
    )?;

    let output = test.run_check()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        table_rows(&output.stdout),
        vec![
            row(["src/math.ts", "1", "1", "", "100%"]),
            row(["Total", "1", "1", "", "100%"]),
        ]
    );

    Ok(())
}

#[test]
fn test_undocumented_arrow_function() -> Result<()> {
    let test = CliTest::with_file(
        "src/math.ts",
        r#"export const add = (a: number, b: number) => {
  return a + b;
};
"#,
    )?;

    let output = test.run_check()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        table_rows(&output.stdout),
        vec![
            row(["src/math.ts", "1", "0", "1-3", "0%"]),
            row(["Total", "1", "0", "", "0%"]),
        ]
    );

    Ok(())
}

#[test]
fn test_documented_arrow_function() -> Result<()> {
    let test = CliTest::with_file(
        "src/math.ts",
        r#"/** Returns one. */
export const f = () => 1;
"#,
    )?;

    let output = test.run_check()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        table_rows(&output.stdout),
        vec![
            row(["src/math.ts", "1", "1", "", "100%"]),
            row(["Total", "1", "1", "", "100%"]),
        ]
    );

    Ok(())
}

#[test]
fn test_doc_comment_covers_every_declarator() -> Result<()> {
    let test = CliTest::with_file(
        "src/math.ts",
        "/** Small helpers. */ const a = () => 1, b = () => 2;\n",
    )?;

    let output = test.run_check()?;

    assert_eq!(
        table_rows(&output.stdout),
        vec![
            row(["src/math.ts", "2", "2", "", "100%"]),
            row(["Total", "2", "2", "", "100%"]),
        ]
    );

    Ok(())
}

#[test]
fn test_node_modules_anywhere_in_path_is_excluded() -> Result<()> {
    let test = CliTest::with_file(
        "my_node_modules_docs/guide.ts",
        "export function guide() {}\n",
    )?;
    test.write_file("src/node_modules.ts", "export function shim() {}\n")?;
    test.write_file(".storybook/main.ts", "export function config() {}\n")?;
    test.write_file("src/app.ts", "/** App. */\nexport function app() {}\n")?;

    let output = test.run_check()?;

    assert_eq!(
        table_rows(&output.stdout),
        vec![
            row(["src/app.ts", "1", "1", "", "100%"]),
            row(["Total", "1", "1", "", "100%"]),
        ]
    );

    Ok(())
}

#[test]
fn test_two_files_total() -> Result<()> {
    let test = CliTest::with_file(
        "src/b.ts",
        r#"/** Says hello. */
export function hello() {}
"#,
    )?;
    test.write_file("src/a.tsx", "export const View = () => <div />;\n")?;

    let output = test.run_check()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        table_rows(&output.stdout),
        vec![
            row(["src/a.tsx", "1", "0", "1-1", "0%"]),
            row(["src/b.ts", "1", "1", "", "100%"]),
            row(["Total", "2", "1", "", "50%"]),
        ]
    );

    Ok(())
}

#[test]
fn test_node_modules_is_excluded() -> Result<()> {
    let test = CliTest::with_file("node_modules/lib/index.ts", "export function lib() {}\n")?;
    test.write_file("src/node_modules/nested.ts", "export function nested() {}\n")?;
    test.write_file("src/app.ts", "/** App. */\nexport function app() {}\n")?;

    let output = test.run_check()?;

    assert_eq!(
        table_rows(&output.stdout),
        vec![
            row(["src/app.ts", "1", "1", "", "100%"]),
            row(["Total", "1", "1", "", "100%"]),
        ]
    );

    Ok(())
}

#[test]
fn test_empty_directory() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run_check()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        table_rows(&output.stdout),
        vec![row(["Total", "0", "0", "", "N/A"])]
    );

    Ok(())
}

#[test]
fn test_file_without_functions() -> Result<()> {
    let test = CliTest::with_file("src/types.ts", "export type Id = string;\nconst x = 1;\n")?;

    let output = test.run_check()?;

    assert_eq!(
        table_rows(&output.stdout),
        vec![
            row(["src/types.ts", "0", "0", "", "N/A"]),
            row(["Total", "0", "0", "", "N/A"]),
        ]
    );

    Ok(())
}

#[test]
fn test_plain_comment_counts_in_total_only() -> Result<()> {
    let test = CliTest::with_file(
        "src/util.ts",
        r#"// A plain comment.
export function util() {}
"#,
    )?;

    let output = test.run_check()?;

    assert_eq!(
        table_rows(&output.stdout),
        vec![
            row(["src/util.ts", "1", "0", "", "0%"]),
            row(["Total", "1", "0", "", "0%"]),
        ]
    );

    Ok(())
}

#[test]
fn test_invalid_tsdoc_is_undocumented() -> Result<()> {
    let test = CliTest::with_file(
        "src/util.ts",
        r#"/**
 * Does things.
 * @notATag whatever
 */
export function util() {}
"#,
    )?;

    let output = test.run_check()?;

    assert_eq!(
        table_rows(&output.stdout),
        vec![
            row(["src/util.ts", "1", "0", "5-5", "0%"]),
            row(["Total", "1", "0", "", "0%"]),
        ]
    );

    Ok(())
}

#[test]
fn test_non_source_files_are_ignored() -> Result<()> {
    let test = CliTest::with_file("src/index.js", "export function js() {}\n")?;
    test.write_file("README.md", "# readme\n")?;

    let output = test.run_check()?;

    assert_eq!(
        table_rows(&output.stdout),
        vec![row(["Total", "0", "0", "", "N/A"])]
    );

    Ok(())
}

#[test]
fn test_parse_error_fails() -> Result<()> {
    let test = CliTest::with_file("src/broken.ts", "export function broken( {\n")?;

    let output = test.run_check()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.starts_with("Error:"), "stderr: {}", stderr);
    assert!(stderr.contains("src/broken.ts"), "stderr: {}", stderr);

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Usage:"), "stdout: {}", stdout);
    assert!(stdout.contains("check"), "stdout: {}", stdout);

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("A tool for checking documentation coverage"));

    Ok(())
}
