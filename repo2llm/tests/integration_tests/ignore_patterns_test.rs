// tests/integration_tests/ignore_patterns_test.rs
use super::common::{create_test_file, process};
use anyhow::Result;
use repo2llm::{IncludeFilter, Matcher, PatternSet};
use tempfile::TempDir;

fn matcher(ignore: &[&str]) -> Matcher {
    Matcher::new(PatternSet::classify(ignore), IncludeFilter::default())
}

#[test]
fn test_directory_tokens_apply_at_any_depth() {
    let matcher = matcher(&["build", "output/"]);

    for path in [
        "build",
        "build/output.txt",
        "src/build/output/result.txt",
        "output/log.txt",
        "deep/nested/output/x/y.txt",
    ] {
        assert!(matcher.should_ignore(path), "{path} should be ignored");
    }
    assert!(
        !matcher.should_ignore("output_file.txt"),
        "Prefix-sharing file name should survive"
    );
    assert!(!matcher.should_ignore("src/builder/main.rs"));
}

#[test]
fn test_trailing_slash_is_equivalent() {
    let with_slash = matcher(&["output/"]);
    let without_slash = matcher(&["output"]);

    for path in ["output/a.txt", "a/output/b.txt", "output", "outputs/a.txt"] {
        assert_eq!(
            with_slash.should_ignore(path),
            without_slash.should_ignore(path),
            "Both spellings should agree on {path}"
        );
    }
}

#[test]
fn test_matching_is_case_sensitive() {
    let matcher = matcher(&["Nested", "*.PY"]);

    assert!(!matcher.should_ignore("nested/file.py"));
    assert!(!matcher.should_ignore("src/main.py"));
    assert!(matcher.should_ignore("Nested/file.py"));
    assert!(matcher.should_ignore("src/MAIN.PY"));
}

#[test]
fn test_globstar_pattern() {
    let matcher = matcher(&["**/nested/**"]);

    assert!(matcher.should_ignore("nested/file.py"));
    assert!(matcher.should_ignore("src/nested/file.py"));
    assert!(matcher.should_ignore("a/b/nested/c/d.txt"));
    assert!(!matcher.should_ignore("src/other/file.py"));
    assert!(!matcher.should_ignore("src/nested_dir/file.py"));
}

#[test]
fn test_file_path_token_ignores_single_file() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "src/main.py", "print('main')")?;
    create_test_file(dir.path(), "src/helper.py", "print('helper')")?;

    let digest = process(dir.path(), &["src/main.py"], &[])?;
    assert_eq!(digest.files(), ["src/helper.py"]);
    Ok(())
}

#[test]
fn test_nested_directory_pattern() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "src/nested/deep/a.py", "a")?;
    create_test_file(dir.path(), "src/nested/b.py", "b")?;
    create_test_file(dir.path(), "src/c.py", "c")?;
    create_test_file(dir.path(), "other/nested/d.py", "d")?;

    let digest = process(dir.path(), &["src/nested/"], &[])?;
    assert_eq!(digest.files(), ["other/nested/d.py", "src/c.py"]);
    Ok(())
}

#[test]
fn test_scoped_glob_stays_in_directory() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "src/app.ts", "export {}")?;
    create_test_file(dir.path(), "lib/app.ts", "export {}")?;

    let digest = process(dir.path(), &["src/*.ts"], &[])?;
    assert_eq!(digest.files(), ["lib/app.ts"]);
    Ok(())
}

#[test]
fn test_anchored_patterns() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "docs/index.md", "# Docs")?;
    create_test_file(dir.path(), "src/docs/api.md", "# API")?;
    create_test_file(dir.path(), "notes.txt", "root notes")?;
    create_test_file(dir.path(), "src/notes.txt", "nested notes")?;

    let digest = process(dir.path(), &["/docs", "/*.txt"], &[])?;
    assert_eq!(digest.files(), ["src/docs/api.md", "src/notes.txt"]);
    Ok(())
}

#[test]
fn test_invalid_glob_never_matches() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "a[b.txt", "bracket")?;
    create_test_file(dir.path(), "plain.txt", "plain")?;

    let digest = process(dir.path(), &["a[b*"], &[])?;
    assert_eq!(digest.files(), ["a[b.txt", "plain.txt"]);
    Ok(())
}

#[test]
fn test_trailing_slash_glob_ignores_matching_directories() -> Result<()> {
    let matcher = matcher(&["tmp*/"]);
    assert!(matcher.should_ignore("tmp1"));
    assert!(matcher.should_ignore("tmp1/a.txt"));
    assert!(!matcher.should_ignore("temp/a.txt"));

    let dir = TempDir::new()?;
    create_test_file(dir.path(), "tmp1/a.txt", "scratch")?;
    create_test_file(dir.path(), "src/tmp_old/b.txt", "scratch")?;
    create_test_file(dir.path(), "src/keep.txt", "keep")?;

    let digest = process(dir.path(), &["tmp*/"], &[])?;
    assert_eq!(digest.files(), ["src/keep.txt"]);
    Ok(())
}
