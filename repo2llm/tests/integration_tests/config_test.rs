// tests/integration_tests/config_test.rs
use super::common::{create_config_file, create_test_file, process, setup_test_directory};
use anyhow::Result;
use repo2llm::core::ignore::{find_config_file, load_ignore_patterns, parse_config};
use repo2llm::{Args, build_config};
use clap::Parser;

#[test]
fn test_config_file_parsing() {
    let settings = parse_config("# Comment\n*.log\n\n  build/  \ntemp/\n*.log\n   # indented comment\nnaïve/\n");
    let patterns: Vec<&str> = settings.ignore.iter().map(String::as_str).collect();
    assert_eq!(patterns, ["*.log", "build/", "naïve/", "temp/"]);
}

#[test]
fn test_config_file_found_in_parent() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_config_file(temp_dir.path(), &["*.ts"])?;
    let nested = temp_dir.path().join("src");

    assert_eq!(find_config_file(&nested), Some(temp_dir.path().join(".repo2llm")));
    let settings = load_ignore_patterns(&nested)?.expect("config should be discovered");
    assert!(settings.ignore.contains("*.ts"));
    Ok(())
}

#[test]
fn test_no_config_file_is_not_an_error() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let nested = temp_dir.path().join("src");

    assert_eq!(find_config_file(&nested), None);
    assert_eq!(load_ignore_patterns(&nested)?, None);

    let dir = temp_dir.path().to_string_lossy().into_owned();
    let config = build_config(&Args::try_parse_from(["repo2llm", dir.as_str()])?)?;
    assert!(config.ignore_patterns().contains("node_modules"));
    assert!(!config.ignore_patterns().contains("*.ts"));
    Ok(())
}

#[test]
fn test_config_patterns_merge_with_cli() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_config_file(temp_dir.path(), &["# project config", "*.ts"])?;
    create_test_file(temp_dir.path(), "notes.txt", "notes")?;

    let dir = temp_dir.path().to_string_lossy().into_owned();
    let args = Args::try_parse_from(["repo2llm", dir.as_str(), "--ignore", "*.txt"])?;
    let config = build_config(&args)?;

    assert!(config.ignore_patterns().contains("*.ts"), "Config file pattern");
    assert!(config.ignore_patterns().contains("*.txt"), "Command-line pattern");
    assert!(config.ignore_patterns().contains("node_modules"), "Default pattern");
    assert!(config.include_patterns().is_none());
    Ok(())
}

#[test]
fn test_config_file_is_not_rendered() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_config_file(temp_dir.path(), &["*.ts"])?;

    let dir = temp_dir.path().to_string_lossy().into_owned();
    let args = Args::try_parse_from(["repo2llm", dir.as_str()])?;
    let digest = repo2llm::RepoProcessor::new(build_config(&args)?).process_repository();

    assert_eq!(digest.files(), ["src/main.py"]);
    assert!(!digest.output().contains(".repo2llm"));
    Ok(())
}

#[test]
fn test_processing_without_config_file_uses_defaults() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let digest = process(temp_dir.path(), &[], &[])?;
    assert_eq!(digest.files(), ["src/app.ts", "src/main.py"]);
    Ok(())
}
