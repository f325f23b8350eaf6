// src/core/scanner/test_utils.rs
use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    create_test_bytes(dir, name, content.as_bytes())
}

pub fn create_test_bytes(dir: &TempDir, name: &str, content: &[u8]) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content)?;
    Ok(file_path)
}

/// A small repository: three source files, an empty `__init__.py`, and two
/// directories the default patterns ignore.
pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(
        &dir,
        "src/main.py",
        "def main():\n    print(\"Hello, World!\")\n\nif __name__ == \"__main__\":\n    main()",
    )?;
    create_test_file(&dir, "src/__init__.py", "")?;
    create_test_file(
        &dir,
        "src/app.ts",
        "interface User {\n    name: string;\n}\n\nconst user: User = { name: \"John\" };",
    )?;
    create_test_file(
        &dir,
        "src/utils.js",
        "function formatDate(date) {\n    return new Date(date).toLocaleDateString();\n}",
    )?;

    create_test_file(&dir, "node_modules/package.json", "{}")?;
    create_test_file(&dir, ".git/config", "")?;

    Ok(dir)
}
