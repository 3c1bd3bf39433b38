use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary schema directory
pub fn create_test_schema_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file with content, creating any intermediate directories
pub fn create_test_file(dir: &TempDir, relative_path: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}
