use crate::models::SchemaFile;
use regex::Regex;
use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

/// File-name pattern selecting CUE schema files
pub const DEFAULT_SCHEMA_PATTERN: &str = r".*\.cue$";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Input path not found: {0}")]
    NotFound(PathBuf),
    #[error("No schema found under {0}")]
    NoSchemaFound(PathBuf),
    #[error("Invalid schema pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Schema files found under a discovery root
#[derive(Debug, Clone, PartialEq)]
pub struct Discovery {
    /// Directory the files are relative to
    pub root: PathBuf,
    /// Matching files, sorted by relative path
    pub files: Vec<SchemaFile>,
}

/// Compile a file-name pattern for discovery
pub fn schema_pattern(pattern: &str) -> Result<Regex, IoError> {
    Regex::new(pattern).map_err(|source| IoError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Find every schema file under `input` whose name matches `pattern`.
///
/// `input` may also name a single file, in which case its parent directory
/// becomes the root. Fails when nothing matches.
pub fn discover(input: &Path, pattern: &Regex) -> Result<Discovery, IoError> {
    if !input.exists() {
        return Err(IoError::NotFound(input.to_path_buf()));
    }

    let root = if input.is_dir() {
        input.to_path_buf()
    } else {
        match input.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    };

    let mut paths = Vec::new();
    if input.is_dir() {
        scan_directory_recursive(input, pattern, &mut paths)?;
    } else if matches_pattern(input, pattern) {
        paths.push(input.to_path_buf());
    }

    let mut files: Vec<SchemaFile> = paths
        .iter()
        .filter_map(|path| to_schema_file(&root, path))
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(IoError::NoSchemaFound(input.to_path_buf()));
    }

    log::info!("Found {} schema file(s) under {}", files.len(), root.display());
    Ok(Discovery { root, files })
}

/// Read a schema file's content
pub fn read_schema(file: &SchemaFile, root: &Path) -> Result<String, IoError> {
    let path = file.source_path(root);
    fs::read_to_string(&path).map_err(|source| IoError::Read { path, source })
}

/// Write a rendered page, creating parent directories as needed
pub fn write_document(path: &Path, content: &str) -> Result<(), IoError> {
    // create_dir_all succeeds if a sibling task created the directory first
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| IoError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, content).map_err(|source| IoError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn scan_directory_recursive(
    dir: &Path,
    pattern: &Regex,
    files: &mut Vec<PathBuf>,
) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, pattern, files)?;
        } else if matches_pattern(&path, pattern) {
            files.push(path);
        }
    }

    Ok(())
}

fn matches_pattern(path: &Path, pattern: &Regex) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| pattern.is_match(name))
}

fn to_schema_file(root: &Path, path: &Path) -> Option<SchemaFile> {
    let relative = path.strip_prefix(root).ok()?;
    let name = relative.file_name()?.to_str()?;
    let dir = match relative.parent() {
        Some(parent) => RelativePathBuf::from_path(parent).ok()?,
        None => RelativePathBuf::new(),
    };
    Some(SchemaFile::new(dir, name))
}
