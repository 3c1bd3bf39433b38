use relative_path::{RelativePath, RelativePathBuf};
use std::path::{Path, PathBuf};

/// Extension given to every exported page
pub const OUTPUT_EXTENSION: &str = "html";

/// A discovered schema file, addressed relative to the discovery root
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SchemaFile {
    dir: RelativePathBuf,
    name: String,
}

impl SchemaFile {
    /// Create a new SchemaFile from its directory (relative to the root) and file name
    pub fn new(dir: RelativePathBuf, name: impl Into<String>) -> Self {
        Self {
            dir,
            name: name.into(),
        }
    }

    /// Create from a relative path string such as `nested/person.cue`
    pub fn from_relative_str(path: &str) -> Self {
        let relative_path = RelativePath::new(path);
        let dir = relative_path
            .parent()
            .map(RelativePath::to_relative_path_buf)
            .unwrap_or_default();
        let name = relative_path.file_name().unwrap_or_default();
        Self::new(dir, name)
    }

    /// Directory of the file relative to the discovery root
    pub fn dir(&self) -> &RelativePath {
        &self.dir
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the file relative to the discovery root
    pub fn relative_path(&self) -> RelativePathBuf {
        self.dir.join(&self.name)
    }

    /// Absolute (or root-relative) location of the source on disk
    pub fn source_path(&self, root: &Path) -> PathBuf {
        self.relative_path().to_path(root)
    }

    /// File name of the exported page: the source name with its extension rewritten
    pub fn output_name(&self) -> String {
        RelativePath::new(&self.name)
            .with_extension(OUTPUT_EXTENSION)
            .into_string()
    }

    /// Directory the page is written into, mirroring the source layout under `dest`
    pub fn output_dir(&self, dest: &Path) -> PathBuf {
        self.dir.to_path(dest)
    }

    /// Full location of the exported page under `dest`
    pub fn output_path(&self, dest: &Path) -> PathBuf {
        self.dir.join(self.output_name()).to_path(dest)
    }
}

impl From<&str> for SchemaFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}
