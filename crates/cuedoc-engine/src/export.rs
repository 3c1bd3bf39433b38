//! Tera page template and the per-file export step.

use std::path::{Path, PathBuf};

use tera::{Context, Tera};

use crate::io::{self, IoError};
use crate::models::SchemaFile;
use crate::transform::Fragment;

const PAGE_TEMPLATE: &str = "page";

/// The page template, parsed once and shared read-only by every export.
///
/// The template sees `content` (the fragment HTML), `name` (the schema file
/// name) and `path` (its path relative to the input root). Autoescaping is
/// off, so `{{ content }}` inserts the fragment as-is; templates pass `name`
/// and `path` through `| escape`.
#[derive(Debug, Clone)]
pub struct PageTemplate {
    tera: Tera,
}

impl PageTemplate {
    /// Load and parse a template file.
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let mut tera = Self::engine();
        tera.add_template_file(path, Some(PAGE_TEMPLATE))
            .map_err(|source| ExportError::TemplateLoad {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!("loaded page template {}", path.display());
        Ok(Self { tera })
    }

    /// Parse a template from a string.
    pub fn from_source(source: &str) -> Result<Self, ExportError> {
        let mut tera = Self::engine();
        tera.add_raw_template(PAGE_TEMPLATE, source)
            .map_err(|source| ExportError::TemplateLoad {
                path: PathBuf::from(PAGE_TEMPLATE),
                source,
            })?;
        Ok(Self { tera })
    }

    /// Render the page for one schema file.
    pub fn render(&self, file: &SchemaFile, fragment: &Fragment) -> Result<String, ExportError> {
        let mut context = Context::new();
        context.insert("content", fragment.as_str());
        context.insert("name", file.name());
        context.insert("path", file.relative_path().as_str());

        self.tera
            .render(PAGE_TEMPLATE, &context)
            .map_err(|source| ExportError::TemplateRender {
                file: file.relative_path().to_string(),
                source,
            })
    }

    fn engine() -> Tera {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera
    }
}

/// Render `fragment` into the page template and write it under `dest`,
/// mirroring the file's directory. Returns the written path.
pub fn export(
    file: &SchemaFile,
    template: &PageTemplate,
    dest: &Path,
    fragment: &Fragment,
) -> Result<PathBuf, ExportError> {
    let html = template.render(file, fragment)?;
    let path = file.output_path(dest);
    io::write_document(&path, &html)?;
    log::debug!("wrote {}", path.display());
    Ok(path)
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to load page template {path}: {source}")]
    TemplateLoad { path: PathBuf, source: tera::Error },
    #[error("Failed to render page for {file}: {source}")]
    TemplateRender { file: String, source: tera::Error },
    #[error(transparent)]
    Io(#[from] IoError),
}
