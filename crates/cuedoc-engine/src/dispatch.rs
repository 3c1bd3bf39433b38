use std::path::{Path, PathBuf};
use std::thread;

use relative_path::RelativePathBuf;

use crate::export::{ExportError, PageTemplate, export};
use crate::models::SchemaFile;
use crate::transform::{Renderer, TransformError, Transformer};

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Failed to transform {file}: {source}")]
    Transform {
        file: RelativePathBuf,
        source: TransformError,
    },
    #[error("Failed to export {file}: {source}")]
    Export {
        file: RelativePathBuf,
        source: ExportError,
    },
    #[error("Failed to spawn task for {file}: {source}")]
    Spawn {
        file: RelativePathBuf,
        source: std::io::Error,
    },
    #[error("Task for {file} panicked")]
    Panicked { file: RelativePathBuf },
}

/// Runs transform and export once per schema file.
///
/// With `parallel` set every file gets its own scoped thread; `run` returns
/// only after all of them have finished. A thread the OS refuses to start is
/// reported as [`DispatchError::Spawn`].
pub struct Dispatcher<'a, R> {
    transformer: &'a Transformer<R>,
    template: &'a PageTemplate,
    root: &'a Path,
    dest: &'a Path,
    parallel: bool,
}

impl<'a, R: Renderer + Sync> Dispatcher<'a, R> {
    pub fn new(
        transformer: &'a Transformer<R>,
        template: &'a PageTemplate,
        root: &'a Path,
        dest: &'a Path,
    ) -> Self {
        Self {
            transformer,
            template,
            root,
            dest,
            parallel: true,
        }
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Process every file, returning the written pages in input order or the
    /// first failure.
    pub fn run(&self, files: &[SchemaFile]) -> Result<Vec<PathBuf>, DispatchError> {
        if !self.parallel {
            return files.iter().map(|file| self.process(file)).collect();
        }

        let results: Vec<Result<PathBuf, DispatchError>> = thread::scope(|scope| {
            let handles: Vec<_> = files
                .iter()
                .map(|file| {
                    let handle = thread::Builder::new()
                        .name(format!("cuedoc:{}", file.name()))
                        .spawn_scoped(scope, move || self.process(file));
                    (file, handle)
                })
                .collect();

            handles
                .into_iter()
                .map(|(file, handle)| match handle {
                    Ok(handle) => handle.join().unwrap_or_else(|_| {
                        Err(DispatchError::Panicked {
                            file: file.relative_path(),
                        })
                    }),
                    Err(source) => Err(DispatchError::Spawn {
                        file: file.relative_path(),
                        source,
                    }),
                })
                .collect()
        });

        results.into_iter().collect()
    }

    fn process(&self, file: &SchemaFile) -> Result<PathBuf, DispatchError> {
        let fragment = self
            .transformer
            .transform_file(file, self.root)
            .map_err(|source| DispatchError::Transform {
                file: file.relative_path(),
                source,
            })?;

        export(file, self.template, self.dest, &fragment).map_err(|source| {
            DispatchError::Export {
                file: file.relative_path(),
                source,
            }
        })
    }
}
