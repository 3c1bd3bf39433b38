pub mod dispatch;
pub mod export;
pub mod io;
pub mod models;
pub mod transform;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use dispatch::{DispatchError, Dispatcher};
pub use export::{ExportError, PageTemplate, export};
pub use io::{DEFAULT_SCHEMA_PATTERN, Discovery, IoError, discover, schema_pattern};
pub use models::{Block, BlockKind, SchemaFile};
pub use transform::{
    CodeStyle, CommonMarkRenderer, Fragment, RenderError, Renderer, TransformError, Transformer,
    assemble,
};
