//! # Schema Transform
//!
//! Turns one schema file into an HTML [`Fragment`] that interleaves rendered
//! comment prose with verbatim code, in source order.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    (blank, directive, comment or code) from local facts only
//! 2. **Block Assembly** (`assembler`): a `BlockAssembler` state machine batches
//!    contiguous comment and code lines into `Block`s
//! 3. **Emission** (`fragment`): a `FragmentBuilder` renders comments through a
//!    [`Renderer`] and wraps code in `<pre><code>` containers
//!
//! ## Key Invariants
//!
//! - Blocks are emitted in source order
//! - The fragment always ends with a code container, possibly empty
//! - Comment containers carry `attribute-NAME` ids and `indent-N` classes

pub mod assembler;
pub mod classify;
pub mod fragment;
pub mod render;

use std::path::Path;

use crate::io::{self, IoError};
use crate::models::{Block, SchemaFile};

pub use assembler::{BlockAssembler, attribute_name};
pub use classify::{LineClass, SchemaLineClassifier, leading_tabs};
pub use fragment::{CodeStyle, DEFAULT_CODE_LANGUAGE, Fragment, FragmentBuilder};
pub use render::{CommonMarkRenderer, RenderError, Renderer};

#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Split schema source into blocks.
pub fn assemble(source: &str) -> Vec<Block> {
    let classifier = SchemaLineClassifier;
    let mut assembler = BlockAssembler::new();

    for line in source.lines() {
        assembler.push(&classifier.classify(line));
    }

    assembler.finish()
}

/// Runs the full transform for schema files with a fixed renderer and code style.
#[derive(Debug, Clone, Default)]
pub struct Transformer<R = CommonMarkRenderer> {
    renderer: R,
    style: CodeStyle,
}

impl Transformer {
    /// CommonMark rendering with the default code style
    pub fn commonmark() -> Self {
        Self::new(CommonMarkRenderer::new(), CodeStyle::default())
    }
}

impl<R: Renderer> Transformer<R> {
    pub fn new(renderer: R, style: CodeStyle) -> Self {
        Self { renderer, style }
    }

    pub fn style(&self) -> &CodeStyle {
        &self.style
    }

    /// Transform schema source text into a fragment
    pub fn transform_str(&self, source: &str) -> Result<Fragment, RenderError> {
        let blocks = assemble(source);
        FragmentBuilder::new(&self.renderer, &self.style).build(&blocks)
    }

    /// Read `file` from under `root` and transform it
    pub fn transform_file(&self, file: &SchemaFile, root: &Path) -> Result<Fragment, TransformError> {
        let source = io::read_schema(file, root)?;
        log::debug!("transforming {} ({} bytes)", file.relative_path(), source.len());
        Ok(self.transform_str(&source)?)
    }
}
