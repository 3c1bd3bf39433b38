use pulldown_cmark::{Options, Parser, html};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to write rendered markdown")]
    Format(#[from] std::fmt::Error),
    #[error("Markdown rendering failed: {0}")]
    Markdown(String),
}

/// Converts the text of a comment block into HTML markup.
pub trait Renderer {
    fn render(&self, markdown: &str) -> Result<String, RenderError>;
}

/// CommonMark renderer backed by pulldown-cmark.
#[derive(Debug, Clone, Copy)]
pub struct CommonMarkRenderer {
    options: Options,
}

impl CommonMarkRenderer {
    pub fn new() -> Self {
        Self {
            options: Options::empty(),
        }
    }

    /// Enable pulldown-cmark extensions on top of the CommonMark core.
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }
}

impl Default for CommonMarkRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for CommonMarkRenderer {
    fn render(&self, markdown: &str) -> Result<String, RenderError> {
        let parser = Parser::new_ext(markdown, self.options);
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::write_html_fmt(&mut out, parser)?;
        Ok(out)
    }
}
