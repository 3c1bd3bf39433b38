use std::fmt;

use crate::models::{Block, BlockKind};

use super::render::{RenderError, Renderer};

/// Default suffix of the `language-*` class on code containers
pub const DEFAULT_CODE_LANGUAGE: &str = "go";

/// How code containers are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeStyle {
    /// Suffix of the `language-*` class for syntax highlighters
    pub language: String,
    /// HTML-escape code lines instead of inserting them verbatim
    pub escape: bool,
}

impl Default for CodeStyle {
    fn default() -> Self {
        Self {
            language: DEFAULT_CODE_LANGUAGE.to_string(),
            escape: false,
        }
    }
}

/// The ordered HTML output for one schema file, before templating
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fragment(String);

impl Fragment {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Concatenates rendered blocks into a [`Fragment`].
pub struct FragmentBuilder<'a, R: Renderer + ?Sized> {
    renderer: &'a R,
    style: &'a CodeStyle,
    out: String,
}

impl<'a, R: Renderer + ?Sized> FragmentBuilder<'a, R> {
    pub fn new(renderer: &'a R, style: &'a CodeStyle) -> Self {
        Self {
            renderer,
            style,
            out: String::new(),
        }
    }

    /// Render `blocks` in order. The final block closes without a trailing newline.
    pub fn build(mut self, blocks: &[Block]) -> Result<Fragment, RenderError> {
        let last = blocks.len().saturating_sub(1);
        for (i, block) in blocks.iter().enumerate() {
            match block.kind {
                BlockKind::Comment => self.push_comment(block)?,
                BlockKind::Code => self.push_code(block, i == last),
            }
        }
        Ok(Fragment(self.out))
    }

    fn push_code(&mut self, block: &Block, trailing: bool) {
        self.out.push_str("<pre>\n<code class=\"language-");
        self.out.push_str(&self.style.language);
        self.out.push_str("\">\n");
        for line in &block.lines {
            if self.style.escape {
                self.out.push_str(&html_escape::encode_text(line));
            } else {
                self.out.push_str(line);
            }
            self.out.push('\n');
        }
        self.out.push_str("</code>\n</pre>");
        if !trailing {
            self.out.push('\n');
        }
    }

    fn push_comment(&mut self, block: &Block) -> Result<(), RenderError> {
        let html = self.renderer.render(&block.text())?;

        self.out.push_str("<div id=\"attribute-");
        self.out
            .push_str(&html_escape::encode_double_quoted_attribute(&block.attribute));
        self.out.push_str("\" class=\"indent-");
        self.out.push_str(&block.indent.to_string());
        self.out.push_str("\">\n");
        self.out.push_str(&html);
        if !html.ends_with('\n') {
            self.out.push('\n');
        }
        self.out.push_str("</div>\n");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::render::CommonMarkRenderer;
    use pretty_assertions::assert_eq;

    struct FailingRenderer;

    impl Renderer for FailingRenderer {
        fn render(&self, _markdown: &str) -> Result<String, RenderError> {
            Err(RenderError::Markdown("boom".to_string()))
        }
    }

    struct EchoRenderer;

    impl Renderer for EchoRenderer {
        fn render(&self, markdown: &str) -> Result<String, RenderError> {
            Ok(markdown.to_string())
        }
    }

    fn build(blocks: &[Block], style: &CodeStyle) -> Fragment {
        FragmentBuilder::new(&CommonMarkRenderer::new(), style)
            .build(blocks)
            .unwrap()
    }

    #[test]
    fn test_trailing_code_block_has_no_final_newline() {
        let fragment = build(&[Block::code(vec!["a: 1".into()])], &CodeStyle::default());

        assert_eq!(
            fragment.as_str(),
            "<pre>\n<code class=\"language-go\">\na: 1\n</code>\n</pre>"
        );
    }

    #[test]
    fn test_empty_trailing_code_block_still_emits_container() {
        let fragment = build(&[Block::code(vec![])], &CodeStyle::default());

        assert_eq!(
            fragment.as_str(),
            "<pre>\n<code class=\"language-go\">\n</code>\n</pre>"
        );
    }

    #[test]
    fn test_comment_container_carries_attribute_and_indent() {
        let blocks = [
            Block::comment(vec!["Nested *field*.".into()], 2, "inner"),
            Block::code(vec!["\t\tinner: int".into()]),
        ];

        let fragment = build(&blocks, &CodeStyle::default());

        assert_eq!(
            fragment.as_str(),
            "<div id=\"attribute-inner\" class=\"indent-2\">\n\
             <p>Nested <em>field</em>.</p>\n\
             </div>\n\
             <pre>\n<code class=\"language-go\">\n\t\tinner: int\n</code>\n</pre>"
        );
    }

    #[test]
    fn test_inner_code_blocks_end_with_newline() {
        let blocks = [
            Block::code(vec!["#A: {}".into()]),
            Block::comment(vec!["Doc".into()], 0, ""),
            Block::code(vec![]),
        ];

        let fragment = build(&blocks, &CodeStyle::default());

        assert!(fragment.as_str().starts_with(
            "<pre>\n<code class=\"language-go\">\n#A: {}\n</code>\n</pre>\n<div id=\"attribute-\" class=\"indent-0\">\n"
        ));
    }

    #[test]
    fn test_code_is_verbatim_by_default() {
        let fragment = build(&[Block::code(vec!["a: <5 & >0".into()])], &CodeStyle::default());

        assert!(fragment.as_str().contains("a: <5 & >0\n"));
    }

    #[test]
    fn test_code_escaping_and_language_are_configurable() {
        let style = CodeStyle {
            language: "cue".to_string(),
            escape: true,
        };

        let fragment = build(&[Block::code(vec!["a: <5 & >0".into()])], &style);

        assert_eq!(
            fragment.as_str(),
            "<pre>\n<code class=\"language-cue\">\na: &lt;5 &amp; &gt;0\n</code>\n</pre>"
        );
    }

    #[test]
    fn test_renderer_output_without_newline_is_terminated() {
        let style = CodeStyle::default();
        let fragment = FragmentBuilder::new(&EchoRenderer, &style)
            .build(&[Block::comment(vec!["raw".into()], 0, "x"), Block::code(vec![])])
            .unwrap();

        assert!(
            fragment
                .as_str()
                .starts_with("<div id=\"attribute-x\" class=\"indent-0\">\nraw\n</div>\n")
        );
    }

    #[test]
    fn test_render_failure_is_propagated() {
        let style = CodeStyle::default();
        let result = FragmentBuilder::new(&FailingRenderer, &style)
            .build(&[Block::comment(vec!["doc".into()], 0, ""), Block::code(vec![])]);

        assert!(matches!(result, Err(RenderError::Markdown(_))));
    }
}
