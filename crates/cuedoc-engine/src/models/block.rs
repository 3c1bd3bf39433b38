/// The two kinds of block a schema file is split into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Contiguous line comments, rendered as markdown prose
    Comment,
    /// Contiguous schema source lines, reproduced verbatim
    Code,
}

/// A maximal run of contiguous same-kind lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    /// Raw lines for code, marker-stripped and trimmed lines for comments
    pub lines: Vec<String>,
    /// Leading tab count of the comment; always 0 for code
    pub indent: usize,
    /// Field the comment documents, taken from the next code line; empty when unknown
    pub attribute: String,
}

impl Block {
    pub fn code(lines: Vec<String>) -> Self {
        Self {
            kind: BlockKind::Code,
            lines,
            indent: 0,
            attribute: String::new(),
        }
    }

    pub fn comment(lines: Vec<String>, indent: usize, attribute: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Comment,
            lines,
            indent,
            attribute: attribute.into(),
        }
    }

    pub fn is_comment(&self) -> bool {
        self.kind == BlockKind::Comment
    }

    pub fn is_code(&self) -> bool {
        self.kind == BlockKind::Code
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines joined with newlines, without a trailing newline
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}
