use crate::models::Block;

use super::classify::LineClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No line classified yet.
    Start,
    InCode,
    InComment,
}

/// Batches classified lines into comment and code blocks.
///
/// Every transition of the state machine is spelled out in [`BlockAssembler::push`].
/// The last emitted block is always a code block, possibly empty.
pub struct BlockAssembler {
    state: State,
    code: Vec<String>,
    comment: Vec<String>,
    indent: usize,
    out: Vec<Block>,
}

impl BlockAssembler {
    pub fn new() -> Self {
        Self {
            state: State::Start,
            code: vec![],
            comment: vec![],
            indent: 0,
            out: vec![],
        }
    }

    pub fn push(&mut self, class: &LineClass<'_>) {
        let next = match (self.state, *class) {
            (_, LineClass::Blank | LineClass::PackageDirective | LineClass::ImportDirective) => {
                self.state
            }
            (State::Start, LineClass::Comment { indent, content }) => {
                self.open_comment(indent, content);
                State::InComment
            }
            (State::Start, LineClass::Code(line)) => {
                self.code.push(line.to_string());
                State::InCode
            }
            (State::InCode, LineClass::Comment { indent, content }) => {
                self.flush_code();
                self.open_comment(indent, content);
                State::InComment
            }
            (State::InCode, LineClass::Code(line)) => {
                self.code.push(line.to_string());
                State::InCode
            }
            (State::InComment, LineClass::Comment { indent, content }) => {
                // Each comment line overwrites the indent, so the last line decides it.
                self.comment.push(content.to_string());
                self.indent = indent;
                State::InComment
            }
            (State::InComment, LineClass::Code(line)) => {
                self.flush_comment(attribute_name(line));
                self.code.push(line.to_string());
                State::InCode
            }
        };
        self.state = next;
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        if self.state == State::InComment {
            self.flush_comment(String::new());
        }
        let code = std::mem::take(&mut self.code);
        self.out.push(Block::code(code));
        self.out
    }

    fn open_comment(&mut self, indent: usize, content: &str) {
        self.comment.push(content.to_string());
        self.indent = indent;
    }

    fn flush_code(&mut self) {
        if self.code.is_empty() {
            return;
        }
        let code = std::mem::take(&mut self.code);
        self.out.push(Block::code(code));
    }

    fn flush_comment(&mut self, attribute: String) {
        let lines = std::mem::take(&mut self.comment);
        self.out.push(Block::comment(lines, self.indent, attribute));
        self.indent = 0;
    }
}

impl Default for BlockAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifier before the first `:` of a code line, or empty when there is none.
pub fn attribute_name(line: &str) -> String {
    line.split_once(':')
        .map(|(name, _)| name.trim().to_string())
        .unwrap_or_default()
}
