/// Prefix of a package declaration line.
pub const PACKAGE_DIRECTIVE: &str = "package ";
/// Prefix of an import line.
pub const IMPORT_DIRECTIVE: &str = "import ";
/// Single-line comment marker.
pub const COMMENT_MARKER: &str = "//";

/// Classification of a single source line, borrowing from the line itself.
///
/// This is phase 1 of the transform: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Whitespace only.
    Blank,
    /// `package ...` declaration.
    PackageDirective,
    /// `import ...` line.
    ImportDirective,
    /// Line comment with its marker stripped and content trimmed.
    Comment {
        /// Leading tab count of the raw line.
        indent: usize,
        content: &'a str,
    },
    /// Any other line, kept verbatim.
    Code(&'a str),
}

impl LineClass<'_> {
    /// Blank lines and directives carry no documentation and never reach a block.
    pub fn is_discarded(&self) -> bool {
        matches!(
            self,
            LineClass::Blank | LineClass::PackageDirective | LineClass::ImportDirective
        )
    }
}

/// Classifies individual lines of a schema file.
pub struct SchemaLineClassifier;

impl SchemaLineClassifier {
    /// Classifies a raw line (without its line terminator) into a [`LineClass`].
    ///
    /// Directives are matched against the raw line, comments against the
    /// trimmed line.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if line.starts_with(PACKAGE_DIRECTIVE) {
            return LineClass::PackageDirective;
        }
        if line.starts_with(IMPORT_DIRECTIVE) {
            return LineClass::ImportDirective;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineClass::Blank;
        }

        match trimmed.strip_prefix(COMMENT_MARKER) {
            Some(rest) => LineClass::Comment {
                indent: leading_tabs(line),
                content: rest.trim(),
            },
            None => LineClass::Code(line),
        }
    }
}

/// Number of tab characters before the first non-tab character.
pub fn leading_tabs(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b'\t').count()
}
