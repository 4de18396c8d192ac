//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Indented text buffer used to assemble generated files.
///
/// # Example
///
/// ```
/// use tsbind_codegen::builder::{CodeBuilder, Indent};
///
/// let mut builder = CodeBuilder::new(Indent::Tab);
/// builder
///     .push_line("export enum Status {")
///     .push_indent()
///     .push_line("Active = 0,")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "export enum Status {\n\tActive = 0,\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add preformatted multi-line text at the current indentation.
    ///
    /// Trailing newlines in `text` are dropped; every remaining line gets a
    /// single `\n`.
    pub fn push_text(&mut self, text: &str) -> &mut Self {
        let text = text.trim_end_matches('\n');
        if text.is_empty() {
            return self;
        }
        for line in text.split('\n') {
            if line.is_empty() {
                self.push_blank();
            } else {
                self.push_line(line);
            }
        }
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Emit nodes with exactly one blank line between consecutive ones.
    pub fn emit_separated<'n, R: Renderable + 'n>(
        &mut self,
        nodes: impl IntoIterator<Item = &'n R>,
    ) -> &mut Self {
        for (i, node) in nodes.into_iter().enumerate() {
            if i > 0 {
                self.push_blank();
            }
            self.emit(node);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(line) => {
                self.push_line(&line);
            }
            CodeFragment::Block { open, body, close } => {
                self.push_line(&open).push_indent();
                for fragment in body {
                    self.apply_fragment(fragment);
                }
                self.push_dedent().push_line(&close);
            }
        }
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        self.indent.write(&mut self.buffer, self.indent_level);
    }
}
