//! Declaration nodes laid out as line-oriented fragments.

/// A piece of generated code, independent of indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// One line; the builder adds indentation and the newline.
    Line(String),
    /// `open`, then `body` one level deeper, then `close`.
    Block {
        open: String,
        body: Vec<CodeFragment>,
        close: String,
    },
}

impl CodeFragment {
    pub fn line(text: impl Into<String>) -> Self {
        Self::Line(text.into())
    }

    pub fn block(
        open: impl Into<String>,
        body: Vec<CodeFragment>,
        close: impl Into<String>,
    ) -> Self {
        Self::Block {
            open: open.into(),
            body,
            close: close.into(),
        }
    }

    /// A block closed by a lone `}`.
    pub fn braced(open: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::block(open, body, "}")
    }
}

/// Nodes that can be written through a [`CodeBuilder`](super::CodeBuilder).
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
