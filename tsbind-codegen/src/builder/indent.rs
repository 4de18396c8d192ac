//! Indentation unit for generated code.

/// One level of indentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Indent {
    /// A tab per level. Generated client modules use this.
    #[default]
    Tab,
    /// `n` spaces per level.
    Spaces(u8),
}

impl Indent {
    /// Append `level` indentation units to `buffer`.
    pub fn write(self, buffer: &mut String, level: usize) {
        match self {
            Self::Tab => buffer.extend(std::iter::repeat_n('\t', level)),
            Self::Spaces(width) => {
                buffer.extend(std::iter::repeat_n(' ', level * usize::from(width)))
            }
        }
    }
}
