//! Placeholder substitution for text templates.
//!
//! Placeholders are written `{NAME}` in the template text. Rendering replaces
//! every occurrence of each known placeholder; unknown placeholders are left
//! untouched.

use indexmap::IndexMap;

/// Placeholder name to value map, applied in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Substitutions {
    values: IndexMap<&'static str, String>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for placeholder `name` (without braces).
    pub fn set(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.values.insert(name, value.into());
        self
    }
}

/// A borrowed template text.
#[derive(Debug, Clone, Copy)]
pub struct Template<'a> {
    text: &'a str,
}

impl<'a> Template<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Replace every `{NAME}` for each entry in `substitutions`.
    pub fn render(&self, substitutions: &Substitutions) -> String {
        substitutions
            .values
            .iter()
            .fold(self.text.to_string(), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), value)
            })
    }
}
