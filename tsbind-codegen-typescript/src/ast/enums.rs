//! TypeScript enum builder.

use tsbind_codegen::{CodeFragment, Renderable};
use tsbind_ir::SourceEnum;

/// An exported TypeScript enum with explicit member values.
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    members: Vec<(String, String)>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Add a `Name = Value` member.
    pub fn member(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.members.push((name.into(), value.into()));
        self
    }
}

impl From<&SourceEnum> for Enum {
    fn from(source: &SourceEnum) -> Self {
        source
            .members
            .iter()
            .fold(Self::new(&source.name), |e, m| e.member(&m.name, &m.value))
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self
            .members
            .iter()
            .map(|(name, value)| CodeFragment::line(format!("{} = {},", name, value)))
            .collect();

        vec![CodeFragment::braced(
            format!("export enum {} {{", self.name),
            body,
        )]
    }
}

#[cfg(test)]
mod tests {
    use tsbind_codegen::CodeBuilder;

    use super::*;

    fn build(e: &Enum) -> String {
        let mut builder = CodeBuilder::default();
        builder.emit(e);
        builder.build()
    }

    #[test]
    fn test_enum_members_in_order() {
        let e = Enum::new("Status").member("Active", "0").member("Inactive", "1");
        assert_eq!(
            build(&e),
            "export enum Status {\n\tActive = 0,\n\tInactive = 1,\n}\n"
        );
    }

    #[test]
    fn test_empty_enum() {
        assert_eq!(build(&Enum::new("Empty")), "export enum Empty {\n}\n");
    }

    #[test]
    fn test_from_source() {
        let source = SourceEnum::new("Level").member("Low", "1 << 0").member("High", "1 << 1");
        assert_eq!(
            build(&Enum::from(&source)),
            "export enum Level {\n\tLow = 1 << 0,\n\tHigh = 1 << 1,\n}\n"
        );
    }
}
