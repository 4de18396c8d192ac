//! Annotations attached to classes and methods.

use serde::{Deserialize, Serialize};

/// Class-level marker identifying an API controller.
pub const API_CONTROLLER_ATTRIBUTE: &str = "ApiController";

/// Class- or method-level marker carrying a route fragment as first argument.
pub const ROUTE_ATTRIBUTE: &str = "Route";

/// Placeholder inside controller routes replaced by the controller short name.
pub const CONTROLLER_PLACEHOLDER: &str = "[controller]";

/// An annotation such as `[Route("api/[controller]")]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<AttributeArgument>,
}

/// A single annotation argument, kept as literal source text.
///
/// String literals keep their surrounding quote characters; consumers strip
/// them when they need the bare value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeArgument {
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// Add an argument.
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.arguments.push(AttributeArgument {
            value: value.into(),
        });
        self
    }

    /// First argument value, if any.
    pub fn first_argument(&self) -> Option<&str> {
        self.arguments.first().map(|a| a.value.as_str())
    }
}

/// First attribute named `name` in `attributes`.
pub(crate) fn find<'a>(attributes: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    attributes.iter().find(|a| a.name == name)
}
