//! Classes, enums and the modules that hold them.

use serde::{Deserialize, Serialize};

use crate::attribute::{self, API_CONTROLLER_ATTRIBUTE, Attribute, ROUTE_ATTRIBUTE};

/// One parsed source unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceModule {
    /// Origin of the module, informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default)]
    pub classes: Vec<SourceClass>,
    #[serde(default)]
    pub enums: Vec<SourceEnum>,
}

impl SourceModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the origin path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add a class.
    pub fn class(mut self, class: SourceClass) -> Self {
        self.classes.push(class);
        self
    }

    /// Add an enum.
    pub fn enumeration(mut self, source_enum: SourceEnum) -> Self {
        self.enums.push(source_enum);
        self
    }
}

/// A named, typed member of a class (field or property).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub name: String,
    /// Raw type expression, e.g. `"List<Order>"`.
    pub type_name: String,
}

impl Member {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// A method declared on a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMethod {
    pub name: String,
    pub return_type_name: String,
    #[serde(default)]
    pub parameter_types: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl SourceMethod {
    pub fn new(name: impl Into<String>, return_type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type_name: return_type_name.into(),
            parameter_types: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Add a parameter type.
    pub fn param(mut self, type_name: impl Into<String>) -> Self {
        self.parameter_types.push(type_name.into());
        self
    }

    /// Add an attribute.
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Raw route fragment from the first `Route` attribute.
    ///
    /// `None` when the attribute is missing or carries no argument.
    pub fn route(&self) -> Option<&str> {
        attribute::find(&self.attributes, ROUTE_ATTRIBUTE).and_then(Attribute::first_argument)
    }
}

/// A class definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceClass {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub fields: Vec<Member>,
    #[serde(default)]
    pub properties: Vec<Member>,
    #[serde(default)]
    pub methods: Vec<SourceMethod>,
}

impl SourceClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            fields: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Add an attribute.
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Add a field.
    pub fn field(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.fields.push(Member::new(name, type_name));
        self
    }

    /// Add a property.
    pub fn property(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.properties.push(Member::new(name, type_name));
        self
    }

    /// Add a method.
    pub fn method(mut self, method: SourceMethod) -> Self {
        self.methods.push(method);
        self
    }

    /// First attribute with the given name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        attribute::find(&self.attributes, name)
    }

    /// Whether the class carries the API controller marker.
    pub fn is_api_controller(&self) -> bool {
        self.attribute(API_CONTROLLER_ATTRIBUTE).is_some()
    }

    /// Raw route template from the first `Route` attribute.
    pub fn route(&self) -> Option<&str> {
        self.attribute(ROUTE_ATTRIBUTE).and_then(Attribute::first_argument)
    }

    /// Type names of all fields followed by all properties.
    pub fn member_type_names(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .chain(&self.properties)
            .map(|m| m.type_name.as_str())
    }
}

/// An enum member with its literal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember {
    pub name: String,
    pub value: String,
}

/// An enum definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEnum {
    pub name: String,
    #[serde(default)]
    pub members: Vec<EnumMember>,
}

impl SourceEnum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Add a member.
    pub fn member(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.members.push(EnumMember {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}
