//! Name-keyed index over the source model.

use std::collections::{HashMap, hash_map::Entry};

use tsbind_ir::{SourceClass, SourceEnum, SourceModule};

use crate::Diagnostic;

const PHASE: &str = "index";

/// What a type name resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Enum,
}

/// Lookup tables built once per run from the loaded modules.
///
/// Modules are scanned in the order given; the first definition of a name
/// wins. A name is never both a class and an enum: when the model defines
/// both, the class is kept and a warning is recorded.
#[derive(Debug)]
pub struct ModelIndex<'a> {
    classes: HashMap<&'a str, &'a SourceClass>,
    enums: HashMap<&'a str, &'a SourceEnum>,
    controllers: Vec<&'a SourceClass>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> ModelIndex<'a> {
    pub fn new(modules: &'a [SourceModule]) -> Self {
        let mut classes = HashMap::new();
        let mut enums = HashMap::new();
        let mut controllers = Vec::new();
        let mut diagnostics = Vec::new();

        for module in modules {
            let location = module.path.as_deref().unwrap_or("<model>");

            for class in &module.classes {
                if class.is_api_controller() {
                    controllers.push(class);
                }
                match classes.entry(class.name.as_str()) {
                    Entry::Vacant(slot) => {
                        slot.insert(class);
                    }
                    Entry::Occupied(_) => diagnostics.push(
                        Diagnostic::info(
                            PHASE,
                            format!(
                                "class '{}' is defined more than once, keeping the first",
                                class.name
                            ),
                        )
                        .at(location),
                    ),
                }
            }

            for source_enum in &module.enums {
                match enums.entry(source_enum.name.as_str()) {
                    Entry::Vacant(slot) => {
                        slot.insert(source_enum);
                    }
                    Entry::Occupied(_) => diagnostics.push(
                        Diagnostic::info(
                            PHASE,
                            format!(
                                "enum '{}' is defined more than once, keeping the first",
                                source_enum.name
                            ),
                        )
                        .at(location),
                    ),
                }
            }
        }

        // Walk modules again so collision warnings come out in model order
        for source_enum in modules.iter().flat_map(|m| &m.enums) {
            let name = source_enum.name.as_str();
            if classes.contains_key(name) && enums.remove(name).is_some() {
                diagnostics.push(Diagnostic::warning(
                    PHASE,
                    format!("'{name}' is defined as both a class and an enum, using the class"),
                ));
            }
        }

        Self {
            classes,
            enums,
            controllers,
            diagnostics,
        }
    }

    pub fn find_class(&self, name: &str) -> Option<&'a SourceClass> {
        self.classes.get(name).copied()
    }

    pub fn find_enum(&self, name: &str) -> Option<&'a SourceEnum> {
        self.enums.get(name).copied()
    }

    pub fn kind(&self, name: &str) -> Option<TypeKind> {
        if self.classes.contains_key(name) {
            Some(TypeKind::Class)
        } else if self.enums.contains_key(name) {
            Some(TypeKind::Enum)
        } else {
            None
        }
    }

    /// Whether `name` resolves to a class or an enum.
    pub fn is_known(&self, name: &str) -> bool {
        self.kind(name).is_some()
    }

    /// Classes carrying the API controller marker, in discovery order.
    pub fn controllers(&self) -> &[&'a SourceClass] {
        &self.controllers
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn enum_count(&self) -> usize {
        self.enums.len()
    }

    /// Notes recorded while building the index.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use tsbind_ir::{API_CONTROLLER_ATTRIBUTE, Attribute};

    use super::*;
    use crate::Severity;

    fn controller(name: &str) -> SourceClass {
        SourceClass::new(name).with_attribute(Attribute::new(API_CONTROLLER_ATTRIBUTE))
    }

    #[test]
    fn test_find_across_modules() {
        let modules = vec![
            SourceModule::new().class(SourceClass::new("Order")),
            SourceModule::new().enumeration(SourceEnum::new("Status")),
        ];
        let index = ModelIndex::new(&modules);

        assert_eq!(index.find_class("Order").unwrap().name, "Order");
        assert_eq!(index.find_enum("Status").unwrap().name, "Status");
        assert!(index.find_class("Status").is_none());
        assert!(index.find_enum("Missing").is_none());
        assert_eq!(index.kind("Order"), Some(TypeKind::Class));
        assert_eq!(index.kind("Status"), Some(TypeKind::Enum));
        assert_eq!(index.kind("int"), None);
        assert!(index.diagnostics().is_empty());
    }

    #[test]
    fn test_first_definition_wins() {
        let modules = vec![
            SourceModule::new()
                .with_path("a.json")
                .class(SourceClass::new("Order").property("First", "int")),
            SourceModule::new()
                .with_path("b.json")
                .class(SourceClass::new("Order").property("Second", "int")),
        ];
        let index = ModelIndex::new(&modules);

        let order = index.find_class("Order").unwrap();
        assert_eq!(order.properties[0].name, "First");
        assert_eq!(index.class_count(), 1);

        let diag = &index.diagnostics()[0];
        assert_eq!(diag.severity, Severity::Info);
        assert_eq!(diag.location.as_deref(), Some("b.json"));
    }

    #[test]
    fn test_first_match_within_module() {
        let modules = vec![
            SourceModule::new()
                .enumeration(SourceEnum::new("Status").member("A", "0"))
                .enumeration(SourceEnum::new("Status").member("B", "1")),
        ];
        let index = ModelIndex::new(&modules);

        assert_eq!(index.find_enum("Status").unwrap().members[0].name, "A");
    }

    #[test]
    fn test_class_wins_over_enum() {
        let modules = vec![
            SourceModule::new().enumeration(SourceEnum::new("Status")),
            SourceModule::new().class(SourceClass::new("Status")),
        ];
        let index = ModelIndex::new(&modules);

        assert_eq!(index.kind("Status"), Some(TypeKind::Class));
        assert!(index.find_enum("Status").is_none());
        assert_eq!(index.enum_count(), 0);
        assert_eq!(index.diagnostics()[0].severity, Severity::Warning);
    }

    #[test]
    fn test_controllers_in_discovery_order() {
        let modules = vec![
            SourceModule::new()
                .class(controller("UsersController"))
                .class(SourceClass::new("User")),
            SourceModule::new().class(controller("OrdersController")),
        ];
        let index = ModelIndex::new(&modules);

        let names: Vec<_> = index.controllers().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["UsersController", "OrdersController"]);
    }
}
