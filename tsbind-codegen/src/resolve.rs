//! Reference closure computation.
//!
//! Decides which classes and enums end up in the generated module:
//!
//! 1. the caller's seed names, in order;
//! 2. every unwrapped return type and parameter type of every controller method;
//! 3. the field and property types of every class named so far (one level,
//!    names discovered here are not expanded again);
//! 4. minus every name that is neither a class nor an enum.
//!
//! The resulting order is the emission order.

use crate::{ModelIndex, OrderedSet, TypeNameError, strip_return_type_name};

/// Ordered closure of type names selected for emission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    names: OrderedSet,
    unresolved: OrderedSet,
}

impl Resolution {
    /// Class and enum names to emit, in emission order.
    pub fn names(&self) -> &OrderedSet {
        &self.names
    }

    /// Names that were referenced but resolve to neither a class nor an enum.
    pub fn unresolved(&self) -> &OrderedSet {
        &self.unresolved
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Computes the [`Resolution`] for a model.
pub struct ReferenceResolver<'i, 'a> {
    index: &'i ModelIndex<'a>,
}

impl<'i, 'a> ReferenceResolver<'i, 'a> {
    pub fn new(index: &'i ModelIndex<'a>) -> Self {
        Self { index }
    }

    /// Resolve the closure starting from `seeds`.
    ///
    /// Fails only when a controller return type has a malformed wrapper.
    pub fn resolve<S: Into<String>>(
        &self,
        seeds: impl IntoIterator<Item = S>,
    ) -> Result<Resolution, TypeNameError> {
        let mut names: OrderedSet = seeds.into_iter().collect();

        for controller in self.index.controllers() {
            for method in &controller.methods {
                names.insert(strip_return_type_name(&method.return_type_name)?);
                names.extend(&method.parameter_types);
            }
        }

        let referenced = self.member_types(&names);
        names.extend(&referenced);

        let (names, unresolved) = names.partition(|name| self.index.is_known(name));
        Ok(Resolution { names, unresolved })
    }

    /// Field and property types of every class in `names`.
    fn member_types(&self, names: &OrderedSet) -> OrderedSet {
        names
            .iter()
            .filter_map(|name| self.index.find_class(name))
            .flat_map(|class| class.member_type_names())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use tsbind_ir::{
        API_CONTROLLER_ATTRIBUTE, Attribute, SourceClass, SourceEnum, SourceMethod, SourceModule,
    };

    use super::*;

    fn names(resolution: &Resolution) -> Vec<&str> {
        resolution.iter().collect()
    }

    fn controller(name: &str) -> SourceClass {
        SourceClass::new(name).with_attribute(Attribute::new(API_CONTROLLER_ATTRIBUTE))
    }

    fn orders_model() -> Vec<SourceModule> {
        vec![
            SourceModule::new()
                .enumeration(
                    SourceEnum::new("Status")
                        .member("Active", "0")
                        .member("Inactive", "1"),
                )
                .class(
                    SourceClass::new("Order")
                        .property("Id", "int")
                        .property("Status", "Status"),
                )
                .class(
                    controller("OrdersController").method(
                        SourceMethod::new("GetById", "Task<ActionResult<Order>>").param("int"),
                    ),
                ),
        ]
    }

    #[test]
    fn test_controller_signatures_and_members() {
        let modules = orders_model();
        let index = ModelIndex::new(&modules);

        let resolution = ReferenceResolver::new(&index)
            .resolve(Vec::<String>::new())
            .unwrap();

        assert_eq!(names(&resolution), vec!["Order", "Status"]);
        assert_eq!(resolution.unresolved().iter().collect::<Vec<_>>(), vec!["int"]);
    }

    #[test]
    fn test_seeds_come_first() {
        let modules = vec![
            SourceModule::new()
                .class(SourceClass::new("A"))
                .class(SourceClass::new("B"))
                .class(controller("XController").method(SourceMethod::new("Get", "B").param("A"))),
        ];
        let index = ModelIndex::new(&modules);

        let resolution = ReferenceResolver::new(&index).resolve(["B", "B"]).unwrap();

        assert_eq!(names(&resolution), vec!["B", "A"]);
    }

    #[test]
    fn test_expansion_is_one_level() {
        // Root -> Child -> Grandchild: Grandchild is only reachable through a
        // discovered name and is not included.
        let modules = vec![
            SourceModule::new()
                .class(SourceClass::new("Root").property("Child", "Child"))
                .class(SourceClass::new("Child").property("Grandchild", "Grandchild"))
                .class(SourceClass::new("Grandchild")),
        ];
        let index = ModelIndex::new(&modules);

        let resolution = ReferenceResolver::new(&index).resolve(["Root"]).unwrap();

        assert_eq!(names(&resolution), vec!["Root", "Child"]);
        assert!(!resolution.contains("Grandchild"));
    }

    #[test]
    fn test_fields_before_properties() {
        let modules = vec![
            SourceModule::new()
                .class(
                    SourceClass::new("Root")
                        .property("P", "FromProperty")
                        .field("f", "FromField"),
                )
                .class(SourceClass::new("FromProperty"))
                .enumeration(SourceEnum::new("FromField")),
        ];
        let index = ModelIndex::new(&modules);

        let resolution = ReferenceResolver::new(&index).resolve(["Root"]).unwrap();

        assert_eq!(names(&resolution), vec!["Root", "FromField", "FromProperty"]);
    }

    #[test]
    fn test_member_types_are_not_parsed() {
        // `List<Item>` is looked up verbatim and filtered out
        let modules = vec![
            SourceModule::new()
                .class(SourceClass::new("Cart").property("Items", "List<Item>"))
                .class(SourceClass::new("Item")),
        ];
        let index = ModelIndex::new(&modules);

        let resolution = ReferenceResolver::new(&index).resolve(["Cart"]).unwrap();

        assert_eq!(names(&resolution), vec!["Cart"]);
        assert!(resolution.unresolved().contains("List<Item>"));
    }

    #[test]
    fn test_unknown_seeds_are_filtered() {
        let modules = orders_model();
        let index = ModelIndex::new(&modules);

        let resolution = ReferenceResolver::new(&index)
            .resolve(["Guid", "Status", "Missing"])
            .unwrap();

        assert_eq!(names(&resolution), vec!["Status", "Order"]);
        assert_eq!(
            resolution.unresolved().iter().collect::<Vec<_>>(),
            vec!["Guid", "Missing", "int"]
        );
    }

    #[test]
    fn test_methods_of_non_controllers_ignored() {
        let modules = vec![
            SourceModule::new()
                .class(SourceClass::new("Service").method(SourceMethod::new("Load", "Order")))
                .class(SourceClass::new("Order")),
        ];
        let index = ModelIndex::new(&modules);

        let resolution = ReferenceResolver::new(&index)
            .resolve(Vec::<String>::new())
            .unwrap();

        assert!(resolution.is_empty());
    }

    #[test]
    fn test_malformed_return_type() {
        let modules = vec![SourceModule::new().class(
            controller("OrdersController")
                .method(SourceMethod::new("Get", "Task<Order").param("int")),
        )];
        let index = ModelIndex::new(&modules);

        let err = ReferenceResolver::new(&index)
            .resolve(Vec::<String>::new())
            .unwrap_err();

        assert!(matches!(err, TypeNameError::MalformedWrapper { .. }));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let modules = orders_model();
        let index = ModelIndex::new(&modules);
        let resolver = ReferenceResolver::new(&index);

        let first = resolver.resolve(["Status"]).unwrap();
        let second = resolver.resolve(["Status"]).unwrap();

        assert_eq!(first, second);
    }
}
