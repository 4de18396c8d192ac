//! Source type-name utilities.
//!
//! Type names are handled as text, not parsed: a wrapper is removed by cutting
//! out its `Name<` prefix and the last `>` of the string.

use thiserror::Error;

/// Wrappers removed from method return types, outermost first.
pub const WRAPPER_TYPES: [&str; 2] = ["Task", "ActionResult"];

/// A type name that violates the source model's input contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeNameError {
    #[error("malformed type name '{type_name}': `{wrapper}<` has no closing '>'")]
    MalformedWrapper { type_name: String, wrapper: String },
}

/// Remove a single `wrapper<...>` from `type_name`.
///
/// Finds the first `"<wrapper><"`, removes it, then removes the last `>` and
/// everything after it. Returns the input unchanged when the wrapper is absent.
///
/// ```
/// use tsbind_codegen::strip_generic_type;
///
/// assert_eq!(strip_generic_type("Task<Order>", "Task").unwrap(), "Order");
/// assert_eq!(strip_generic_type("Order", "Task").unwrap(), "Order");
/// ```
pub fn strip_generic_type(type_name: &str, wrapper: &str) -> Result<String, TypeNameError> {
    let marker = format!("{wrapper}<");
    let Some(start) = type_name.find(&marker) else {
        return Ok(type_name.to_string());
    };

    let mut stripped = String::with_capacity(type_name.len());
    stripped.push_str(&type_name[..start]);
    stripped.push_str(&type_name[start + marker.len()..]);

    let close = stripped
        .rfind('>')
        .ok_or_else(|| TypeNameError::MalformedWrapper {
            type_name: type_name.to_string(),
            wrapper: wrapper.to_string(),
        })?;
    stripped.truncate(close);
    Ok(stripped)
}

/// Unwrap a method return type through every known wrapper.
///
/// `Task<ActionResult<Order>>` becomes `Order`.
pub fn strip_return_type_name(type_name: &str) -> Result<String, TypeNameError> {
    WRAPPER_TYPES
        .iter()
        .try_fold(type_name.to_string(), |name, wrapper| {
            strip_generic_type(&name, wrapper)
        })
}
