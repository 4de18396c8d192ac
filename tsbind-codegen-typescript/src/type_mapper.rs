//! TypeScript type mapper implementation.

use tsbind_codegen::TypeMapper;

/// Primitive renames, applied as substring replacements.
const PRIMITIVES: [(&str, &str); 4] = [
    ("int", "number"),
    ("float", "number"),
    ("decimal", "number"),
    ("bool", "boolean"),
];

/// TypeScript type mapper implementation.
///
/// The mapping is textual: `List<` becomes `Array<`, primitive names are
/// replaced wherever they occur, and one trailing `?` is dropped. A name that
/// merely contains a primitive (`Point`) is rewritten too (`Ponumber`).
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn map_type_name(&self, raw: &str) -> String {
        let mut name = raw.replace("List<", "Array<");
        for (from, to) in PRIMITIVES {
            name = name.replace(from, to);
        }
        if name.ends_with('?') {
            name.pop();
        }
        name
    }
}
