//! TypeScript declarations emitted for source classes and enums.
//!
//! These provide a small builder API for TypeScript syntax, rendered
//! through [`CodeBuilder`](tsbind_codegen::CodeBuilder).

mod classes;
mod enums;

pub use classes::{Class, ClassField};
pub use enums::Enum;
