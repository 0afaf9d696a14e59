//! Common type definitions used across the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type names PHP treats as builtin rather than as class references.
///
/// Matching is case sensitive: `String` names a class, `string` the scalar.
pub const BUILTIN_TYPES: [&str; 12] = [
    "int", "float", "string", "bool", "callable", "self", "parent", "array", "iterable", "object",
    "void", "mixed",
];

/// Returns true when `name` is one of PHP's builtin type names.
pub fn is_builtin_type(name: &str) -> bool {
    BUILTIN_TYPES.contains(&name)
}

/// Member visibility for methods and properties
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// PHP keyword for this visibility
    pub fn keyword(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

/// Declared (reflected) type of a parameter, property or return value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeType {
    pub name: String,
    #[serde(default)]
    pub nullable: bool,
}

impl NativeType {
    /// Create a new native type
    pub fn new(name: impl Into<String>, nullable: bool) -> Self {
        Self {
            name: name.into(),
            nullable,
        }
    }
}

/// Unified view of one declaration's type information.
///
/// A descriptor merges the native declaration with docblock annotations and
/// is immutable once produced: the name is normalized (no leading root
/// separator), classified as builtin or class reference, and tagged with the
/// combined nullability of both sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    name: String,
    builtin: bool,
    nullable: bool,
}

impl TypeDescriptor {
    /// Unify a native declaration with docblock type annotations.
    ///
    /// Docblock annotations take precedence when present: the first entry
    /// that is neither `null` nor `mixed` names the type, a `null` entry
    /// anywhere in the list marks the result nullable, and a list with no
    /// real candidate yields no descriptor at all. Without annotations the
    /// native declaration is used as is.
    pub fn unify(native: Option<&NativeType>, doc_types: &[String]) -> Option<TypeDescriptor> {
        if doc_types.is_empty() {
            let native = native?;
            return Some(Self::from_name(&native.name, native.nullable));
        }

        let mut nullable = native.is_some_and(|native| native.nullable);
        let mut candidate: Option<&str> = None;
        for entry in doc_types {
            match entry.as_str() {
                "null" => nullable = true,
                "mixed" => {}
                name => {
                    if candidate.is_none() {
                        candidate = Some(name);
                    }
                }
            }
        }

        candidate.map(|name| Self::from_name(name, nullable))
    }

    /// Normalize and classify a single type name
    fn from_name(raw: &str, nullable: bool) -> TypeDescriptor {
        let name = raw.strip_prefix('\\').unwrap_or(raw);
        if name.ends_with("[]") {
            // `User[]` collapses to the builtin array type
            return TypeDescriptor {
                name: "array".to_string(),
                builtin: true,
                nullable,
            };
        }
        TypeDescriptor {
            name: name.to_string(),
            builtin: is_builtin_type(name),
            nullable,
        }
    }

    /// Normalized type name without the leading root separator
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True for PHP builtin types, false for class references
    pub fn is_builtin(&self) -> bool {
        self.builtin
    }

    /// True when either source allowed null
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable {
            write!(f, "?{}", self.name)
        } else {
            f.write_str(&self.name)
        }
    }
}
