//! Class model consumed by generation.
//!
//! Models arrive pre-extracted (typically as JSON produced by a reflection
//! step in the target language) and carry both native declarations and
//! docblock annotations. Type descriptors are computed once, either eagerly
//! by the typed constructors or by [`ClassModel::finalize`] after
//! deserialization, and stay untouched afterwards.

use crate::core::types::{NativeType, TypeDescriptor, Visibility};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of declaration the model describes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    #[default]
    Class,
    AbstractClass,
    Interface,
    Trait,
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ClassKind::Class => "class",
            ClassKind::AbstractClass => "abstract class",
            ClassKind::Interface => "interface",
            ClassKind::Trait => "trait",
        };
        f.write_str(label)
    }
}

/// A class declaration with its members
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassModel {
    name: String,
    #[serde(default)]
    kind: ClassKind,
    #[serde(default)]
    methods: Vec<Method>,
    #[serde(default)]
    properties: Vec<Property>,
}

impl ClassModel {
    /// Create an empty class model; a leading root separator is stripped
    pub fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        let name = name.into();
        let name = name.strip_prefix('\\').unwrap_or(&name).to_string();
        Self {
            name,
            kind,
            methods: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Add a method
    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Add a property
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Fully qualified name without the leading root separator
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Name after the last namespace separator
    pub fn short_name(&self) -> &str {
        self.name
            .rsplit_once('\\')
            .map_or(self.name.as_str(), |(_, short)| short)
    }

    /// Namespace part of the name, if any
    pub fn namespace(&self) -> Option<&str> {
        self.name.rsplit_once('\\').map(|(namespace, _)| namespace)
    }

    /// The constructor method, when declared
    pub fn constructor(&self) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == "__construct")
    }

    /// True when the public surface consists of static methods only.
    ///
    /// Such classes are exercised through the class name and need no
    /// constructed subject. A class with no public methods at all does not
    /// count as static-only.
    pub fn is_static_only(&self) -> bool {
        self.methods
            .iter()
            .any(|m| m.visibility == Visibility::Public)
            && self
                .methods
                .iter()
                .filter(|m| m.visibility == Visibility::Public)
                .all(|m| m.is_static)
    }

    /// Recompute all type descriptors from their sources.
    ///
    /// Required after deserialization; idempotent otherwise.
    pub fn finalize(&mut self) {
        self.name = self
            .name
            .strip_prefix('\\')
            .unwrap_or(&self.name)
            .to_string();
        for method in &mut self.methods {
            method.finalize();
        }
        for property in &mut self.properties {
            property.finalize();
        }
    }
}

/// A method declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    parameters: Vec<Parameter>,
    #[serde(default)]
    native_return: Option<NativeType>,
    #[serde(default)]
    return_doc_types: Vec<String>,
    #[serde(skip)]
    return_type: Option<TypeDescriptor>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: false,
            is_abstract: false,
            parameters: Vec::new(),
            native_return: None,
            return_doc_types: Vec::new(),
            return_type: None,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Set the return type sources and unify them
    pub fn with_return(mut self, native: Option<NativeType>, doc_types: Vec<String>) -> Self {
        self.return_type = TypeDescriptor::unify(native.as_ref(), &doc_types);
        self.native_return = native;
        self.return_doc_types = doc_types;
        self
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Unified return type, when any source declared one
    pub fn return_type(&self) -> Option<&TypeDescriptor> {
        self.return_type.as_ref()
    }

    fn finalize(&mut self) {
        self.return_type = TypeDescriptor::unify(self.native_return.as_ref(), &self.return_doc_types);
        for parameter in &mut self.parameters {
            parameter.finalize();
        }
    }
}

/// A declared parameter with its type sources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    native: Option<NativeType>,
    #[serde(default)]
    doc_types: Vec<String>,
    #[serde(skip)]
    type_descriptor: Option<TypeDescriptor>,
}

impl Parameter {
    pub fn new(
        name: impl Into<String>,
        native: Option<NativeType>,
        doc_types: Vec<String>,
    ) -> Self {
        let type_descriptor = TypeDescriptor::unify(native.as_ref(), &doc_types);
        Self {
            name: name.into(),
            native,
            doc_types,
            type_descriptor,
        }
    }

    /// Parameter with no type information from either source
    pub fn untyped(name: impl Into<String>) -> Self {
        Self::new(name, None, Vec::new())
    }

    /// Unified type, when any source declared one
    pub fn type_descriptor(&self) -> Option<&TypeDescriptor> {
        self.type_descriptor.as_ref()
    }

    fn finalize(&mut self) {
        self.type_descriptor = TypeDescriptor::unify(self.native.as_ref(), &self.doc_types);
    }
}

/// A property declaration with its type sources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    native: Option<NativeType>,
    #[serde(default)]
    doc_types: Vec<String>,
    #[serde(skip)]
    type_descriptor: Option<TypeDescriptor>,
}

impl Property {
    pub fn new(
        name: impl Into<String>,
        native: Option<NativeType>,
        doc_types: Vec<String>,
    ) -> Self {
        let type_descriptor = TypeDescriptor::unify(native.as_ref(), &doc_types);
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            native,
            doc_types,
            type_descriptor,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Unified type, when any source declared one
    pub fn type_descriptor(&self) -> Option<&TypeDescriptor> {
        self.type_descriptor.as_ref()
    }

    fn finalize(&mut self) {
        self.type_descriptor = TypeDescriptor::unify(self.native.as_ref(), &self.doc_types);
    }
}
