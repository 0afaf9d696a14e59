//! Generated test model.
//!
//! These types describe the scaffold the generators assemble before
//! rendering: a test class with its imports, fixture properties, lifecycle
//! methods and statements. Statements hold complete target-language lines,
//! trailing semicolon included; the renderer prints them verbatim.

use crate::core::types::Visibility;
use serde::{Deserialize, Serialize};

fn split_namespace(name: &str) -> (Option<&str>, &str) {
    match name.rsplit_once('\\') {
        Some((namespace, short)) => (Some(namespace), short),
        None => (None, name),
    }
}

/// A `use` declaration on the generated test class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestImport {
    name: String,
    alias: Option<String>,
}

impl TestImport {
    /// Import referenced by its short name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    /// Import referenced through an alias
    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: Some(alias.into()),
        }
    }

    /// Fully qualified imported name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Name used to reference the import in code
    pub fn reference_name(&self) -> &str {
        match &self.alias {
            Some(alias) => alias,
            None => split_namespace(&self.name).1,
        }
    }
}

/// One statement inside a generated method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestStatement {
    line: String,
}

impl TestStatement {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.line
    }
}

/// A fixture property on the generated test class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestProperty {
    name: String,
    type_hint: Option<String>,
    documentation: Vec<String>,
}

impl TestProperty {
    pub fn new(name: impl Into<String>, type_hint: Option<String>) -> Self {
        Self {
            name: name.into(),
            type_hint,
            documentation: Vec::new(),
        }
    }

    pub fn set_documentation(&mut self, documentation: Vec<String>) {
        self.documentation = documentation;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_hint(&self) -> Option<&str> {
        self.type_hint.as_deref()
    }

    pub fn documentation(&self) -> &[String] {
        &self.documentation
    }
}

/// A generated method with its statements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestMethod {
    name: String,
    visibility: Visibility,
    return_type: Option<String>,
    documentation: Vec<String>,
    statements: Vec<TestStatement>,
}

impl TestMethod {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            return_type: None,
            documentation: Vec::new(),
            statements: Vec::new(),
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_return_type(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    pub fn add_statement(&mut self, statement: TestStatement) {
        self.statements.push(statement);
    }

    pub fn set_documentation(&mut self, documentation: Vec<String>) {
        self.documentation = documentation;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn return_type(&self) -> Option<&str> {
        self.return_type.as_deref()
    }

    pub fn documentation(&self) -> &[String] {
        &self.documentation
    }

    pub fn statements(&self) -> &[TestStatement] {
        &self.statements
    }
}

/// The assembled test class scaffold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestClass {
    name: String,
    tested_class: String,
    base_class: Option<String>,
    documentation: Vec<String>,
    imports: Vec<TestImport>,
    properties: Vec<TestProperty>,
    methods: Vec<TestMethod>,
}

impl TestClass {
    /// Create an empty scaffold for the given tested class
    pub fn new(name: impl Into<String>, tested_class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tested_class: tested_class.into(),
            base_class: None,
            documentation: Vec::new(),
            imports: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Fully qualified name of the test class
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully qualified name of the class under test
    pub fn tested_class(&self) -> &str {
        &self.tested_class
    }

    /// Name after the last namespace separator
    pub fn short_name(&self) -> &str {
        split_namespace(&self.name).1
    }

    /// Namespace part of the test class name, if any
    pub fn namespace(&self) -> Option<&str> {
        split_namespace(&self.name).0
    }

    /// Reference name of the extended base class, once imported
    pub fn base_class(&self) -> Option<&str> {
        self.base_class.as_deref()
    }

    pub fn set_base_class(&mut self, base_class: impl Into<String>) {
        self.base_class = Some(base_class.into());
    }

    pub fn documentation(&self) -> &[String] {
        &self.documentation
    }

    pub fn set_documentation(&mut self, documentation: Vec<String>) {
        self.documentation = documentation;
    }

    pub fn imports(&self) -> &[TestImport] {
        &self.imports
    }

    pub fn add_import(&mut self, import: TestImport) {
        self.imports.push(import);
    }

    pub fn properties(&self) -> &[TestProperty] {
        &self.properties
    }

    pub fn add_property(&mut self, property: TestProperty) {
        self.properties.push(property);
    }

    pub fn methods(&self) -> &[TestMethod] {
        &self.methods
    }

    pub fn add_method(&mut self, method: TestMethod) {
        self.methods.push(method);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn import_reference_prefers_the_alias() {
        let plain = TestImport::new("App\\User");
        assert_eq!(plain.reference_name(), "User");

        let aliased = TestImport::aliased("Vendor\\User", "VendorUser");
        assert_eq!(aliased.reference_name(), "VendorUser");
    }

    #[test]
    fn global_import_is_its_own_reference() {
        let import = TestImport::new("Mockery");
        assert_eq!(import.reference_name(), "Mockery");
    }

    #[test]
    fn test_class_splits_its_namespace() {
        let class = TestClass::new("Tests\\App\\UserServiceTest", "App\\UserService");
        assert_eq!(class.short_name(), "UserServiceTest");
        assert_eq!(class.namespace(), Some("Tests\\App"));
        assert_eq!(class.tested_class(), "App\\UserService");
    }

    #[test]
    fn methods_collect_statements_in_order() {
        let mut method = TestMethod::new("setUp")
            .with_visibility(Visibility::Protected)
            .with_return_type("void");
        method.add_statement(TestStatement::new("parent::setUp();"));
        method.add_statement(TestStatement::new("$this->thing = new Thing();"));
        let lines: Vec<&str> = method.statements().iter().map(TestStatement::as_str).collect();
        assert_eq!(lines, vec!["parent::setUp();", "$this->thing = new Thing();"]);
    }
}
