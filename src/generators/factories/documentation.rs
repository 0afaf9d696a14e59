//! Documentation blocks for generated entities

use crate::core::traits::{Aware, DocumentationFactory};
use crate::models::TestClass;

/// Default documentation factory emitting phpDoc blocks
#[derive(Debug, Default)]
pub struct BasicDocumentationFactory;

impl Aware for BasicDocumentationFactory {}

impl DocumentationFactory for BasicDocumentationFactory {
    fn class_documentation(&self, class: &TestClass) -> Vec<String> {
        vec![
            format!("Class {}.", class.short_name()),
            String::new(),
            format!("@covers \\{}", class.tested_class()),
        ]
    }

    fn property_documentation(&self, type_hint: &str) -> Vec<String> {
        vec![format!("@var {type_hint}")]
    }
}
