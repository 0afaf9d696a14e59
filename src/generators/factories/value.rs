//! Literal argument expressions for typed parameters

use crate::core::errors::Result;
use crate::core::traits::{Aware, Injected, MockGenerator, MockGeneratorAware, ValueFactory};
use crate::core::types::TypeDescriptor;
use crate::models::TestClass;
use std::sync::Arc;

/// Default value factory.
///
/// Builtin types map to fixed literals; class types delegate to the bound
/// mock generator for an inline mock expression.
#[derive(Debug)]
pub struct BasicValueFactory {
    mock_generator: Injected<dyn MockGenerator>,
}

impl Default for BasicValueFactory {
    fn default() -> Self {
        Self {
            mock_generator: Injected::new("mock_generator"),
        }
    }
}

impl Aware for BasicValueFactory {
    fn as_mock_generator_aware(&self) -> Option<&dyn MockGeneratorAware> {
        Some(self)
    }
}

impl MockGeneratorAware for BasicValueFactory {
    fn set_mock_generator(&self, generator: Arc<dyn MockGenerator>) {
        self.mock_generator.set(generator);
    }
}

impl ValueFactory for BasicValueFactory {
    fn make(&self, class: &mut TestClass, descriptor: Option<&TypeDescriptor>) -> Result<String> {
        let Some(descriptor) = descriptor else {
            return Ok("null".to_string());
        };
        if !descriptor.is_builtin() {
            return self
                .mock_generator
                .get()?
                .mock_expression(class, descriptor.name());
        }
        let literal = match descriptor.name() {
            "int" => "42",
            "float" => "42.42",
            "string" => "'42'",
            "bool" => "true",
            "callable" => "function () {}",
            "array" | "iterable" => "[]",
            "object" => "new \\stdClass()",
            // self, parent, void and mixed have no usable literal
            _ => "null",
        };
        Ok(literal.to_string())
    }
}
