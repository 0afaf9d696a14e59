//! Mockery-flavored mock generation

use crate::core::errors::Result;
use crate::core::traits::{
    Aware, ImportFactory, ImportFactoryAware, Injected, MockGenerator,
};
use crate::models::{TestClass, TestMethod, TestProperty, TestStatement};
use crate::reflection::Parameter;
use std::sync::Arc;

const MOCKERY: &str = "Mockery";
const MOCK_INTERFACE: &str = "Mockery\\MockInterface";

/// Mock generator emitting `Mockery::mock(...)` fixtures.
///
/// Only parameters whose unified type is a class reference are mockable;
/// builtin and untyped parameters are skipped without error.
#[derive(Debug)]
pub struct MockeryMockGenerator {
    import_factory: Injected<dyn ImportFactory>,
}

impl Default for MockeryMockGenerator {
    fn default() -> Self {
        Self {
            import_factory: Injected::new("import_factory"),
        }
    }
}

impl Aware for MockeryMockGenerator {
    fn as_import_factory_aware(&self) -> Option<&dyn ImportFactoryAware> {
        Some(self)
    }
}

impl ImportFactoryAware for MockeryMockGenerator {
    fn set_import_factory(&self, factory: Arc<dyn ImportFactory>) {
        self.import_factory.set(factory);
    }
}

impl MockGenerator for MockeryMockGenerator {
    fn generate_property(&self, class: &mut TestClass, parameter: &Parameter) -> Result<()> {
        let Some(descriptor) = parameter.type_descriptor() else {
            return Ok(());
        };
        if descriptor.is_builtin() {
            return Ok(());
        }

        let hint = self.import_factory.get()?.import(class, MOCK_INTERFACE);
        let mut property = TestProperty::new(format!("{}Mock", parameter.name), Some(hint.clone()));
        property.set_documentation(vec![format!("@var {hint}")]);
        class.add_property(property);
        Ok(())
    }

    fn generate_statement(
        &self,
        class: &mut TestClass,
        method: &mut TestMethod,
        parameter: &Parameter,
    ) -> Result<()> {
        let Some(descriptor) = parameter.type_descriptor() else {
            return Ok(());
        };
        if descriptor.is_builtin() {
            return Ok(());
        }

        let imports = self.import_factory.get()?;
        let target = imports.import(class, descriptor.name());
        let mockery = imports.import(class, MOCKERY);
        method.add_statement(TestStatement::new(format!(
            "$this->{}Mock = {}::mock({}::class);",
            parameter.name, mockery, target
        )));
        Ok(())
    }

    fn mock_expression(&self, class: &mut TestClass, type_name: &str) -> Result<String> {
        let imports = self.import_factory.get()?;
        let target = imports.import(class, type_name);
        let mockery = imports.import(class, MOCKERY);
        Ok(format!("{mockery}::mock({target}::class)"))
    }
}
