//! PHPUnit-flavored mock generation

use crate::core::errors::Result;
use crate::core::traits::{
    Aware, ImportFactory, ImportFactoryAware, Injected, MockGenerator,
};
use crate::models::{TestClass, TestMethod, TestProperty, TestStatement};
use crate::reflection::Parameter;
use std::sync::Arc;

const MOCK_OBJECT: &str = "PHPUnit\\Framework\\MockObject\\MockObject";

/// Mock generator emitting `getMockBuilder(...)` fixtures
#[derive(Debug)]
pub struct PhpUnitMockGenerator {
    import_factory: Injected<dyn ImportFactory>,
}

impl Default for PhpUnitMockGenerator {
    fn default() -> Self {
        Self {
            import_factory: Injected::new("import_factory"),
        }
    }
}

impl Aware for PhpUnitMockGenerator {
    fn as_import_factory_aware(&self) -> Option<&dyn ImportFactoryAware> {
        Some(self)
    }
}

impl ImportFactoryAware for PhpUnitMockGenerator {
    fn set_import_factory(&self, factory: Arc<dyn ImportFactory>) {
        self.import_factory.set(factory);
    }
}

impl MockGenerator for PhpUnitMockGenerator {
    fn generate_property(&self, class: &mut TestClass, parameter: &Parameter) -> Result<()> {
        let Some(descriptor) = parameter.type_descriptor() else {
            return Ok(());
        };
        if descriptor.is_builtin() {
            return Ok(());
        }

        let hint = self.import_factory.get()?.import(class, MOCK_OBJECT);
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

        let target = self.import_factory.get()?.import(class, descriptor.name());
        method.add_statement(TestStatement::new(format!(
            "$this->{}Mock = $this->getMockBuilder({}::class)->getMock();",
            parameter.name, target
        )));
        Ok(())
    }

    fn mock_expression(&self, class: &mut TestClass, type_name: &str) -> Result<String> {
        let target = self.import_factory.get()?.import(class, type_name);
        Ok(format!("$this->getMockBuilder({target}::class)->getMock()"))
    }
}
