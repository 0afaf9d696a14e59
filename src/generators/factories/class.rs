//! Creates the empty test class shell

use crate::config::GeneratorConfig;
use crate::core::errors::Result;
use crate::core::traits::{
    Aware, ClassFactory, ConfigAware, DocumentationFactory, DocumentationFactoryAware,
    ImportFactory, ImportFactoryAware, Injected,
};
use crate::models::TestClass;
use crate::reflection::ClassModel;
use std::sync::Arc;

/// Default class factory: names the test class from the configured
/// namespaces, imports the base test case and attaches documentation.
#[derive(Debug)]
pub struct BasicClassFactory {
    config: Injected<GeneratorConfig>,
    documentation_factory: Injected<dyn DocumentationFactory>,
    import_factory: Injected<dyn ImportFactory>,
}

impl Default for BasicClassFactory {
    fn default() -> Self {
        Self {
            config: Injected::new("config"),
            documentation_factory: Injected::new("documentation_factory"),
            import_factory: Injected::new("import_factory"),
        }
    }
}

impl Aware for BasicClassFactory {
    fn as_config_aware(&self) -> Option<&dyn ConfigAware> {
        Some(self)
    }

    fn as_documentation_factory_aware(&self) -> Option<&dyn DocumentationFactoryAware> {
        Some(self)
    }

    fn as_import_factory_aware(&self) -> Option<&dyn ImportFactoryAware> {
        Some(self)
    }
}

impl ConfigAware for BasicClassFactory {
    fn set_config(&self, config: Arc<GeneratorConfig>) {
        self.config.set(config);
    }
}

impl DocumentationFactoryAware for BasicClassFactory {
    fn set_documentation_factory(&self, factory: Arc<dyn DocumentationFactory>) {
        self.documentation_factory.set(factory);
    }
}

impl ImportFactoryAware for BasicClassFactory {
    fn set_import_factory(&self, factory: Arc<dyn ImportFactory>) {
        self.import_factory.set(factory);
    }
}

impl ClassFactory for BasicClassFactory {
    fn make(&self, model: &ClassModel) -> Result<TestClass> {
        let config = self.config.get()?;
        let name = test_class_name(config, model);
        let mut class = TestClass::new(name, model.name());

        let base = self
            .import_factory
            .get()?
            .import(&mut class, &config.test_case_class);
        class.set_base_class(base);

        let documentation = self
            .documentation_factory
            .get()?
            .class_documentation(&class);
        class.set_documentation(documentation);
        Ok(class)
    }
}

/// Replace the configured base namespace with the test namespace and append
/// the `Test` suffix
fn test_class_name(config: &GeneratorConfig, model: &ClassModel) -> String {
    let name = model.name();
    let relative = if config.base_namespace.is_empty() {
        name
    } else {
        name.strip_prefix(&format!("{}\\", config.base_namespace))
            .unwrap_or_else(|| {
                log::warn!(
                    "class {} is outside the base namespace {}",
                    name,
                    config.base_namespace
                );
                name
            })
    };
    if config.base_test_namespace.is_empty() {
        format!("{relative}Test")
    } else {
        format!("{}\\{}Test", config.base_test_namespace, relative)
    }
}
