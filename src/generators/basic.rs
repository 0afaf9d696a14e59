//! Default test generator

use crate::config::GeneratorConfig;
use crate::core::errors::{Error, Result};
use crate::core::traits::{
    Aware, ClassFactory, ClassFactoryAware, ConfigAware, Injected, MethodFactory,
    MethodFactoryAware, PropertyFactory, PropertyFactoryAware, TestGenerator,
};
use crate::models::TestClass;
use crate::reflection::{ClassKind, ClassModel};
use std::sync::Arc;

/// Default generator for concrete classes.
///
/// Delegates the shell to the class factory, the fixture to the property
/// factory, and lifecycle methods plus stubs to the method factory.
#[derive(Debug)]
pub struct BasicTestGenerator {
    config: Injected<GeneratorConfig>,
    class_factory: Injected<dyn ClassFactory>,
    method_factory: Injected<dyn MethodFactory>,
    property_factory: Injected<dyn PropertyFactory>,
}

impl Default for BasicTestGenerator {
    fn default() -> Self {
        Self {
            config: Injected::new("config"),
            class_factory: Injected::new("class_factory"),
            method_factory: Injected::new("method_factory"),
            property_factory: Injected::new("property_factory"),
        }
    }
}

impl Aware for BasicTestGenerator {
    fn as_config_aware(&self) -> Option<&dyn ConfigAware> {
        Some(self)
    }

    fn as_class_factory_aware(&self) -> Option<&dyn ClassFactoryAware> {
        Some(self)
    }

    fn as_method_factory_aware(&self) -> Option<&dyn MethodFactoryAware> {
        Some(self)
    }

    fn as_property_factory_aware(&self) -> Option<&dyn PropertyFactoryAware> {
        Some(self)
    }
}

impl ConfigAware for BasicTestGenerator {
    fn set_config(&self, config: Arc<GeneratorConfig>) {
        self.config.set(config);
    }
}

impl ClassFactoryAware for BasicTestGenerator {
    fn set_class_factory(&self, factory: Arc<dyn ClassFactory>) {
        self.class_factory.set(factory);
    }
}

impl MethodFactoryAware for BasicTestGenerator {
    fn set_method_factory(&self, factory: Arc<dyn MethodFactory>) {
        self.method_factory.set(factory);
    }
}

impl PropertyFactoryAware for BasicTestGenerator {
    fn set_property_factory(&self, factory: Arc<dyn PropertyFactory>) {
        self.property_factory.set(factory);
    }
}

impl TestGenerator for BasicTestGenerator {
    fn can_generate_for(&self, model: &ClassModel) -> bool {
        model.kind() == ClassKind::Class
    }

    fn generate(&self, model: &ClassModel) -> Result<TestClass> {
        if !self.can_generate_for(model) {
            return Err(Error::unsupported(format!(
                "cannot generate tests for {} `{}`",
                model.kind(),
                model.name()
            )));
        }

        let mut class = self.class_factory.get()?.make(model)?;
        self.property_factory
            .get()?
            .make_properties(&mut class, model)?;

        let methods = self.method_factory.get()?;
        methods.make_set_up(&mut class, model)?;
        methods.make_tear_down(&mut class, model)?;

        if self.config.get()?.automatic_generation {
            for method in model.methods() {
                methods.make_test_stub(&mut class, model, method)?;
            }
        }

        log::debug!("generated scaffold {} for {}", class.name(), model.name());
        Ok(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_concrete_classes_are_generatable() {
        let generator = BasicTestGenerator::default();
        assert!(generator.can_generate_for(&ClassModel::new("App\\User", ClassKind::Class)));
        assert!(!generator.can_generate_for(&ClassModel::new("App\\User", ClassKind::Interface)));
        assert!(!generator.can_generate_for(&ClassModel::new("App\\User", ClassKind::Trait)));
        assert!(
            !generator.can_generate_for(&ClassModel::new("App\\User", ClassKind::AbstractClass))
        );
    }

    #[test]
    fn unsupported_models_name_their_kind() {
        let generator = BasicTestGenerator::default();
        let model = ClassModel::new("App\\UserInterface", ClassKind::Interface);
        let error = generator.generate(&model).unwrap_err();
        assert_eq!(
            error.to_string(),
            "unsupported: cannot generate tests for interface `App\\UserInterface`"
        );
    }
}
