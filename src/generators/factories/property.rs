//! Fixture properties for the class under test

use crate::core::errors::Result;
use crate::core::traits::{
    Aware, DocumentationFactory, DocumentationFactoryAware, ImportFactory, ImportFactoryAware,
    Injected, MockGenerator, MockGeneratorAware, PropertyFactory,
};
use crate::generators::variable_name;
use crate::models::{TestClass, TestProperty};
use crate::reflection::ClassModel;
use std::sync::Arc;

/// Default property factory: one holder for the instance under test plus a
/// mock holder per mockable constructor parameter. Static-only classes get
/// no holders at all.
#[derive(Debug)]
pub struct BasicPropertyFactory {
    documentation_factory: Injected<dyn DocumentationFactory>,
    import_factory: Injected<dyn ImportFactory>,
    mock_generator: Injected<dyn MockGenerator>,
}

impl Default for BasicPropertyFactory {
    fn default() -> Self {
        Self {
            documentation_factory: Injected::new("documentation_factory"),
            import_factory: Injected::new("import_factory"),
            mock_generator: Injected::new("mock_generator"),
        }
    }
}

impl Aware for BasicPropertyFactory {
    fn as_documentation_factory_aware(&self) -> Option<&dyn DocumentationFactoryAware> {
        Some(self)
    }

    fn as_import_factory_aware(&self) -> Option<&dyn ImportFactoryAware> {
        Some(self)
    }

    fn as_mock_generator_aware(&self) -> Option<&dyn MockGeneratorAware> {
        Some(self)
    }
}

impl DocumentationFactoryAware for BasicPropertyFactory {
    fn set_documentation_factory(&self, factory: Arc<dyn DocumentationFactory>) {
        self.documentation_factory.set(factory);
    }
}

impl ImportFactoryAware for BasicPropertyFactory {
    fn set_import_factory(&self, factory: Arc<dyn ImportFactory>) {
        self.import_factory.set(factory);
    }
}

impl MockGeneratorAware for BasicPropertyFactory {
    fn set_mock_generator(&self, generator: Arc<dyn MockGenerator>) {
        self.mock_generator.set(generator);
    }
}

impl PropertyFactory for BasicPropertyFactory {
    fn make_properties(&self, class: &mut TestClass, model: &ClassModel) -> Result<()> {
        if model.is_static_only() {
            return Ok(());
        }

        let reference = self.import_factory.get()?.import(class, model.name());
        let mut property =
            TestProperty::new(variable_name(model.short_name()), Some(reference.clone()));
        property.set_documentation(
            self.documentation_factory
                .get()?
                .property_documentation(&reference),
        );
        class.add_property(property);

        if let Some(constructor) = model.constructor() {
            let mocks = self.mock_generator.get()?;
            for parameter in constructor.parameters() {
                mocks.generate_property(class, parameter)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::NativeType;
    use crate::generators::factories::{BasicDocumentationFactory, BasicImportFactory};
    use crate::generators::mocks::MockeryMockGenerator;
    use crate::reflection::{ClassKind, Method, Parameter};
    use pretty_assertions::assert_eq;

    fn wired_factory() -> BasicPropertyFactory {
        let imports: Arc<dyn ImportFactory> = Arc::new(BasicImportFactory::default());
        let mocks = MockeryMockGenerator::default();
        mocks.set_import_factory(Arc::clone(&imports));

        let factory = BasicPropertyFactory::default();
        factory.set_documentation_factory(Arc::new(BasicDocumentationFactory::default()));
        factory.set_import_factory(imports);
        factory.set_mock_generator(Arc::new(mocks));
        factory
    }

    #[test]
    fn adds_the_holder_for_the_tested_class() {
        let factory = wired_factory();
        let mut class = TestClass::new("Tests\\App\\UserServiceTest", "App\\UserService");
        let model = ClassModel::new("App\\UserService", ClassKind::Class);

        factory.make_properties(&mut class, &model).unwrap();

        assert_eq!(class.properties().len(), 1);
        let holder = &class.properties()[0];
        assert_eq!(holder.name(), "userService");
        assert_eq!(holder.type_hint(), Some("UserService"));
        assert_eq!(holder.documentation(), &["@var UserService".to_string()]);
    }

    #[test]
    fn static_only_classes_get_no_holders() {
        let factory = wired_factory();
        let mut class = TestClass::new("Tests\\App\\SlugTest", "App\\Slug");
        let model = ClassModel::new("App\\Slug", ClassKind::Class)
            .with_method(Method::new("slugify").with_static());

        factory.make_properties(&mut class, &model).unwrap();

        assert!(class.properties().is_empty());
        assert!(class.imports().is_empty());
    }

    #[test]
    fn constructor_parameters_get_mock_holders() {
        let factory = wired_factory();
        let mut class = TestClass::new("Tests\\App\\UserServiceTest", "App\\UserService");
        let model = ClassModel::new("App\\UserService", ClassKind::Class).with_method(
            Method::new("__construct")
                .with_parameter(Parameter::new(
                    "repository",
                    Some(NativeType::new("\\App\\UserRepository", false)),
                    Vec::new(),
                ))
                .with_parameter(Parameter::new(
                    "retries",
                    Some(NativeType::new("int", false)),
                    Vec::new(),
                )),
        );

        factory.make_properties(&mut class, &model).unwrap();

        let names: Vec<&str> = class.properties().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["userService", "repositoryMock"]);
    }
}
