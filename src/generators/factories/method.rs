//! Lifecycle methods and per-method test stubs

use crate::config::GeneratorConfig;
use crate::core::errors::Result;
use crate::core::traits::{
    Aware, ConfigAware, ImportFactory, ImportFactoryAware, Injected, MethodFactory, MockGenerator,
    MockGeneratorAware, StatementFactory, StatementFactoryAware, ValueFactory, ValueFactoryAware,
};
use crate::core::types::Visibility;
use crate::generators::{ucfirst, variable_name};
use crate::models::{TestClass, TestMethod, TestStatement};
use crate::reflection::{ClassModel, Method};
use once_cell::sync::OnceCell;
use regex::Regex;
use std::sync::Arc;

const INCOMPLETE_MESSAGE: &str = "This test has not been implemented yet.";

/// Default method factory: builds setUp and tearDown around the constructor
/// of the class under test and emits incomplete stubs for testable methods.
/// Static-only classes get stubs without the lifecycle pair.
#[derive(Debug)]
pub struct BasicMethodFactory {
    config: Injected<GeneratorConfig>,
    import_factory: Injected<dyn ImportFactory>,
    mock_generator: Injected<dyn MockGenerator>,
    statement_factory: Injected<dyn StatementFactory>,
    value_factory: Injected<dyn ValueFactory>,
    excluded: OnceCell<Vec<Regex>>,
}

impl Default for BasicMethodFactory {
    fn default() -> Self {
        Self {
            config: Injected::new("config"),
            import_factory: Injected::new("import_factory"),
            mock_generator: Injected::new("mock_generator"),
            statement_factory: Injected::new("statement_factory"),
            value_factory: Injected::new("value_factory"),
            excluded: OnceCell::new(),
        }
    }
}

impl Aware for BasicMethodFactory {
    fn as_config_aware(&self) -> Option<&dyn ConfigAware> {
        Some(self)
    }

    fn as_import_factory_aware(&self) -> Option<&dyn ImportFactoryAware> {
        Some(self)
    }

    fn as_mock_generator_aware(&self) -> Option<&dyn MockGeneratorAware> {
        Some(self)
    }

    fn as_statement_factory_aware(&self) -> Option<&dyn StatementFactoryAware> {
        Some(self)
    }

    fn as_value_factory_aware(&self) -> Option<&dyn ValueFactoryAware> {
        Some(self)
    }
}

impl ConfigAware for BasicMethodFactory {
    fn set_config(&self, config: Arc<GeneratorConfig>) {
        self.config.set(config);
    }
}

impl ImportFactoryAware for BasicMethodFactory {
    fn set_import_factory(&self, factory: Arc<dyn ImportFactory>) {
        self.import_factory.set(factory);
    }
}

impl MockGeneratorAware for BasicMethodFactory {
    fn set_mock_generator(&self, generator: Arc<dyn MockGenerator>) {
        self.mock_generator.set(generator);
    }
}

impl StatementFactoryAware for BasicMethodFactory {
    fn set_statement_factory(&self, factory: Arc<dyn StatementFactory>) {
        self.statement_factory.set(factory);
    }
}

impl ValueFactoryAware for BasicMethodFactory {
    fn set_value_factory(&self, factory: Arc<dyn ValueFactory>) {
        self.value_factory.set(factory);
    }
}

impl BasicMethodFactory {
    fn excluded_patterns(&self) -> Result<&[Regex]> {
        let patterns = self
            .excluded
            .get_or_try_init(|| self.config.get()?.excluded_patterns())?;
        Ok(patterns)
    }

    fn is_excluded(&self, name: &str) -> Result<bool> {
        Ok(self
            .excluded_patterns()?
            .iter()
            .any(|pattern| pattern.is_match(name)))
    }
}

impl MethodFactory for BasicMethodFactory {
    fn make_set_up(&self, class: &mut TestClass, model: &ClassModel) -> Result<()> {
        if model.is_static_only() {
            return Ok(());
        }

        let mut method = TestMethod::new("setUp")
            .with_visibility(Visibility::Protected)
            .with_return_type("void");
        method.add_statement(TestStatement::new("parent::setUp();"));

        let mut arguments = Vec::new();
        if let Some(constructor) = model.constructor() {
            let mocks = self.mock_generator.get()?;
            let values = self.value_factory.get()?;
            for parameter in constructor.parameters() {
                mocks.generate_statement(class, &mut method, parameter)?;
                let argument = match parameter.type_descriptor() {
                    Some(descriptor) if !descriptor.is_builtin() => {
                        format!("$this->{}Mock", parameter.name)
                    }
                    descriptor => values.make(class, descriptor)?,
                };
                arguments.push(argument);
            }
        }

        let reference = self.import_factory.get()?.import(class, model.name());
        let target = format!("$this->{}", variable_name(model.short_name()));
        let expression = format!("new {}({})", reference, arguments.join(", "));
        method.add_statement(self.statement_factory.get()?.affect(&target, &expression));

        class.add_method(method);
        Ok(())
    }

    fn make_tear_down(&self, class: &mut TestClass, model: &ClassModel) -> Result<()> {
        if model.is_static_only() {
            return Ok(());
        }

        let mut method = TestMethod::new("tearDown")
            .with_visibility(Visibility::Protected)
            .with_return_type("void");
        method.add_statement(TestStatement::new("parent::tearDown();"));

        let properties: Vec<String> = class
            .properties()
            .iter()
            .map(|property| property.name().to_string())
            .collect();
        for name in properties {
            method.add_statement(TestStatement::new(format!("unset($this->{name});")));
        }

        class.add_method(method);
        Ok(())
    }

    fn make_test_stub(
        &self,
        class: &mut TestClass,
        _model: &ClassModel,
        method: &Method,
    ) -> Result<()> {
        if method.visibility != Visibility::Public || method.is_abstract {
            return Ok(());
        }
        if self.is_excluded(&method.name)? {
            return Ok(());
        }

        let mut stub =
            TestMethod::new(format!("test{}", ucfirst(&method.name))).with_return_type("void");
        stub.add_statement(self.statement_factory.get()?.todo(INCOMPLETE_MESSAGE));
        class.add_method(stub);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::NativeType;
    use crate::generators::factories::{
        BasicImportFactory, BasicStatementFactory, BasicValueFactory,
    };
    use crate::generators::mocks::MockeryMockGenerator;
    use crate::reflection::{ClassKind, Parameter};
    use pretty_assertions::assert_eq;

    fn wired_factory(config: GeneratorConfig) -> BasicMethodFactory {
        let imports: Arc<dyn ImportFactory> = Arc::new(BasicImportFactory::default());
        let mocks = MockeryMockGenerator::default();
        mocks.set_import_factory(Arc::clone(&imports));
        let mocks: Arc<dyn MockGenerator> = Arc::new(mocks);
        let values = BasicValueFactory::default();
        values.set_mock_generator(Arc::clone(&mocks));

        let factory = BasicMethodFactory::default();
        factory.set_config(Arc::new(config));
        factory.set_import_factory(imports);
        factory.set_mock_generator(mocks);
        factory.set_statement_factory(Arc::new(BasicStatementFactory::default()));
        factory.set_value_factory(Arc::new(values));
        factory
    }

    fn statements(method: &TestMethod) -> Vec<&str> {
        method.statements().iter().map(|s| s.as_str()).collect()
    }

    #[test]
    fn set_up_instantiates_with_mocks_and_literals() {
        let factory = wired_factory(GeneratorConfig::default());
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

        factory.make_set_up(&mut class, &model).unwrap();

        let set_up = &class.methods()[0];
        assert_eq!(set_up.name(), "setUp");
        assert_eq!(set_up.visibility(), Visibility::Protected);
        assert_eq!(set_up.return_type(), Some("void"));
        assert_eq!(
            statements(set_up),
            vec![
                "parent::setUp();",
                "$this->repositoryMock = Mockery::mock(UserRepository::class);",
                "$this->userService = new UserService($this->repositoryMock, 42);",
            ]
        );
    }

    #[test]
    fn set_up_without_constructor_instantiates_bare() {
        let factory = wired_factory(GeneratorConfig::default());
        let mut class = TestClass::new("Tests\\App\\UserServiceTest", "App\\UserService");
        let model = ClassModel::new("App\\UserService", ClassKind::Class);

        factory.make_set_up(&mut class, &model).unwrap();

        assert_eq!(
            statements(&class.methods()[0]),
            vec![
                "parent::setUp();",
                "$this->userService = new UserService();",
            ]
        );
    }

    #[test]
    fn static_only_classes_get_no_lifecycle_methods() {
        let factory = wired_factory(GeneratorConfig::default());
        let mut class = TestClass::new("Tests\\App\\SlugTest", "App\\Slug");
        let model = ClassModel::new("App\\Slug", ClassKind::Class)
            .with_method(Method::new("slugify").with_static());

        factory.make_set_up(&mut class, &model).unwrap();
        factory.make_tear_down(&mut class, &model).unwrap();

        assert!(class.methods().is_empty());
    }

    #[test]
    fn tear_down_unsets_every_property() {
        let factory = wired_factory(GeneratorConfig::default());
        let mut class = TestClass::new("Tests\\App\\UserServiceTest", "App\\UserService");
        class.add_property(crate::models::TestProperty::new("userService", None));
        class.add_property(crate::models::TestProperty::new("repositoryMock", None));
        let model = ClassModel::new("App\\UserService", ClassKind::Class);

        factory.make_tear_down(&mut class, &model).unwrap();

        assert_eq!(
            statements(&class.methods()[0]),
            vec![
                "parent::tearDown();",
                "unset($this->userService);",
                "unset($this->repositoryMock);",
            ]
        );
    }

    #[test]
    fn stub_is_an_incomplete_public_test() {
        let factory = wired_factory(GeneratorConfig::default());
        let mut class = TestClass::new("Tests\\App\\UserServiceTest", "App\\UserService");
        let model = ClassModel::new("App\\UserService", ClassKind::Class);

        factory
            .make_test_stub(&mut class, &model, &Method::new("getUser"))
            .unwrap();

        let stub = &class.methods()[0];
        assert_eq!(stub.name(), "testGetUser");
        assert_eq!(
            statements(stub),
            vec!["$this->markTestIncomplete('This test has not been implemented yet.');"]
        );
    }

    #[test]
    fn excluded_and_non_public_methods_get_no_stub() {
        let factory = wired_factory(GeneratorConfig::default());
        let mut class = TestClass::new("Tests\\App\\UserServiceTest", "App\\UserService");
        let model = ClassModel::new("App\\UserService", ClassKind::Class);

        factory
            .make_test_stub(&mut class, &model, &Method::new("__construct"))
            .unwrap();
        factory
            .make_test_stub(
                &mut class,
                &model,
                &Method::new("helper").with_visibility(Visibility::Private),
            )
            .unwrap();
        factory
            .make_test_stub(&mut class, &model, &Method::new("render").with_abstract())
            .unwrap();

        assert!(class.methods().is_empty());
    }

    #[test]
    fn custom_exclusion_patterns_apply() {
        let config = GeneratorConfig {
            excluded_methods: vec!["^get".to_string()],
            ..GeneratorConfig::default()
        };
        let factory = wired_factory(config);
        let mut class = TestClass::new("Tests\\App\\UserServiceTest", "App\\UserService");
        let model = ClassModel::new("App\\UserService", ClassKind::Class);

        factory
            .make_test_stub(&mut class, &model, &Method::new("getUser"))
            .unwrap();
        factory
            .make_test_stub(&mut class, &model, &Method::new("saveUser"))
            .unwrap();

        let names: Vec<&str> = class.methods().iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["testSaveUser"]);
    }
}
