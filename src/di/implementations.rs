//! Implementation descriptors and the default binding table.
//!
//! Descriptors replace runtime reflection: an implementation id is known
//! exactly when a descriptor was registered for it, and its constructor
//! parameters are whatever the descriptor declares.

use super::{Contract, Service, ServiceContainer};
use crate::core::errors::Result;
use crate::generators::basic::BasicTestGenerator;
use crate::generators::factories::{
    BasicClassFactory, BasicDocumentationFactory, BasicImportFactory, BasicMethodFactory,
    BasicPropertyFactory, BasicStatementFactory, BasicValueFactory,
};
use crate::generators::mocks::{MockeryMockGenerator, PhpUnitMockGenerator};
use crate::parsers::JsonCodeParser;
use crate::renderers::BasicRenderer;
use std::sync::Arc;

/// How a declared constructor parameter gets satisfied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterType {
    /// Resolved from the container
    Contract(Contract),
    /// A builtin type the container cannot supply
    Builtin(String),
    /// No type information at all
    Untyped,
}

/// A declared constructor parameter
#[derive(Debug, Clone)]
pub struct ParameterSpec {
    pub name: String,
    pub ty: ParameterType,
}

impl ParameterSpec {
    pub fn new(name: impl Into<String>, ty: ParameterType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Constructor function wiring a service out of the container
pub type Constructor = fn(&mut ServiceContainer) -> Result<Service>;

/// Everything the container knows about one concrete implementation
#[derive(Debug, Clone)]
pub struct Implementation {
    pub id: String,
    pub contract: Contract,
    pub parameters: Vec<ParameterSpec>,
    pub construct: Constructor,
}

impl Implementation {
    /// Descriptor with no declared constructor parameters
    pub fn new(id: impl Into<String>, contract: Contract, construct: Constructor) -> Self {
        Self {
            id: id.into(),
            contract,
            parameters: Vec::new(),
            construct,
        }
    }

    /// Declare a constructor parameter
    pub fn with_parameter(mut self, name: impl Into<String>, ty: ParameterType) -> Self {
        self.parameters.push(ParameterSpec::new(name, ty));
        self
    }
}

/// Descriptors for every implementation shipped with the crate.
///
/// Both mock generator flavors are registered; only one is bound by
/// default.
pub fn default_implementations() -> Vec<Implementation> {
    vec![
        Implementation::new("config", Contract::Config, construct_config),
        Implementation::new(
            "basic_class_factory",
            Contract::ClassFactory,
            construct_class_factory,
        ),
        Implementation::new("json_code_parser", Contract::CodeParser, construct_code_parser),
        Implementation::new(
            "basic_documentation_factory",
            Contract::DocumentationFactory,
            construct_documentation_factory,
        ),
        Implementation::new(
            "basic_import_factory",
            Contract::ImportFactory,
            construct_import_factory,
        ),
        Implementation::new(
            "basic_method_factory",
            Contract::MethodFactory,
            construct_method_factory,
        ),
        Implementation::new(
            "mockery_mock_generator",
            Contract::MockGenerator,
            construct_mockery_mock_generator,
        ),
        Implementation::new(
            "phpunit_mock_generator",
            Contract::MockGenerator,
            construct_phpunit_mock_generator,
        ),
        Implementation::new(
            "basic_property_factory",
            Contract::PropertyFactory,
            construct_property_factory,
        ),
        Implementation::new("basic_renderer", Contract::Renderer, construct_renderer),
        Implementation::new(
            "basic_statement_factory",
            Contract::StatementFactory,
            construct_statement_factory,
        ),
        Implementation::new(
            "basic_test_generator",
            Contract::TestGenerator,
            construct_test_generator,
        ),
        Implementation::new(
            "basic_value_factory",
            Contract::ValueFactory,
            construct_value_factory,
        ),
    ]
}

/// Default contract bindings, one per provided contract
pub fn default_bindings() -> Vec<(Contract, &'static str)> {
    vec![
        (Contract::Config, "config"),
        (Contract::ClassFactory, "basic_class_factory"),
        (Contract::CodeParser, "json_code_parser"),
        (Contract::DocumentationFactory, "basic_documentation_factory"),
        (Contract::ImportFactory, "basic_import_factory"),
        (Contract::MethodFactory, "basic_method_factory"),
        (Contract::MockGenerator, "mockery_mock_generator"),
        (Contract::PropertyFactory, "basic_property_factory"),
        (Contract::Renderer, "basic_renderer"),
        (Contract::StatementFactory, "basic_statement_factory"),
        (Contract::TestGenerator, "basic_test_generator"),
        (Contract::ValueFactory, "basic_value_factory"),
    ]
}

fn construct_config(container: &mut ServiceContainer) -> Result<Service> {
    Ok(Service::Config(container.config()))
}

fn construct_class_factory(_container: &mut ServiceContainer) -> Result<Service> {
    Ok(Service::ClassFactory(Arc::new(BasicClassFactory::default())))
}

fn construct_code_parser(_container: &mut ServiceContainer) -> Result<Service> {
    Ok(Service::CodeParser(Arc::new(JsonCodeParser::default())))
}

fn construct_documentation_factory(_container: &mut ServiceContainer) -> Result<Service> {
    Ok(Service::DocumentationFactory(Arc::new(
        BasicDocumentationFactory::default(),
    )))
}

fn construct_import_factory(_container: &mut ServiceContainer) -> Result<Service> {
    Ok(Service::ImportFactory(Arc::new(BasicImportFactory::default())))
}

fn construct_method_factory(_container: &mut ServiceContainer) -> Result<Service> {
    Ok(Service::MethodFactory(Arc::new(BasicMethodFactory::default())))
}

fn construct_mockery_mock_generator(_container: &mut ServiceContainer) -> Result<Service> {
    Ok(Service::MockGenerator(Arc::new(
        MockeryMockGenerator::default(),
    )))
}

fn construct_phpunit_mock_generator(_container: &mut ServiceContainer) -> Result<Service> {
    Ok(Service::MockGenerator(Arc::new(
        PhpUnitMockGenerator::default(),
    )))
}

fn construct_property_factory(_container: &mut ServiceContainer) -> Result<Service> {
    Ok(Service::PropertyFactory(Arc::new(
        BasicPropertyFactory::default(),
    )))
}

fn construct_renderer(_container: &mut ServiceContainer) -> Result<Service> {
    Ok(Service::Renderer(Arc::new(BasicRenderer::default())))
}

fn construct_statement_factory(_container: &mut ServiceContainer) -> Result<Service> {
    Ok(Service::StatementFactory(Arc::new(
        BasicStatementFactory::default(),
    )))
}

fn construct_test_generator(_container: &mut ServiceContainer) -> Result<Service> {
    Ok(Service::TestGenerator(Arc::new(BasicTestGenerator::default())))
}

fn construct_value_factory(_container: &mut ServiceContainer) -> Result<Service> {
    Ok(Service::ValueFactory(Arc::new(BasicValueFactory::default())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_contract_has_a_default_binding() {
        let bindings = default_bindings();
        for contract in Contract::REQUIRED {
            assert!(
                bindings.iter().any(|(bound, _)| *bound == contract),
                "no default binding for {contract}"
            );
        }
    }

    #[test]
    fn every_default_binding_targets_a_known_descriptor() {
        let implementations = default_implementations();
        for (contract, id) in default_bindings() {
            let descriptor = implementations
                .iter()
                .find(|implementation| implementation.id == id)
                .unwrap_or_else(|| panic!("no descriptor for {id}"));
            assert_eq!(descriptor.contract, contract);
        }
    }

    #[test]
    fn default_descriptors_declare_no_constructor_parameters() {
        for implementation in default_implementations() {
            assert!(
                implementation.parameters.is_empty(),
                "{} declares parameters",
                implementation.id
            );
        }
    }
}
