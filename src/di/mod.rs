//! Typed dependency container for the generation services.
//!
//! Bindings map contract identifiers to implementation descriptors.
//! Resolution is lazy and depth-first over declared constructor parameters,
//! constructed services are cached per contract, and capability injection
//! runs after a service lands in the cache so mutually aware services can
//! reach each other without re-entering construction.

mod aware;
mod contract;
mod implementations;

pub use contract::Contract;
pub use implementations::{
    default_bindings, default_implementations, Constructor, Implementation, ParameterSpec,
    ParameterType,
};

use crate::config::GeneratorConfig;
use crate::core::errors::{Error, Result};
use crate::core::traits::{
    Aware, ClassFactory, CodeParser, DocumentationFactory, ImportFactory, MethodFactory,
    MockGenerator, PropertyFactory, Renderer, StatementFactory, TestGenerator, ValueFactory,
};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A resolved service handle for one contract
#[derive(Clone)]
pub enum Service {
    Config(Arc<GeneratorConfig>),
    ClassFactory(Arc<dyn ClassFactory>),
    CodeParser(Arc<dyn CodeParser>),
    DocumentationFactory(Arc<dyn DocumentationFactory>),
    ImportFactory(Arc<dyn ImportFactory>),
    MethodFactory(Arc<dyn MethodFactory>),
    MockGenerator(Arc<dyn MockGenerator>),
    PropertyFactory(Arc<dyn PropertyFactory>),
    Renderer(Arc<dyn Renderer>),
    StatementFactory(Arc<dyn StatementFactory>),
    TestGenerator(Arc<dyn TestGenerator>),
    ValueFactory(Arc<dyn ValueFactory>),
}

impl Service {
    /// Contract this handle satisfies
    pub fn contract(&self) -> Contract {
        match self {
            Service::Config(_) => Contract::Config,
            Service::ClassFactory(_) => Contract::ClassFactory,
            Service::CodeParser(_) => Contract::CodeParser,
            Service::DocumentationFactory(_) => Contract::DocumentationFactory,
            Service::ImportFactory(_) => Contract::ImportFactory,
            Service::MethodFactory(_) => Contract::MethodFactory,
            Service::MockGenerator(_) => Contract::MockGenerator,
            Service::PropertyFactory(_) => Contract::PropertyFactory,
            Service::Renderer(_) => Contract::Renderer,
            Service::StatementFactory(_) => Contract::StatementFactory,
            Service::TestGenerator(_) => Contract::TestGenerator,
            Service::ValueFactory(_) => Contract::ValueFactory,
        }
    }

    pub(crate) fn as_aware(&self) -> &dyn Aware {
        match self {
            Service::Config(config) => config.as_ref(),
            Service::ClassFactory(service) => service.as_ref(),
            Service::CodeParser(service) => service.as_ref(),
            Service::DocumentationFactory(service) => service.as_ref(),
            Service::ImportFactory(service) => service.as_ref(),
            Service::MethodFactory(service) => service.as_ref(),
            Service::MockGenerator(service) => service.as_ref(),
            Service::PropertyFactory(service) => service.as_ref(),
            Service::Renderer(service) => service.as_ref(),
            Service::StatementFactory(service) => service.as_ref(),
            Service::TestGenerator(service) => service.as_ref(),
            Service::ValueFactory(service) => service.as_ref(),
        }
    }
}

impl fmt::Debug for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Service").field(&self.contract().as_str()).finish()
    }
}

/// The generation service container
pub struct ServiceContainer {
    config: Arc<GeneratorConfig>,
    bindings: BTreeMap<Contract, String>,
    known: BTreeMap<String, Implementation>,
    resolved: BTreeMap<Contract, Service>,
    resolving: Vec<Contract>,
}

impl ServiceContainer {
    /// Container with the default implementations bound to every contract
    pub fn new(config: Arc<GeneratorConfig>) -> Self {
        let mut container = Self::empty(config);
        for implementation in default_implementations() {
            container.known.insert(implementation.id.clone(), implementation);
        }
        for (contract, id) in default_bindings() {
            container.bindings.insert(contract, id.to_string());
        }
        container
    }

    /// Container with no known implementations and no bindings
    pub fn empty(config: Arc<GeneratorConfig>) -> Self {
        Self {
            config,
            bindings: BTreeMap::new(),
            known: BTreeMap::new(),
            resolved: BTreeMap::new(),
            resolving: Vec::new(),
        }
    }

    /// The seeded run configuration
    pub fn config(&self) -> Arc<GeneratorConfig> {
        Arc::clone(&self.config)
    }

    /// Make another implementation available for binding
    pub fn register_implementation(&mut self, implementation: Implementation) {
        log::debug!("registered implementation {}", implementation.id);
        self.known.insert(implementation.id.clone(), implementation);
    }

    /// Apply binding overrides keyed by contract identifier.
    ///
    /// Keys that do not name a provided contract are rejected, as are
    /// identifiers no descriptor was registered for.
    pub fn register(&mut self, bindings: &BTreeMap<String, String>) -> Result<()> {
        for (key, id) in bindings {
            let contract = Contract::from_key(key).ok_or_else(|| {
                Error::UnnecessaryImplementation {
                    contract: key.clone(),
                }
            })?;
            self.bind(contract, id.clone())?;
        }
        Ok(())
    }

    /// Bind one contract to a known implementation
    pub fn bind(&mut self, contract: Contract, id: impl Into<String>) -> Result<()> {
        let id = id.into();
        let implementation = self
            .known
            .get(&id)
            .ok_or_else(|| Error::UnknownImplementation { id: id.clone() })?;
        if implementation.contract != contract {
            return Err(Error::ContractMismatch { id, contract });
        }
        self.check_parameters(implementation)?;
        log::debug!("bound contract {} to implementation {}", contract, id);
        self.bindings.insert(contract, id);
        Ok(())
    }

    /// Check every binding without constructing anything.
    ///
    /// Missing required contracts are reported together; the remaining
    /// checks fail on the first offending binding.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<Contract> = Contract::REQUIRED
            .iter()
            .filter(|contract| !self.bindings.contains_key(contract))
            .copied()
            .collect();
        if !missing.is_empty() {
            return Err(Error::MissingImplementations { contracts: missing });
        }

        for (contract, id) in &self.bindings {
            let implementation = self
                .known
                .get(id)
                .ok_or_else(|| Error::UnknownImplementation { id: id.clone() })?;
            if implementation.contract != *contract {
                return Err(Error::ContractMismatch {
                    id: id.clone(),
                    contract: *contract,
                });
            }
            self.check_parameters(implementation)?;
        }
        Ok(())
    }

    fn check_parameters(&self, implementation: &Implementation) -> Result<()> {
        for parameter in &implementation.parameters {
            if !matches!(parameter.ty, ParameterType::Contract(_)) {
                return Err(Error::UnresolvableDependency {
                    parameter: parameter.name.clone(),
                    implementation: implementation.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Resolve a contract, constructing the bound implementation lazily.
    ///
    /// The first resolution constructs and caches the service; later ones
    /// hand out clones of the same shared handle.
    pub fn resolve(&mut self, contract: Contract) -> Result<Service> {
        if let Some(service) = self.resolved.get(&contract) {
            log::trace!("reusing cached service for contract {}", contract);
            return Ok(service.clone());
        }

        if let Some(position) = self.resolving.iter().position(|c| *c == contract) {
            let mut chain = self.resolving[position..].to_vec();
            chain.push(contract);
            return Err(Error::DependencyCycle { chain });
        }

        let id = self
            .bindings
            .get(&contract)
            .cloned()
            .ok_or_else(|| Error::MissingImplementations {
                contracts: vec![contract],
            })?;
        let implementation = self
            .known
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::UnknownImplementation { id: id.clone() })?;
        if implementation.contract != contract {
            return Err(Error::ContractMismatch { id, contract });
        }

        log::debug!("constructing {} for contract {}", implementation.id, contract);
        self.resolving.push(contract);
        let constructed = self.construct(&implementation);
        self.resolving.pop();
        let service = constructed?;

        // Cache before capability injection so mutually aware services
        // resolve through the cache instead of re-entering construction.
        // Injection failures evict the entry again: a cached service is
        // always fully injected.
        self.resolved.insert(contract, service.clone());
        if let Err(error) = aware::inject(self, &service) {
            self.resolved.remove(&contract);
            return Err(error);
        }
        Ok(service)
    }

    fn construct(&mut self, implementation: &Implementation) -> Result<Service> {
        for parameter in &implementation.parameters {
            match &parameter.ty {
                ParameterType::Contract(dependency) => {
                    self.resolve(*dependency)?;
                }
                _ => {
                    return Err(Error::UnresolvableDependency {
                        parameter: parameter.name.clone(),
                        implementation: implementation.id.clone(),
                    });
                }
            }
        }
        (implementation.construct)(self)
    }

    /// The configuration as resolved through the container
    pub fn resolved_config(&mut self) -> Result<Arc<GeneratorConfig>> {
        match self.resolve(Contract::Config)? {
            Service::Config(config) => Ok(config),
            service => Err(mismatched(Contract::Config, &service)),
        }
    }

    pub fn class_factory(&mut self) -> Result<Arc<dyn ClassFactory>> {
        match self.resolve(Contract::ClassFactory)? {
            Service::ClassFactory(service) => Ok(service),
            service => Err(mismatched(Contract::ClassFactory, &service)),
        }
    }

    pub fn code_parser(&mut self) -> Result<Arc<dyn CodeParser>> {
        match self.resolve(Contract::CodeParser)? {
            Service::CodeParser(service) => Ok(service),
            service => Err(mismatched(Contract::CodeParser, &service)),
        }
    }

    pub fn documentation_factory(&mut self) -> Result<Arc<dyn DocumentationFactory>> {
        match self.resolve(Contract::DocumentationFactory)? {
            Service::DocumentationFactory(service) => Ok(service),
            service => Err(mismatched(Contract::DocumentationFactory, &service)),
        }
    }

    pub fn import_factory(&mut self) -> Result<Arc<dyn ImportFactory>> {
        match self.resolve(Contract::ImportFactory)? {
            Service::ImportFactory(service) => Ok(service),
            service => Err(mismatched(Contract::ImportFactory, &service)),
        }
    }

    pub fn method_factory(&mut self) -> Result<Arc<dyn MethodFactory>> {
        match self.resolve(Contract::MethodFactory)? {
            Service::MethodFactory(service) => Ok(service),
            service => Err(mismatched(Contract::MethodFactory, &service)),
        }
    }

    pub fn mock_generator(&mut self) -> Result<Arc<dyn MockGenerator>> {
        match self.resolve(Contract::MockGenerator)? {
            Service::MockGenerator(service) => Ok(service),
            service => Err(mismatched(Contract::MockGenerator, &service)),
        }
    }

    pub fn property_factory(&mut self) -> Result<Arc<dyn PropertyFactory>> {
        match self.resolve(Contract::PropertyFactory)? {
            Service::PropertyFactory(service) => Ok(service),
            service => Err(mismatched(Contract::PropertyFactory, &service)),
        }
    }

    pub fn renderer(&mut self) -> Result<Arc<dyn Renderer>> {
        match self.resolve(Contract::Renderer)? {
            Service::Renderer(service) => Ok(service),
            service => Err(mismatched(Contract::Renderer, &service)),
        }
    }

    pub fn statement_factory(&mut self) -> Result<Arc<dyn StatementFactory>> {
        match self.resolve(Contract::StatementFactory)? {
            Service::StatementFactory(service) => Ok(service),
            service => Err(mismatched(Contract::StatementFactory, &service)),
        }
    }

    pub fn test_generator(&mut self) -> Result<Arc<dyn TestGenerator>> {
        match self.resolve(Contract::TestGenerator)? {
            Service::TestGenerator(service) => Ok(service),
            service => Err(mismatched(Contract::TestGenerator, &service)),
        }
    }

    pub fn value_factory(&mut self) -> Result<Arc<dyn ValueFactory>> {
        match self.resolve(Contract::ValueFactory)? {
            Service::ValueFactory(service) => Ok(service),
            service => Err(mismatched(Contract::ValueFactory, &service)),
        }
    }
}

fn mismatched(contract: Contract, service: &Service) -> Error {
    Error::Container(format!(
        "contract {} resolved to a {} service",
        contract,
        service.contract()
    ))
}
