//! Core trait definitions for clean module boundaries
//!
//! This module contains the service contracts the container binds, the
//! capability markers used for setter injection, and the write-once slot
//! those markers fill.

use crate::config::GeneratorConfig;
use crate::core::errors::{Error, Result};
use crate::core::types::TypeDescriptor;
use crate::models::{TestClass, TestMethod, TestStatement};
use crate::reflection::{ClassModel, Method, Parameter};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Raw input handed to a code parser
pub trait Source: Send + Sync {
    /// The complete textual content of this source
    fn contents(&self) -> String;
}

/// Probe surface for capability injection.
///
/// Every service contract extends this trait. Each probe returns the marker
/// view of the service when it wants that capability, `None` otherwise; the
/// defaults make an unaware service out of anything.
pub trait Aware {
    fn as_config_aware(&self) -> Option<&dyn ConfigAware> {
        None
    }
    fn as_class_factory_aware(&self) -> Option<&dyn ClassFactoryAware> {
        None
    }
    fn as_documentation_factory_aware(&self) -> Option<&dyn DocumentationFactoryAware> {
        None
    }
    fn as_import_factory_aware(&self) -> Option<&dyn ImportFactoryAware> {
        None
    }
    fn as_method_factory_aware(&self) -> Option<&dyn MethodFactoryAware> {
        None
    }
    fn as_mock_generator_aware(&self) -> Option<&dyn MockGeneratorAware> {
        None
    }
    fn as_property_factory_aware(&self) -> Option<&dyn PropertyFactoryAware> {
        None
    }
    fn as_statement_factory_aware(&self) -> Option<&dyn StatementFactoryAware> {
        None
    }
    fn as_test_generator_aware(&self) -> Option<&dyn TestGeneratorAware> {
        None
    }
    fn as_value_factory_aware(&self) -> Option<&dyn ValueFactoryAware> {
        None
    }
}

/// Wants the run configuration
pub trait ConfigAware {
    fn set_config(&self, config: Arc<GeneratorConfig>);
}

/// Wants the bound class factory
pub trait ClassFactoryAware {
    fn set_class_factory(&self, factory: Arc<dyn ClassFactory>);
}

/// Wants the bound documentation factory
pub trait DocumentationFactoryAware {
    fn set_documentation_factory(&self, factory: Arc<dyn DocumentationFactory>);
}

/// Wants the bound import factory
pub trait ImportFactoryAware {
    fn set_import_factory(&self, factory: Arc<dyn ImportFactory>);
}

/// Wants the bound method factory
pub trait MethodFactoryAware {
    fn set_method_factory(&self, factory: Arc<dyn MethodFactory>);
}

/// Wants the bound mock generator
pub trait MockGeneratorAware {
    fn set_mock_generator(&self, generator: Arc<dyn MockGenerator>);
}

/// Wants the bound property factory
pub trait PropertyFactoryAware {
    fn set_property_factory(&self, factory: Arc<dyn PropertyFactory>);
}

/// Wants the bound statement factory
pub trait StatementFactoryAware {
    fn set_statement_factory(&self, factory: Arc<dyn StatementFactory>);
}

/// Wants the bound test generator
pub trait TestGeneratorAware {
    fn set_test_generator(&self, generator: Arc<dyn TestGenerator>);
}

/// Wants the bound value factory
pub trait ValueFactoryAware {
    fn set_value_factory(&self, factory: Arc<dyn ValueFactory>);
}

/// Write-once slot filled by capability injection.
///
/// The first `set` wins and every later one is ignored, so re-running
/// injection over an already wired service is harmless. Reading an empty
/// slot reports which capability was never delivered.
pub struct Injected<T: ?Sized> {
    slot: OnceCell<Arc<T>>,
    capability: &'static str,
}

impl<T: ?Sized> std::fmt::Debug for Injected<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Injected")
            .field("capability", &self.capability)
            .field("set", &self.is_set())
            .finish()
    }
}

impl<T: ?Sized> Injected<T> {
    /// Create an empty slot named after the capability it expects
    pub fn new(capability: &'static str) -> Self {
        Self {
            slot: OnceCell::new(),
            capability,
        }
    }

    /// Fill the slot; repeated calls keep the first value
    pub fn set(&self, value: Arc<T>) {
        let _ = self.slot.set(value);
    }

    /// Read the slot, failing when injection never happened
    pub fn get(&self) -> Result<&Arc<T>> {
        self.slot.get().ok_or(Error::MissingCapability {
            capability: self.capability,
        })
    }

    /// True once a value was injected
    pub fn is_set(&self) -> bool {
        self.slot.get().is_some()
    }
}

/// Turns raw source input into a class model
pub trait CodeParser: Aware + Send + Sync {
    /// Parse the source into a finalized class model
    fn parse(&self, source: &dyn Source) -> Result<ClassModel>;
}

/// Builds a complete test class for a class model
pub trait TestGenerator: Aware + Send + Sync {
    /// Whether this generator handles the given model at all
    fn can_generate_for(&self, model: &ClassModel) -> bool;

    /// Generate the test class scaffold
    fn generate(&self, model: &ClassModel) -> Result<TestClass>;
}

/// Emits mock holders and construction statements for class-typed parameters
pub trait MockGenerator: Aware + Send + Sync {
    /// Add a mock-holder property for the parameter when it is mockable
    fn generate_property(&self, class: &mut TestClass, parameter: &Parameter) -> Result<()>;

    /// Add a mock construction statement to the method when the parameter is mockable
    fn generate_statement(
        &self,
        class: &mut TestClass,
        method: &mut TestMethod,
        parameter: &Parameter,
    ) -> Result<()>;

    /// Inline expression creating a mock of the named class
    fn mock_expression(&self, class: &mut TestClass, type_name: &str) -> Result<String>;
}

/// Renders a test class to target-language source text
pub trait Renderer: Aware + Send + Sync {
    /// Produce the full file content for the test class
    fn render(&self, class: &TestClass) -> Result<String>;
}

/// Creates the empty test class shell: name, base class, documentation
pub trait ClassFactory: Aware + Send + Sync {
    fn make(&self, model: &ClassModel) -> Result<TestClass>;
}

/// Produces documentation blocks for generated entities
pub trait DocumentationFactory: Aware + Send + Sync {
    /// Class-level documentation lines
    fn class_documentation(&self, class: &TestClass) -> Vec<String>;

    /// Property-level documentation lines for the given type hint
    fn property_documentation(&self, type_hint: &str) -> Vec<String>;
}

/// Registers imports on a test class and hands back usable references
pub trait ImportFactory: Aware + Send + Sync {
    /// Import the fully qualified name, returning the short or aliased
    /// reference to use in rendered code
    fn import(&self, class: &mut TestClass, name: &str) -> String;
}

/// Builds the lifecycle methods and per-method test stubs
pub trait MethodFactory: Aware + Send + Sync {
    /// Add the setUp fixture method
    fn make_set_up(&self, class: &mut TestClass, model: &ClassModel) -> Result<()>;

    /// Add the tearDown fixture method
    fn make_tear_down(&self, class: &mut TestClass, model: &ClassModel) -> Result<()>;

    /// Add an incomplete test stub for the method, skipping methods the
    /// configuration excludes
    fn make_test_stub(&self, class: &mut TestClass, model: &ClassModel, method: &Method)
        -> Result<()>;
}

/// Adds the fixture properties for the class under test
pub trait PropertyFactory: Aware + Send + Sync {
    fn make_properties(&self, class: &mut TestClass, model: &ClassModel) -> Result<()>;
}

/// Builds individual test statements
pub trait StatementFactory: Aware + Send + Sync {
    /// Assignment statement `<target> = <expression>;`
    fn affect(&self, target: &str, expression: &str) -> TestStatement;

    /// Incomplete-test marker statement
    fn todo(&self, message: &str) -> TestStatement;
}

/// Produces literal argument expressions for typed parameters
pub trait ValueFactory: Aware + Send + Sync {
    /// Expression usable as an argument of the given type; class types
    /// produce inline mocks
    fn make(&self, class: &mut TestClass, descriptor: Option<&TypeDescriptor>) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe;

    impl Aware for Probe {}

    #[test]
    fn default_probes_decline_every_capability() {
        let probe = Probe;
        assert!(probe.as_config_aware().is_none());
        assert!(probe.as_mock_generator_aware().is_none());
        assert!(probe.as_test_generator_aware().is_none());
    }

    #[test]
    fn injected_slot_is_write_once() {
        let slot: Injected<String> = Injected::new("config");
        slot.set(Arc::new("first".to_string()));
        slot.set(Arc::new("second".to_string()));
        assert_eq!(slot.get().unwrap().as_str(), "first");
    }

    #[test]
    fn empty_slot_reports_the_missing_capability() {
        let slot: Injected<String> = Injected::new("value_factory");
        let error = slot.get().unwrap_err();
        assert_eq!(
            error.to_string(),
            "capability `value_factory` was not injected before use"
        );
    }
}
