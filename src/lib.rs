// Export modules for library usage
pub mod config;
pub mod core;
pub mod di;
pub mod generators;
pub mod models;
pub mod parsers;
pub mod pipeline;
pub mod reflection;
pub mod renderers;

// Re-export commonly used types
pub use crate::config::GeneratorConfig;
pub use crate::core::errors::{Error, Result};
pub use crate::core::traits::{
    Aware, ClassFactory, ClassFactoryAware, CodeParser, ConfigAware, DocumentationFactory,
    DocumentationFactoryAware, ImportFactory, ImportFactoryAware, Injected, MethodFactory,
    MethodFactoryAware, MockGenerator, MockGeneratorAware, PropertyFactory, PropertyFactoryAware,
    Renderer, Source, StatementFactory, StatementFactoryAware, TestGenerator, TestGeneratorAware,
    ValueFactory, ValueFactoryAware,
};
pub use crate::core::types::{NativeType, TypeDescriptor, Visibility, BUILTIN_TYPES};
pub use crate::di::{
    default_bindings, default_implementations, Contract, Implementation, ParameterSpec,
    ParameterType, Service, ServiceContainer,
};
pub use crate::generators::factories::{
    BasicClassFactory, BasicDocumentationFactory, BasicImportFactory, BasicMethodFactory,
    BasicPropertyFactory, BasicStatementFactory, BasicValueFactory,
};
pub use crate::generators::mocks::{MockeryMockGenerator, PhpUnitMockGenerator};
pub use crate::generators::BasicTestGenerator;
pub use crate::models::{TestClass, TestImport, TestMethod, TestProperty, TestStatement};
pub use crate::parsers::{JsonCodeParser, StringSource};
pub use crate::pipeline::{GeneratedTest, GenerationPipeline};
pub use crate::reflection::{ClassKind, ClassModel, Method, Parameter, Property};
pub use crate::renderers::BasicRenderer;
