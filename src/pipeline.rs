//! End-to-end generation pipeline

use crate::config::GeneratorConfig;
use crate::core::errors::Result;
use crate::core::traits::Source;
use crate::di::{Implementation, ServiceContainer};
use crate::models::TestClass;
use crate::reflection::ClassModel;
use std::sync::Arc;

/// A rendered scaffold together with the model it was built from
#[derive(Debug, Clone)]
pub struct GeneratedTest {
    pub class: TestClass,
    pub code: String,
}

/// Drives parsing, generation and rendering through the service container
pub struct GenerationPipeline {
    container: ServiceContainer,
}

impl GenerationPipeline {
    /// Build a pipeline from configuration: default services plus the
    /// configured binding overrides, validated before first use
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        Self::with_implementations(config, Vec::new())
    }

    /// Build a pipeline with extra implementation descriptors registered
    /// before the binding overrides apply
    pub fn with_implementations(
        config: GeneratorConfig,
        implementations: Vec<Implementation>,
    ) -> Result<Self> {
        config.validate()?;
        let config = Arc::new(config);
        let mut container = ServiceContainer::new(Arc::clone(&config));
        for implementation in implementations {
            container.register_implementation(implementation);
        }
        container.register(&config.implementations)?;
        container.validate()?;
        Ok(Self { container })
    }

    /// The container backing this pipeline
    pub fn container_mut(&mut self) -> &mut ServiceContainer {
        &mut self.container
    }

    /// Parse a source and generate its test scaffold
    pub fn generate(&mut self, source: &dyn Source) -> Result<GeneratedTest> {
        let parser = self.container.code_parser()?;
        let model = parser.parse(source)?;
        self.generate_for_model(&model)
    }

    /// Generate the test scaffold for an already built class model
    pub fn generate_for_model(&mut self, model: &ClassModel) -> Result<GeneratedTest> {
        let generator = self.container.test_generator()?;
        let class = generator.generate(model)?;
        let renderer = self.container.renderer()?;
        let code = renderer.render(&class)?;
        log::debug!("rendered {} bytes for {}", code.len(), class.name());
        Ok(GeneratedTest { class, code })
    }
}
