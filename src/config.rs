//! Generator configuration and file loading

use crate::core::errors::{Error, Result};
use crate::core::traits::Aware;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Configuration for one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Generate per-method test stubs in addition to the fixture
    #[serde(default = "default_automatic_generation")]
    pub automatic_generation: bool,

    /// Contract binding overrides, keyed by contract identifier.
    ///
    /// Defaults stay in place for every contract not named here.
    #[serde(default)]
    pub implementations: BTreeMap<String, String>,

    /// Namespace prefix of the code under test, replaced by the test
    /// namespace when naming test classes
    #[serde(default)]
    pub base_namespace: String,

    /// Namespace prefix for generated test classes
    #[serde(default = "default_base_test_namespace")]
    pub base_test_namespace: String,

    /// Fully qualified base class generated tests extend
    #[serde(default = "default_test_case_class")]
    pub test_case_class: String,

    /// Regex patterns for method names that never get test stubs
    #[serde(default = "default_excluded_methods")]
    pub excluded_methods: Vec<String>,
}

fn default_automatic_generation() -> bool {
    true
}

fn default_base_test_namespace() -> String {
    "Tests".to_string()
}

fn default_test_case_class() -> String {
    "PHPUnit\\Framework\\TestCase".to_string()
}

fn default_excluded_methods() -> Vec<String> {
    vec!["^__construct$".to_string(), "^__destruct$".to_string()]
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            automatic_generation: default_automatic_generation(),
            implementations: BTreeMap::new(),
            base_namespace: String::new(),
            base_test_namespace: default_base_test_namespace(),
            test_case_class: default_test_case_class(),
            excluded_methods: default_excluded_methods(),
        }
    }
}

impl GeneratorConfig {
    /// Load a configuration file, choosing the format by extension.
    ///
    /// Supports `.toml`, `.yml`/`.yaml` and `.json`. The loaded
    /// configuration is validated before it is returned.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let config: GeneratorConfig = match extension {
            "toml" => toml::from_str(&content).map_err(|e| {
                Error::configuration(format!("failed to parse {}: {}", path.display(), e))
            })?,
            "yml" | "yaml" => serde_yaml::from_str(&content).map_err(|e| {
                Error::configuration(format!("failed to parse {}: {}", path.display(), e))
            })?,
            "json" => serde_json::from_str(&content).map_err(|e| {
                Error::configuration(format!("failed to parse {}: {}", path.display(), e))
            })?,
            other => {
                return Err(Error::configuration(format!(
                    "unsupported config format `{}` for {}",
                    other,
                    path.display()
                )))
            }
        };

        config.validate()?;
        log::debug!("loaded generator config from {}", path.display());
        Ok(config)
    }

    /// Check the configuration for values that cannot work at generation time
    pub fn validate(&self) -> Result<()> {
        self.excluded_patterns()?;
        Ok(())
    }

    /// Compile the method exclusion patterns
    pub fn excluded_patterns(&self) -> Result<Vec<Regex>> {
        self.excluded_methods
            .iter()
            .map(|pattern| Regex::new(pattern).map_err(Error::from))
            .collect()
    }
}

impl Aware for GeneratorConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn defaults_cover_a_phpunit_setup() {
        let config = GeneratorConfig::default();
        assert!(config.automatic_generation);
        assert!(config.implementations.is_empty());
        assert_eq!(config.base_test_namespace, "Tests");
        assert_eq!(config.test_case_class, "PHPUnit\\Framework\\TestCase");
        assert_eq!(
            config.excluded_methods,
            vec!["^__construct$".to_string(), "^__destruct$".to_string()]
        );
    }

    #[test]
    fn empty_document_deserializes_to_defaults() {
        let config: GeneratorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn loads_toml_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "base_namespace = \"App\"\nautomatic_generation = false\n\n[implementations]\nmock_generator = \"phpunit_mock_generator\"\n"
        )
        .unwrap();

        let config = GeneratorConfig::from_path(file.path()).unwrap();
        assert_eq!(config.base_namespace, "App");
        assert!(!config.automatic_generation);
        assert_eq!(
            config.implementations.get("mock_generator").unwrap(),
            "phpunit_mock_generator"
        );
    }

    #[test]
    fn loads_yaml_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "base_test_namespace: AppTests\nexcluded_methods: []").unwrap();

        let config = GeneratorConfig::from_path(file.path()).unwrap();
        assert_eq!(config.base_test_namespace, "AppTests");
        assert!(config.excluded_methods.is_empty());
    }

    #[test]
    fn loads_json_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(file, "{{\"base_namespace\": \"Acme\"}}").unwrap();

        let config = GeneratorConfig::from_path(file.path()).unwrap();
        assert_eq!(config.base_namespace, "Acme");
    }

    #[test]
    fn unknown_extension_is_a_configuration_error() {
        let file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        let error = GeneratorConfig::from_path(file.path()).unwrap_err();
        assert!(error.to_string().contains("unsupported config format"));
    }

    #[test]
    fn invalid_exclusion_pattern_fails_validation() {
        let config = GeneratorConfig {
            excluded_methods: vec!["[".to_string()],
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
