//! Shared error types for scaffold generation and container wiring

use crate::di::Contract;
use thiserror::Error;

/// Main error type for unitgen operations
#[derive(Debug, Error)]
pub enum Error {
    /// Required contracts with no registered binding
    #[error(
        "missing implementation for required contracts: {}",
        contract_list(.contracts)
    )]
    MissingImplementations { contracts: Vec<Contract> },

    /// Binding names an implementation id absent from the descriptor registry
    #[error("implementation `{id}` does not exist")]
    UnknownImplementation { id: String },

    /// Bound implementation declares a different contract than the binding
    #[error("implementation `{id}` does not implement contract `{contract}`")]
    ContractMismatch { id: String, contract: Contract },

    /// Binding keyed by an identifier outside the provided contract set
    #[error("contract `{contract}` implementation is not necessary")]
    UnnecessaryImplementation { contract: String },

    /// Constructor parameter that cannot be satisfied from the container
    #[error("dependency `{parameter}` for implementation `{implementation}` has an unresolvable type")]
    UnresolvableDependency {
        parameter: String,
        implementation: String,
    },

    /// Constructor dependency chain that re-enters a contract being resolved
    #[error("dependency cycle detected: {}", cycle_path(.chain))]
    DependencyCycle { chain: Vec<Contract> },

    /// Capability slot read before the container injected it
    #[error("capability `{capability}` was not injected before use")]
    MissingCapability { capability: &'static str },

    /// Container invariant breaches
    #[error("container error: {0}")]
    Container(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Class model parsing errors
    #[error("parse error: {0}")]
    Parse(String),

    /// Inputs the generator does not handle
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Exclusion pattern errors
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

fn contract_list(contracts: &[Contract]) -> String {
    contracts
        .iter()
        .map(|contract| contract.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn cycle_path(chain: &[Contract]) -> String {
    chain
        .iter()
        .map(|contract| contract.as_str())
        .collect::<Vec<_>>()
        .join(" -> ")
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Create an unsupported-input error
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_implementations_names_every_contract() {
        let error = Error::MissingImplementations {
            contracts: vec![Contract::ClassFactory, Contract::Renderer],
        };
        assert_eq!(
            error.to_string(),
            "missing implementation for required contracts: class_factory, renderer"
        );
    }

    #[test]
    fn dependency_cycle_lists_the_chain() {
        let error = Error::DependencyCycle {
            chain: vec![
                Contract::TestGenerator,
                Contract::ClassFactory,
                Contract::TestGenerator,
            ],
        };
        assert_eq!(
            error.to_string(),
            "dependency cycle detected: test_generator -> class_factory -> test_generator"
        );
    }

    #[test]
    fn contract_mismatch_names_both_sides() {
        let error = Error::ContractMismatch {
            id: "basic_renderer".to_string(),
            contract: Contract::MockGenerator,
        };
        assert_eq!(
            error.to_string(),
            "implementation `basic_renderer` does not implement contract `mock_generator`"
        );
    }

    #[test]
    fn unresolvable_dependency_names_the_parameter() {
        let error = Error::UnresolvableDependency {
            parameter: "retries".to_string(),
            implementation: "counting_renderer".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "dependency `retries` for implementation `counting_renderer` has an unresolvable type"
        );
    }
}
