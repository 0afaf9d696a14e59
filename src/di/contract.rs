//! Closed set of contract identifiers the container provides

use std::fmt;

/// Identifier of one service contract.
///
/// `Config` is seeded into every container; the remaining contracts must
/// have a binding before validation passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Contract {
    Config,
    ClassFactory,
    CodeParser,
    DocumentationFactory,
    ImportFactory,
    MethodFactory,
    MockGenerator,
    PropertyFactory,
    Renderer,
    StatementFactory,
    TestGenerator,
    ValueFactory,
}

impl Contract {
    /// Contracts that must be bound for generation to run
    pub const REQUIRED: [Contract; 11] = [
        Contract::ClassFactory,
        Contract::CodeParser,
        Contract::DocumentationFactory,
        Contract::ImportFactory,
        Contract::MethodFactory,
        Contract::MockGenerator,
        Contract::PropertyFactory,
        Contract::Renderer,
        Contract::StatementFactory,
        Contract::TestGenerator,
        Contract::ValueFactory,
    ];

    /// Stable identifier used in configuration files and messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Contract::Config => "config",
            Contract::ClassFactory => "class_factory",
            Contract::CodeParser => "code_parser",
            Contract::DocumentationFactory => "documentation_factory",
            Contract::ImportFactory => "import_factory",
            Contract::MethodFactory => "method_factory",
            Contract::MockGenerator => "mock_generator",
            Contract::PropertyFactory => "property_factory",
            Contract::Renderer => "renderer",
            Contract::StatementFactory => "statement_factory",
            Contract::TestGenerator => "test_generator",
            Contract::ValueFactory => "value_factory",
        }
    }

    /// Parse a configuration key into a provided contract
    pub fn from_key(key: &str) -> Option<Contract> {
        let contract = match key {
            "config" => Contract::Config,
            "class_factory" => Contract::ClassFactory,
            "code_parser" => Contract::CodeParser,
            "documentation_factory" => Contract::DocumentationFactory,
            "import_factory" => Contract::ImportFactory,
            "method_factory" => Contract::MethodFactory,
            "mock_generator" => Contract::MockGenerator,
            "property_factory" => Contract::PropertyFactory,
            "renderer" => Contract::Renderer,
            "statement_factory" => Contract::StatementFactory,
            "test_generator" => Contract::TestGenerator,
            "value_factory" => Contract::ValueFactory,
            _ => return None,
        };
        Some(contract)
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for contract in Contract::REQUIRED {
            assert_eq!(Contract::from_key(contract.as_str()), Some(contract));
        }
        assert_eq!(Contract::from_key("config"), Some(Contract::Config));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert_eq!(Contract::from_key("mock_factory"), None);
        assert_eq!(Contract::from_key(""), None);
        assert_eq!(Contract::from_key("MockGenerator"), None);
    }

    #[test]
    fn config_is_not_required() {
        assert!(!Contract::REQUIRED.contains(&Contract::Config));
        assert_eq!(Contract::REQUIRED.len(), 11);
    }
}
