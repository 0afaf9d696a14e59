//! Sources and the default code parser

use crate::core::errors::{Error, Result};
use crate::core::traits::{Aware, CodeParser, Source};
use crate::reflection::ClassModel;

/// In-memory source
#[derive(Debug, Clone)]
pub struct StringSource {
    content: String,
}

impl StringSource {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl Source for StringSource {
    fn contents(&self) -> String {
        self.content.clone()
    }
}

/// Default parser: deserializes a class model from JSON.
///
/// Reflection runs in the target language and ships its result as JSON;
/// this parser only validates the document and finalizes type descriptors.
#[derive(Debug, Default)]
pub struct JsonCodeParser;

impl Aware for JsonCodeParser {}

impl CodeParser for JsonCodeParser {
    fn parse(&self, source: &dyn Source) -> Result<ClassModel> {
        let raw = source.contents();
        let mut model: ClassModel = serde_json::from_str(&raw)
            .map_err(|e| Error::parse(format!("invalid class model: {e}")))?;
        if model.name().is_empty() {
            return Err(Error::parse("class model has no name"));
        }
        model.finalize();
        log::debug!("parsed class model for {}", model.name());
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_a_complete_model() {
        let source = StringSource::new(
            r#"{
                "name": "\\App\\UserService",
                "kind": "class",
                "methods": [
                    {
                        "name": "__construct",
                        "parameters": [
                            {"name": "repository", "native": {"name": "\\App\\UserRepository"}}
                        ]
                    },
                    {"name": "getUser", "parameters": [{"name": "id", "doc_types": ["int"]}]}
                ]
            }"#,
        );

        let model = JsonCodeParser.parse(&source).unwrap();
        assert_eq!(model.name(), "App\\UserService");
        let parameter = &model.constructor().unwrap().parameters()[0];
        assert_eq!(
            parameter.type_descriptor().unwrap().name(),
            "App\\UserRepository"
        );
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let error = JsonCodeParser
            .parse(&StringSource::new("not json"))
            .unwrap_err();
        assert!(error.to_string().starts_with("parse error: invalid class model"));
    }

    #[test]
    fn nameless_models_are_rejected() {
        let error = JsonCodeParser
            .parse(&StringSource::new(r#"{"name": ""}"#))
            .unwrap_err();
        assert_eq!(error.to_string(), "parse error: class model has no name");
    }
}
