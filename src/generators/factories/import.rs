//! Import bookkeeping for generated test classes

use crate::core::traits::{Aware, ImportFactory};
use crate::models::{TestClass, TestImport};

/// Default import factory.
///
/// Importing the same fully qualified name twice reuses the first entry;
/// distinct names sharing a short name get numeric aliases.
#[derive(Debug, Default)]
pub struct BasicImportFactory;

impl Aware for BasicImportFactory {}

impl ImportFactory for BasicImportFactory {
    fn import(&self, class: &mut TestClass, name: &str) -> String {
        let name = name.trim_start_matches('\\');
        if let Some(existing) = class.imports().iter().find(|import| import.name() == name) {
            return existing.reference_name().to_string();
        }

        let short = name.rsplit_once('\\').map_or(name, |(_, short)| short);
        let mut reference = short.to_string();
        let mut suffix = 2u32;
        while class
            .imports()
            .iter()
            .any(|import| import.reference_name() == reference)
        {
            reference = format!("{short}{suffix}");
            suffix += 1;
        }

        if reference == short {
            class.add_import(TestImport::new(name));
        } else {
            class.add_import(TestImport::aliased(name, reference.clone()));
        }
        reference
    }
}
