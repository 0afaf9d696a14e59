//! Factories the test generator delegates to

mod class;
mod documentation;
mod import;
mod method;
mod property;
mod statement;
mod value;

pub use class::BasicClassFactory;
pub use documentation::BasicDocumentationFactory;
pub use import::BasicImportFactory;
pub use method::BasicMethodFactory;
pub use property::BasicPropertyFactory;
pub use statement::BasicStatementFactory;
pub use value::BasicValueFactory;
