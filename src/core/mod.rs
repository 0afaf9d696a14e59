pub mod errors;
pub mod traits;
pub mod types;

pub use errors::{Error, Result};
pub use types::{NativeType, TypeDescriptor, Visibility, BUILTIN_TYPES};
