//! Mock generators for class-typed constructor parameters

mod mockery;
mod phpunit;

pub use mockery::MockeryMockGenerator;
pub use phpunit::PhpUnitMockGenerator;
