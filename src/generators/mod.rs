//! Test scaffold generators and their collaborating factories

pub mod basic;
pub mod factories;
pub mod mocks;

pub use basic::BasicTestGenerator;

/// Variable name for an instance of the class: `UserService` -> `userService`
pub(crate) fn variable_name(short_name: &str) -> String {
    let mut chars = short_name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-case the first character: `getUser` -> `GetUser`
pub(crate) fn ucfirst(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
