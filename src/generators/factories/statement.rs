//! Builds individual test statements

use crate::core::traits::{Aware, StatementFactory};
use crate::models::TestStatement;

/// Default statement factory for assignments and incomplete-test markers
#[derive(Debug, Default)]
pub struct BasicStatementFactory;

impl Aware for BasicStatementFactory {}

impl StatementFactory for BasicStatementFactory {
    fn affect(&self, target: &str, expression: &str) -> TestStatement {
        TestStatement::new(format!("{target} = {expression};"))
    }

    fn todo(&self, message: &str) -> TestStatement {
        let message = message.replace('\'', "\\'");
        TestStatement::new(format!("$this->markTestIncomplete('{message}');"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn affect_builds_an_assignment() {
        let factory = BasicStatementFactory;
        let statement = factory.affect("$this->userService", "new UserService()");
        assert_eq!(statement.as_str(), "$this->userService = new UserService();");
    }

    #[test]
    fn todo_escapes_single_quotes() {
        let factory = BasicStatementFactory;
        let statement = factory.todo("hasn't been implemented");
        assert_eq!(
            statement.as_str(),
            "$this->markTestIncomplete('hasn\\'t been implemented');"
        );
    }
}
