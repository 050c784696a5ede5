//! Algorithm listing command

use crate::commands::command_traits::Command;
use crate::errors::LinearizeResult;
use crate::linearizer::LinearizerFactory;

/// Command printing the available algorithms
pub struct ListCommand;

impl ListCommand {
    /// Create a new list command
    pub fn new() -> Self {
        ListCommand
    }

    /// Render one line per algorithm, sorted by name
    pub fn render(&self) -> String {
        let mut linearizers = LinearizerFactory::get_available_linearizers();
        linearizers.sort_by_key(|linearizer| linearizer.name());

        let width = linearizers.iter().map(|l| l.name().len()).max().unwrap_or(0);
        linearizers.iter()
            .map(|l| format!("{:<width$}  {}\n", l.name(), l.description(), width = width))
            .collect()
    }
}

impl Default for ListCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for ListCommand {
    fn execute(&self) -> LinearizeResult<()> {
        print!("{}", self.render());
        Ok(())
    }
}
